//! Layer-to-layer spacing rules.
//!
//! The matrix is only data. Checking geometry against it is left to an
//! external rule engine.

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

use crate::layer::LayerId;

/// One minimum-spacing entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacingRule {
    /// Minimum distance between connected geometry.
    pub connected: Option<f64>,
    /// Minimum distance between unconnected geometry.
    pub unconnected: Option<f64>,
    /// The name of the rule, for reporting.
    pub name: Option<ArcStr>,
}

/// A symmetric layer-by-layer spacing table, stored as its upper triangle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpacingMatrix {
    num_layers: usize,
    rules: Vec<SpacingRule>,
}

impl SpacingMatrix {
    /// Creates a matrix with no rules for `num_layers` layers.
    pub fn new(num_layers: usize) -> Self {
        Self {
            num_layers,
            rules: vec![SpacingRule::default(); num_layers * (num_layers + 1) / 2],
        }
    }

    /// The number of layers the matrix covers.
    #[inline]
    pub fn num_layers(&self) -> usize {
        self.num_layers
    }

    /// The storage index of the pair, or `None` if either layer is out of range.
    ///
    /// Pairs are ordered so that `i <= j` before indexing.
    pub fn index(&self, a: LayerId, b: LayerId) -> Option<usize> {
        let (i, j) = if a.index() <= b.index() {
            (a.index(), b.index())
        } else {
            (b.index(), a.index())
        };
        if j >= self.num_layers {
            return None;
        }
        Some(i * self.num_layers - i * i.saturating_sub(1) / 2 + (j - i))
    }

    /// Sets the rule for a pair of layers. Out-of-range layers are ignored.
    pub fn set(&mut self, a: LayerId, b: LayerId, rule: SpacingRule) {
        if let Some(idx) = self.index(a, b) {
            self.rules[idx] = rule;
        }
    }

    /// The rule for a pair of layers.
    pub fn rule(&self, a: LayerId, b: LayerId) -> Option<&SpacingRule> {
        self.rules.get(self.index(a, b)?)
    }

    /// The minimum spacing between a pair of layers, or `None` if there is no rule.
    ///
    /// Negative stored distances mean no rule.
    pub fn spacing(&self, a: LayerId, b: LayerId, connected: bool) -> Option<f64> {
        let rule = self.rule(a, b)?;
        let value = if connected {
            rule.connected
        } else {
            rule.unconnected
        }?;
        (value >= 0.).then_some(value)
    }
}
