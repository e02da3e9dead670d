//! Per-layer names used by interchange formats.

use arcstr::ArcStr;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::layer::LayerId;

/// An interchange format that names layers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum InterchangeFormat {
    /// Caltech Intermediate Form.
    Cif,
    /// GDSII stream.
    Gds,
    /// AutoCAD drawing exchange.
    Dxf,
}

/// A lookup table from `(format, foundry, layer)` to the layer's name in that format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterchangeTable {
    names: IndexMap<(InterchangeFormat, ArcStr, LayerId), ArcStr>,
}

impl InterchangeTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a name, replacing any previous one.
    pub fn insert(
        &mut self,
        format: InterchangeFormat,
        foundry: impl Into<ArcStr>,
        layer: LayerId,
        name: impl Into<ArcStr>,
    ) {
        self.names
            .insert((format, foundry.into(), layer), name.into());
    }

    /// Looks up a name.
    pub fn get(&self, format: InterchangeFormat, foundry: &str, layer: LayerId) -> Option<&str> {
        self.names
            .get(&(format, ArcStr::from(foundry), layer))
            .map(|name| name.as_str())
    }

    /// Whether the table holds no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
