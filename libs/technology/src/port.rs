//! Port templates.

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

use crate::layer::ArcId;
use crate::template::{SizeCorrection, TemplatePoint};

/// The electrical role of a port.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PortCharacteristic {
    /// No particular direction.
    #[default]
    Unknown,
    /// An input.
    Input,
    /// An output.
    Output,
    /// Both an input and an output.
    Bidirectional,
    /// A power supply.
    Power,
    /// A ground connection.
    Ground,
}

/// A port on a primitive prototype.
///
/// The port's area is the box between two template points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortTemplate {
    name: ArcStr,
    allowed_arcs: Vec<ArcId>,
    angle: f64,
    angle_range: f64,
    index: usize,
    characteristic: PortCharacteristic,
    low: TemplatePoint,
    high: TemplatePoint,
    isolated: bool,
    negatable: bool,
}

impl PortTemplate {
    /// Creates a port.
    ///
    /// `angle` is the preferred direction of attached wires in degrees and `angle_range`
    /// the allowed deviation from it. `index` is the electrical topology index shared by
    /// ports that are connected inside the primitive.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<ArcStr>,
        allowed_arcs: impl Into<Vec<ArcId>>,
        angle: f64,
        angle_range: f64,
        index: usize,
        characteristic: PortCharacteristic,
        low: TemplatePoint,
        high: TemplatePoint,
    ) -> Self {
        Self {
            name: name.into(),
            allowed_arcs: allowed_arcs.into(),
            angle,
            angle_range,
            index,
            characteristic,
            low,
            high,
            isolated: false,
            negatable: false,
        }
    }

    /// Marks the port as an area port, on which each connection is electrically separate.
    pub fn isolated(mut self) -> Self {
        self.isolated = true;
        self
    }

    /// Allows connections to the port to be negated.
    pub fn negatable(mut self) -> Self {
        self.negatable = true;
        self
    }

    /// The port name.
    #[inline]
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// The arcs that may connect to this port.
    #[inline]
    pub fn allowed_arcs(&self) -> &[ArcId] {
        &self.allowed_arcs
    }

    /// Whether `arc` may connect to this port.
    pub fn accepts(&self, arc: ArcId) -> bool {
        self.allowed_arcs.contains(&arc)
    }

    /// The preferred connection angle, in degrees.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// The allowed deviation from [`PortTemplate::angle`], in degrees.
    #[inline]
    pub fn angle_range(&self) -> f64 {
        self.angle_range
    }

    /// The electrical topology index.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The electrical role.
    #[inline]
    pub fn characteristic(&self) -> PortCharacteristic {
        self.characteristic
    }

    /// The low corner of the port area.
    #[inline]
    pub fn low(&self) -> TemplatePoint {
        self.low
    }

    /// The high corner of the port area.
    #[inline]
    pub fn high(&self) -> TemplatePoint {
        self.high
    }

    /// Whether this is an area port.
    #[inline]
    pub fn is_isolated(&self) -> bool {
        self.isolated
    }

    /// Whether connections may be negated.
    #[inline]
    pub fn is_negatable(&self) -> bool {
        self.negatable
    }

    pub(crate) fn fixup(&self, correction: SizeCorrection) -> Self {
        Self {
            low: self.low.fixup(correction),
            high: self.high.fixup(correction),
            ..self.clone()
        }
    }
}
