//! Mask layers and arc prototypes.

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

/// An index of a [`Layer`] within a technology.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct LayerId(pub(crate) usize);

impl LayerId {
    /// The position of the layer in its technology's layer table.
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// An index of an [`ArcProto`] within a technology.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct ArcId(pub(crate) usize);

impl ArcId {
    /// The position of the arc in its technology's arc table.
    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// What a layer means to fabrication or drawing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum LayerFunction {
    /// A metal interconnect layer.
    Metal(u8),
    /// A bus drawing layer.
    Bus,
    /// Non-electrical artwork.
    Art,
}

/// A mask or drawing layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    name: ArcStr,
    function: LayerFunction,
    pseudo: bool,
}

impl Layer {
    /// Creates a new layer.
    pub fn new(name: impl Into<ArcStr>, function: LayerFunction) -> Self {
        Self {
            name: name.into(),
            function,
            pseudo: false,
        }
    }

    /// Marks the layer as a pseudo layer that exists only for drawing.
    pub fn pseudo(mut self) -> Self {
        self.pseudo = true;
        self
    }

    /// The name of the layer.
    #[inline]
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// The function of the layer.
    #[inline]
    pub fn function(&self) -> LayerFunction {
        self.function
    }

    /// Whether this is a pseudo layer.
    #[inline]
    pub fn is_pseudo(&self) -> bool {
        self.pseudo
    }
}

/// What an arc carries.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ArcFunction {
    /// A single signal.
    Wire,
    /// A bundle of signals.
    Bus,
}

/// A kind of wire that may attach to primitive ports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcProto {
    name: ArcStr,
    function: ArcFunction,
    width: f64,
    layer: LayerId,
}

impl ArcProto {
    /// Creates a new arc prototype.
    pub fn new(name: impl Into<ArcStr>, function: ArcFunction, width: f64, layer: LayerId) -> Self {
        Self {
            name: name.into(),
            function,
            width,
            layer,
        }
    }

    /// The name of the arc.
    #[inline]
    pub fn name(&self) -> &ArcStr {
        &self.name
    }

    /// The function of the arc.
    #[inline]
    pub fn function(&self) -> ArcFunction {
        self.function
    }

    /// The default width of the arc.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The layer the arc is drawn on.
    #[inline]
    pub fn layer(&self) -> LayerId {
        self.layer
    }
}
