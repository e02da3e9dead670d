//! Layers and arcs of the schematic technology.

use technology::layer::{ArcFunction, ArcId, ArcProto, Layer, LayerFunction, LayerId};
use technology::TechnologyBuilder;

use crate::kind::SchematicKind;

/// The drawing layers.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SchematicLayers {
    /// Wires and the dots that join them.
    pub arc: LayerId,
    /// Busses.
    pub bus: LayerId,
    /// Symbol outlines.
    pub node: LayerId,
    /// Symbol lettering.
    pub text: LayerId,
}

impl SchematicLayers {
    pub(crate) fn install(builder: &mut TechnologyBuilder<SchematicKind>) -> Self {
        Self {
            arc: builder.add_layer(Layer::new("Arc", LayerFunction::Metal(1))),
            bus: builder.add_layer(Layer::new("Bus", LayerFunction::Bus)),
            node: builder.add_layer(Layer::new("Node", LayerFunction::Art)),
            text: builder.add_layer(Layer::new("Text", LayerFunction::Art)),
        }
    }
}

/// The arcs that connect schematic primitives.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct SchematicArcs {
    /// A single signal.
    pub wire: ArcId,
    /// A bundle of signals.
    pub bus: ArcId,
}

impl SchematicArcs {
    pub(crate) fn install(
        builder: &mut TechnologyBuilder<SchematicKind>,
        layers: &SchematicLayers,
    ) -> Self {
        Self {
            wire: builder.add_arc(ArcProto::new("wire", ArcFunction::Wire, 0., layers.arc)),
            bus: builder.add_arc(ArcProto::new("bus", ArcFunction::Bus, 1., layers.bus)),
        }
    }

    /// Wires only.
    pub(crate) fn wire_only(&self) -> Vec<ArcId> {
        vec![self.wire]
    }

    /// Wires and busses.
    pub(crate) fn both(&self) -> Vec<ArcId> {
        vec![self.wire, self.bus]
    }
}
