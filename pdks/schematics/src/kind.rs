//! The primitives of the schematic technology.

use serde::{Deserialize, Serialize};

/// Identifies a schematic primitive.
///
/// Behavior that depends on the primitive dispatches on this tag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum SchematicKind {
    /// A pin that disappears in the middle of a wire.
    WirePin,
    /// A pin that may carry busses.
    BusPin,
    /// A wire junction.
    WireCon,
    /// A buffer or inverter.
    Buffer,
    /// An AND gate.
    And,
    /// An OR gate.
    Or,
    /// An XOR gate.
    Xor,
    /// A flip-flop.
    FlipFlop,
    /// A multiplexer.
    Mux,
    /// A black box.
    Bbox,
    /// A multi-valued switch.
    Switch,
    /// An off-page connector.
    OffPage,
    /// A power supply.
    Power,
    /// A ground connection.
    Ground,
    /// A voltage or current source.
    Source,
    /// A three-terminal transistor.
    Transistor,
    /// A resistor.
    Resistor,
    /// A capacitor.
    Capacitor,
    /// A diode.
    Diode,
    /// An inductor.
    Inductor,
    /// A meter.
    Meter,
    /// A well contact.
    Well,
    /// A substrate contact.
    Substrate,
    /// A two-port element.
    TwoPort,
    /// A four-terminal transistor.
    Transistor4,
    /// A global signal.
    GlobalSignal,
    /// A global partition.
    GlobalPartition,
}

impl SchematicKind {
    /// Every kind, in the order the technology declares them.
    pub const ALL: [SchematicKind; 27] = [
        SchematicKind::WirePin,
        SchematicKind::BusPin,
        SchematicKind::WireCon,
        SchematicKind::Buffer,
        SchematicKind::And,
        SchematicKind::Or,
        SchematicKind::Xor,
        SchematicKind::FlipFlop,
        SchematicKind::Mux,
        SchematicKind::Bbox,
        SchematicKind::Switch,
        SchematicKind::OffPage,
        SchematicKind::Power,
        SchematicKind::Ground,
        SchematicKind::Source,
        SchematicKind::Transistor,
        SchematicKind::Resistor,
        SchematicKind::Capacitor,
        SchematicKind::Diode,
        SchematicKind::Inductor,
        SchematicKind::Meter,
        SchematicKind::Well,
        SchematicKind::Substrate,
        SchematicKind::TwoPort,
        SchematicKind::Transistor4,
        SchematicKind::GlobalSignal,
        SchematicKind::GlobalPartition,
    ];

    /// The prototype name.
    pub const fn name(&self) -> &'static str {
        match self {
            SchematicKind::WirePin => "Wire_Pin",
            SchematicKind::BusPin => "Bus_Pin",
            SchematicKind::WireCon => "Wire_Con",
            SchematicKind::Buffer => "Buffer",
            SchematicKind::And => "And",
            SchematicKind::Or => "Or",
            SchematicKind::Xor => "Xor",
            SchematicKind::FlipFlop => "Flip-Flop",
            SchematicKind::Mux => "Mux",
            SchematicKind::Bbox => "Bbox",
            SchematicKind::Switch => "Switch",
            SchematicKind::OffPage => "Off-Page",
            SchematicKind::Power => "Power",
            SchematicKind::Ground => "Ground",
            SchematicKind::Source => "Source",
            SchematicKind::Transistor => "Transistor",
            SchematicKind::Resistor => "Resistor",
            SchematicKind::Capacitor => "Capacitor",
            SchematicKind::Diode => "Diode",
            SchematicKind::Inductor => "Inductor",
            SchematicKind::Meter => "Meter",
            SchematicKind::Well => "Well",
            SchematicKind::Substrate => "Substrate",
            SchematicKind::TwoPort => "Two-Port",
            SchematicKind::Transistor4 => "4-Port-Transistor",
            SchematicKind::GlobalSignal => "Global-Signal",
            SchematicKind::GlobalPartition => "Global-Partition",
        }
    }

    /// The position of this kind in [`SchematicKind::ALL`].
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Whether ports with several wires on them get a junction blob.
    pub fn has_extra_blobs(&self) -> bool {
        matches!(
            self,
            SchematicKind::Transistor
                | SchematicKind::TwoPort
                | SchematicKind::Diode
                | SchematicKind::Capacitor
                | SchematicKind::Resistor
                | SchematicKind::Transistor4
                | SchematicKind::OffPage
                | SchematicKind::Power
                | SchematicKind::Ground
                | SchematicKind::Source
                | SchematicKind::Inductor
                | SchematicKind::Meter
                | SchematicKind::Well
                | SchematicKind::Substrate
        )
    }

    /// Whether port 0 is an area port that supports the placement search.
    pub fn has_port_search(&self) -> bool {
        matches!(
            self,
            SchematicKind::And
                | SchematicKind::Or
                | SchematicKind::Xor
                | SchematicKind::Mux
                | SchematicKind::Switch
        )
    }
}

impl std::fmt::Display for SchematicKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
