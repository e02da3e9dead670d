//! The functions a primitive can perform.

use serde::{Deserialize, Serialize};

/// The function of a primitive, as seen by netlisters and checkers.
#[allow(missing_docs)]
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PrimitiveFunction {
    #[default]
    Unknown,
    Pin,
    Connect,
    Buffer,
    GateAnd,
    GateOr,
    GateXor,
    Mux,
    ConPower,
    ConGround,
    Source,
    Resistor,
    PolyResistor,
    Capacitor,
    ElectrolyticCapacitor,
    Diode,
    ZenerDiode,
    Inductor,
    Meter,
    Well,
    Substrate,
    FlipFlopRsMs,
    FlipFlopRsP,
    FlipFlopRsN,
    FlipFlopJkMs,
    FlipFlopJkP,
    FlipFlopJkN,
    FlipFlopDMs,
    FlipFlopDP,
    FlipFlopDN,
    FlipFlopTMs,
    FlipFlopTP,
    FlipFlopTN,
    /// A generic three-terminal transistor.
    Transistor,
    TransistorNmos,
    TransistorDmos,
    TransistorPmos,
    TransistorNpn,
    TransistorPnp,
    TransistorNjfet,
    TransistorPjfet,
    TransistorDmes,
    TransistorEmes,
    /// A generic four-terminal transistor.
    Transistor4,
    Transistor4Nmos,
    Transistor4Dmos,
    Transistor4Pmos,
    Transistor4Npn,
    Transistor4Pnp,
    Transistor4Njfet,
    Transistor4Pjfet,
    Transistor4Dmes,
    Transistor4Emes,
    /// Voltage-controlled current source.
    Vccs,
    /// Current-controlled voltage source.
    Ccvs,
    /// Voltage-controlled voltage source.
    Vcvs,
    /// Current-controlled current source.
    Cccs,
    TransmissionLine,
}

impl PrimitiveFunction {
    /// Whether the function is some kind of transistor.
    pub fn is_transistor(&self) -> bool {
        use PrimitiveFunction::*;
        matches!(
            self,
            Transistor
                | TransistorNmos
                | TransistorDmos
                | TransistorPmos
                | TransistorNpn
                | TransistorPnp
                | TransistorNjfet
                | TransistorPjfet
                | TransistorDmes
                | TransistorEmes
                | Transistor4
                | Transistor4Nmos
                | Transistor4Dmos
                | Transistor4Pmos
                | Transistor4Npn
                | Transistor4Pnp
                | Transistor4Njfet
                | Transistor4Pjfet
                | Transistor4Dmes
                | Transistor4Emes
        )
    }

    /// Whether the function is some kind of flip-flop.
    pub fn is_flip_flop(&self) -> bool {
        use PrimitiveFunction::*;
        matches!(
            self,
            FlipFlopRsMs
                | FlipFlopRsP
                | FlipFlopRsN
                | FlipFlopJkMs
                | FlipFlopJkP
                | FlipFlopJkN
                | FlipFlopDMs
                | FlipFlopDP
                | FlipFlopDN
                | FlipFlopTMs
                | FlipFlopTP
                | FlipFlopTN
        )
    }
}
