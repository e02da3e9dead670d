//! Primitive functions of schematic instances.

use technology::function::PrimitiveFunction;

use crate::bits::{
    CapacitorKind, DiodeKind, FlipFlopBits, FlipFlopClock, FlipFlopType, ResistorKind,
    TransistorKind, TwoPortKind,
};
use crate::kind::SchematicKind;

/// The function of a primitive before its selector is considered.
pub const fn base_function(kind: SchematicKind) -> PrimitiveFunction {
    use SchematicKind::*;
    match kind {
        WirePin | BusPin => PrimitiveFunction::Pin,
        WireCon | OffPage | GlobalSignal | GlobalPartition => PrimitiveFunction::Connect,
        Buffer => PrimitiveFunction::Buffer,
        And => PrimitiveFunction::GateAnd,
        Or => PrimitiveFunction::GateOr,
        Xor => PrimitiveFunction::GateXor,
        FlipFlop => PrimitiveFunction::FlipFlopRsMs,
        Mux => PrimitiveFunction::Mux,
        Bbox | Switch => PrimitiveFunction::Unknown,
        Power => PrimitiveFunction::ConPower,
        Ground => PrimitiveFunction::ConGround,
        Source => PrimitiveFunction::Source,
        Transistor => PrimitiveFunction::Transistor,
        Resistor => PrimitiveFunction::Resistor,
        Capacitor => PrimitiveFunction::Capacitor,
        Diode => PrimitiveFunction::Diode,
        Inductor => PrimitiveFunction::Inductor,
        Meter => PrimitiveFunction::Meter,
        Well => PrimitiveFunction::Well,
        Substrate => PrimitiveFunction::Substrate,
        TwoPort => PrimitiveFunction::TransmissionLine,
        Transistor4 => PrimitiveFunction::Transistor4,
    }
}

const FLIP_FLOP_FUNCTIONS: [(FlipFlopBits, PrimitiveFunction); 12] = {
    use FlipFlopClock::*;
    use FlipFlopType::*;
    use PrimitiveFunction::*;
    [
        (FlipFlopBits::new(Rs, MasterSlave), FlipFlopRsMs),
        (FlipFlopBits::new(Rs, Positive), FlipFlopRsP),
        (FlipFlopBits::new(Rs, Negative), FlipFlopRsN),
        (FlipFlopBits::new(Jk, MasterSlave), FlipFlopJkMs),
        (FlipFlopBits::new(Jk, Positive), FlipFlopJkP),
        (FlipFlopBits::new(Jk, Negative), FlipFlopJkN),
        (FlipFlopBits::new(D, MasterSlave), FlipFlopDMs),
        (FlipFlopBits::new(D, Positive), FlipFlopDP),
        (FlipFlopBits::new(D, Negative), FlipFlopDN),
        (FlipFlopBits::new(T, MasterSlave), FlipFlopTMs),
        (FlipFlopBits::new(T, Positive), FlipFlopTP),
        (FlipFlopBits::new(T, Negative), FlipFlopTN),
    ]
};

const TRANSISTOR_FUNCTIONS: [(TransistorKind, PrimitiveFunction, PrimitiveFunction); 9] = {
    use PrimitiveFunction::*;
    [
        (TransistorKind::Nmos, TransistorNmos, Transistor4Nmos),
        (TransistorKind::Dmos, TransistorDmos, Transistor4Dmos),
        (TransistorKind::Pmos, TransistorPmos, Transistor4Pmos),
        (TransistorKind::Npn, TransistorNpn, Transistor4Npn),
        (TransistorKind::Pnp, TransistorPnp, Transistor4Pnp),
        (TransistorKind::Njfet, TransistorNjfet, Transistor4Njfet),
        (TransistorKind::Pjfet, TransistorPjfet, Transistor4Pjfet),
        (TransistorKind::Dmes, TransistorDmes, Transistor4Dmes),
        (TransistorKind::Emes, TransistorEmes, Transistor4Emes),
    ]
};

const TWO_PORT_FUNCTIONS: [(TwoPortKind, PrimitiveFunction); 5] = [
    (TwoPortKind::Vccs, PrimitiveFunction::Vccs),
    (TwoPortKind::Ccvs, PrimitiveFunction::Ccvs),
    (TwoPortKind::Vcvs, PrimitiveFunction::Vcvs),
    (TwoPortKind::Cccs, PrimitiveFunction::Cccs),
    (TwoPortKind::TransmissionLine, PrimitiveFunction::TransmissionLine),
];

/// The function of a primitive of the given kind with the given selector.
///
/// Undeclared selectors map to the kind's default function.
pub fn primitive_function(kind: SchematicKind, selector: u32) -> PrimitiveFunction {
    match kind {
        SchematicKind::Resistor => match ResistorKind::decode(selector) {
            Some(ResistorKind::Poly) => PrimitiveFunction::PolyResistor,
            _ => PrimitiveFunction::Resistor,
        },
        SchematicKind::Capacitor => match CapacitorKind::decode(selector) {
            Some(CapacitorKind::Electrolytic) => PrimitiveFunction::ElectrolyticCapacitor,
            _ => PrimitiveFunction::Capacitor,
        },
        SchematicKind::Diode => match DiodeKind::decode(selector) {
            Some(DiodeKind::Zener) => PrimitiveFunction::ZenerDiode,
            _ => PrimitiveFunction::Diode,
        },
        SchematicKind::Transistor | SchematicKind::Transistor4 => {
            let tran = TransistorKind::decode(selector).unwrap_or(TransistorKind::Nmos);
            TRANSISTOR_FUNCTIONS
                .iter()
                .find(|(k, ..)| *k == tran)
                .map(|&(_, three, four)| {
                    if kind == SchematicKind::Transistor {
                        three
                    } else {
                        four
                    }
                })
                .unwrap_or(base_function(kind))
        }
        SchematicKind::FlipFlop => {
            let bits = FlipFlopBits::decode(selector).unwrap_or_default();
            FLIP_FLOP_FUNCTIONS
                .iter()
                .find(|(b, _)| *b == bits)
                .map(|&(_, f)| f)
                .unwrap_or(PrimitiveFunction::FlipFlopRsMs)
        }
        SchematicKind::TwoPort => TwoPortKind::decode(selector)
            .and_then(|k| TWO_PORT_FUNCTIONS.iter().find(|(t, _)| *t == k))
            .map(|&(_, f)| f)
            .unwrap_or(PrimitiveFunction::TransmissionLine),
        _ => base_function(kind),
    }
}

/// The selector bits that give a primitive the requested function.
///
/// Returns 0 for functions no selector produces.
pub fn function_bits(function: PrimitiveFunction) -> u32 {
    match function {
        PrimitiveFunction::ElectrolyticCapacitor => CapacitorKind::Electrolytic.encode(),
        PrimitiveFunction::PolyResistor => ResistorKind::Poly.encode(),
        PrimitiveFunction::ZenerDiode => DiodeKind::Zener.encode(),
        _ => {
            if let Some(&(k, ..)) = TRANSISTOR_FUNCTIONS
                .iter()
                .find(|&&(_, three, four)| three == function || four == function)
            {
                return k.encode();
            }
            if let Some(&(bits, _)) = FLIP_FLOP_FUNCTIONS.iter().find(|(_, f)| *f == function) {
                return bits.encode();
            }
            TWO_PORT_FUNCTIONS
                .iter()
                .find(|(_, f)| *f == function)
                .map(|(k, _)| k.encode())
                .unwrap_or(0)
        }
    }
}
