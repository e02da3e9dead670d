//! Selector-keyed layer lists.

use std::sync::Arc;

use technology::prototype::PrototypeId;
use technology::template::TemplateLayer;
use technology::Technology;

use crate::bits::{
    CapacitorKind, DiodeKind, FlipFlopBits, FlipFlopClock, FlipFlopType, ResistorKind,
    TransistorKind, TwoPortKind,
};
use crate::kind::SchematicKind;
use crate::symbols::Symbols;

type Layers = Arc<[TemplateLayer]>;

pub(crate) fn flip_flop_layers(symbols: &Symbols, bits: FlipFlopBits) -> Vec<TemplateLayer> {
    let mut layers = vec![match bits.clock {
        FlipFlopClock::MasterSlave => symbols.ff_waveform_master_slave(),
        FlipFlopClock::Positive => symbols.ff_waveform_positive(),
        FlipFlopClock::Negative => symbols.ff_waveform_negative(),
    }];
    match bits.kind {
        FlipFlopType::Rs => layers.extend([symbols.ff_upper_letter("R"), symbols.ff_lower_letter("S")]),
        FlipFlopType::Jk => layers.extend([symbols.ff_upper_letter("J"), symbols.ff_lower_letter("K")]),
        FlipFlopType::D => layers.extend([symbols.ff_upper_letter("D"), symbols.ff_lower_letter("E")]),
        FlipFlopType::T => layers.push(symbols.ff_upper_letter("T")),
    }
    layers.extend(symbols.ff_frame());
    layers
}

pub(crate) fn transistor_layers(symbols: &Symbols, kind: TransistorKind) -> Vec<TemplateLayer> {
    use TransistorKind::*;
    match kind {
        Nmos => vec![symbols.tran_mos(), symbols.tran_top(), symbols.tran_nmos()],
        Dmos => vec![
            symbols.tran_mos(),
            symbols.tran_top(),
            symbols.tran_nmos(),
            symbols.tran_dmos(),
        ],
        Pmos => vec![
            symbols.tran_mos(),
            symbols.tran_top(),
            symbols.tran_pmos(),
            symbols.tran_pmos_circle(),
        ],
        Npn => vec![
            symbols.tran_bipolar(),
            symbols.tran_top(),
            symbols.tran_nmos(),
            symbols.tran_npn_emitter(),
        ],
        Pnp => vec![
            symbols.tran_bipolar(),
            symbols.tran_top(),
            symbols.tran_nmos(),
            symbols.tran_pnp_emitter(),
        ],
        Njfet => vec![
            symbols.tran_fet(),
            symbols.tran_top(),
            symbols.tran_nmos(),
            symbols.tran_njfet_arrow(),
        ],
        Pjfet => vec![
            symbols.tran_fet(),
            symbols.tran_top(),
            symbols.tran_nmos(),
            symbols.tran_pjfet_arrow(),
        ],
        Dmes => vec![symbols.tran_fet(), symbols.tran_top(), symbols.tran_nmos()],
        Emes => vec![symbols.tran_emes(), symbols.tran_nmos()],
    }
}

/// The three-terminal symbol plus a bulk lead.
pub(crate) fn transistor4_layers(symbols: &Symbols, kind: TransistorKind) -> Vec<TemplateLayer> {
    use TransistorKind::*;
    let mut layers = transistor_layers(symbols, kind);
    layers.push(match kind {
        Nmos => symbols.tran4_nmos(),
        Dmos => symbols.tran4_dmos(),
        Pmos => symbols.tran4_pmos(),
        Npn | Pnp => symbols.tran4_bipolar(),
        Njfet => symbols.tran4_pmes(),
        Pjfet | Dmes | Emes => symbols.tran4_nmes(),
    });
    layers
}

pub(crate) fn diode_layers(symbols: &Symbols, kind: DiodeKind) -> Vec<TemplateLayer> {
    match kind {
        DiodeKind::Normal => vec![symbols.diode_bar(), symbols.diode_triangle()],
        DiodeKind::Zener => vec![symbols.diode_zener_bar(), symbols.diode_triangle()],
    }
}

pub(crate) fn capacitor_layers(symbols: &Symbols, kind: CapacitorKind) -> Vec<TemplateLayer> {
    match kind {
        CapacitorKind::Normal => vec![symbols.capacitor()],
        CapacitorKind::Electrolytic => {
            vec![symbols.capacitor(), symbols.capacitor_electrolytic()]
        }
    }
}

pub(crate) fn resistor_layers(symbols: &Symbols, kind: ResistorKind) -> Vec<TemplateLayer> {
    match kind {
        ResistorKind::Normal => vec![symbols.resistor()],
        ResistorKind::Poly => vec![symbols.resistor(), symbols.resistor_poly()],
    }
}

/// The layers of a two-port element, or the generic box when `kind` is `None`.
pub(crate) fn two_port_layers(symbols: &Symbols, kind: Option<TwoPortKind>) -> Vec<TemplateLayer> {
    let Some(kind) = kind else {
        return vec![
            symbols.two_box(),
            symbols.two_generic_wire(),
            symbols.two_upper_left_plus(),
            symbols.two_upper_right_plus(),
        ];
    };
    match kind {
        TwoPortKind::Vccs => vec![
            symbols.two_box(),
            symbols.two_norm_wire(),
            symbols.two_current_source(),
            symbols.two_current_arrow(),
            symbols.two_upper_left_plus(),
        ],
        TwoPortKind::Ccvs => vec![
            symbols.two_box(),
            symbols.two_current_control(),
            symbols.two_norm_wire(),
            symbols.two_voltage_source(),
            symbols.two_upper_right_plus(),
            symbols.two_upper_left_plus(),
        ],
        TwoPortKind::Vcvs => vec![
            symbols.two_box(),
            symbols.two_norm_wire(),
            symbols.two_voltage_source(),
            symbols.two_upper_right_plus(),
            symbols.two_upper_left_plus(),
        ],
        TwoPortKind::Cccs => vec![
            symbols.two_box(),
            symbols.two_current_control(),
            symbols.two_norm_wire(),
            symbols.two_current_source(),
            symbols.two_current_arrow(),
            symbols.two_upper_left_plus(),
        ],
        TwoPortKind::TransmissionLine => {
            let mut layers = vec![symbols.two_line_box()];
            layers.extend(symbols.two_line_arcs());
            layers.extend([
                symbols.two_line_wire(),
                symbols.two_upper_left_plus(),
                symbols.two_line_plus(),
            ]);
            layers
        }
    }
}

/// The layer lists of every primitive, keyed by selector.
///
/// Built once alongside the technology. Lists are shared, so resolving a
/// variant never copies template layers.
#[derive(Debug, Clone)]
pub struct VariantTables {
    base: Vec<Layers>,
    flip_flop: Vec<Layers>,
    transistor: Vec<Layers>,
    transistor4: Vec<Layers>,
    diode: Vec<Layers>,
    capacitor: Vec<Layers>,
    resistor: Vec<Layers>,
    two_port: Vec<Layers>,
}

impl VariantTables {
    /// Builds every variant list, adopting each for its prototype.
    ///
    /// `ids` holds the prototype of each kind, in [`SchematicKind::ALL`] order.
    pub(crate) fn new(
        tech: &Technology<SchematicKind>,
        ids: &[PrototypeId],
        symbols: &Symbols,
    ) -> Self {
        let id = |kind: SchematicKind| ids[kind.index()];
        let table = |kind: SchematicKind, lists: Vec<Vec<TemplateLayer>>| -> Vec<Layers> {
            lists
                .into_iter()
                .map(|layers| Layers::from(tech.adopt(id(kind), layers)))
                .collect()
        };

        let base = ids
            .iter()
            .map(|&id| {
                tech.prototype(id)
                    .map(|proto| proto.layers().clone())
                    .unwrap_or_else(|| Layers::from(Vec::new()))
            })
            .collect();

        let flip_flop: Vec<_> = FlipFlopType::ALL
            .iter()
            .flat_map(|&kind| {
                FlipFlopClock::ALL
                    .iter()
                    .map(move |&clock| FlipFlopBits::new(kind, clock))
            })
            .map(|bits| flip_flop_layers(symbols, bits))
            .collect();
        let transistors = |f: fn(&Symbols, TransistorKind) -> Vec<TemplateLayer>| -> Vec<_> {
            TransistorKind::ALL.iter().map(|&k| f(symbols, k)).collect()
        };

        Self {
            base,
            flip_flop: table(SchematicKind::FlipFlop, flip_flop),
            transistor: table(SchematicKind::Transistor, transistors(transistor_layers)),
            transistor4: table(SchematicKind::Transistor4, transistors(transistor4_layers)),
            diode: table(
                SchematicKind::Diode,
                DiodeKind::ALL.iter().map(|&k| diode_layers(symbols, k)).collect(),
            ),
            capacitor: table(
                SchematicKind::Capacitor,
                CapacitorKind::ALL
                    .iter()
                    .map(|&k| capacitor_layers(symbols, k))
                    .collect(),
            ),
            resistor: table(
                SchematicKind::Resistor,
                ResistorKind::ALL
                    .iter()
                    .map(|&k| resistor_layers(symbols, k))
                    .collect(),
            ),
            two_port: table(
                SchematicKind::TwoPort,
                TwoPortKind::ALL
                    .iter()
                    .map(|&k| two_port_layers(symbols, Some(k)))
                    .collect(),
            ),
        }
    }

    /// The prototype's own layer list.
    pub fn base(&self, kind: SchematicKind) -> Layers {
        self.base
            .get(kind.index())
            .cloned()
            .unwrap_or_else(|| Layers::from(Vec::new()))
    }

    /// The layer list for `selector`.
    ///
    /// Never fails: a selector that does not decode to a declared variant
    /// resolves to the kind's default list.
    pub fn resolve(&self, kind: SchematicKind, selector: u32) -> Layers {
        let (lists, code) = match kind {
            SchematicKind::FlipFlop => (
                &self.flip_flop,
                FlipFlopBits::decode(selector).map(|bits| bits.ordinal()),
            ),
            SchematicKind::Transistor => (
                &self.transistor,
                TransistorKind::decode(selector).map(|k| k.encode() as usize),
            ),
            SchematicKind::Transistor4 => (
                &self.transistor4,
                TransistorKind::decode(selector).map(|k| k.encode() as usize),
            ),
            SchematicKind::Diode => (
                &self.diode,
                DiodeKind::decode(selector).map(|k| k.encode() as usize),
            ),
            SchematicKind::Capacitor => (
                &self.capacitor,
                CapacitorKind::decode(selector).map(|k| k.encode() as usize),
            ),
            SchematicKind::Resistor => (
                &self.resistor,
                ResistorKind::decode(selector).map(|k| k.encode() as usize),
            ),
            SchematicKind::TwoPort => {
                return match TwoPortKind::decode(selector)
                    .and_then(|k| self.two_port.get(k.encode() as usize))
                {
                    Some(layers) => layers.clone(),
                    None => {
                        tracing::debug!(%kind, selector, "undeclared selector, using generic layers");
                        self.base(kind)
                    }
                };
            }
            _ => return self.base(kind),
        };

        if let Some(layers) = code.and_then(|i| lists.get(i)) {
            return layers.clone();
        }
        tracing::debug!(%kind, selector, "undeclared selector, using default variant");
        lists.first().cloned().unwrap_or_else(|| self.base(kind))
    }
}
