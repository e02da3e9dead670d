//! Geometry that depends on an instance's connections, exports, and size.

use std::sync::Arc;

use geometry::prelude::*;
use technology::instance::{Export, Instance};
use technology::layer::LayerId;
use technology::port::PortCharacteristic;
use technology::prototype::{PrimitivePrototype, PrototypeId, SizeOffset};
use technology::realize::PolygonSink;
use technology::template::{DrawStyle, TemplateLayer};
use technology::Technology;

use crate::kind::SchematicKind;
use crate::layers::{SchematicArcs, SchematicLayers};
use crate::symbols::Symbols;

type Layers = Arc<[TemplateLayer]>;

/// The radius of a junction blob, half the width of a wire pin.
const BLOB_RADIUS: f64 = 0.25;

/// Bus pin disc radius on a bus with three or more branches.
const BUS_DISC_LARGE: f64 = 0.5;
/// Bus pin disc radius on a plain bus.
const BUS_DISC_SMALL: f64 = 0.25;
/// Radius of the wire disc in the middle of a tapped bus pin.
const WIRE_DISC: f64 = 0.125;

/// The disc radii of a bus pin, as multiples of its height.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct BusPinDiscs {
    pub(crate) bus: f64,
    pub(crate) wire: f64,
}

impl BusPinDiscs {
    /// Sizes the discs of a bus pin from the wires on it.
    ///
    /// An unconnected pin counts as carrying one implicit bus. A pin without
    /// busses shows no bus disc once wires or an export make it part of a net,
    /// and disappears entirely when it is only exported.
    pub(crate) fn new(bus: usize, non_bus: usize, exported: bool) -> Self {
        let implicit = usize::from(bus == 0 && non_bus == 0);
        let mut wire = if non_bus == 0 { 0. } else { WIRE_DISC };
        let bus_disc = if bus + implicit > 2 {
            BUS_DISC_LARGE
        } else if bus > 0 {
            BUS_DISC_SMALL
        } else if exported {
            wire = 0.;
            0.
        } else if non_bus > 0 {
            0.
        } else {
            BUS_DISC_SMALL
        };
        Self {
            bus: bus_disc,
            wire,
        }
    }
}

/// The drawing of an off-page connector.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum OffPageStyle {
    Plain,
    Input,
    Output,
    Bidirectional,
}

impl OffPageStyle {
    pub(crate) fn classify(exports: &[Export]) -> Self {
        let has = |c: PortCharacteristic| exports.iter().any(|e| e.characteristic == c);
        let (input, output) = (
            has(PortCharacteristic::Input),
            has(PortCharacteristic::Output),
        );
        if has(PortCharacteristic::Bidirectional) || (input && output) {
            OffPageStyle::Bidirectional
        } else if input {
            OffPageStyle::Input
        } else if output {
            OffPageStyle::Output
        } else {
            OffPageStyle::Plain
        }
    }
}

/// The drawing scale of a logic gate of the given full size.
///
/// Gates keep their proportions as they grow, so the scale follows the width
/// unless the gate is too short for it.
pub(crate) fn gate_unit(kind: SchematicKind, width: f64, height: f64) -> f64 {
    let unit = match kind {
        SchematicKind::And => width / 8.,
        SchematicKind::Or | SchematicKind::Xor => width / 10.,
        _ => return 1.,
    };
    if height < unit * 6. {
        height / 6.
    } else {
        unit
    }
}

/// The size offset of a logic gate drawn at scale `unit`.
pub(crate) fn gate_size_offset(kind: SchematicKind, unit: f64) -> Option<SizeOffset> {
    match kind {
        SchematicKind::And | SchematicKind::Xor => Some(SizeOffset::new(0., unit / 2., 0., 0.)),
        SchematicKind::Or => Some(SizeOffset::new(unit, unit / 2., 0., 0.)),
        _ => None,
    }
}

/// The number of throws drawn on a switch of the given full height.
pub(crate) fn switch_rungs(height: f64) -> usize {
    let mut n = 3;
    if height >= 4. {
        n += (height as usize) / 2 - 1;
    }
    n
}

/// Ports with two consecutive connections, in port order.
///
/// Connections are expected to arrive grouped by port.
pub(crate) fn blob_ports(instance: &Instance) -> Vec<usize> {
    let mut ports = Vec::new();
    for pair in instance.connections().windows(2) {
        if pair[0].port == pair[1].port && !ports.contains(&pair[0].port) {
            ports.push(pair[0].port);
        }
    }
    ports.sort_unstable();
    ports
}

/// Produces the layers of an instance whose drawing depends on its state.
pub(crate) struct Synthesizer<'a> {
    pub(crate) tech: &'a Technology<SchematicKind>,
    pub(crate) symbols: &'a Symbols,
    pub(crate) layers: SchematicLayers,
    pub(crate) arcs: SchematicArcs,
}

impl Synthesizer<'_> {
    /// Replaces or extends `resolved`, the variant layers of `instance`.
    pub(crate) fn synthesize(
        &self,
        prototype: &PrimitivePrototype<SchematicKind>,
        id: PrototypeId,
        instance: &Instance,
        resolved: Layers,
    ) -> Layers {
        use SchematicKind::*;
        let kind = *prototype.kind();
        let layers = match kind {
            WirePin => self.wire_pin(instance, resolved),
            BusPin => self.bus_pin(id, instance),
            And | Or | Xor => self.gate(kind, id, instance, resolved),
            Switch => self.switch(id, instance, &resolved),
            OffPage => self.off_page(id, instance, resolved),
            WireCon | Buffer | FlipFlop | Mux | Bbox | Power | Ground | Source | Transistor
            | Resistor | Capacitor | Diode | Inductor | Meter | Well | Substrate | TwoPort
            | Transistor4 | GlobalSignal | GlobalPartition => resolved,
        };
        if kind.has_extra_blobs() {
            self.with_blobs(prototype, instance, layers)
        } else {
            layers
        }
    }

    fn wire_pin(&self, instance: &Instance, resolved: Layers) -> Layers {
        if instance.connections_on(0).count() == 2 {
            Layers::from(Vec::new())
        } else {
            resolved
        }
    }

    fn bus_pin(&self, id: PrototypeId, instance: &Instance) -> Layers {
        let bus = instance
            .connections()
            .iter()
            .filter(|c| c.arc == self.arcs.bus)
            .count();
        let non_bus = instance.connections().len() - bus;
        let discs = BusPinDiscs::new(bus, non_bus, instance.has_exports());
        let layers = [(self.layers.bus, discs.bus), (self.layers.arc, discs.wire)]
            .into_iter()
            .filter(|&(_, size)| size > 0.)
            .map(|(layer, size)| self.symbols.center_disc(layer, size))
            .collect();
        Layers::from(self.tech.adopt(id, layers))
    }

    fn gate(
        &self,
        kind: SchematicKind,
        id: PrototypeId,
        instance: &Instance,
        resolved: Layers,
    ) -> Layers {
        let (width, height) = self.tech.full_extent(instance);
        let unit = gate_unit(kind, width, height);
        if unit == 1. {
            return resolved;
        }
        let layers = match kind {
            SchematicKind::And => self.symbols.and(unit),
            SchematicKind::Or => self.symbols.or(unit),
            _ => self.symbols.xor(unit),
        };
        Layers::from(self.tech.adopt(id, layers))
    }

    fn switch(&self, id: PrototypeId, instance: &Instance, resolved: &Layers) -> Layers {
        let (_, height) = self.tech.full_extent(instance);
        let n = switch_rungs(height);
        let arm = if n % 2 == 0 { 1 } else { 2 };
        let mut layers: Vec<_> = [0, arm]
            .iter()
            .filter_map(|&i| resolved.get(i).cloned())
            .collect();
        let rungs = (2..n)
            .map(|i| self.symbols.switch_rung((2 * (i - 1)) as f64 - 1.))
            .collect();
        layers.extend(self.tech.adopt(id, rungs));
        Layers::from(layers)
    }

    fn off_page(&self, id: PrototypeId, instance: &Instance, resolved: Layers) -> Layers {
        let layers = match OffPageStyle::classify(instance.exports()) {
            OffPageStyle::Plain => return resolved,
            OffPageStyle::Input => self.symbols.off_page_input(),
            OffPageStyle::Output => self.symbols.off_page_output(),
            OffPageStyle::Bidirectional => self.symbols.off_page_bidirectional(),
        };
        Layers::from(self.tech.adopt(id, layers))
    }

    fn with_blobs(
        &self,
        prototype: &PrimitivePrototype<SchematicKind>,
        instance: &Instance,
        layers: Layers,
    ) -> Layers {
        let ports = blob_ports(instance);
        if ports.is_empty() {
            return layers;
        }
        let blobs = ports
            .into_iter()
            .filter_map(|i| prototype.port(i))
            .map(|port| self.symbols.blob(port.low().x, port.high().y, BLOB_RADIUS));
        layers.iter().cloned().chain(blobs).collect()
    }
}

/// Draws a circle on each negated connection of a negatable port.
///
/// The circle touches the wire end and lies outside the primitive, along the
/// port's direction.
pub(crate) fn negating_bubbles<S: PolygonSink + ?Sized>(
    prototype: &PrimitivePrototype<SchematicKind>,
    instance: &Instance,
    layer: LayerId,
    diameter: f64,
    sink: &mut S,
) {
    let radius = diameter / 2.;
    for connection in instance.connections().iter().filter(|c| c.negated) {
        let Some(port) = prototype.port(connection.port) else {
            continue;
        };
        if !port.is_negatable() {
            tracing::debug!(
                prototype = %prototype.name(),
                port = %port.name(),
                "ignoring negation on a port that cannot be negated"
            );
            continue;
        }
        let angle = instance.orientation().transform_angle(port.angle());
        let center = connection.location + Point::unit_at_angle(angle) * radius;
        sink.push_point(center);
        sink.push_point(connection.location);
        sink.push_poly(DrawStyle::Circle, layer, None);
    }
}
