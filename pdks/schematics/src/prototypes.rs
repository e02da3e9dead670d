//! The primitive prototypes of the schematic technology.

use technology::edge::EdgeDescriptor;
use technology::layer::ArcId;
use technology::port::{PortCharacteristic, PortTemplate};
use technology::prototype::{PrimitivePrototype, SizeOffset};
use technology::template::TemplatePoint;

use crate::bits::{FlipFlopBits, TransistorKind};
use crate::edges::*;
use crate::function::base_function;
use crate::kind::SchematicKind;
use crate::layers::SchematicArcs;
use crate::symbols::Symbols;
use crate::variant::{flip_flop_layers, transistor_layers, two_port_layers};

type Proto = PrimitivePrototype<SchematicKind>;

/// A port whose area is the single point `at`.
#[allow(clippy::too_many_arguments)]
fn point_port(
    name: &'static str,
    arcs: Vec<ArcId>,
    angle: f64,
    angle_range: f64,
    index: usize,
    characteristic: PortCharacteristic,
    at: TemplatePoint,
) -> PortTemplate {
    PortTemplate::new(name, arcs, angle, angle_range, index, characteristic, at, at)
}

fn proto(kind: SchematicKind, width: f64, height: f64) -> Proto {
    PrimitivePrototype::new(kind.name(), kind, width, height, base_function(kind))
}

/// Builds every prototype, in [`SchematicKind::ALL`] order.
pub(crate) fn prototypes(symbols: &Symbols, arcs: &SchematicArcs) -> Vec<Proto> {
    use PortCharacteristic::*;
    use SchematicKind as K;

    let wire = || arcs.wire_only();
    let both = || arcs.both();

    let wire_pin = proto(K::WirePin, 0.5, 0.5)
        .with_layers(symbols.wire_pin())
        .with_ports([point_port("wire", wire(), 0., 180., 0, Unknown, center())]);

    let bus_pin = proto(K::BusPin, 2., 2.)
        .with_layers(symbols.bus_pin())
        .with_ports([point_port("bus", both(), 0., 180., 0, Unknown, center())]);

    let wire_con = proto(K::WireCon, 2., 2.)
        .with_layers(symbols.wire_con())
        .with_ports([PortTemplate::new(
            "wire",
            both(),
            0.,
            180.,
            0,
            Unknown,
            pt(EdgeDescriptor::from_left(0.5), EdgeDescriptor::from_bottom(0.5)),
            pt(EdgeDescriptor::from_right(0.5), EdgeDescriptor::from_top(0.5)),
        )
        .isolated()]);

    let buffer = proto(K::Buffer, 6., 6.)
        .with_size_offset(SizeOffset::new(0., 1., 0.25, 0.25))
        .with_layers(symbols.buffer())
        .with_ports([
            point_port("a", both(), 180., 0., 0, Input, pt(left(), c())).negatable(),
            point_port(
                "c",
                wire(),
                270.,
                0.,
                1,
                Input,
                pt(c(), EdgeDescriptor::from_bottom(2.)),
            )
            .negatable(),
            point_port(
                "y",
                both(),
                0.,
                0.,
                2,
                Output,
                pt(EdgeDescriptor::from_right(1.), c()),
            )
            .negatable(),
        ]);

    let gate_outputs = |y: f64, side: f64| {
        [
            point_port("y", both(), 0., 0., 1, Output, pt(fc(y), c())).negatable(),
            point_port("yt", both(), 0., 0., 2, Output, pt(fc(side), fc(2.))).negatable(),
            point_port("yc", both(), 0., 0., 3, Output, pt(fc(side), fc(-2.))).negatable(),
        ]
    };
    let gate_ports = |input_right: f64, y: f64, side: f64| {
        let input = PortTemplate::new(
            "a",
            both(),
            180.,
            0.,
            0,
            Input,
            pt(fc(-4.), bot()),
            pt(fc(input_right), top()),
        )
        .isolated()
        .negatable();
        std::iter::once(input)
            .chain(gate_outputs(y, side))
            .collect::<Vec<_>>()
    };

    let and = proto(K::And, 8., 6.)
        .with_size_offset(SizeOffset::new(0., 0.5, 0., 0.))
        .with_layers(symbols.and(1.))
        .with_ports(gate_ports(-4., 3.5, 2.75));

    let or = proto(K::Or, 10., 6.)
        .with_size_offset(SizeOffset::new(1., 0.5, 0., 0.))
        .with_layers(symbols.or(1.))
        .with_ports(gate_ports(-3., 4.5, 2.65));

    let xor = proto(K::Xor, 10., 6.)
        .with_size_offset(SizeOffset::new(0., 0.5, 0., 0.))
        .with_layers(symbols.xor(1.))
        .with_ports(gate_ports(-3., 4.5, 2.65));

    let ff = |name, index, angle, characteristic, at| {
        point_port(name, wire(), angle, 45., index, characteristic, at).negatable()
    };
    let flip_flop = proto(K::FlipFlop, 6., 10.)
        .with_layers(flip_flop_layers(symbols, FlipFlopBits::default()))
        .with_ports([
            ff("i1", 0, 180., Input, pt(left(), top_by(0.6))),
            ff("i2", 1, 180., Input, pt(left(), bot_by(0.6))),
            ff("q", 2, 0., Output, pt(right(), top_by(0.6))),
            ff("qb", 3, 0., Output, pt(right(), bot_by(0.6))),
            ff("ck", 4, 180., Input, pt(left(), c())),
            ff("preset", 5, 90., Input, pt(c(), top())),
            ff("clear", 6, 270., Input, pt(c(), bot())),
        ]);

    let mux = proto(K::Mux, 8., 10.)
        .with_size_offset(SizeOffset::new(0.5, 0.5, 0., 0.))
        .with_layers(symbols.mux())
        .with_ports([
            PortTemplate::new(
                "a",
                both(),
                180.,
                0.,
                0,
                Input,
                pt(left_by(0.8), bot()),
                pt(left_by(0.8), top()),
            )
            .isolated()
            .negatable(),
            point_port("s", wire(), 270., 0., 2, Input, pt(c(), bot_by(0.875))).negatable(),
            point_port("y", both(), 0., 0., 1, Output, pt(right_by(0.8), c())).negatable(),
        ]);

    let side = |name, angle, index, low, high| {
        PortTemplate::new(name, both(), angle, 45., index, Unknown, low, high)
            .isolated()
            .negatable()
    };
    let bbox = proto(K::Bbox, 10., 10.)
        .with_layers(symbols.bbox())
        .with_ports([
            side("a", 0., 0, pt(right(), bot()), pt(right(), top())),
            side("b", 90., 1, pt(left(), top()), pt(right(), top())),
            side("c", 180., 2, pt(left(), bot()), pt(left(), top())),
            side("d", 270., 3, pt(left(), bot()), pt(right(), bot())),
        ]);

    let switch = proto(K::Switch, 6., 2.)
        .with_size_offset(SizeOffset::new(0.5, 0.5, 0.5, 0.5))
        .with_layers(symbols.switch())
        .with_ports([
            PortTemplate::new(
                "a",
                both(),
                180.,
                90.,
                0,
                Unknown,
                pt(EdgeDescriptor::from_left(1.), EdgeDescriptor::from_bottom(1.)),
                pt(EdgeDescriptor::from_left(1.), EdgeDescriptor::from_top(1.)),
            )
            .isolated(),
            point_port(
                "y",
                both(),
                0.,
                90.,
                1,
                Unknown,
                pt(EdgeDescriptor::from_right(1.), c()),
            ),
        ]);

    let off_page = proto(K::OffPage, 4., 2.)
        .with_layers(symbols.off_page_plain())
        .with_ports([
            point_port("a", both(), 180., 45., 0, Unknown, pt(left(), c())),
            point_port("y", both(), 0., 45., 0, Unknown, pt(right(), c())),
        ]);

    let power = proto(K::Power, 3., 3.)
        .with_layers(symbols.power())
        .with_ports([point_port("vdd", wire(), 0., 180., 0, Power, center())]);

    let ground = proto(K::Ground, 3., 4.)
        .with_layers(symbols.ground())
        .with_ports([point_port("gnd", wire(), 90., 90., 0, Ground, pt(c(), top()))]);

    let source = proto(K::Source, 6., 6.)
        .with_layers(symbols.source())
        .with_ports([
            point_port("plus", wire(), 90., 0., 0, Unknown, pt(c(), top())),
            point_port("minus", wire(), 270., 0., 1, Unknown, pt(c(), bot())),
        ]);

    let transistor_ports = || {
        vec![
            point_port(
                "g",
                wire(),
                0.,
                180.,
                0,
                Input,
                pt(c(), EdgeDescriptor::from_top(1.)),
            ),
            point_port("s", wire(), 180., 90., 1, Bidirectional, pt(left(), bot())),
            point_port("d", wire(), 0., 90., 2, Bidirectional, pt(right(), bot())),
        ]
    };
    let transistor = proto(K::Transistor, 4., 4.)
        .with_size_offset(SizeOffset::new(0., 0., 0., 1.))
        .with_layers(transistor_layers(symbols, TransistorKind::Nmos))
        .with_ports(transistor_ports());

    let two_terminal = |arcs: Vec<ArcId>, range: f64| {
        [
            point_port("a", arcs.clone(), 90., range, 0, Unknown, pt(c(), top())),
            point_port("b", arcs, 270., range, 1, Unknown, pt(c(), bot())),
        ]
    };

    let resistor = proto(K::Resistor, 6., 1.)
        .with_size_offset(SizeOffset::new(1., 1., 0., 0.))
        .with_layers([symbols.resistor()])
        .with_ports([
            point_port(
                "a",
                wire(),
                180.,
                90.,
                0,
                Unknown,
                pt(left_by(TWO_THIRDS), c()),
            ),
            point_port(
                "b",
                wire(),
                0.,
                90.,
                1,
                Unknown,
                pt(right_by(TWO_THIRDS), c()),
            ),
        ]);

    let capacitor = proto(K::Capacitor, 3., 4.)
        .with_layers([symbols.capacitor()])
        .with_ports(two_terminal(both(), 90.));

    let diode = proto(K::Diode, 2., 4.)
        .with_layers([symbols.diode_bar(), symbols.diode_triangle()])
        .with_ports(two_terminal(wire(), 90.));

    let inductor = proto(K::Inductor, 2., 4.)
        .with_layers(symbols.inductor())
        .with_ports(two_terminal(wire(), 90.));

    let meter = proto(K::Meter, 6., 6.)
        .with_layers(symbols.meter())
        .with_ports(two_terminal(wire(), 0.));

    let well = proto(K::Well, 4., 2.)
        .with_layers(symbols.well())
        .with_ports([point_port("well", wire(), 90., 90., 0, Unknown, pt(c(), top()))]);

    let substrate = proto(K::Substrate, 3., 3.)
        .with_layers(symbols.cross())
        .with_ports([point_port(
            "substrate",
            wire(),
            90.,
            90.,
            0,
            Unknown,
            pt(c(), top()),
        )]);

    let lead = |name, angle, index, x, y| point_port(name, wire(), angle, 90., index, Unknown, pt(x, y));
    let two_port = proto(K::TwoPort, 10., 6.)
        .with_layers(two_port_layers(symbols, None))
        .with_ports([
            lead("a", 180., 0, left(), top_by(TWO_THIRDS)),
            lead("b", 180., 1, left(), bot_by(TWO_THIRDS)),
            lead("x", 0., 2, right(), top_by(TWO_THIRDS)),
            lead("y", 0., 3, right(), bot_by(TWO_THIRDS)),
        ]);

    let mut transistor4_ports = transistor_ports();
    transistor4_ports.push(point_port(
        "b",
        wire(),
        270.,
        90.,
        3,
        Bidirectional,
        pt(left_by(0.5), bot()),
    ));
    let transistor4 = proto(K::Transistor4, 4., 4.)
        .with_size_offset(SizeOffset::new(0., 0., 0., 1.))
        .with_layers(symbols.cross())
        .with_ports(transistor4_ports);

    let global_signal = proto(K::GlobalSignal, 3., 3.)
        .with_layers(symbols.global_signal())
        .with_ports([point_port(
            "global",
            wire(),
            270.,
            90.,
            0,
            Unknown,
            pt(c(), bot()),
        )]);

    let global_partition = proto(K::GlobalPartition, 4., 2.)
        .with_layers(symbols.global_partition())
        .with_ports([
            point_port("top", both(), 90., 90., 0, Unknown, pt(c(), top())),
            point_port("bottom", both(), 270., 90., 0, Unknown, pt(c(), bot())),
        ]);

    vec![
        wire_pin,
        bus_pin,
        wire_con,
        buffer,
        and,
        or,
        xor,
        flip_flop,
        mux,
        bbox,
        switch,
        off_page,
        power,
        ground,
        source,
        transistor,
        resistor,
        capacitor,
        diode,
        inductor,
        meter,
        well,
        substrate,
        two_port,
        transistor4,
        global_signal,
        global_partition,
    ]
}
