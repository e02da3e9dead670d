use std::sync::Arc;

use approx::assert_relative_eq;
use geometry::prelude::*;
use technology::function::PrimitiveFunction;
use technology::instance::{Connection, Export, Instance, InstanceBuilder};
use technology::port::PortCharacteristic;
use technology::prototype::SizeOffset;
use technology::realize::Shape;
use technology::template::{DrawStyle, TemplateLayer};
use technology::SizeConvention;
use test_log::test;

use crate::bits::{
    DiodeKind, FlipFlopBits, FlipFlopClock, FlipFlopType, TransistorKind, TwoPortKind,
};
use crate::config::ConfigError;
use crate::function::{function_bits, primitive_function};
use crate::symbols::Symbols;
use crate::synth::{blob_ports, switch_rungs, BusPinDiscs, OffPageStyle};
use crate::{Error, SchematicKind, Schematics, SchematicsConfig, SCHEMATICS};

fn place(kind: SchematicKind, width: f64, height: f64) -> InstanceBuilder {
    let mut b = Instance::builder();
    b.prototype(SCHEMATICS.id(kind)).width(width).height(height);
    b
}

fn wire(port: usize, x: f64, y: f64) -> Connection {
    Connection::new(port, SCHEMATICS.arcs().wire, Point::new(x, y))
}

fn bus(port: usize, x: f64, y: f64) -> Connection {
    Connection::new(port, SCHEMATICS.arcs().bus, Point::new(x, y))
}

fn symbols() -> Symbols {
    Symbols::new(*SCHEMATICS.layers())
}

fn assert_point_eq(actual: Point, expected: Point) {
    assert_relative_eq!(actual.x, expected.x, epsilon = 1e-9);
    assert_relative_eq!(actual.y, expected.y, epsilon = 1e-9);
}

fn assert_shapes_eq(actual: &[Shape], expected: &[Shape]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_eq!(a.layer, e.layer);
        assert_eq!(a.style, e.style);
        assert_eq!(a.text, e.text);
        assert_eq!(a.polygon.points().len(), e.polygon.points().len());
        for (&p, &q) in a.polygon.points().iter().zip(e.polygon.points()) {
            assert_point_eq(p, q);
        }
    }
}

#[test]
fn every_kind_has_a_prototype() {
    assert_eq!(SCHEMATICS.technology().prototypes().count(), SchematicKind::ALL.len());
    for kind in SchematicKind::ALL {
        let proto = SCHEMATICS.prototype(kind).unwrap();
        assert_eq!(*proto.kind(), kind);
        assert_eq!(proto.name().as_str(), kind.name());
    }
    let and = SCHEMATICS.prototype_by_name("and").unwrap();
    assert_eq!(*and.kind(), SchematicKind::And);
    assert!(SCHEMATICS.prototype_by_name("nand").is_none());
}

#[test]
fn kind_of_instance() {
    let inst = place(SchematicKind::Diode, 2., 4.).build().unwrap();
    assert_eq!(SCHEMATICS.kind_of(&inst), Some(SchematicKind::Diode));
}

#[test]
fn bus_pin_disc_scenarios() {
    assert_eq!(
        BusPinDiscs::new(0, 0, false),
        BusPinDiscs {
            bus: 0.25,
            wire: 0.
        }
    );
    assert_eq!(
        BusPinDiscs::new(3, 0, false),
        BusPinDiscs { bus: 0.5, wire: 0. }
    );
    assert_eq!(
        BusPinDiscs::new(0, 1, false),
        BusPinDiscs {
            bus: 0.,
            wire: 0.125
        }
    );
    assert_eq!(
        BusPinDiscs::new(0, 3, true),
        BusPinDiscs { bus: 0., wire: 0. }
    );
    assert_eq!(
        BusPinDiscs::new(1, 1, false),
        BusPinDiscs {
            bus: 0.25,
            wire: 0.125
        }
    );
}

#[test]
fn unconnected_bus_pin_draws_small_disc() {
    let inst = place(SchematicKind::BusPin, 2., 2.).build().unwrap();
    let shapes = SCHEMATICS.shape_of_node(&inst);
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].layer, SCHEMATICS.layers().bus);
    assert_eq!(shapes[0].style, DrawStyle::Disc);
    let points = shapes[0].polygon.points();
    assert_point_eq(points[0], Point::new(0., 0.));
    assert_point_eq(points[1], Point::new(0., 0.5));
}

#[test]
fn bus_pin_with_three_busses_draws_large_disc() {
    let inst = place(SchematicKind::BusPin, 2., 2.)
        .connections(vec![bus(0, 0., 0.), bus(0, 0., 0.), bus(0, 0., 0.)])
        .build()
        .unwrap();
    let shapes = SCHEMATICS.shape_of_node(&inst);
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].layer, SCHEMATICS.layers().bus);
    assert_point_eq(shapes[0].polygon.points()[1], Point::new(0., 1.));
}

#[test]
fn exported_bus_pin_on_wires_disappears() {
    let inst = place(SchematicKind::BusPin, 2., 2.)
        .connections(vec![wire(0, 0., 0.), wire(0, 0., 0.), wire(0, 0., 0.)])
        .exports(vec![Export::new(0, PortCharacteristic::Input)])
        .build()
        .unwrap();
    assert!(SCHEMATICS.shape_of_node(&inst).is_empty());

    let unexported = place(SchematicKind::BusPin, 2., 2.)
        .connections(vec![wire(0, 0., 0.)])
        .build()
        .unwrap();
    let shapes = SCHEMATICS.shape_of_node(&unexported);
    assert_eq!(shapes.len(), 1);
    assert_eq!(shapes[0].layer, SCHEMATICS.layers().arc);
}

#[test]
fn wire_pin_vanishes_between_two_wires() {
    for (n, visible) in [(0, true), (1, true), (2, false), (3, true)] {
        let inst = place(SchematicKind::WirePin, 0.5, 0.5)
            .connections(vec![wire(0, 0., 0.); n])
            .build()
            .unwrap();
        assert_eq!(!SCHEMATICS.shape_of_node(&inst).is_empty(), visible, "{n} wires");
    }
}

#[test]
fn and_gate_scales_with_width() {
    let inst = place(SchematicKind::And, 16., 12.).build().unwrap();
    let layers = SCHEMATICS.node_layers(&inst).unwrap();
    assert_eq!(&*layers, &symbols().and(2.)[..]);
    assert_eq!(
        SCHEMATICS.size_offset(&inst),
        Some(SizeOffset::new(0., 1., 0., 0.))
    );

    let port = SCHEMATICS.shape_of_port(&inst, 0, None).unwrap();
    assert_eq!(port.polygon.points().len(), 4);
    for p in port.polygon.points() {
        assert_relative_eq!(p.x, -8.);
    }
}

#[test]
fn short_and_gate_keeps_default_drawing() {
    let inst = place(SchematicKind::And, 16., 6.).build().unwrap();
    let layers = SCHEMATICS.node_layers(&inst).unwrap();
    assert_eq!(layers, SCHEMATICS.variants().base(SchematicKind::And));
    assert_eq!(
        SCHEMATICS.size_offset(&inst),
        Some(SizeOffset::new(0., 0.5, 0., 0.))
    );
}

#[test]
fn non_gate_size_offset_is_fixed() {
    let inst = place(SchematicKind::Resistor, 12., 2.).build().unwrap();
    assert_eq!(
        SCHEMATICS.size_offset(&inst),
        Some(SizeOffset::new(1., 1., 0., 0.))
    );
}

#[test]
fn switch_gains_throws_with_height() {
    assert_eq!(switch_rungs(2.), 3);
    assert_eq!(switch_rungs(4.), 4);
    assert_eq!(switch_rungs(6.), 5);
    assert_eq!(switch_rungs(7.), 5);

    for (height, n) in [(2., 3), (4., 4), (6., 5)] {
        let inst = place(SchematicKind::Switch, 6., height).build().unwrap();
        let layers = SCHEMATICS.node_layers(&inst).unwrap();
        assert_eq!(layers.len(), 2 + (n - 2), "height {height}");
    }
}

#[test]
fn switch_throws_sit_on_a_two_unit_pitch() {
    let disc = |x: f64, y: f64| [Point::new(x, y), Point::new(x + 0.25, y)];
    let line = |a: (f64, f64), b: (f64, f64)| [Point::new(a.0, a.1), Point::new(b.0, b.1)];

    // Five throws: the arm points at the upper rung.
    let inst = place(SchematicKind::Switch, 6., 6.).build().unwrap();
    let shapes = SCHEMATICS.shape_of_node(&inst);
    assert_eq!(shapes.len(), 5);
    assert_eq!(shapes[1].style, DrawStyle::Opened);
    for (shape, expected) in shapes.iter().zip([
        [Point::new(2., 0.), Point::new(1.75, 0.)],
        line((2., 0.), (-2., 1.)),
        disc(-2., -2.),
        disc(-2., 0.),
        disc(-2., 2.),
    ]) {
        assert_eq!(shape.polygon.points().len(), 2);
        for (&p, q) in shape.polygon.points().iter().zip(expected) {
            assert_point_eq(p, q);
        }
    }
    for shape in &shapes[2..] {
        assert_eq!(shape.style, DrawStyle::Disc);
    }

    // Four throws: the arm runs straight across.
    let inst = place(SchematicKind::Switch, 6., 4.).build().unwrap();
    let shapes = SCHEMATICS.shape_of_node(&inst);
    assert_eq!(shapes.len(), 4);
    for (shape, expected) in shapes[1..].iter().zip([
        line((2., 0.), (-2., 0.)),
        disc(-2., -1.),
        disc(-2., 1.),
    ]) {
        for (&p, q) in shape.polygon.points().iter().zip(expected) {
            assert_point_eq(p, q);
        }
    }
}

#[test]
fn off_page_follows_export_direction() {
    let export = |c| Export::new(0, c);
    assert_eq!(OffPageStyle::classify(&[]), OffPageStyle::Plain);
    assert_eq!(
        OffPageStyle::classify(&[export(PortCharacteristic::Input)]),
        OffPageStyle::Input
    );
    assert_eq!(
        OffPageStyle::classify(&[export(PortCharacteristic::Output)]),
        OffPageStyle::Output
    );
    assert_eq!(
        OffPageStyle::classify(&[
            export(PortCharacteristic::Input),
            export(PortCharacteristic::Output)
        ]),
        OffPageStyle::Bidirectional
    );
    assert_eq!(
        OffPageStyle::classify(&[export(PortCharacteristic::Bidirectional)]),
        OffPageStyle::Bidirectional
    );
    assert_eq!(
        OffPageStyle::classify(&[export(PortCharacteristic::Power)]),
        OffPageStyle::Plain
    );

    let inst = place(SchematicKind::OffPage, 4., 2.)
        .exports(vec![export(PortCharacteristic::Output)])
        .build()
        .unwrap();
    let layers = SCHEMATICS.node_layers(&inst).unwrap();
    assert_eq!(&*layers, &symbols().off_page_output()[..]);
}

#[test]
fn blobs_mark_consecutive_connections() {
    let contiguous = place(SchematicKind::Resistor, 6., 1.)
        .connections(vec![wire(0, -2., 0.), wire(0, -2., 0.), wire(1, 2., 0.)])
        .build()
        .unwrap();
    assert_eq!(blob_ports(&contiguous), vec![0]);
    let layers = SCHEMATICS.node_layers(&contiguous).unwrap();
    assert_eq!(layers.len(), 2);
    let blob = layers.last().unwrap();
    assert_eq!(blob.layer(), SCHEMATICS.layers().arc);
    assert_eq!(blob.style(), DrawStyle::Disc);

    let split = place(SchematicKind::Resistor, 6., 1.)
        .connections(vec![wire(0, -2., 0.), wire(1, 2., 0.), wire(0, -2., 0.)])
        .build()
        .unwrap();
    assert!(blob_ports(&split).is_empty());
    assert_eq!(SCHEMATICS.node_layers(&split).unwrap().len(), 1);
}

#[test]
fn gates_never_get_blobs() {
    let inst = place(SchematicKind::And, 8., 6.)
        .connections(vec![wire(1, 4., 0.), wire(1, 4., 0.)])
        .build()
        .unwrap();
    let layers = SCHEMATICS.node_layers(&inst).unwrap();
    assert_eq!(layers, SCHEMATICS.variants().base(SchematicKind::And));
}

#[test]
fn negating_bubble_lies_outside_the_port() {
    let inst = place(SchematicKind::Buffer, 6., 6.)
        .connections(vec![wire(0, -3., 0.).negated()])
        .build()
        .unwrap();
    let shapes = SCHEMATICS.shape_of_node(&inst);
    let bubble = shapes.last().unwrap();
    assert_eq!(bubble.style, DrawStyle::Circle);
    assert_eq!(bubble.layer, SCHEMATICS.layers().node);
    assert_point_eq(bubble.polygon.points()[0], Point::new(-3.6, 0.));
    assert_point_eq(bubble.polygon.points()[1], Point::new(-3., 0.));
}

#[test]
fn negating_bubble_follows_rotation() {
    let inst = place(SchematicKind::Buffer, 6., 6.)
        .orientation(NamedOrientation::R90)
        .connections(vec![wire(0, 0., -3.).negated()])
        .build()
        .unwrap();
    let shapes = SCHEMATICS.shape_of_node(&inst);
    let bubble = shapes.last().unwrap();
    assert_eq!(bubble.style, DrawStyle::Circle);
    assert_point_eq(bubble.polygon.points()[0], Point::new(0., -3.6));
}

#[test]
fn negation_ignored_on_plain_port() {
    let plain = place(SchematicKind::Power, 3., 3.).build().unwrap();
    let negated = place(SchematicKind::Power, 3., 3.)
        .connections(vec![wire(0, 0., 0.).negated()])
        .build()
        .unwrap();
    assert_eq!(
        SCHEMATICS.shape_of_node(&negated),
        SCHEMATICS.shape_of_node(&plain)
    );
}

#[test]
fn bubble_size_is_configurable() {
    let tech = Schematics::with_config(SchematicsConfig {
        negating_bubble_size: 2.,
        ..Default::default()
    })
    .unwrap();
    let inst = Instance::builder()
        .prototype(tech.id(SchematicKind::Buffer))
        .width(6.)
        .height(6.)
        .connections(vec![wire(2, 3., 0.).negated()])
        .build()
        .unwrap();
    let shapes = tech.shape_of_node(&inst);
    assert_point_eq(shapes.last().unwrap().polygon.points()[0], Point::new(4., 0.));
}

#[test]
fn every_transistor_selector_resolves() {
    let variants = SCHEMATICS.variants();
    for kind in [SchematicKind::Transistor, SchematicKind::Transistor4] {
        let default = variants.resolve(kind, 0);
        for code in 0..32 {
            let layers = variants.resolve(kind, code);
            assert!(!layers.is_empty(), "{kind} selector {code}");
            if TransistorKind::decode(code).is_none() {
                assert_eq!(layers, default, "{kind} selector {code}");
            }
        }
    }
    assert_ne!(
        variants.resolve(SchematicKind::Transistor, TransistorKind::Pmos.encode()),
        variants.resolve(SchematicKind::Transistor, TransistorKind::Nmos.encode())
    );
}

#[test]
fn every_flip_flop_variant_is_distinct() {
    let variants = SCHEMATICS.variants();
    let mut seen: Vec<Arc<[TemplateLayer]>> = Vec::new();
    for kind in FlipFlopType::ALL {
        for clock in FlipFlopClock::ALL {
            let layers = variants.resolve(
                SchematicKind::FlipFlop,
                FlipFlopBits::new(kind, clock).encode(),
            );
            assert!(!seen.contains(&layers), "{kind:?} {clock:?}");
            seen.push(layers);
        }
    }
    let default = variants.resolve(SchematicKind::FlipFlop, 0);
    assert_eq!(variants.resolve(SchematicKind::FlipFlop, 0o14), default);
    assert_eq!(variants.resolve(SchematicKind::FlipFlop, 0o20), default);
}

#[test]
fn undeclared_selectors_fall_back() {
    let variants = SCHEMATICS.variants();
    assert_ne!(
        variants.resolve(SchematicKind::Diode, DiodeKind::Zener.encode()),
        variants.resolve(SchematicKind::Diode, 0)
    );
    assert_eq!(
        variants.resolve(SchematicKind::Diode, 5),
        variants.resolve(SchematicKind::Diode, 0)
    );
    assert_eq!(
        variants.resolve(SchematicKind::TwoPort, 99),
        variants.base(SchematicKind::TwoPort)
    );
    assert_eq!(
        variants.resolve(SchematicKind::Inductor, 7),
        variants.base(SchematicKind::Inductor)
    );
}

#[test]
fn selector_bits_round_trip() {
    for kind in FlipFlopType::ALL {
        for clock in FlipFlopClock::ALL {
            let bits = FlipFlopBits::new(kind, clock);
            assert_eq!(FlipFlopBits::decode(bits.encode()), Some(bits));
        }
    }
    assert_eq!(FlipFlopBits::decode(0o14), None);
    assert_eq!(FlipFlopBits::decode(0o40), None);
    for &kind in TransistorKind::ALL {
        assert_eq!(TransistorKind::decode(kind.encode()), Some(kind));
    }
    assert_eq!(TwoPortKind::decode(TwoPortKind::ALL.len() as u32), None);
}

#[test]
fn selector_picks_function() {
    use PrimitiveFunction::*;
    assert_eq!(primitive_function(SchematicKind::Transistor, 2), TransistorPmos);
    assert_eq!(primitive_function(SchematicKind::Transistor4, 3), Transistor4Npn);
    assert_eq!(primitive_function(SchematicKind::Transistor, 31), TransistorNmos);
    assert_eq!(primitive_function(SchematicKind::FlipFlop, 0o6), FlipFlopDP);
    assert_eq!(primitive_function(SchematicKind::FlipFlop, 0o14), FlipFlopRsMs);
    assert_eq!(primitive_function(SchematicKind::Diode, 1), ZenerDiode);
    assert_eq!(primitive_function(SchematicKind::Resistor, 9), Resistor);
    assert_eq!(primitive_function(SchematicKind::TwoPort, 99), TransmissionLine);
    assert_eq!(primitive_function(SchematicKind::Ground, 4), ConGround);

    assert_eq!(function_bits(TransistorPmos), 2);
    assert_eq!(function_bits(Transistor4Pmos), 2);
    assert_eq!(function_bits(FlipFlopDP), 0o6);
    assert_eq!(function_bits(ElectrolyticCapacitor), 1);
    assert_eq!(function_bits(Resistor), 0);

    let inst = place(SchematicKind::Transistor, 4., 4.)
        .selector(TransistorKind::Pjfet.encode())
        .build()
        .unwrap();
    assert_eq!(SCHEMATICS.primitive_function(&inst), Some(TransistorPjfet));
}

#[test]
fn old_port_names_convert() {
    let convert = |kind, name| SCHEMATICS.convert_old_port_name(kind, name);
    assert_eq!(convert(SchematicKind::Source, "top"), Some(0));
    assert_eq!(convert(SchematicKind::Meter, "bottom"), Some(1));
    assert_eq!(convert(SchematicKind::TwoPort, "lowerright"), Some(3));
    assert_eq!(convert(SchematicKind::Power, "pwr"), Some(0));
    assert_eq!(convert(SchematicKind::Resistor, "top"), None);
    assert_eq!(convert(SchematicKind::Source, "left-bot"), None);
}

#[test]
fn config_from_toml() {
    let config = SchematicsConfig::from_toml_str(
        r#"
        negating_bubble_size = 2.0
        size_convention = "excludes_offset"

        [vhdl_names]
        And = "and2/nand2"
        "#,
    )
    .unwrap();
    assert_eq!(config.negating_bubble_size, 2.);
    assert_eq!(config.size_convention, SizeConvention::ExcludesOffset);
    assert!(!config.hierarchical_bus_pins);

    let tech = Schematics::with_config(config).unwrap();
    assert_eq!(tech.vhdl_names(SchematicKind::And), Some("and2/nand2"));
    assert_eq!(tech.vhdl_names(SchematicKind::Or), None);

    let default = SchematicsConfig::from_toml_str("").unwrap();
    assert_eq!(default, SchematicsConfig::default());
    assert_eq!(SCHEMATICS.vhdl_names(SchematicKind::Xor), Some("xor/xnor"));
    assert_eq!(SCHEMATICS.vhdl_names(SchematicKind::Diode), None);
}

#[test]
fn config_rejects_bad_values() {
    assert!(matches!(
        SchematicsConfig::from_toml_str("negating_bubble_size = -1.0"),
        Err(ConfigError::BubbleSize(_))
    ));
    assert!(matches!(
        SchematicsConfig::from_toml_str("negating_bubble_size = \"big\""),
        Err(ConfigError::Parse(_))
    ));
    let bad = SchematicsConfig {
        negating_bubble_size: 0.,
        ..Default::default()
    };
    assert!(matches!(
        Schematics::with_config(bad),
        Err(Error::Config(ConfigError::BubbleSize(_)))
    ));
}

#[test]
fn hierarchical_bus_pins_is_accepted() {
    let tech = Schematics::with_config(SchematicsConfig {
        hierarchical_bus_pins: true,
        ..Default::default()
    })
    .unwrap();
    assert!(tech.config().hierarchical_bus_pins);
}

#[test]
fn port_search_picks_nearest_free_candidate() {
    let inst = place(SchematicKind::And, 8., 6.).build().unwrap();
    let shape = SCHEMATICS
        .shape_of_port(&inst, 0, Some(Point::new(-10., 1.5)))
        .unwrap();
    assert_eq!(shape.style, DrawStyle::Filled);
    assert_eq!(shape.polygon.points().len(), 1);
    assert_point_eq(shape.polygon.points()[0], Point::new(-4., 2.));
    assert!(shape.issues.is_empty());

    let taken = place(SchematicKind::And, 8., 6.)
        .connections(vec![wire(0, -4., 2.)])
        .build()
        .unwrap();
    let first = SCHEMATICS
        .shape_of_port(&taken, 0, Some(Point::new(-10., 1.5)))
        .unwrap();
    assert_point_eq(first.polygon.points()[0], Point::new(-4., 0.));
    for c in taken.connections() {
        assert!(c.location.manhattan_distance(first.polygon.points()[0]) > 1e-9);
    }

    let second = SCHEMATICS
        .shape_of_port(&taken, 0, Some(Point::new(-10., 1.5)))
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn port_search_scales_with_the_gate() {
    let inst = place(SchematicKind::And, 16., 12.)
        .connections(vec![wire(0, -8., 4.)])
        .build()
        .unwrap();
    let shape = SCHEMATICS
        .shape_of_port(&inst, 0, Some(Point::new(-10., 3.5)))
        .unwrap();
    let found = shape.polygon.points()[0];
    assert_point_eq(found, Point::new(-8., 0.));
    for c in inst.connections() {
        assert!(c.location.manhattan_distance(found) > 1e-9);
    }
    assert!(shape.issues.is_empty());

    let below = SCHEMATICS
        .shape_of_port(&inst, 0, Some(Point::new(-9., -5.)))
        .unwrap();
    assert_point_eq(below.polygon.points()[0], Point::new(-8., -4.));
}

#[test]
fn port_search_on_mux_and_or() {
    let mux = place(SchematicKind::Mux, 8., 10.).build().unwrap();
    let shape = SCHEMATICS
        .shape_of_port(&mux, 0, Some(Point::new(-5., 0.)))
        .unwrap();
    assert_point_eq(shape.polygon.points()[0], Point::new(-3.2, 0.));

    let or = place(SchematicKind::Or, 10., 6.).build().unwrap();
    let shape = SCHEMATICS
        .shape_of_port(&or, 0, Some(Point::new(-5., 0.)))
        .unwrap();
    assert_point_eq(shape.polygon.points()[0], Point::new(-3.25, 0.));
}

#[test]
fn port_search_exhaustion_is_reported() {
    let inst = place(SchematicKind::And, 8., 6.)
        .connections(vec![wire(1, -4., 0.), wire(1, -4., -2.), wire(1, -4., 2.)])
        .build()
        .unwrap();
    let shape = SCHEMATICS
        .shape_of_port(&inst, 0, Some(Point::new(-4., 2.)))
        .unwrap();
    assert_point_eq(shape.polygon.points()[0], Point::new(-4., 0.));
    assert_eq!(shape.issues.len(), 1);
    assert!(shape.issues.has_warning());
}

#[test]
fn port_without_select_is_an_area() {
    let inst = place(SchematicKind::Resistor, 6., 1.).build().unwrap();
    let shape = SCHEMATICS.shape_of_port(&inst, 0, None).unwrap();
    assert_point_eq(shape.polygon.center().unwrap(), Point::new(-2., 0.));

    // Point ports ignore the selection.
    let with_select = SCHEMATICS
        .shape_of_port(&inst, 0, Some(Point::new(5., 5.)))
        .unwrap();
    assert_eq!(shape, with_select);
}

#[test]
fn port_area_follows_orientation() {
    let inst = place(SchematicKind::Resistor, 6., 1.)
        .anchor(Point::new(10., 10.))
        .orientation(NamedOrientation::R90)
        .build()
        .unwrap();
    let a = SCHEMATICS.shape_of_port(&inst, 0, None).unwrap();
    let b = SCHEMATICS.shape_of_port(&inst, 1, None).unwrap();
    assert_point_eq(a.polygon.center().unwrap(), Point::new(10., 8.));
    assert_point_eq(b.polygon.center().unwrap(), Point::new(10., 12.));

    let or = place(SchematicKind::Or, 10., 6.)
        .orientation(NamedOrientation::R180)
        .build()
        .unwrap();
    let shape = SCHEMATICS
        .shape_of_port(&or, 0, Some(Point::new(5., 0.)))
        .unwrap();
    assert_point_eq(shape.polygon.points()[0], Point::new(3.25, 0.));
}

#[test]
fn missing_port_has_no_shape() {
    let inst = place(SchematicKind::And, 8., 6.).build().unwrap();
    assert!(SCHEMATICS.shape_of_port(&inst, 9, None).is_none());
    assert!(SCHEMATICS
        .shape_of_port(&inst, 9, Some(Point::new(0., 0.)))
        .is_none());
}

#[test]
fn size_conventions_agree() {
    let excl = Schematics::with_config(SchematicsConfig {
        size_convention: SizeConvention::ExcludesOffset,
        ..Default::default()
    })
    .unwrap();
    let build = |tech: &Schematics, kind, width, height| {
        Instance::builder()
            .prototype(tech.id(kind))
            .anchor(Point::new(20., -10.))
            .orientation(NamedOrientation::R90)
            .width(width)
            .height(height)
            .build()
            .unwrap()
    };

    for (kind, full, inner) in [
        (SchematicKind::Resistor, (6., 1.), (4., 1.)),
        (SchematicKind::Switch, (6., 6.), (5., 5.)),
        (SchematicKind::Or, (20., 12.), (18.5, 12.)),
    ] {
        let a = build(&SCHEMATICS, kind, full.0, full.1);
        let b = build(&excl, kind, inner.0, inner.1);
        assert_shapes_eq(&excl.shape_of_node(&b), &SCHEMATICS.shape_of_node(&a));
        let (pa, pb) = (
            SCHEMATICS.shape_of_port(&a, 0, None).unwrap(),
            excl.shape_of_port(&b, 0, None).unwrap(),
        );
        for (&p, &q) in pb.polygon.points().iter().zip(pa.polygon.points()) {
            assert_point_eq(p, q);
        }
    }
}

#[test]
fn shapes_render_from_many_threads() {
    let inst = place(SchematicKind::TwoPort, 10., 6.)
        .selector(TwoPortKind::Vcvs.encode())
        .connections(vec![wire(0, -5., 2.), wire(0, -5., 2.)])
        .build()
        .unwrap();
    let expected = SCHEMATICS.shape_of_node(&inst);
    assert!(!expected.is_empty());
    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| SCHEMATICS.shape_of_node(&inst)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
