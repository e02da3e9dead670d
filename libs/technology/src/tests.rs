use std::fmt::Display;

use approx::assert_relative_eq;
use arcstr::ArcStr;
use geometry::prelude::*;
use test_log::test;

use crate::diagnostics::{Diagnostic, IssueSet, Severity};
use crate::drc::{SpacingMatrix, SpacingRule};
use crate::edge::{AxisSpan, EdgeAxis, EdgeDescriptor};
use crate::error::BuildError;
use crate::function::PrimitiveFunction;
use crate::instance::{Connection, Instance};
use crate::interchange::{InterchangeFormat, InterchangeTable};
use crate::layer::{ArcFunction, ArcProto, Layer, LayerFunction, LayerId};
use crate::port::{PortCharacteristic, PortTemplate};
use crate::prototype::{PrimitivePrototype, PrototypeId, SizeOffset};
use crate::realize::{port_area, realize, realize_into, Frame, PolygonSink, ShapeCollector};
use crate::template::{fixup, full_box, DrawStyle, SizeCorrection, TemplateLayer, TemplatePoint};
use crate::{SizeConvention, Technology, TechnologyBuilder};

fn edge_samples() -> Vec<EdgeDescriptor> {
    vec![
        EdgeDescriptor::center(),
        EdgeDescriptor::left_edge(),
        EdgeDescriptor::from_right(0.75),
        EdgeDescriptor::from_top(2.),
        EdgeDescriptor::from_bottom(0.25),
        EdgeDescriptor::from_center(-3.),
        EdgeDescriptor::scaled(-0.3),
        EdgeDescriptor::new(EdgeAxis::Center, 0.4166, 1.5),
    ]
}

/// A two-prototype technology: a boxed symbol with a border, and a pin.
fn test_builder(convention: SizeConvention) -> TechnologyBuilder<&'static str> {
    let mut b = Technology::builder("test");
    b.size_convention(convention);
    let art = b.add_layer(Layer::new("art", LayerFunction::Art));
    let metal = b.add_layer(Layer::new("metal", LayerFunction::Metal(1)));
    let wire = b.add_arc(ArcProto::new("wire", ArcFunction::Wire, 0., metal));
    let l = EdgeDescriptor::left_edge();
    let r = EdgeDescriptor::right_edge();
    let bot = EdgeDescriptor::bottom_edge();
    let top = EdgeDescriptor::top_edge();
    b.add_prototype(
        PrimitivePrototype::new("Body", "body", 6., 4., PrimitiveFunction::Unknown)
            .with_size_offset(SizeOffset::new(1., 1., 0., 1.))
            .with_layers(vec![
                TemplateLayer::points(
                    art,
                    DrawStyle::Closed,
                    [
                        TemplatePoint::new(EdgeDescriptor::from_left(1.), bot),
                        TemplatePoint::new(EdgeDescriptor::from_right(1.), bot),
                        TemplatePoint::new(EdgeDescriptor::center(), EdgeDescriptor::from_top(1.)),
                    ],
                ),
                TemplateLayer::boxed(art, DrawStyle::TextBox, full_box()).with_message("B"),
            ])
            .with_ports(vec![
                PortTemplate::new(
                    "a",
                    vec![wire],
                    180.,
                    0.,
                    0,
                    PortCharacteristic::Input,
                    TemplatePoint::new(l, bot),
                    TemplatePoint::new(l, top),
                )
                .isolated(),
                PortTemplate::new(
                    "y",
                    vec![wire],
                    0.,
                    0.,
                    1,
                    PortCharacteristic::Output,
                    TemplatePoint::new(r, EdgeDescriptor::center()),
                    TemplatePoint::new(r, EdgeDescriptor::center()),
                ),
            ]),
    );
    b.add_prototype(
        PrimitivePrototype::new("Pin", "pin", 1., 1., PrimitiveFunction::Pin).with_layers(vec![
            TemplateLayer::points(
                metal,
                DrawStyle::Disc,
                [
                    TemplatePoint::center(),
                    TemplatePoint::new(r, EdgeDescriptor::center()),
                ],
            ),
        ]),
    );
    b
}

#[test]
fn edge_evaluation_is_linear_in_extent() {
    let reference = 3.25;
    for d in edge_samples() {
        for (e1, e2) in [(1., 2.), (4., 10.), (0.5, 0.75)] {
            let diff = d.evaluate(e2, reference) - d.evaluate(e1, reference);
            assert_relative_eq!(diff, d.multiplier() * (e2 - e1), epsilon = 1e-12);
        }
    }
}

#[test]
fn edge_references_follow_axis() {
    let span = AxisSpan::new(-2., 6.);
    assert_eq!(EdgeDescriptor::left_edge().evaluate_in(span), -2.);
    assert_eq!(EdgeDescriptor::right_edge().evaluate_in(span), 6.);
    assert_eq!(EdgeDescriptor::center().evaluate_in(span), 2.);
    assert_eq!(EdgeDescriptor::from_top(1.5).evaluate_in(span), 4.5);
    assert_eq!(EdgeDescriptor::scaled(0.25).evaluate_in(span), 4.);
    assert_eq!(EdgeDescriptor::scaled(-0.5).evaluate_in(span), -2.);
}

#[test]
fn center_form_matches_anchored_form() {
    let span = AxisSpan::centered(0., 7.);
    for d in edge_samples() {
        let center_form = EdgeDescriptor::new(EdgeAxis::Center, d.center_multiplier(), d.offset());
        assert_relative_eq!(center_form.evaluate_in(span), d.evaluate_in(span));
    }
}

#[test]
fn fixup_twice_shifts_twice() {
    let layer = TemplateLayer::boxed(LayerId(0), DrawStyle::Closed, full_box());
    let c = SizeCorrection::new(0.5, 0.25);
    let once = fixup(&layer, c);
    let twice = fixup(&once, c);
    assert_ne!(twice, once);
    assert_ne!(once, layer);

    let zero = SizeCorrection::default();
    assert_eq!(fixup(&layer, zero), layer);
}

#[test]
fn fixup_leaves_input_untouched() {
    let layer = TemplateLayer::boxed(LayerId(0), DrawStyle::Closed, full_box());
    let copy = layer.clone();
    let fixed = fixup(&layer, SizeCorrection::new(1., 1.));
    assert_eq!(layer, copy);
    assert_eq!(fixed.template_points()[0].x.offset(), -1.);
    assert_eq!(fixed.template_points()[1].y.offset(), 1.);
}

#[test]
fn excluding_offset_matches_including_offset() {
    let incl = test_builder(SizeConvention::IncludesOffset).build().unwrap();
    let excl = test_builder(SizeConvention::ExcludesOffset).build().unwrap();
    let body = incl.prototype_by_name("body").unwrap();

    let full = Instance::builder()
        .prototype(body)
        .anchor(Point::new(10., 5.))
        .width(6.)
        .height(4.)
        .orientation(NamedOrientation::R90)
        .build()
        .unwrap();
    let inner = Instance::builder()
        .prototype(body)
        .anchor(Point::new(10., 5.))
        .width(4.)
        .height(3.)
        .orientation(NamedOrientation::R90)
        .build()
        .unwrap();

    assert_eq!(excl.full_extent(&inner), (6., 4.));
    assert_eq!(incl.full_extent(&full), (6., 4.));

    let a = realize(incl.prototype(body).unwrap().layers(), &Frame::from_instance(&full));
    let b = realize(excl.prototype(body).unwrap().layers(), &Frame::from_instance(&inner));
    assert_eq!(a.len(), b.len());
    for (sa, sb) in a.iter().zip(b.iter()) {
        for (pa, pb) in sa.polygon.points().iter().zip(sb.polygon.points()) {
            assert_relative_eq!(*pa, *pb, epsilon = 1e-12);
        }
    }

    let port_a = port_area(&incl.prototype(body).unwrap().ports()[0], &Frame::from_instance(&full), 1.);
    let port_b = port_area(&excl.prototype(body).unwrap().ports()[0], &Frame::from_instance(&inner), 1.);
    assert_eq!(port_a, port_b);
}

#[test]
fn adopt_applies_only_when_excluding_offset() {
    let incl = test_builder(SizeConvention::IncludesOffset).build().unwrap();
    let excl = test_builder(SizeConvention::ExcludesOffset).build().unwrap();
    let body = incl.prototype_by_name("Body").unwrap();
    let art = incl.layer_by_name("art").unwrap();
    let fresh = vec![TemplateLayer::boxed(art, DrawStyle::Closed, full_box())];
    assert_eq!(incl.adopt(body, fresh.clone()), fresh);
    assert_ne!(excl.adopt(body, fresh.clone()), fresh);
    assert_eq!(
        excl.adopt(body, fresh.clone()),
        vec![fixup(&fresh[0], SizeOffset::new(1., 1., 0., 1.).correction())]
    );
}

#[test]
fn realize_orients_about_anchor() {
    let tech = test_builder(SizeConvention::IncludesOffset).build().unwrap();
    let body = tech.prototype_by_name("BODY").unwrap();
    let inst = Instance::builder()
        .prototype(body)
        .anchor(Point::new(100., 50.))
        .width(6.)
        .height(4.)
        .orientation(NamedOrientation::R90)
        .build()
        .unwrap();
    let shapes = realize(tech.prototype(body).unwrap().layers(), &Frame::from_instance(&inst));
    assert_eq!(shapes.len(), 2);

    // Local (-2, -2) rotated a quarter turn lands at (2, -2).
    assert_eq!(shapes[0].polygon.points()[0], Point::new(102., 48.));
    assert_eq!(shapes[0].style, DrawStyle::Closed);
    assert_eq!(shapes[0].text, None);

    let text = &shapes[1];
    assert_eq!(text.text.as_deref(), Some("B"));
    assert_eq!(text.polygon.points().len(), 4);
    assert_eq!(
        text.polygon.bbox(),
        Some(Rect::from_sides(98., 47., 102., 53.))
    );
}

#[test]
fn sinks_receive_points_before_polygons() {
    #[derive(Default)]
    struct Log(Vec<String>);
    impl PolygonSink for Log {
        fn push_point(&mut self, p: Point) {
            self.0.push(format!("pt {} {}", p.x, p.y));
        }
        fn push_poly(&mut self, style: DrawStyle, _layer: LayerId, text: Option<&ArcStr>) {
            self.0.push(format!("poly {style:?} {text:?}"));
        }
    }

    let tech = test_builder(SizeConvention::IncludesOffset).build().unwrap();
    let pin = tech.prototype_by_name("pin").unwrap();
    let frame = Frame::new(Point::new(1., 1.), 2., 2., Orientation::default());
    let mut log = Log::default();
    realize_into(tech.prototype(pin).unwrap().layers(), &frame, &mut log);
    assert_eq!(log.0, vec!["pt 1 1", "pt 2 1", "poly Disc None"]);

    let mut collector = ShapeCollector::new();
    realize_into(tech.prototype(pin).unwrap().layers(), &frame, &mut collector);
    assert_eq!(collector.shapes().len(), 1);
}

#[test]
fn port_area_scales_offsets() {
    let port = PortTemplate::new(
        "p",
        vec![],
        0.,
        180.,
        0,
        PortCharacteristic::Unknown,
        TemplatePoint::new(EdgeDescriptor::from_center(-4.), EdgeDescriptor::bottom_edge()),
        TemplatePoint::new(EdgeDescriptor::from_center(-4.), EdgeDescriptor::top_edge()),
    );
    let frame = Frame::new(Point::zero(), 16., 12., Orientation::default());
    let nominal = port_area(&port, &frame, 1.);
    let doubled = port_area(&port, &frame, 2.);
    assert_eq!(nominal.polygon.bbox(), Some(Rect::from_sides(-4., -6., -4., 6.)));
    assert_eq!(doubled.polygon.bbox(), Some(Rect::from_sides(-8., -6., -8., 6.)));
    assert_eq!(doubled.center(), Point::new(-8., 0.));
}

#[test]
fn builder_rejects_duplicate_names_ignoring_case() {
    let mut b = test_builder(SizeConvention::IncludesOffset);
    b.add_prototype(PrimitivePrototype::new(
        "PIN",
        "pin2",
        1.,
        1.,
        PrimitiveFunction::Pin,
    ));
    assert_eq!(
        b.build().unwrap_err(),
        BuildError::DuplicatePrototype(ArcStr::from("PIN"))
    );
}

#[test]
fn builder_rejects_unknown_layers() {
    let mut b: TechnologyBuilder<()> = Technology::builder("bad");
    let l = b.add_layer(Layer::new("only", LayerFunction::Art));
    let other = LayerId(l.index() + 5);
    b.add_prototype(
        PrimitivePrototype::new("X", (), 1., 1., PrimitiveFunction::Unknown).with_layers(vec![
            TemplateLayer::boxed(other, DrawStyle::Filled, full_box()),
        ]),
    );
    assert!(matches!(
        b.build(),
        Err(BuildError::UnknownLayer { layer: 5, .. })
    ));
}

#[test]
fn lookups_by_name() {
    let tech = test_builder(SizeConvention::IncludesOffset).build().unwrap();
    assert_eq!(tech.prototype_by_name("bOdY"), Some(PrototypeId(0)));
    assert_eq!(tech.prototype_by_name("missing"), None);
    assert!(tech.arc_by_name("wire").is_some());
    let body = tech.prototype(PrototypeId(0)).unwrap();
    assert_eq!(body.port_by_name("y").map(|(i, _)| i), Some(1));
    assert!(body.port(7).is_none());
    assert!(tech.spacing().rule(LayerId(0), LayerId(1)).is_some());
    assert_eq!(tech.spacing().spacing(LayerId(0), LayerId(1), false), None);
}

#[test]
fn instances_report_connections_by_port() {
    let inst = Instance::builder()
        .prototype(PrototypeId(0))
        .width(1.)
        .height(1.)
        .connections(vec![
            Connection::new(0, crate::layer::ArcId(0), Point::new(1., 0.)),
            Connection::new(0, crate::layer::ArcId(0), Point::new(2., 0.)).negated(),
            Connection::new(1, crate::layer::ArcId(0), Point::new(3., 0.)),
        ])
        .build()
        .unwrap();
    assert_eq!(inst.connections_on(0).count(), 2);
    assert_eq!(inst.connections_on(1).count(), 1);
    assert!(inst.connections()[1].negated);
    assert!(!inst.has_exports());
    assert_eq!(inst.selector(), 0);
}

#[test]
fn spacing_matrix_is_symmetric_upper_triangle() {
    let n = 4;
    let mut m = SpacingMatrix::new(n);
    let mut seen = std::collections::HashSet::new();
    for i in 0..n {
        for j in i..n {
            let idx = m.index(LayerId(i), LayerId(j)).unwrap();
            assert_eq!(idx, i * n - i * i.saturating_sub(1) / 2 + (j - i));
            assert!(seen.insert(idx));
            assert_eq!(m.index(LayerId(j), LayerId(i)), Some(idx));
        }
    }
    assert_eq!(seen.len(), n * (n + 1) / 2);
    assert_eq!(m.index(LayerId(0), LayerId(n)), None);

    m.set(
        LayerId(3),
        LayerId(1),
        SpacingRule {
            connected: Some(-1.),
            unconnected: Some(3.),
            name: Some(ArcStr::from("M1.S.1")),
        },
    );
    assert_eq!(m.spacing(LayerId(1), LayerId(3), false), Some(3.));
    assert_eq!(m.spacing(LayerId(3), LayerId(1), true), None);
    assert_eq!(
        m.rule(LayerId(1), LayerId(3)).and_then(|r| r.name.clone()),
        Some(ArcStr::from("M1.S.1"))
    );
}

#[test]
fn interchange_lookup() {
    let mut t = InterchangeTable::new();
    t.insert(InterchangeFormat::Gds, "mosis", LayerId(2), "49");
    assert_eq!(t.get(InterchangeFormat::Gds, "mosis", LayerId(2)), Some("49"));
    assert_eq!(t.get(InterchangeFormat::Cif, "mosis", LayerId(2)), None);
    assert_eq!(t.get(InterchangeFormat::Gds, "other", LayerId(2)), None);
}

#[derive(Debug)]
struct Note(Severity);

impl Display for Note {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "note at {}", self.0)
    }
}

impl Diagnostic for Note {
    fn severity(&self) -> Severity {
        self.0
    }
}

#[test]
fn issue_sets_count_by_severity() {
    let mut issues = IssueSet::new();
    issues.emit(Note(Severity::Warning));
    issues.add(Note(Severity::Error));
    issues.add(Note(Severity::Info));
    assert_eq!(issues.len(), 3);
    assert_eq!(issues.num_warnings(), 1);
    assert_eq!(issues.num_errors(), 1);
    assert_eq!(issues.count(Severity::Info), 1);
    assert!(issues.has_error());
    assert!(format!("{issues}").contains("note at error"));
}

#[test]
fn technologies_are_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Technology<&'static str>>();
    assert_send_sync::<Instance>();
}
