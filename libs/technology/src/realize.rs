//! Evaluation of template layers into absolute polygons.

use arcstr::ArcStr;
use geometry::prelude::*;
use serde::{Deserialize, Serialize};

use crate::edge::AxisSpan;
use crate::instance::Instance;
use crate::layer::LayerId;
use crate::port::PortTemplate;
use crate::template::{DrawStyle, Representation, TemplateLayer, TemplatePoint};

/// A receiver of evaluated geometry.
///
/// Each polygon is delivered as a run of [`PolygonSink::push_point`] calls
/// followed by one [`PolygonSink::push_poly`] call that closes it. Later
/// polygons draw on top of earlier ones.
pub trait PolygonSink {
    /// Appends a vertex to the polygon under construction.
    fn push_point(&mut self, p: Point);

    /// Completes the polygon under construction.
    fn push_poly(&mut self, style: DrawStyle, layer: LayerId, text: Option<&ArcStr>);
}

/// An evaluated polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    /// The layer drawn on.
    pub layer: LayerId,
    /// How the points are drawn.
    pub style: DrawStyle,
    /// The points, in absolute coordinates.
    pub polygon: Polygon,
    /// The text drawn by text styles.
    pub text: Option<ArcStr>,
}

/// A [`PolygonSink`] that collects [`Shape`]s.
#[derive(Debug, Default, Clone)]
pub struct ShapeCollector {
    pending: Vec<Point>,
    shapes: Vec<Shape>,
}

impl ShapeCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shapes completed so far.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Consumes the collector, returning the completed shapes.
    pub fn into_shapes(self) -> Vec<Shape> {
        self.shapes
    }
}

impl PolygonSink for ShapeCollector {
    fn push_point(&mut self, p: Point) {
        self.pending.push(p);
    }

    fn push_poly(&mut self, style: DrawStyle, layer: LayerId, text: Option<&ArcStr>) {
        let points = std::mem::take(&mut self.pending);
        self.shapes.push(Shape {
            layer,
            style,
            polygon: Polygon::from_verts(points),
            text: text.cloned(),
        });
    }
}

/// The placement that template points are evaluated against.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    width: f64,
    height: f64,
    transform: Transformation,
}

impl Frame {
    /// Creates a frame of the given size, oriented about `anchor`.
    pub fn new(anchor: Point, width: f64, height: f64, orientation: Orientation) -> Self {
        Self {
            width,
            height,
            transform: Transformation::from_offset_and_orientation(anchor, orientation),
        }
    }

    /// The frame of an instance at its reported size.
    pub fn from_instance(instance: &Instance) -> Self {
        Self::new(
            instance.anchor(),
            instance.width(),
            instance.height(),
            instance.orientation(),
        )
    }

    /// The frame width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The frame height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The transformation from anchor-relative to absolute coordinates.
    #[inline]
    pub fn transformation(&self) -> Transformation {
        self.transform
    }

    /// Evaluates a template point relative to the anchor, before orientation.
    pub fn local(&self, p: &TemplatePoint) -> Point {
        Point::new(
            p.x.evaluate_in(AxisSpan::centered(0., self.width)),
            p.y.evaluate_in(AxisSpan::centered(0., self.height)),
        )
    }

    /// Maps an anchor-relative point to absolute coordinates.
    pub fn to_absolute(&self, local: Point) -> Point {
        local.transform(self.transform)
    }

    /// Evaluates a template point in absolute coordinates.
    pub fn evaluate(&self, p: &TemplatePoint) -> Point {
        self.to_absolute(self.local(p))
    }

    /// Evaluates a box between two template points, returning its four corners in absolute
    /// coordinates.
    pub fn evaluate_box(&self, low: &TemplatePoint, high: &TemplatePoint) -> Polygon {
        let rect = Rect::from_corners(self.local(low), self.local(high));
        Polygon::from(rect).transform(self.transform)
    }
}

/// Evaluates `layers` against `frame`, delivering each polygon to `sink` in order.
pub fn realize_into<S: PolygonSink + ?Sized>(layers: &[TemplateLayer], frame: &Frame, sink: &mut S) {
    for layer in layers {
        let points = layer.template_points();
        match layer.representation() {
            Representation::Box if points.len() >= 2 => {
                for p in frame.evaluate_box(&points[0], &points[1]).into_points() {
                    sink.push_point(p);
                }
            }
            _ => {
                for p in points {
                    sink.push_point(frame.evaluate(p));
                }
            }
        }
        let text = if layer.style().is_text() {
            layer.message()
        } else {
            None
        };
        sink.push_poly(layer.style(), layer.layer(), text);
    }
    tracing::trace!(layers = layers.len(), "realized template layers");
}

/// Evaluates `layers` against `frame` into a fresh list of shapes.
pub fn realize(layers: &[TemplateLayer], frame: &Frame) -> Vec<Shape> {
    let mut collector = ShapeCollector::new();
    realize_into(layers, frame, &mut collector);
    collector.into_shapes()
}

/// The evaluated area of a port.
#[derive(Debug, Clone, PartialEq)]
pub struct PortArea {
    /// The corners of the port area, or a single point.
    pub polygon: Polygon,
    /// How the area is drawn.
    pub style: DrawStyle,
}

impl PortArea {
    /// The center of the port area.
    pub fn center(&self) -> Point {
        self.polygon.center().unwrap_or_default()
    }
}

/// Evaluates a port's area with its offsets multiplied by `lambda`.
pub fn port_area(port: &PortTemplate, frame: &Frame, lambda: f64) -> PortArea {
    let (low, high) = if lambda == 1. {
        (port.low(), port.high())
    } else {
        (port.low().scale_offsets(lambda), port.high().scale_offsets(lambda))
    };
    PortArea {
        polygon: frame.evaluate_box(&low, &high),
        style: DrawStyle::Filled,
    }
}
