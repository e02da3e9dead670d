//! Declarative, size-independent shape templates.

use arcstr::ArcStr;
use serde::{Deserialize, Serialize};

use crate::edge::EdgeDescriptor;
use crate::layer::LayerId;
use crate::prototype::SizeOffset;

/// How a list of points should be drawn.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum DrawStyle {
    /// A filled polygon.
    Filled,
    /// A closed, unfilled outline.
    Closed,
    /// An open polyline.
    Opened,
    /// An open, dotted polyline.
    OpenedDotted,
    /// Independent line segments, one per pair of points.
    Vectors,
    /// An unfilled circle. The first point is the center and the second lies on the rim.
    Circle,
    /// An arc of a circle. The points are the center, the start and the end.
    CircleArc,
    /// A filled circle. The first point is the center and the second lies on the rim.
    Disc,
    /// Text centered on its points.
    TextCenter,
    /// Text fit within the box of its points.
    TextBox,
}

impl DrawStyle {
    /// Whether the style draws a text message.
    pub fn is_text(&self) -> bool {
        matches!(self, DrawStyle::TextCenter | DrawStyle::TextBox)
    }
}

/// How the points of a [`TemplateLayer`] are interpreted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Representation {
    /// Every point is a vertex.
    Points,
    /// The two points are opposite corners of a box.
    Box,
}

/// One size-independent vertex.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplatePoint {
    /// The horizontal coordinate.
    pub x: EdgeDescriptor,
    /// The vertical coordinate.
    pub y: EdgeDescriptor,
}

impl TemplatePoint {
    /// Creates a new template point.
    pub const fn new(x: EdgeDescriptor, y: EdgeDescriptor) -> Self {
        Self { x, y }
    }

    /// The midpoint of the bounding box.
    pub const fn center() -> Self {
        Self::new(EdgeDescriptor::center(), EdgeDescriptor::center())
    }

    /// Returns this point with both offsets multiplied by `lambda`.
    pub fn scale_offsets(&self, lambda: f64) -> Self {
        Self::new(self.x.scale_offset(lambda), self.y.scale_offset(lambda))
    }

    pub(crate) fn fixup(&self, correction: SizeCorrection) -> Self {
        let shift =
            |e: EdgeDescriptor, c: f64| e.with_offset(e.offset() + 2. * e.center_multiplier() * c);
        Self::new(shift(self.x, correction.x), shift(self.y, correction.y))
    }
}

/// The box spanning the whole instance.
pub fn full_box() -> [TemplatePoint; 2] {
    [
        TemplatePoint::new(EdgeDescriptor::left_edge(), EdgeDescriptor::bottom_edge()),
        TemplatePoint::new(EdgeDescriptor::right_edge(), EdgeDescriptor::top_edge()),
    ]
}

/// The zero-area box at the instance center.
pub fn center_box() -> [TemplatePoint; 2] {
    [TemplatePoint::center(), TemplatePoint::center()]
}

/// A declarative shape: a layer, a draw style and a list of template points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateLayer {
    layer: LayerId,
    style: DrawStyle,
    representation: Representation,
    connection: i32,
    points: Vec<TemplatePoint>,
    message: Option<ArcStr>,
}

impl TemplateLayer {
    /// Creates a template whose points are its vertices.
    pub fn points(layer: LayerId, style: DrawStyle, points: impl Into<Vec<TemplatePoint>>) -> Self {
        Self {
            layer,
            style,
            representation: Representation::Points,
            connection: 0,
            points: points.into(),
            message: None,
        }
    }

    /// Creates a template whose two points are opposite corners of a box.
    pub fn boxed(layer: LayerId, style: DrawStyle, corners: [TemplatePoint; 2]) -> Self {
        Self {
            representation: Representation::Box,
            ..Self::points(layer, style, corners)
        }
    }

    /// Sets the connection tag.
    ///
    /// Non-negative tags mark electrical geometry; negative tags mark pseudo geometry.
    pub fn with_connection(mut self, connection: i32) -> Self {
        self.connection = connection;
        self
    }

    /// Attaches a text message, drawn by text styles.
    pub fn with_message(mut self, message: impl Into<ArcStr>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The layer this template draws on.
    #[inline]
    pub fn layer(&self) -> LayerId {
        self.layer
    }

    /// The draw style.
    #[inline]
    pub fn style(&self) -> DrawStyle {
        self.style
    }

    /// How the points are interpreted.
    #[inline]
    pub fn representation(&self) -> Representation {
        self.representation
    }

    /// The connection tag.
    #[inline]
    pub fn connection(&self) -> i32 {
        self.connection
    }

    /// Whether this template has electrical meaning.
    #[inline]
    pub fn is_electrical(&self) -> bool {
        self.connection >= 0
    }

    /// The template points.
    #[inline]
    pub fn template_points(&self) -> &[TemplatePoint] {
        &self.points
    }

    /// The text message, if any.
    #[inline]
    pub fn message(&self) -> Option<&ArcStr> {
        self.message.as_ref()
    }

    /// Returns a copy with every offset multiplied by `lambda`.
    ///
    /// Multipliers are unchanged, so fractions of the instance extent stay put.
    pub fn scale_offsets(&self, lambda: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| p.scale_offsets(lambda)).collect(),
            ..self.clone()
        }
    }
}

/// The translation applied by [`fixup`], in technology units per axis.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeCorrection {
    /// The horizontal correction.
    pub x: f64,
    /// The vertical correction.
    pub y: f64,
}

impl SizeCorrection {
    /// Creates a new correction.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The correction for a prototype with the given size offset.
    pub fn from_size_offset(offset: &SizeOffset) -> Self {
        Self::new(
            (offset.left + offset.right) / 2.,
            (offset.bottom + offset.top) / 2.,
        )
    }

    /// Whether this correction moves nothing.
    pub fn is_zero(&self) -> bool {
        self.x == 0. && self.y == 0.
    }
}

/// Rewrites a template so that it evaluates against the size of an instance
/// whose reported extent excludes the size-offset border.
///
/// The input is never modified. Applying the result of `fixup` to `fixup` again
/// shifts coordinates a second time, so each template must be fixed up at most once.
pub fn fixup(template: &TemplateLayer, correction: SizeCorrection) -> TemplateLayer {
    TemplateLayer {
        points: template
            .points
            .iter()
            .map(|p| p.fixup(correction))
            .collect(),
        ..template.clone()
    }
}
