//! Size-independent coordinates.
//!
//! An [`EdgeDescriptor`] names a coordinate along one axis of an instance's
//! bounding box as an anchor, a fraction of the instance extent, and a fixed offset.

use serde::{Deserialize, Serialize};

/// The reference an [`EdgeDescriptor`] is measured from.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EdgeAxis {
    /// The low x-coordinate.
    Left,
    /// The high x-coordinate.
    Right,
    /// The low y-coordinate.
    Bottom,
    /// The high y-coordinate.
    Top,
    /// The midpoint of the extent.
    Center,
}

impl EdgeAxis {
    /// Where this reference sits within the extent, as a multiple of the extent
    /// measured from the midpoint.
    pub const fn center_fraction(&self) -> f64 {
        match self {
            EdgeAxis::Left | EdgeAxis::Bottom => -0.5,
            EdgeAxis::Right | EdgeAxis::Top => 0.5,
            EdgeAxis::Center => 0.,
        }
    }
}

/// A closed interval along one axis.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpan {
    /// The low coordinate.
    pub low: f64,
    /// The high coordinate.
    pub high: f64,
}

impl AxisSpan {
    /// Creates a span from its endpoints.
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Creates a span of length `extent` centered on `center`.
    pub fn centered(center: f64, extent: f64) -> Self {
        Self::new(center - extent / 2., center + extent / 2.)
    }

    /// The length of the span.
    #[inline]
    pub fn extent(&self) -> f64 {
        self.high - self.low
    }

    /// The midpoint of the span.
    #[inline]
    pub fn mid(&self) -> f64 {
        (self.low + self.high) / 2.
    }

    /// The coordinate that `axis` is measured from.
    pub fn reference(&self, axis: EdgeAxis) -> f64 {
        match axis {
            EdgeAxis::Left | EdgeAxis::Bottom => self.low,
            EdgeAxis::Right | EdgeAxis::Top => self.high,
            EdgeAxis::Center => self.mid(),
        }
    }
}

/// A coordinate of the form `reference(axis) + multiplier * extent + offset`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeDescriptor {
    axis: EdgeAxis,
    multiplier: f64,
    offset: f64,
}

impl EdgeDescriptor {
    /// Creates a new edge descriptor.
    pub const fn new(axis: EdgeAxis, multiplier: f64, offset: f64) -> Self {
        Self {
            axis,
            multiplier,
            offset,
        }
    }

    /// The midpoint of the extent.
    pub const fn center() -> Self {
        Self::new(EdgeAxis::Center, 0., 0.)
    }

    /// The left edge.
    pub const fn left_edge() -> Self {
        Self::from_left(0.)
    }

    /// The right edge.
    pub fn right_edge() -> Self {
        Self::from_right(0.)
    }

    /// The bottom edge.
    pub const fn bottom_edge() -> Self {
        Self::from_bottom(0.)
    }

    /// The top edge.
    pub fn top_edge() -> Self {
        Self::from_top(0.)
    }

    /// `distance` units to the right of the left edge.
    pub const fn from_left(distance: f64) -> Self {
        Self::new(EdgeAxis::Left, 0., distance)
    }

    /// `distance` units to the left of the right edge.
    pub fn from_right(distance: f64) -> Self {
        Self::new(EdgeAxis::Right, 0., -distance)
    }

    /// `distance` units above the bottom edge.
    pub const fn from_bottom(distance: f64) -> Self {
        Self::new(EdgeAxis::Bottom, 0., distance)
    }

    /// `distance` units below the top edge.
    pub fn from_top(distance: f64) -> Self {
        Self::new(EdgeAxis::Top, 0., -distance)
    }

    /// `distance` units from the midpoint, toward the high side.
    pub const fn from_center(distance: f64) -> Self {
        Self::new(EdgeAxis::Center, 0., distance)
    }

    /// `fraction` of the extent away from the midpoint.
    ///
    /// `scaled(-0.5)` is the low edge and `scaled(0.5)` the high edge.
    pub const fn scaled(fraction: f64) -> Self {
        Self::new(EdgeAxis::Center, fraction, 0.)
    }

    /// The anchor of this descriptor.
    #[inline]
    pub fn axis(&self) -> EdgeAxis {
        self.axis
    }

    /// The fraction of the extent added to the reference.
    #[inline]
    pub fn multiplier(&self) -> f64 {
        self.multiplier
    }

    /// The fixed offset, in technology units.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The multiplier this descriptor has when rewritten relative to the midpoint.
    pub fn center_multiplier(&self) -> f64 {
        self.multiplier + self.axis.center_fraction()
    }

    /// Returns a copy of this descriptor with a new offset.
    pub fn with_offset(&self, offset: f64) -> Self {
        Self { offset, ..*self }
    }

    /// Returns a copy of this descriptor with its offset multiplied by `lambda`.
    pub fn scale_offset(&self, lambda: f64) -> Self {
        self.with_offset(self.offset * lambda)
    }

    /// Evaluates the descriptor against an explicit reference coordinate and extent.
    #[inline]
    pub fn evaluate(&self, extent: f64, reference: f64) -> f64 {
        reference + self.multiplier * extent + self.offset
    }

    /// Evaluates the descriptor within `span`, taking the reference from the descriptor's axis.
    ///
    /// # Example
    ///
    /// ```
    /// # use technology::edge::{AxisSpan, EdgeDescriptor};
    /// let span = AxisSpan::centered(0., 6.);
    /// assert_eq!(EdgeDescriptor::from_right(1.).evaluate_in(span), 2.);
    /// assert_eq!(EdgeDescriptor::scaled(-0.5).evaluate_in(span), -3.);
    /// ```
    pub fn evaluate_in(&self, span: AxisSpan) -> f64 {
        self.evaluate(span.extent(), span.reference(self.axis))
    }
}
