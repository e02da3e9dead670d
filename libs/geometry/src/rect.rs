//! Axis-aligned rectangles.

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::transform::{TransformMut, Transformation};

/// An axis-aligned rectangle, specified by lower-left and upper-right corners.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rect {
    /// The lower-left corner.
    p0: Point,
    /// The upper-right corner.
    p1: Point,
}

impl Rect {
    /// Creates a rectangle from its four sides.
    ///
    /// Sides are normalized, so a left side greater than the right side is swapped.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let rect = Rect::from_sides(3., 4., 1., 2.);
    /// assert_eq!(rect.left(), 1.);
    /// assert_eq!(rect.top(), 4.);
    /// ```
    pub fn from_sides(left: f64, bot: f64, right: f64, top: f64) -> Self {
        Self {
            p0: Point::new(left.min(right), bot.min(top)),
            p1: Point::new(left.max(right), bot.max(top)),
        }
    }

    /// Creates a rectangle spanning two opposite corners.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::from_sides(a.x, a.y, b.x, b.y)
    }

    /// Creates a zero-area rectangle containing only `p`.
    pub fn from_point(p: Point) -> Self {
        Self { p0: p, p1: p }
    }

    /// The left side.
    #[inline]
    pub fn left(&self) -> f64 {
        self.p0.x
    }

    /// The bottom side.
    #[inline]
    pub fn bot(&self) -> f64 {
        self.p0.y
    }

    /// The right side.
    #[inline]
    pub fn right(&self) -> f64 {
        self.p1.x
    }

    /// The top side.
    #[inline]
    pub fn top(&self) -> f64 {
        self.p1.y
    }

    /// The horizontal extent.
    #[inline]
    pub fn width(&self) -> f64 {
        self.p1.x - self.p0.x
    }

    /// The vertical extent.
    #[inline]
    pub fn height(&self) -> f64 {
        self.p1.y - self.p0.y
    }

    /// The center point.
    pub fn center(&self) -> Point {
        Point::new((self.p0.x + self.p1.x) / 2., (self.p0.y + self.p1.y) / 2.)
    }

    /// The lower-left corner.
    #[inline]
    pub fn lower_left(&self) -> Point {
        self.p0
    }

    /// The upper-right corner.
    #[inline]
    pub fn upper_right(&self) -> Point {
        self.p1
    }

    /// The four corners, counterclockwise from the lower left.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.p0,
            Point::new(self.p1.x, self.p0.y),
            self.p1,
            Point::new(self.p0.x, self.p1.y),
        ]
    }

    /// The smallest rectangle containing both `self` and `other`.
    pub fn union(&self, other: Rect) -> Rect {
        Rect::from_sides(
            self.left().min(other.left()),
            self.bot().min(other.bot()),
            self.right().max(other.right()),
            self.top().max(other.top()),
        )
    }

    /// Returns `true` if `p` lies inside or on the boundary of the rectangle.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.bot() && p.y <= self.top()
    }
}

impl TransformMut for Rect {
    fn transform_mut(&mut self, trans: Transformation) {
        let mut p0 = self.p0;
        let mut p1 = self.p1;
        p0.transform_mut(trans);
        p1.transform_mut(trans);
        *self = Rect::from_corners(p0, p1);
    }
}
