//! Bounding boxes of geometry.

use crate::{point::Point, polygon::Polygon, rect::Rect};

/// Geometry with an extent.
///
/// # Examples
///
/// ```
/// # use geometry::prelude::*;
/// let rect = Rect::from_sides(0., 0., 10., 20.);
/// assert_eq!(rect.bbox(), Some(Rect::from_sides(0., 0., 10., 20.)));
/// let empty = Polygon::default();
/// assert_eq!(empty.bbox(), None);
/// ```
pub trait Bbox {
    /// The smallest rectangle enclosing `self`, or `None` if `self` is empty.
    fn bbox(&self) -> Option<Rect>;
}

impl Bbox for Point {
    fn bbox(&self) -> Option<Rect> {
        Some(Rect::from_point(*self))
    }
}

impl Bbox for Rect {
    fn bbox(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl Bbox for Polygon {
    fn bbox(&self) -> Option<Rect> {
        let (first, rest) = self.points().split_first()?;
        Some(
            rest.iter()
                .fold(Rect::from_point(*first), |acc, p| acc.union(Rect::from_point(*p))),
        )
    }
}
