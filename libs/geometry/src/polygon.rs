//! Polygons and point lists.

use serde::{Deserialize, Serialize};

use crate::point::Point;
use crate::rect::Rect;
use crate::transform::{TransformMut, Transformation};

/// An ordered list of vertices.
///
/// Whether the vertices describe a closed outline, a set of strokes, or a
/// circle is up to the consumer.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Creates a polygon from the given vertices.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let tri = Polygon::from_verts(vec![
    ///     Point::new(0., 0.),
    ///     Point::new(1., 0.),
    ///     Point::new(0., 1.),
    /// ]);
    /// assert_eq!(tri.points().len(), 3);
    /// ```
    pub fn from_verts(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// The vertices of the polygon.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the polygon, returning its vertices.
    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Returns `true` if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The centroid of the vertices, or `None` if there are none.
    pub fn center(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let n = self.points.len() as f64;
        let sum = self
            .points
            .iter()
            .fold(Point::zero(), |acc, p| acc + *p);
        Some(Point::new(sum.x / n, sum.y / n))
    }

    /// Returns the axis-aligned rectangle when the vertices are exactly its four corners.
    pub fn as_rect(&self) -> Option<Rect> {
        if self.points.len() != 4 {
            return None;
        }
        let rect = Rect::from_corners(self.points[0], self.points[2]);
        let corners = rect.corners();
        self.points
            .iter()
            .all(|p| corners.contains(p))
            .then_some(rect)
    }
}

impl From<Rect> for Polygon {
    fn from(value: Rect) -> Self {
        Self::from_verts(value.corners().to_vec())
    }
}

impl TransformMut for Polygon {
    fn transform_mut(&mut self, trans: Transformation) {
        for p in self.points.iter_mut() {
            p.transform_mut(trans);
        }
    }
}
