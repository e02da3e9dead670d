//! Manhattan placements of geometry.

use serde::{Deserialize, Serialize};

use crate::orientation::Orientation;
use crate::point::Point;

/// A Manhattan rotation and/or reflection followed by a translation.
///
/// Scaling is not supported, so the matrix is always unitary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformation {
    /// The rotation and reflection.
    pub(crate) mat: TransformationMatrix,
    /// The translation applied after the matrix.
    pub(crate) b: Point,
}

impl Default for Transformation {
    fn default() -> Self {
        Self::identity()
    }
}

/// A quarter-turn rotation, measured counterclockwise.
#[derive(
    Debug, Clone, Copy, Default, Eq, Hash, Ord, PartialOrd, PartialEq, Serialize, Deserialize,
)]
pub enum Rotation {
    /// 0 degrees; no rotation.
    #[default]
    R0,
    /// A quarter turn.
    R90,
    /// A half turn.
    R180,
    /// Three quarter turns.
    R270,
}

impl Rotation {
    /// How far this rotation turns, in degrees.
    pub fn degrees(&self) -> f64 {
        match self {
            Rotation::R0 => 0.,
            Rotation::R90 => 90.,
            Rotation::R180 => 180.,
            Rotation::R270 => 270.,
        }
    }
}

/// A unitary 2x2 matrix: a rotation, possibly preceded by a reflection about the x-axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformationMatrix([[i8; 2]; 2]);

impl TransformationMatrix {
    /// The identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self([[1, 0], [0, 1]])
    }

    /// The matrix of `orientation`.
    pub fn from_orientation(orientation: Orientation) -> Self {
        let Self(mut m) = Self::from(orientation.angle());
        if orientation.reflect_vert() {
            m[0][1] = -m[0][1];
            m[1][1] = -m[1][1];
        }
        Self(m)
    }

    /// The inverse, which for a unitary matrix is its transpose.
    pub fn inverse(&self) -> Self {
        let a = self.0;
        Self([[a[0][0], a[1][0]], [a[0][1], a[1][1]]])
    }

    /// The determinant, which is `-1` for reflections and `1` otherwise.
    fn det(&self) -> i8 {
        self.0[0][0] * self.0[1][1] - self.0[0][1] * self.0[1][0]
    }
}

impl From<Rotation> for TransformationMatrix {
    fn from(value: Rotation) -> Self {
        Self(match value {
            Rotation::R0 => [[1, 0], [0, 1]],
            Rotation::R90 => [[0, -1], [1, 0]],
            Rotation::R180 => [[-1, 0], [0, -1]],
            Rotation::R270 => [[0, 1], [-1, 0]],
        })
    }
}

impl std::ops::Mul<Point> for TransformationMatrix {
    type Output = Point;
    fn mul(self, rhs: Point) -> Self::Output {
        let m = self.0;
        Point::new(
            m[0][0] as f64 * rhs.x + m[0][1] as f64 * rhs.y,
            m[1][0] as f64 * rhs.x + m[1][1] as f64 * rhs.y,
        )
    }
}

impl Default for TransformationMatrix {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl Transformation {
    /// The placement that leaves geometry where it is.
    pub fn identity() -> Self {
        Self {
            mat: TransformationMatrix::identity(),
            b: Point::zero(),
        }
    }

    /// Orients geometry about the origin, then moves the origin to `offset`.
    ///
    /// Symbol geometry is drawn about its anchor, so this places a symbol.
    pub fn from_offset_and_orientation(offset: Point, orientation: impl Into<Orientation>) -> Self {
        Self {
            mat: TransformationMatrix::from_orientation(orientation.into()),
            b: offset,
        }
    }

    /// Where the origin ends up.
    pub fn offset_point(&self) -> Point {
        self.b
    }

    /// The orientation part, without the translation.
    pub fn orientation(&self) -> Orientation {
        let reflect_vert = self.mat.det() < 0;
        let angle = match (self.mat.0[0][0], self.mat.0[1][0]) {
            (0, 1) => Rotation::R90,
            (-1, 0) => Rotation::R180,
            (0, -1) => Rotation::R270,
            _ => Rotation::R0,
        };
        Orientation::from_reflect_and_angle(reflect_vert, angle)
    }

    /// The placement that undoes this one.
    pub fn inv(&self) -> Transformation {
        let inv = self.mat.inverse();
        let invb = inv * self.b;
        Self { mat: inv, b: -invb }
    }
}

impl<T> From<T> for Transformation
where
    T: Into<Orientation>,
{
    fn from(value: T) -> Self {
        Self::from_offset_and_orientation(Point::zero(), value)
    }
}

/// Geometry that can be placed in place.
pub trait TransformMut {
    /// Moves `self` by `trans`.
    fn transform_mut(&mut self, trans: Transformation);
}

/// Geometry that can be placed by value.
pub trait Transform: TransformMut + Sized {
    /// Returns `self` moved by `trans`.
    #[inline]
    fn transform(mut self, trans: Transformation) -> Self {
        self.transform_mut(trans);
        self
    }
}

impl<T: TransformMut + Sized> Transform for T {}
