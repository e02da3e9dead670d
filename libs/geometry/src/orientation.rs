//! Placement orientations of symbols.

use serde::{Deserialize, Serialize};

use crate::transform::Rotation;

/// The eight Manhattan orientations, by name.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum NamedOrientation {
    /// As drawn.
    #[default]
    R0,
    /// Mirrored about the x-axis.
    ReflectVert,
    /// Mirrored about the y-axis.
    ReflectHoriz,
    /// Turned a quarter counterclockwise.
    R90,
    /// Turned half way around.
    R180,
    /// Turned a quarter clockwise.
    R270,
    /// Mirrored about the line `y = x`.
    FlipYx,
    /// Mirrored about the line `y = -x`.
    FlipMinusYx,
}

impl NamedOrientation {
    /// Every named orientation, in no particular order.
    pub fn all_rectangular() -> [Self; 8] {
        use NamedOrientation::*;
        [R0, R90, R180, R270, ReflectVert, FlipYx, ReflectHoriz, FlipMinusYx]
    }
}

/// How a symbol is turned when placed.
///
/// A reflection about the x-axis, if any, comes first; the counterclockwise
/// rotation follows.
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub(crate) reflect_vert: bool,
    pub(crate) angle: Rotation,
}

impl From<NamedOrientation> for Orientation {
    fn from(value: NamedOrientation) -> Self {
        use NamedOrientation::*;
        match value {
            R0 => Self::from_reflect_and_angle(false, Rotation::R0),
            R90 => Self::from_reflect_and_angle(false, Rotation::R90),
            R180 => Self::from_reflect_and_angle(false, Rotation::R180),
            R270 => Self::from_reflect_and_angle(false, Rotation::R270),
            ReflectVert => Self::from_reflect_and_angle(true, Rotation::R0),
            FlipYx => Self::from_reflect_and_angle(true, Rotation::R90),
            ReflectHoriz => Self::from_reflect_and_angle(true, Rotation::R180),
            FlipMinusYx => Self::from_reflect_and_angle(true, Rotation::R270),
        }
    }
}

impl Orientation {
    /// An orientation that reflects about the x-axis if `reflect_vert` is set, then turns by `angle`.
    #[inline]
    pub const fn from_reflect_and_angle(reflect_vert: bool, angle: Rotation) -> Self {
        Self {
            reflect_vert,
            angle,
        }
    }

    /// Whether the x-axis reflection is applied.
    #[inline]
    pub fn reflect_vert(&self) -> bool {
        self.reflect_vert
    }

    /// The rotation applied after the reflection.
    #[inline]
    pub fn angle(&self) -> Rotation {
        self.angle
    }

    /// Maps a direction, given in degrees counterclockwise from the positive x-axis,
    /// through this orientation.
    ///
    /// # Example
    ///
    /// ```
    /// # use geometry::prelude::*;
    /// let o = Orientation::from(NamedOrientation::ReflectHoriz);
    /// assert_eq!(o.transform_angle(0.), 180.);
    /// assert_eq!(o.transform_angle(90.), 90.);
    /// ```
    pub fn transform_angle(&self, degrees: f64) -> f64 {
        let reflected = if self.reflect_vert { -degrees } else { degrees };
        crate::wrap_angle(reflected + self.angle.degrees())
    }
}
