//! Shorthands for the edge descriptors used by the schematic symbols.
//!
//! `left_by(f)` is the coordinate `f / 2` of the width left of center, so
//! `left_by(1.)` is the left edge and `left_by(0.5)` sits halfway between
//! the left edge and the center. The other three work the same way.

use technology::edge::EdgeDescriptor;
use technology::template::TemplatePoint;

pub(crate) fn left_by(fraction: f64) -> EdgeDescriptor {
    EdgeDescriptor::scaled(-fraction / 2.)
}

pub(crate) fn right_by(fraction: f64) -> EdgeDescriptor {
    EdgeDescriptor::scaled(fraction / 2.)
}

pub(crate) fn bot_by(fraction: f64) -> EdgeDescriptor {
    EdgeDescriptor::scaled(-fraction / 2.)
}

pub(crate) fn top_by(fraction: f64) -> EdgeDescriptor {
    EdgeDescriptor::scaled(fraction / 2.)
}

#[inline]
pub(crate) fn c() -> EdgeDescriptor {
    EdgeDescriptor::center()
}

#[inline]
pub(crate) fn fc(distance: f64) -> EdgeDescriptor {
    EdgeDescriptor::from_center(distance)
}

#[inline]
pub(crate) fn left() -> EdgeDescriptor {
    EdgeDescriptor::left_edge()
}

#[inline]
pub(crate) fn right() -> EdgeDescriptor {
    EdgeDescriptor::right_edge()
}

#[inline]
pub(crate) fn bot() -> EdgeDescriptor {
    EdgeDescriptor::bottom_edge()
}

#[inline]
pub(crate) fn top() -> EdgeDescriptor {
    EdgeDescriptor::top_edge()
}

#[inline]
pub(crate) fn pt(x: EdgeDescriptor, y: EdgeDescriptor) -> TemplatePoint {
    TemplatePoint::new(x, y)
}

#[inline]
pub(crate) fn center() -> TemplatePoint {
    TemplatePoint::center()
}

// Fractions that are not short decimals.
pub(crate) const TWO_THIRDS: f64 = 2. / 3.;
pub(crate) const ONE_THIRD: f64 = 1. / 3.;
pub(crate) const ONE_SIXTH: f64 = 1. / 6.;
pub(crate) const SEVEN_TWELFTHS: f64 = 7. / 12.;
pub(crate) const F23_60: f64 = 23. / 60.;
pub(crate) const F13_30: f64 = 13. / 30.;
pub(crate) const F31_60: f64 = 31. / 60.;
pub(crate) const F17_30: f64 = 17. / 30.;
pub(crate) const F37_60: f64 = 37. / 60.;
