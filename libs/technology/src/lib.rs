//! Technology-independent primitive geometry.
//!
//! A technology describes its primitives as [template layers](template::TemplateLayer)
//! whose coordinates are [edge descriptors](edge::EdgeDescriptor): fractions of an
//! instance's size plus fixed offsets. Given an [`Instance`](instance::Instance), the
//! templates are [realized](realize::realize) into absolute polygons.
#![warn(missing_docs)]

pub mod diagnostics;
pub mod drc;
pub mod edge;
pub mod error;
pub mod function;
pub mod instance;
pub mod interchange;
pub mod layer;
pub mod port;
pub mod prototype;
pub mod realize;
pub mod technology;
pub mod template;

#[cfg(test)]
mod tests;

pub use technology::{SizeConvention, Technology, TechnologyBuilder};
