//! Error types.

use arcstr::ArcStr;

/// The result type returned by technology construction.
pub type Result<T> = std::result::Result<T, BuildError>;

/// An error building a [`Technology`](crate::technology::Technology).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// Two prototypes share a name, ignoring case.
    #[error("duplicate primitive prototype name `{0}`")]
    DuplicatePrototype(ArcStr),
    /// A prototype, layer or arc has an empty name.
    #[error("empty name for {0}")]
    EmptyName(&'static str),
    /// A template or arc refers to a layer that was never added.
    #[error("`{owner}` refers to unknown layer {layer}")]
    UnknownLayer {
        /// The name of the referring object.
        owner: ArcStr,
        /// The offending layer index.
        layer: usize,
    },
    /// A port allows an arc that was never added.
    #[error("port `{port}` of `{prototype}` refers to unknown arc {arc}")]
    UnknownArc {
        /// The prototype name.
        prototype: ArcStr,
        /// The port name.
        port: ArcStr,
        /// The offending arc index.
        arc: usize,
    },
}
