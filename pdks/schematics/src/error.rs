//! Errors building the schematic technology.

use crate::config::ConfigError;
use technology::error::BuildError;

/// The result type returned by schematic technology construction.
pub type Result<T> = std::result::Result<T, Error>;

/// An error building the schematic technology.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The technology description failed validation.
    #[error(transparent)]
    Build(#[from] BuildError),
}
