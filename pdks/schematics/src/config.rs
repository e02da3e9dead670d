//! User-adjustable settings of the schematic technology.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use technology::SizeConvention;

use crate::kind::SchematicKind;

/// The result type returned by configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// An error loading a [`SchematicsConfig`].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The configuration text is not valid TOML or has the wrong shape.
    #[error("error parsing schematics config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The configuration file could not be read.
    #[error("error reading schematics config: {0}")]
    Io(#[from] std::io::Error),
    /// Negating bubbles must have a positive size.
    #[error("negating bubble size must be positive, got {0}")]
    BubbleSize(f64),
}

/// Settings of the schematic technology.
///
/// Every field has a default, so an empty document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchematicsConfig {
    /// The diameter of the circle drawn on negated connections.
    pub negating_bubble_size: f64,
    /// Whether instance sizes include the size-offset border.
    pub size_convention: SizeConvention,
    /// Count connections made one level up the hierarchy on exported bus pins.
    ///
    /// Not supported; setting it only produces a warning.
    pub hierarchical_bus_pins: bool,
    /// The VHDL names of the logic primitives, as `name/negated-name`, keyed by
    /// prototype name.
    pub vhdl_names: IndexMap<String, String>,
}

impl Default for SchematicsConfig {
    fn default() -> Self {
        Self {
            negating_bubble_size: 1.2,
            size_convention: SizeConvention::default(),
            hierarchical_bus_pins: false,
            vhdl_names: IndexMap::from_iter(
                [
                    (SchematicKind::Buffer, "buffer/inverter"),
                    (SchematicKind::And, "and/nand"),
                    (SchematicKind::Or, "or/nor"),
                    (SchematicKind::Xor, "xor/xnor"),
                    (SchematicKind::Mux, "mux"),
                ]
                .map(|(kind, name)| (kind.name().to_string(), name.to_string())),
            ),
        }
    }
}

impl SchematicsConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a configuration from a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Checks values that deserialize but make no sense.
    pub fn validate(&self) -> Result<()> {
        if !(self.negating_bubble_size > 0.) {
            return Err(ConfigError::BubbleSize(self.negating_bubble_size));
        }
        Ok(())
    }
}
