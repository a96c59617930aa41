//! Units configuration file support.
//!
//! Extension units, aliases and display settings can be read from a TOML file:
//!
//! ```toml
//! [display]
//! precision = 4
//!
//! [[units]]
//! symbol = "yd"
//! label = "yard"
//! scale = 0.9144
//! dimension = { length = 1 }
//!
//! [aliases]
//! yards = "yd"
//! ```
//!
//! `scale` is the factor to the SI base unit of `dimension`; omitted dimension exponents default to zero.

use crate::dimension::Dimension;
use crate::error::{Result, UnitsError};
use crate::registry::UnitRegistry;
use crate::unit::Unit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Units configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitsConfig {
    /// Formatting options for quantities.
    #[serde(default)]
    pub display: DisplaySettings,
    /// Extension units added on top of the built-in catalog.
    #[serde(default)]
    pub units: Vec<UnitDefinition>,
    /// Extra aliases, mapping alias to symbol.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// Formatting options used by [`Quantity::to_display_string_with`](crate::Quantity::to_display_string_with).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Fixed number of decimals. `None` prints the shortest round-trip representation.
    #[serde(default)]
    pub precision: Option<usize>,
}

/// A unit declared in a configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    /// Printable symbol.
    pub symbol: String,
    /// Human-readable name; defaults to the symbol.
    #[serde(default)]
    pub label: Option<String>,
    /// Factor to the SI base unit of `dimension`.
    pub scale: f64,
    /// Force, length and time exponents.
    #[serde(default)]
    pub dimension: Dimension,
}

impl UnitDefinition {
    /// Builds the validated [`Unit`].
    pub fn to_unit(&self) -> Result<Unit> {
        let label = self.label.clone().unwrap_or_else(|| self.symbol.clone());
        Unit::custom(self.symbol.clone(), label, self.dimension, self.scale)
    }
}

impl UnitsConfig {
    /// Load units configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(UnitsConfig)` if successful
    /// * `Err(UnitsError::Configuration)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            UnitsError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let config = Self::from_toml_str(&content)?;
        log::debug!(
            "Loaded units configuration from {} ({} units, {} aliases)",
            path.as_ref().display(),
            config.units.len(),
            config.aliases.len()
        );
        Ok(config)
    }

    /// Parse units configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            UnitsError::Configuration(format!("Failed to parse config file: {}", e))
        })
    }

    /// Load units configuration from the default location.
    ///
    /// Searches for `structunits.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self> {
        let search_paths = [
            PathBuf::from("structunits.toml"),
            PathBuf::from("config/structunits.toml"),
            PathBuf::from("../structunits.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(UnitsError::Configuration(
            "No structunits.toml found in standard locations".to_string(),
        ))
    }

    /// The built-in registry extended with the configured units and aliases.
    ///
    /// Units are registered before aliases, so an alias may target a unit declared in the same file.
    pub fn build_registry(&self) -> Result<UnitRegistry> {
        let mut registry = UnitRegistry::with_builtin();
        for definition in &self.units {
            registry.register(definition.to_unit()?)?;
        }
        for (alias, symbol) in &self.aliases {
            registry.register_alias(alias, symbol)?;
        }
        Ok(registry)
    }
}
