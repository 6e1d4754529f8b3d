//! Store configuration for waypath
//!
//! Configuration is stored in `.waypath/config.toml`. Every section is optional;
//! a missing file or missing keys fall back to defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaypathError};

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Route creation defaults
    #[serde(default)]
    pub routes: RouteConfig,

    /// Shortest-path query settings
    #[serde(default)]
    pub path: PathConfig,

    /// Human output settings
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Defaults applied when adding routes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Store the mirrored row as well when a route is added
    #[serde(default = "default_bidirectional")]
    pub default_bidirectional: bool,
}

/// Settings for shortest-path queries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathConfig {
    /// Paths longer than this are reported as unreachable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<f64>,
}

/// Settings for human-readable output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Decimal places for distances and coordinates
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

fn default_bidirectional() -> bool {
    true
}

fn default_precision() -> usize {
    2
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            version: STORE_FORMAT_VERSION,
            routes: RouteConfig::default(),
            path: PathConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            default_bidirectional: default_bidirectional(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: StoreConfig = toml::from_str(&content)?;

        if config.version > STORE_FORMAT_VERSION {
            return Err(WaypathError::InvalidStore {
                reason: format!(
                    "config version {} is newer than supported version {}",
                    config.version, STORE_FORMAT_VERSION
                ),
            });
        }

        if let Some(max) = config.path.max_distance {
            if !max.is_finite() || max <= 0.0 {
                return Err(WaypathError::invalid_value("path.max_distance", max));
            }
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| WaypathError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Format a distance with the configured precision
    pub fn format_distance(&self, distance: f64) -> String {
        format!("{:.*}", self.display.precision, distance)
    }

    /// Format a location coordinate with the configured precision
    pub fn format_coordinate(&self, value: f64) -> String {
        format!("{:.*}", self.display.precision, value)
    }
}
