//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    Crs, CrsKind, NamingPolicy, ProcessingOrder, SortOrder, DEFAULT_EQUAL_AREA_CRS,
};
use crate::error::AllocResult;
use crate::infrastructure::discovery::DEFAULT_EXTENSIONS;
use crate::infrastructure::geometry::canonical_code;

use super::loader::{self, ConfigWarning};

/// Base order for component sources; `priority` names are layered on top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OrderConfig {
    #[default]
    Lexicographic,
    Discovered,
}

/// `[allocation]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationConfig {
    #[serde(default = "default_equal_area_crs")]
    pub equal_area_crs: String,

    #[serde(default)]
    pub naming: NamingPolicy,

    #[serde(default)]
    pub order: OrderConfig,

    #[serde(default)]
    pub priority: Vec<String>,

    #[serde(default)]
    pub assume_crs: Option<String>,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            equal_area_crs: default_equal_area_crs(),
            naming: NamingPolicy::default(),
            order: OrderConfig::default(),
            priority: Vec::new(),
            assume_crs: None,
        }
    }
}

fn default_equal_area_crs() -> String {
    DEFAULT_EQUAL_AREA_CRS.to_string()
}

impl AllocationConfig {
    /// Resolve `order` and `priority` into a single processing order.
    ///
    /// A non-empty priority list wins; unlisted layers follow lexicographically.
    pub fn processing_order(&self) -> ProcessingOrder {
        if !self.priority.is_empty() {
            return ProcessingOrder::Priority(self.priority.clone());
        }
        match self.order {
            OrderConfig::Lexicographic => ProcessingOrder::Lexicographic,
            OrderConfig::Discovered => ProcessingOrder::Discovered,
        }
    }
}

/// `[discovery]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

/// `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub sort: SortOrder,

    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// `[[crs]]` entry: an extra projected system usable for area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomCrsConfig {
    pub code: String,

    #[serde(default = "default_metres_per_unit")]
    pub metres_per_unit: f64,
}

fn default_metres_per_unit() -> f64 {
    1.0
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub allocation: AllocationConfig,

    #[serde(default)]
    pub discovery: DiscoveryConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub crs: Vec<CustomCrsConfig>,
}

impl Config {
    /// Load configuration from TOML file
    pub fn load(path: &Path) -> AllocResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and return non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> AllocResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the working directory, user config, or defaults
    pub fn load_or_default(cwd: Option<&Path>) -> Self {
        loader::load_or_default(cwd)
    }

    /// User-declared systems with canonical codes
    pub fn custom_crs(&self) -> Vec<Crs> {
        self.crs
            .iter()
            .map(|entry| {
                let code = canonical_code(&entry.code).unwrap_or_else(|| entry.code.clone());
                Crs::new(
                    code,
                    CrsKind::Projected {
                        metres_per_unit: entry.metres_per_unit,
                    },
                )
            })
            .collect()
    }

    /// Reject values serde accepts but the run cannot use
    pub(crate) fn validate(&self) -> Result<(), String> {
        for entry in &self.crs {
            if canonical_code(&entry.code).is_none() {
                return Err("[[crs]] entry has an empty code".to_string());
            }
            if !(entry.metres_per_unit.is_finite() && entry.metres_per_unit > 0.0) {
                return Err(format!(
                    "[[crs]] {}: metres_per_unit must be a positive number",
                    entry.code
                ));
            }
        }
        if self.discovery.extensions.is_empty() {
            return Err("discovery.extensions must not be empty".to_string());
        }
        Ok(())
    }
}
