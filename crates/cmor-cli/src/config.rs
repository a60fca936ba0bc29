//! Config file and flag merging for `cmor-dims map`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cmor_model::{DimensionMappingOptions, ValidationMode};
use serde::Deserialize;

/// Contents of the `--config` TOML file.
///
/// ```toml
/// [dimension_mapping]
/// validation_mode = "error"
/// allow_override = false
///
/// [dimension_mapping.user_mapping]
/// lev = "plev19"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub dimension_mapping: DimensionMappingOptions,
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub validation_mode: Option<ValidationMode>,
    pub disable_override: bool,
    pub disable_mapping: bool,
    pub user_entries: Vec<(String, String)>,
}

impl CliConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("parse config")
    }

    /// Reads `path`, or returns defaults when no config was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text =
            fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("load config {}", path.display()))
    }

    /// Options for this run: config file values, then flag overrides.
    /// `--map` entries replace config entries for the same source.
    pub fn resolve_options(&self, overrides: &OptionOverrides) -> DimensionMappingOptions {
        let mut options = self.dimension_mapping.clone();
        if let Some(mode) = overrides.validation_mode {
            options.validation_mode = mode;
        }
        if overrides.disable_override {
            options.allow_override = false;
        }
        if overrides.disable_mapping {
            options.enabled = false;
        }
        for (source, target) in &overrides.user_entries {
            options.user_mapping.insert(source.clone(), target.clone());
        }
        options
    }
}
