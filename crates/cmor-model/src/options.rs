//! Configuration options for dimension mapping.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Strictness policy applied after a mapping is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Return the result silently.
    Ignore,
    /// Return the result and emit every diagnostic as a warning.
    #[default]
    Warn,
    /// Fail on missing targets, collisions or rejected overrides.
    Error,
}

impl ValidationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ignore => "ignore",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "warn" | "warning" => Ok(Self::Warn),
            "error" | "strict" => Ok(Self::Error),
            _ => Err(ModelError::UnknownValidationMode(s.to_string())),
        }
    }
}

/// Options controlling dimension mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DimensionMappingOptions {
    /// When false, mapping is skipped and every source is left unmapped.
    pub enabled: bool,

    /// How incompleteness or conflicts are surfaced.
    pub validation_mode: ValidationMode,

    /// Let user mappings replace the catalog-resolved target name.
    ///
    /// When false, a user value that differs from the name the catalog
    /// resolves for the dimension is rejected and automatic detection is
    /// used instead.
    pub allow_override: bool,

    /// Explicit `source -> target` assignments.
    pub user_mapping: BTreeMap<String, String>,
}

impl Default for DimensionMappingOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            validation_mode: ValidationMode::Warn,
            allow_override: true,
            user_mapping: BTreeMap::new(),
        }
    }
}

impl DimensionMappingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for strict, catalog-conformant mapping: failures are raised and
    /// user overrides must agree with the catalog.
    pub fn strict() -> Self {
        Self {
            validation_mode: ValidationMode::Error,
            allow_override: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    #[must_use]
    pub fn with_validation_mode(mut self, mode: ValidationMode) -> Self {
        self.validation_mode = mode;
        self
    }

    #[must_use]
    pub fn with_allow_override(mut self, allow: bool) -> Self {
        self.allow_override = allow;
        self
    }

    #[must_use]
    pub fn with_user_mapping(mut self, mapping: BTreeMap<String, String>) -> Self {
        self.user_mapping = mapping;
        self
    }

    #[must_use]
    pub fn with_user_entry(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.user_mapping.insert(source.into(), target.into());
        self
    }
}

/// Parses a `SOURCE=TARGET` pair as given on the command line.
pub fn parse_user_mapping_entry(raw: &str) -> Result<(String, String), ModelError> {
    let (source, target) = raw
        .split_once('=')
        .ok_or_else(|| ModelError::InvalidUserMapping(raw.to_string()))?;
    let source = source.trim();
    let target = target.trim();
    if source.is_empty() || target.is_empty() {
        return Err(ModelError::InvalidUserMapping(raw.to_string()));
    }
    Ok((source.to_string(), target.to_string()))
}
