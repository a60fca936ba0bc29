//! Source dimension descriptors and semantic axis types.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Physical meaning of an axis, independent of the name it carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticType {
    Latitude,
    Longitude,
    Pressure,
    Depth,
    Height,
    Time,
    ModelLevel,
    ScalarPoint,
    /// A recognized axis whose physical meaning could not be pinned down,
    /// e.g. a vertical axis declared only through `axis = "Z"`.
    Other,
}

impl SemanticType {
    /// All semantic types in declaration order.
    pub const ALL: [SemanticType; 9] = [
        SemanticType::Latitude,
        SemanticType::Longitude,
        SemanticType::Pressure,
        SemanticType::Depth,
        SemanticType::Height,
        SemanticType::Time,
        SemanticType::ModelLevel,
        SemanticType::ScalarPoint,
        SemanticType::Other,
    ];

    /// Stable snake_case identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Pressure => "pressure",
            Self::Depth => "depth",
            Self::Height => "height",
            Self::Time => "time",
            Self::ModelLevel => "model_level",
            Self::ScalarPoint => "scalar_point",
            Self::Other => "other",
        }
    }

    /// True for axes that describe a vertical coordinate.
    pub fn is_vertical(&self) -> bool {
        matches!(
            self,
            Self::Pressure | Self::Depth | Self::Height | Self::ModelLevel
        )
    }

    /// True for every type except [`SemanticType::Other`].
    pub fn is_specific(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SemanticType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownSemanticType(s.to_string()))
    }
}

/// One axis of a source dataset.
///
/// Built once per dataset and treated as read-only by the mapping engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionDescriptor {
    /// Dimension name as declared in the source dataset.
    pub name: String,
    /// Number of points along the axis.
    pub size: usize,
    /// Descriptive attributes of the associated coordinate variable
    /// (`standard_name`, `axis`, `units`, `positive`, ...).
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Coordinate values, when the dataset exposes them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_values: Option<Vec<f64>>,
}

impl DimensionDescriptor {
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        Self {
            name: name.into(),
            size,
            attributes: BTreeMap::new(),
            sample_values: None,
        }
    }

    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_samples(mut self, values: Vec<f64>) -> Self {
        self.sample_values = Some(values);
        self
    }

    /// Looks up an attribute; see [`lookup_attribute`].
    pub fn attribute(&self, key: &str) -> Option<&str> {
        lookup_attribute(&self.attributes, key)
    }

    /// Sample values as a slice (empty when none were provided).
    pub fn samples(&self) -> &[f64] {
        self.sample_values.as_deref().unwrap_or_default()
    }
}

/// Looks up an attribute, preferring an exact key and falling back to a
/// case-insensitive match. Blank values count as absent.
pub fn lookup_attribute<'a>(attributes: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    let value = attributes.get(key).or_else(|| {
        attributes
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value)
    })?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
