//! Dataset descriptor input.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use cmor_model::DimensionDescriptor;
use serde::{Deserialize, Serialize};

/// JSON document describing a dataset's dimensions, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDocument {
    pub dimensions: Vec<DimensionDescriptor>,
}

impl DatasetDocument {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parse dataset json")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text =
            fs::read_to_string(path).with_context(|| format!("read dataset {}", path.display()))?;
        Self::from_json_str(&text).with_context(|| format!("load dataset {}", path.display()))
    }
}

/// Splits a `time,plev19,lat` list, dropping blanks and repeats.
pub fn parse_required_list<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    let mut required: Vec<String> = Vec::new();
    for item in items {
        for name in item.as_ref().split(',') {
            let name = name.trim();
            if !name.is_empty() && !required.iter().any(|existing| existing == name) {
                required.push(name.to_string());
            }
        }
    }
    required
}
