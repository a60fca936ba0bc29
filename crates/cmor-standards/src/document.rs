#![deny(unsafe_code)]

use std::collections::BTreeMap;

use cmor_model::SemanticType;
use serde::{Deserialize, Serialize};

use crate::catalog::TargetCandidate;
use crate::error::{Result, StandardsError};

/// Schema identifier expected in the `[catalog]` header.
pub const CATALOG_SCHEMA: &str = "cmor-dims.dimension-candidates";

/// Highest schema version this loader understands.
pub const CATALOG_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDocument {
    pub catalog: CatalogHeader,
    #[serde(default)]
    pub candidates: BTreeMap<String, Vec<TargetCandidate>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogHeader {
    pub schema: String,
    pub schema_version: u32,
    #[serde(default)]
    pub description: Option<String>,
}

/// Parses and checks a TOML catalog document into `(type, candidate)` pairs.
pub(crate) fn parse_catalog_toml(
    origin: &str,
    text: &str,
) -> Result<Vec<(SemanticType, TargetCandidate)>> {
    let document: CatalogDocument = toml::from_str(text).map_err(|source| StandardsError::Toml {
        origin: origin.to_string(),
        source,
    })?;
    validate_header(origin, &document.catalog)?;

    let mut entries = Vec::new();
    for (raw_type, list) in document.candidates {
        let semantic_type: SemanticType = raw_type
            .parse()
            .map_err(|e| StandardsError::invalid(origin, format!("{e}")))?;
        entries.extend(list.into_iter().map(|candidate| (semantic_type, candidate)));
    }
    Ok(entries)
}

fn validate_header(origin: &str, header: &CatalogHeader) -> Result<()> {
    if header.schema != CATALOG_SCHEMA {
        return Err(StandardsError::invalid(
            origin,
            format!(
                "unexpected schema '{}' (expected '{CATALOG_SCHEMA}')",
                header.schema
            ),
        ));
    }
    if header.schema_version == 0 || header.schema_version > CATALOG_SCHEMA_VERSION {
        return Err(StandardsError::invalid(
            origin,
            format!("unsupported schema_version {}", header.schema_version),
        ));
    }
    Ok(())
}
