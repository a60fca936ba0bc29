//! The target dimension candidate catalog.
//!
//! The catalog maps each [`SemanticType`] to the ordered list of standardized
//! dimension names it may resolve to. It is built once, validated, and then
//! only ever read: it holds no interior mutability, so a single instance can
//! be shared by reference (or `Arc`) across threads.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use cmor_model::SemanticType;
use serde::{Deserialize, Serialize};

use crate::csv_loader::parse_catalog_csv;
use crate::document::parse_catalog_toml;
use crate::embedded::EMBEDDED_CATALOG;
use crate::error::{Result, StandardsError};
use crate::hash::sha256_hex;

/// A standardized dimension name a semantic type may resolve to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetCandidate {
    pub name: String,
    /// Cardinality the name implies (`plev19` -> 19), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_size: Option<usize>,
}

impl TargetCandidate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expected_size: None,
        }
    }

    pub fn sized(name: impl Into<String>, expected_size: usize) -> Self {
        Self {
            name: name.into(),
            expected_size: Some(expected_size),
        }
    }
}

/// Immutable `SemanticType -> [TargetCandidate]` table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateCatalog {
    origin: String,
    candidates: BTreeMap<SemanticType, Vec<TargetCandidate>>,
    owners: BTreeMap<String, SemanticType>,
    fingerprint: String,
}

impl CandidateCatalog {
    /// Builds a catalog from `(type, candidate)` pairs, keeping declaration
    /// order within each type.
    ///
    /// Rejects empty names and names declared more than once, whether for the
    /// same type or for two different types.
    pub fn from_entries<I>(origin: &str, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (SemanticType, TargetCandidate)>,
    {
        let mut candidates: BTreeMap<SemanticType, Vec<TargetCandidate>> = BTreeMap::new();
        let mut owners = BTreeMap::new();

        for (semantic_type, mut candidate) in entries {
            candidate.name = candidate.name.trim().to_string();
            if candidate.name.is_empty() {
                return Err(StandardsError::EmptyCandidateName {
                    origin: origin.to_string(),
                    semantic_type,
                });
            }
            if let Some(first) = owners.get(&candidate.name) {
                return Err(StandardsError::DuplicateCandidate {
                    origin: origin.to_string(),
                    name: candidate.name,
                    first: *first,
                    second: semantic_type,
                });
            }
            owners.insert(candidate.name.clone(), semantic_type);
            candidates.entry(semantic_type).or_default().push(candidate);
        }

        let fingerprint = sha256_hex(canonical_form(&candidates).as_bytes());
        Ok(Self {
            origin: origin.to_string(),
            candidates,
            owners,
            fingerprint,
        })
    }

    /// Parses a TOML catalog document.
    pub fn from_toml_str(origin: &str, text: &str) -> Result<Self> {
        let entries = parse_catalog_toml(origin, text)?;
        Self::from_entries(origin, entries)
    }

    /// Parses a CSV catalog with `semantic_type,name,expected_size` columns.
    pub fn from_csv_str(origin: &str, text: &str) -> Result<Self> {
        let entries = parse_catalog_csv(origin, text)?;
        Self::from_entries(origin, entries)
    }

    /// Loads a catalog file, choosing the parser from the file extension.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        let origin = path.display().to_string();
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("toml") => Self::from_toml_str(&origin, &text),
            Some("csv") => Self::from_csv_str(&origin, &text),
            _ => Err(StandardsError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str("embedded", EMBEDDED_CATALOG)
    }

    /// Where the catalog came from (file path or `embedded`).
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// SHA-256 of the catalog's canonical content. Two catalogs with the same
    /// candidates in the same order share a fingerprint regardless of format.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Candidates declared for `semantic_type`, in declaration order.
    pub fn candidates(&self, semantic_type: SemanticType) -> &[TargetCandidate] {
        self.candidates
            .get(&semantic_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// The semantic type that declares `name`, if any.
    pub fn semantic_type_of(&self, name: &str) -> Option<SemanticType> {
        self.owners.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.owners.contains_key(name)
    }

    /// Iterates over the non-empty candidate lists in [`SemanticType`] order.
    pub fn iter(&self) -> impl Iterator<Item = (SemanticType, &[TargetCandidate])> {
        self.candidates
            .iter()
            .map(|(kind, list)| (*kind, list.as_slice()))
    }

    /// Total number of candidates across all types.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

fn canonical_form(candidates: &BTreeMap<SemanticType, Vec<TargetCandidate>>) -> String {
    let mut out = String::new();
    for (semantic_type, list) in candidates {
        for candidate in list {
            let size = candidate
                .expected_size
                .map(|size| size.to_string())
                .unwrap_or_default();
            let _ = writeln!(out, "{semantic_type}\t{}\t{size}", candidate.name);
        }
    }
    out
}
