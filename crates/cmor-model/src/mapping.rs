//! Mapping entries and the complete mapping result.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::dimension::SemanticType;

/// How a mapping entry was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// Explicit user-supplied assignment.
    UserOverride,
    /// Source name already equals a required target name.
    ExactName,
    /// Classified from `standard_name` / `axis` attributes.
    Attribute,
    /// Classified from the dimension name.
    NamePattern,
    /// Classified from coordinate values.
    ValueRange,
}

impl DetectionMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserOverride => "user_override",
            Self::ExactName => "exact_name",
            Self::Attribute => "attribute",
            Self::NamePattern => "name_pattern",
            Self::ValueRange => "value_range",
        }
    }
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single accepted `source -> target` assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingEntry {
    pub source_name: String,
    pub target_name: String,
    pub semantic_type: SemanticType,
    pub detection_method: DetectionMethod,
}

impl MappingEntry {
    /// True when applying the entry changes the dimension name.
    pub fn is_rename(&self) -> bool {
        self.source_name != self.target_name
    }
}

/// A `source -> target` pair rejected because the target was already claimed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingConflict {
    pub source_name: String,
    pub target_name: String,
}

/// Complete outcome of mapping one dataset's dimensions.
///
/// Always fully populated, even when diagnostics are present, so callers can
/// decide to proceed despite warnings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingResult {
    /// Accepted entries in processing order.
    pub entries: Vec<MappingEntry>,
    /// Injective `source -> target` view of `entries`.
    pub mapping: BTreeMap<String, String>,
    /// Sources left without a target, in declaration order.
    pub unmapped_sources: Vec<String>,
    /// Required targets without a source, in required order.
    pub unmapped_targets: Vec<String>,
    /// Pairs rejected due to collision, in processing order.
    pub conflicts: Vec<MappingConflict>,
    pub diagnostics: Vec<Diagnostic>,
}

impl MappingResult {
    /// Target assigned to `source`, if any.
    pub fn target_for(&self, source: &str) -> Option<&str> {
        self.mapping.get(source).map(String::as_str)
    }

    pub fn entry_for(&self, source: &str) -> Option<&MappingEntry> {
        self.entries.iter().find(|entry| entry.source_name == source)
    }

    /// Rename plan for the structural renamer: entries whose name changes.
    pub fn renames(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .filter(|entry| entry.is_rename())
            .map(|entry| (entry.source_name.as_str(), entry.target_name.as_str()))
            .collect()
    }

    /// True when every required target is covered and nothing collided.
    pub fn is_complete(&self) -> bool {
        self.unmapped_targets.is_empty() && self.conflicts.is_empty()
    }

    pub fn has_fatal_issues(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_fatal)
    }

    pub fn diagnostics_of(&self, kind: DiagnosticKind) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(move |diagnostic| diagnostic.kind() == kind)
    }

    /// Number of entries per detection method.
    pub fn count_by_method(&self) -> BTreeMap<DetectionMethod, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.detection_method).or_insert(0) += 1;
        }
        counts
    }
}
