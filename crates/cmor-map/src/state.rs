//! Accumulated state of a single mapping run.
//!
//! Tracks which targets are claimed and by whom, collects conflicts and
//! diagnostics, and assembles the final [`MappingResult`].

use std::collections::{BTreeMap, BTreeSet};

use cmor_model::{
    Diagnostic, DimensionDescriptor, MappingConflict, MappingEntry, MappingResult,
};
use tracing::debug;

#[derive(Debug, Default)]
pub struct MappingState {
    entries: Vec<MappingEntry>,
    /// target -> source holding it
    claims: BTreeMap<String, String>,
    /// Sources already settled: mapped or displaced by a collision.
    settled: BTreeSet<String>,
    conflicts: Vec<MappingConflict>,
    diagnostics: Vec<Diagnostic>,
}

impl MappingState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_settled(&self, source: &str) -> bool {
        self.settled.contains(source)
    }

    pub fn claimant(&self, target: &str) -> Option<&str> {
        self.claims.get(target).map(String::as_str)
    }

    /// Records `entry` unless its target is already claimed, in which case
    /// the earlier claim stands and the entry becomes a conflict.
    pub fn insert(&mut self, entry: MappingEntry) -> bool {
        self.settled.insert(entry.source_name.clone());
        if let Some(holder) = self.claims.get(&entry.target_name) {
            debug!(
                source = %entry.source_name,
                target = %entry.target_name,
                claimed_by = %holder,
                "target already claimed"
            );
            self.diagnostics.push(Diagnostic::MappingCollision {
                source: entry.source_name.clone(),
                target: entry.target_name.clone(),
                claimed_by: holder.clone(),
            });
            self.conflicts.push(MappingConflict {
                source_name: entry.source_name,
                target_name: entry.target_name,
            });
            return false;
        }
        debug!(
            source = %entry.source_name,
            target = %entry.target_name,
            method = %entry.detection_method,
            "mapped dimension"
        );
        self.claims
            .insert(entry.target_name.clone(), entry.source_name.clone());
        self.entries.push(entry);
        true
    }

    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Builds the result: unmapped lists plus the end-of-run diagnostics.
    pub fn finish(self, sources: &[DimensionDescriptor], required: &[String]) -> MappingResult {
        let MappingState {
            entries,
            claims,
            conflicts,
            mut diagnostics,
            ..
        } = self;

        let mapping: BTreeMap<String, String> = entries
            .iter()
            .map(|entry| (entry.source_name.clone(), entry.target_name.clone()))
            .collect();

        let mut seen = BTreeSet::new();
        let unmapped_sources: Vec<String> = sources
            .iter()
            .map(|dimension| dimension.name.clone())
            .filter(|name| !mapping.contains_key(name) && seen.insert(name.clone()))
            .collect();

        let mut seen = BTreeSet::new();
        let unmapped_targets: Vec<String> = required
            .iter()
            .filter(|target| !claims.contains_key(*target) && seen.insert(*target))
            .cloned()
            .collect();

        for target in &unmapped_targets {
            diagnostics.push(Diagnostic::MissingRequiredDimension {
                target: target.clone(),
            });
        }
        for source in &unmapped_sources {
            diagnostics.push(Diagnostic::UnmappedSourceDimension {
                source: source.clone(),
            });
        }
        if !required.is_empty() {
            let required_set: BTreeSet<&str> = required.iter().map(String::as_str).collect();
            for entry in &entries {
                if !required_set.contains(entry.target_name.as_str()) {
                    diagnostics.push(Diagnostic::ExtraTargetDimension {
                        source: entry.source_name.clone(),
                        target: entry.target_name.clone(),
                    });
                }
            }
            if claims.len() != required_set.len() {
                diagnostics.push(Diagnostic::DimensionCountMismatch {
                    expected: required_set.len(),
                    actual: claims.len(),
                });
            }
        }

        MappingResult {
            entries,
            mapping,
            unmapped_sources,
            unmapped_targets,
            conflicts,
            diagnostics,
        }
    }
}

#[cfg(test)]
mod tests {
    use cmor_model::{DetectionMethod, SemanticType};

    use super::*;

    fn entry(source: &str, target: &str) -> MappingEntry {
        MappingEntry {
            source_name: source.to_string(),
            target_name: target.to_string(),
            semantic_type: SemanticType::Longitude,
            detection_method: DetectionMethod::NamePattern,
        }
    }

    #[test]
    fn first_claim_wins() {
        let mut state = MappingState::new();
        assert!(state.insert(entry("x", "lon")));
        assert!(!state.insert(entry("lon", "lon")));
        assert_eq!(state.claimant("lon"), Some("x"));
        assert!(state.is_settled("lon"));

        let sources = vec![
            DimensionDescriptor::new("x", 360),
            DimensionDescriptor::new("lon", 360),
        ];
        let result = state.finish(&sources, &["lon".to_string()]);
        assert_eq!(result.target_for("x"), Some("lon"));
        assert_eq!(result.unmapped_sources, vec!["lon"]);
        assert_eq!(
            result.conflicts,
            vec![MappingConflict {
                source_name: "lon".to_string(),
                target_name: "lon".to_string(),
            }]
        );
        assert!(result.unmapped_targets.is_empty());
    }
}
