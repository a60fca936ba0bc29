//! Mapping builder.
//!
//! Merges user overrides with automatic detection and enforces a one-to-one
//! source to target mapping. User overrides are applied first, then the
//! remaining sources in declaration order; the first claim on a target wins.

use std::collections::BTreeSet;

use cmor_model::{
    DetectionMethod, Diagnostic, DimensionDescriptor, DimensionMappingOptions, MappingEntry,
    MappingResult, SemanticType,
};
use cmor_standards::CandidateCatalog;
use tracing::{debug, debug_span, info, warn};

use crate::detect::detect;
use crate::error::MappingValidationError;
use crate::patterns::matching_categories;
use crate::resolver::{resolve, scoped_candidates};
use crate::state::MappingState;
use crate::validate::validate;

/// Maps source dimensions onto catalog target names.
///
/// Holds only a shared reference to an immutable catalog, so one catalog can
/// serve any number of mappers across threads.
#[derive(Debug, Clone, Copy)]
pub struct DimensionMapper<'a> {
    catalog: &'a CandidateCatalog,
}

impl<'a> DimensionMapper<'a> {
    pub fn new(catalog: &'a CandidateCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a CandidateCatalog {
        self.catalog
    }

    /// Builds the mapping without applying a validation mode.
    pub fn create_mapping(
        &self,
        dimensions: &[DimensionDescriptor],
        required: &[String],
        options: &DimensionMappingOptions,
    ) -> MappingResult {
        let _span = debug_span!(
            "create_mapping",
            sources = dimensions.len(),
            required = required.len()
        )
        .entered();

        let required_set: BTreeSet<&str> = required.iter().map(String::as_str).collect();
        let sources = unique_sources(dimensions);
        let mut state = MappingState::new();

        self.apply_user_mapping(&sources, &required_set, options, &mut state);

        for dimension in &sources {
            if state.is_settled(&dimension.name) {
                continue;
            }
            match self.automatic_entry(dimension, &required_set) {
                Some(entry) => {
                    state.insert(entry);
                }
                None => debug!(source = %dimension.name, "no target for dimension"),
            }
        }

        let result = state.finish(dimensions, required);
        info!(
            mapped = result.mapping.len(),
            unmapped_sources = result.unmapped_sources.len(),
            unmapped_targets = result.unmapped_targets.len(),
            conflicts = result.conflicts.len(),
            "dimension mapping created"
        );
        result
    }

    /// Builds the mapping and applies `options.validation_mode`.
    ///
    /// With `options.enabled == false` nothing is detected or validated and
    /// every source is reported unmapped.
    pub fn map_dimensions(
        &self,
        dimensions: &[DimensionDescriptor],
        required: &[String],
        options: &DimensionMappingOptions,
    ) -> Result<MappingResult, MappingValidationError> {
        if !options.enabled {
            debug!("dimension mapping disabled, leaving dimensions untouched");
            return Ok(MappingResult {
                unmapped_sources: unique_sources(dimensions)
                    .into_iter()
                    .map(|dimension| dimension.name.clone())
                    .collect(),
                ..MappingResult::default()
            });
        }
        let result = self.create_mapping(dimensions, required, options);
        validate(result, options.validation_mode)
    }

    /// The entry automatic detection would produce for `dimension`, ignoring
    /// what other dimensions have already claimed.
    pub fn automatic_entry(
        &self,
        dimension: &DimensionDescriptor,
        required: &BTreeSet<&str>,
    ) -> Option<MappingEntry> {
        if required.contains(dimension.name.as_str()) {
            return Some(MappingEntry {
                source_name: dimension.name.clone(),
                target_name: dimension.name.clone(),
                semantic_type: self
                    .catalog
                    .semantic_type_of(&dimension.name)
                    .unwrap_or(SemanticType::Other),
                detection_method: DetectionMethod::ExactName,
            });
        }

        let Some(detection) = detect(dimension) else {
            debug!(source = %dimension.name, "dimension not classified");
            return None;
        };
        if detection.method == DetectionMethod::NamePattern {
            let categories = matching_categories(&dimension.name);
            if categories.len() > 1 {
                debug!(
                    source = %dimension.name,
                    chosen = %detection.semantic_type,
                    matches = ?categories,
                    "ambiguous dimension name"
                );
            }
        }

        let candidates = scoped_candidates(
            self.catalog,
            detection.semantic_type,
            dimension.size,
            required,
        );
        let Some(target) = resolve(detection.semantic_type, dimension.size, &candidates) else {
            debug!(
                source = %dimension.name,
                semantic_type = %detection.semantic_type,
                "no catalog candidate for semantic type"
            );
            return None;
        };
        Some(MappingEntry {
            source_name: dimension.name.clone(),
            target_name: target.to_string(),
            semantic_type: detection.semantic_type,
            detection_method: detection.method,
        })
    }

    fn apply_user_mapping(
        &self,
        sources: &[&DimensionDescriptor],
        required: &BTreeSet<&str>,
        options: &DimensionMappingOptions,
        state: &mut MappingState,
    ) {
        if options.user_mapping.is_empty() {
            return;
        }

        let known: BTreeSet<&str> = sources.iter().map(|d| d.name.as_str()).collect();
        for (source, target) in &options.user_mapping {
            if !known.contains(source.as_str()) {
                warn!(
                    source = %source,
                    target = %target,
                    "user dimension mapping references a dimension not in the dataset"
                );
                state.push_diagnostic(Diagnostic::UserMappingReferencesUnknownSource {
                    source: source.clone(),
                    target: target.clone(),
                });
            }
        }

        for dimension in sources {
            let Some(requested) = options.user_mapping.get(&dimension.name) else {
                continue;
            };
            if !options.allow_override
                && let Some(automatic) = self.automatic_entry(dimension, required)
                && automatic.target_name != *requested
            {
                debug!(
                    source = %dimension.name,
                    requested = %requested,
                    resolved = %automatic.target_name,
                    "user mapping rejected, overrides disabled"
                );
                state.push_diagnostic(Diagnostic::UserOverrideRejected {
                    source: dimension.name.clone(),
                    requested: requested.clone(),
                    resolved: automatic.target_name,
                });
                continue;
            }

            let semantic_type = self
                .catalog
                .semantic_type_of(requested)
                .or_else(|| detect(dimension).map(|d| d.semantic_type))
                .unwrap_or(SemanticType::Other);
            state.insert(MappingEntry {
                source_name: dimension.name.clone(),
                target_name: requested.clone(),
                semantic_type,
                detection_method: DetectionMethod::UserOverride,
            });
        }
    }
}

/// First occurrence of each source name, in declaration order.
fn unique_sources(dimensions: &[DimensionDescriptor]) -> Vec<&DimensionDescriptor> {
    let mut seen = BTreeSet::new();
    let mut unique = Vec::with_capacity(dimensions.len());
    for dimension in dimensions {
        if seen.insert(dimension.name.as_str()) {
            unique.push(dimension);
        } else {
            debug!(source = %dimension.name, "duplicate source dimension ignored");
        }
    }
    unique
}
