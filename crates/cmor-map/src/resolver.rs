//! Picks a standardized target name for a classified dimension.

use std::collections::BTreeSet;

use cmor_model::SemanticType;
use cmor_standards::{CandidateCatalog, TargetCandidate};
use tracing::trace;

/// Chooses among `candidates` (already scoped, in catalog order): a
/// candidate whose expected size equals `size`, else the first candidate.
pub fn resolve<'a>(
    semantic_type: SemanticType,
    size: usize,
    candidates: &[&'a TargetCandidate],
) -> Option<&'a str> {
    let chosen = candidates
        .iter()
        .copied()
        .find(|candidate| candidate.expected_size == Some(size))
        .or_else(|| candidates.first().copied())?;
    trace!(
        semantic_type = %semantic_type,
        size,
        target = %chosen.name,
        candidates = candidates.len(),
        "resolved target"
    );
    Some(chosen.name.as_str())
}

/// Resolves against the full, unscoped catalog list for `semantic_type`.
pub fn resolve_in_catalog(
    semantic_type: SemanticType,
    size: usize,
    catalog: &CandidateCatalog,
) -> Option<&str> {
    let candidates: Vec<&TargetCandidate> = catalog.candidates(semantic_type).iter().collect();
    resolve(semantic_type, size, &candidates)
}

/// Narrows the catalog list to the required targets of `semantic_type`
/// that fit `size`. A required candidate whose expected size differs from
/// `size` is dropped. With nothing left the full list is returned, so a size
/// match elsewhere in the catalog still wins.
pub fn scoped_candidates<'a>(
    catalog: &'a CandidateCatalog,
    semantic_type: SemanticType,
    size: usize,
    required: &BTreeSet<&str>,
) -> Vec<&'a TargetCandidate> {
    let all = catalog.candidates(semantic_type);
    let scoped: Vec<&TargetCandidate> = all
        .iter()
        .filter(|candidate| required.contains(candidate.name.as_str()))
        .filter(|candidate| candidate.expected_size.is_none_or(|expected| expected == size))
        .collect();
    if scoped.is_empty() {
        all.iter().collect()
    } else {
        scoped
    }
}
