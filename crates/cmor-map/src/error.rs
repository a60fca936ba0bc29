//! Error type for `error` validation mode.

use std::fmt;

use cmor_model::{Diagnostic, MappingConflict, MappingResult};

/// A user mapping refused because overrides are disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedOverride {
    pub source: String,
    pub requested: String,
    pub resolved: String,
}

/// Raised in `error` mode when the mapping is incomplete or inconsistent.
///
/// Lists every problem at once; the full result is kept for callers that
/// want to report the partial mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct MappingValidationError {
    pub missing_targets: Vec<String>,
    pub conflicts: Vec<MappingConflict>,
    pub rejected_overrides: Vec<RejectedOverride>,
    /// Informational; unmapped sources alone never fail validation.
    pub unmapped_sources: Vec<String>,
    pub result: Box<MappingResult>,
}

impl MappingValidationError {
    pub fn from_result(result: MappingResult) -> Self {
        let rejected_overrides = result
            .diagnostics
            .iter()
            .filter_map(|diagnostic| match diagnostic {
                Diagnostic::UserOverrideRejected {
                    source,
                    requested,
                    resolved,
                } => Some(RejectedOverride {
                    source: source.clone(),
                    requested: requested.clone(),
                    resolved: resolved.clone(),
                }),
                _ => None,
            })
            .collect();
        Self {
            missing_targets: result.unmapped_targets.clone(),
            conflicts: result.conflicts.clone(),
            rejected_overrides,
            unmapped_sources: result.unmapped_sources.clone(),
            result: Box::new(result),
        }
    }

    /// Diagnostics that caused the failure.
    pub fn fatal_diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.result.diagnostics.iter().filter(|d| d.is_fatal())
    }

    pub fn into_result(self) -> MappingResult {
        *self.result
    }
}

impl fmt::Display for MappingValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dimension mapping validation failed")?;
        if !self.missing_targets.is_empty() {
            write!(
                f,
                "\n  missing required dimensions: {}",
                self.missing_targets.join(", ")
            )?;
        }
        if !self.conflicts.is_empty() {
            let pairs: Vec<String> = self
                .conflicts
                .iter()
                .map(|c| format!("{} -> {}", c.source_name, c.target_name))
                .collect();
            write!(f, "\n  conflicting dimensions: {}", pairs.join(", "))?;
        }
        if !self.rejected_overrides.is_empty() {
            let rejected: Vec<String> = self
                .rejected_overrides
                .iter()
                .map(|r| format!("{} -> {} (expected {})", r.source, r.requested, r.resolved))
                .collect();
            write!(f, "\n  rejected user mappings: {}", rejected.join(", "))?;
        }
        if !self.unmapped_sources.is_empty() {
            write!(
                f,
                "\n  unmapped source dimensions: {}",
                self.unmapped_sources.join(", ")
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for MappingValidationError {}
