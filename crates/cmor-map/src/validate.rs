//! Applies a validation mode to a mapping result.

use cmor_model::{Diagnostic, MappingResult, ValidationMode};
use tracing::{error, warn};

use crate::error::MappingValidationError;

/// True when `error` mode must reject `result`.
pub fn is_fatal(result: &MappingResult) -> bool {
    !result.unmapped_targets.is_empty()
        || !result.conflicts.is_empty()
        || result
            .diagnostics
            .iter()
            .any(|d| matches!(d, Diagnostic::UserOverrideRejected { .. }))
}

/// Validates `result` under `mode`.
///
/// - `Ignore` drops every diagnostic except unknown user mapping sources.
/// - `Warn` logs every diagnostic and returns the result.
/// - `Error` fails on missing targets, conflicts or rejected overrides;
///   otherwise behaves like `Warn`.
///
/// Unknown user mapping sources are logged when the mapping is built, so
/// they are not repeated here.
pub fn validate(
    mut result: MappingResult,
    mode: ValidationMode,
) -> Result<MappingResult, MappingValidationError> {
    match mode {
        ValidationMode::Ignore => {
            result.diagnostics.retain(Diagnostic::is_always_surfaced);
            Ok(result)
        }
        ValidationMode::Warn => {
            emit_warnings(&result);
            Ok(result)
        }
        ValidationMode::Error => {
            if is_fatal(&result) {
                let err = MappingValidationError::from_result(result);
                error!(
                    missing = err.missing_targets.len(),
                    conflicts = err.conflicts.len(),
                    rejected = err.rejected_overrides.len(),
                    "dimension mapping failed validation"
                );
                return Err(err);
            }
            emit_warnings(&result);
            Ok(result)
        }
    }
}

fn emit_warnings(result: &MappingResult) {
    for diagnostic in &result.diagnostics {
        if diagnostic.is_always_surfaced() {
            continue;
        }
        warn!(
            kind = diagnostic.kind().label(),
            subject = diagnostic.subject().unwrap_or_default(),
            "{diagnostic}"
        );
    }
}

#[cfg(test)]
mod tests {
    use cmor_model::MappingConflict;

    use super::*;

    fn result_with(diagnostics: Vec<Diagnostic>) -> MappingResult {
        MappingResult {
            diagnostics,
            ..MappingResult::default()
        }
    }

    #[test]
    fn ignore_keeps_only_unknown_source_diagnostics() {
        let result = result_with(vec![
            Diagnostic::UnmappedSourceDimension {
                source: "bnds".to_string(),
            },
            Diagnostic::UserMappingReferencesUnknownSource {
                source: "foo".to_string(),
                target: "bar".to_string(),
            },
        ]);
        let validated = validate(result, ValidationMode::Ignore).expect("ignore never fails");
        assert_eq!(validated.diagnostics.len(), 1);
        assert!(validated.diagnostics[0].is_always_surfaced());
    }

    #[test]
    fn error_mode_fails_only_on_fatal_problems() {
        let benign = result_with(vec![Diagnostic::UnmappedSourceDimension {
            source: "bnds".to_string(),
        }]);
        assert!(validate(benign, ValidationMode::Error).is_ok());

        let conflicted = MappingResult {
            conflicts: vec![MappingConflict {
                source_name: "lon".to_string(),
                target_name: "lon".to_string(),
            }],
            ..MappingResult::default()
        };
        assert!(validate(conflicted.clone(), ValidationMode::Warn).is_ok());
        let err = validate(conflicted, ValidationMode::Error).unwrap_err();
        assert_eq!(err.conflicts.len(), 1);
        assert!(err.missing_targets.is_empty());
    }
}
