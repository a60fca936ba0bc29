pub mod diagnostic;
pub mod dimension;
pub mod error;
pub mod mapping;
pub mod options;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use dimension::{DimensionDescriptor, SemanticType, lookup_attribute};
pub use error::{ModelError, Result};
pub use mapping::{DetectionMethod, MappingConflict, MappingEntry, MappingResult};
pub use options::{DimensionMappingOptions, ValidationMode, parse_user_mapping_entry};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_result_counts_and_renames() {
        let mut result = MappingResult::default();
        for (source, target, method) in [
            ("time", "time", DetectionMethod::ExactName),
            ("lev", "plev19", DetectionMethod::NamePattern),
            ("latitude", "lat", DetectionMethod::NamePattern),
        ] {
            result.mapping.insert(source.to_string(), target.to_string());
            result.entries.push(MappingEntry {
                source_name: source.to_string(),
                target_name: target.to_string(),
                semantic_type: SemanticType::Other,
                detection_method: method,
            });
        }

        assert_eq!(result.renames(), vec![("lev", "plev19"), ("latitude", "lat")]);
        let counts = result.count_by_method();
        assert_eq!(counts.get(&DetectionMethod::NamePattern), Some(&2));
        assert_eq!(counts.get(&DetectionMethod::ExactName), Some(&1));
        assert!(result.is_complete());
        assert!(!result.has_fatal_issues());
    }

    #[test]
    fn result_serializes() {
        let result = MappingResult {
            diagnostics: vec![Diagnostic::MissingRequiredDimension {
                target: "plev19".to_string(),
            }],
            unmapped_targets: vec!["plev19".to_string()],
            ..MappingResult::default()
        };
        let json = serde_json::to_string(&result).expect("serialize result");
        assert!(json.contains(r#""kind":"missing_required_dimension""#));
        let round: MappingResult = serde_json::from_str(&json).expect("deserialize result");
        assert_eq!(round, result);
        assert!(round.has_fatal_issues());
        assert!(!round.is_complete());
    }
}
