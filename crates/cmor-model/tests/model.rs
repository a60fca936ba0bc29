use std::str::FromStr;

use cmor_model::{
    Diagnostic, DiagnosticKind, DimensionDescriptor, DimensionMappingOptions, ModelError,
    SemanticType, ValidationMode, parse_user_mapping_entry,
};

#[test]
fn semantic_type_parses_and_displays() {
    assert_eq!(SemanticType::from_str("latitude").unwrap(), SemanticType::Latitude);
    assert_eq!(
        SemanticType::from_str(" Model-Level ").unwrap(),
        SemanticType::ModelLevel
    );
    assert_eq!(SemanticType::ScalarPoint.to_string(), "scalar_point");
    assert!(matches!(
        SemanticType::from_str("altitude"),
        Err(ModelError::UnknownSemanticType(_))
    ));
    for kind in SemanticType::ALL {
        assert_eq!(SemanticType::from_str(kind.as_str()).unwrap(), kind);
    }
}

#[test]
fn semantic_type_serializes_snake_case() {
    let json = serde_json::to_string(&SemanticType::ModelLevel).unwrap();
    assert_eq!(json, r#""model_level""#);
    assert!(SemanticType::Pressure.is_vertical());
    assert!(!SemanticType::Time.is_vertical());
    assert!(!SemanticType::Other.is_specific());
}

#[test]
fn descriptor_attribute_lookup_is_case_insensitive_and_skips_blanks() {
    let dim = DimensionDescriptor::new("y", 180)
        .with_attribute("Standard_Name", " latitude ")
        .with_attribute("units", "  ");

    assert_eq!(dim.attribute("standard_name"), Some("latitude"));
    assert_eq!(dim.attribute("units"), None);
    assert_eq!(dim.attribute("axis"), None);
    assert!(dim.samples().is_empty());
}

#[test]
fn descriptor_deserializes_with_defaults() {
    let dim: DimensionDescriptor =
        serde_json::from_str(r#"{"name": "lev", "size": 19}"#).expect("parse descriptor");
    assert_eq!(dim.name, "lev");
    assert_eq!(dim.size, 19);
    assert!(dim.attributes.is_empty());
    assert!(dim.sample_values.is_none());
}

#[test]
fn options_default_and_strict() {
    let defaults = DimensionMappingOptions::default();
    assert!(defaults.enabled);
    assert!(defaults.allow_override);
    assert_eq!(defaults.validation_mode, ValidationMode::Warn);

    let strict = DimensionMappingOptions::strict();
    assert!(!strict.allow_override);
    assert_eq!(strict.validation_mode, ValidationMode::Error);
}

#[test]
fn options_deserialize_from_toml() {
    let options: DimensionMappingOptions = toml::from_str(
        r#"
validation_mode = "error"
allow_override = false

[user_mapping]
lev = "plev19"
"#,
    )
    .expect("parse options");

    assert!(options.enabled);
    assert_eq!(options.validation_mode, ValidationMode::Error);
    assert!(!options.allow_override);
    assert_eq!(options.user_mapping.get("lev").map(String::as_str), Some("plev19"));
}

#[test]
fn validation_mode_parses_aliases() {
    assert_eq!("WARN".parse::<ValidationMode>().unwrap(), ValidationMode::Warn);
    assert_eq!("strict".parse::<ValidationMode>().unwrap(), ValidationMode::Error);
    assert!("loud".parse::<ValidationMode>().is_err());
}

#[test]
fn user_mapping_entry_parsing() {
    assert_eq!(
        parse_user_mapping_entry("lev=plev19").unwrap(),
        ("lev".to_string(), "plev19".to_string())
    );
    assert!(parse_user_mapping_entry("lev").is_err());
    assert!(parse_user_mapping_entry("=plev19").is_err());
}

#[test]
fn diagnostic_fatality_and_messages() {
    let collision = Diagnostic::MappingCollision {
        source: "lon".to_string(),
        target: "lon".to_string(),
        claimed_by: "x".to_string(),
    };
    assert!(collision.is_fatal());
    assert_eq!(collision.kind(), DiagnosticKind::MappingCollision);
    assert_eq!(collision.subject(), Some("lon"));
    assert_eq!(
        collision.to_string(),
        "source dimension lon resolves to lon, already claimed by x"
    );

    let unknown = Diagnostic::UserMappingReferencesUnknownSource {
        source: "depth".to_string(),
        target: "olevel".to_string(),
    };
    assert!(!unknown.is_fatal());
    assert!(unknown.is_always_surfaced());

    let count = Diagnostic::DimensionCountMismatch {
        expected: 4,
        actual: 3,
    };
    assert!(!count.is_fatal());
    assert_eq!(count.subject(), None);
}
