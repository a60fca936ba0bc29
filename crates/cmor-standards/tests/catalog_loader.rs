use std::fs;
use std::path::{Path, PathBuf};

use cmor_model::SemanticType;
use cmor_standards::{CandidateCatalog, StandardsError, load_catalog};

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "cmor-standards-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

fn names(catalog: &CandidateCatalog, kind: SemanticType) -> Vec<&str> {
    catalog
        .candidates(kind)
        .iter()
        .map(|c| c.name.as_str())
        .collect()
}

#[test]
fn embedded_catalog_loads() {
    let catalog = CandidateCatalog::embedded().expect("load embedded catalog");
    assert_eq!(catalog.origin(), "embedded");
    assert_eq!(names(&catalog, SemanticType::Latitude)[0], "lat");
    assert_eq!(names(&catalog, SemanticType::Longitude)[0], "lon");
    assert_eq!(names(&catalog, SemanticType::Time)[0], "time");

    let plev19 = catalog
        .candidates(SemanticType::Pressure)
        .iter()
        .find(|c| c.name == "plev19")
        .expect("plev19 candidate");
    assert_eq!(plev19.expected_size, Some(19));
    assert_eq!(catalog.semantic_type_of("alevel"), Some(SemanticType::ModelLevel));
    assert!(catalog.candidates(SemanticType::Other).is_empty());
}

#[test]
fn toml_and_csv_catalogs_share_fingerprint() {
    let toml = CandidateCatalog::from_toml_str(
        "inline.toml",
        r#"
[catalog]
schema = "cmor-dims.dimension-candidates"
schema_version = 1

[[candidates.pressure]]
name = "plev8"
expected_size = 8

[[candidates.pressure]]
name = "plev19"
expected_size = 19

[[candidates.latitude]]
name = "lat"
"#,
    )
    .expect("parse toml");

    let csv = CandidateCatalog::from_csv_str(
        "inline.csv",
        "semantic_type,name,expected_size\n\
         latitude,lat,\n\
         pressure,plev8,8\n\
         pressure,plev19,19\n",
    )
    .expect("parse csv");

    assert_eq!(names(&toml, SemanticType::Pressure), vec!["plev8", "plev19"]);
    assert_eq!(names(&csv, SemanticType::Pressure), vec!["plev8", "plev19"]);
    assert_eq!(toml.fingerprint(), csv.fingerprint());
}

#[test]
fn rejects_wrong_schema() {
    let err = CandidateCatalog::from_toml_str(
        "bad.toml",
        r#"
[catalog]
schema = "something-else"
schema_version = 1
"#,
    )
    .unwrap_err();
    assert!(matches!(err, StandardsError::InvalidCatalog { .. }));
}

#[test]
fn rejects_unknown_semantic_type() {
    let err = CandidateCatalog::from_toml_str(
        "bad.toml",
        r#"
[catalog]
schema = "cmor-dims.dimension-candidates"
schema_version = 1

[[candidates.salinity]]
name = "so"
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("salinity"));
}

#[test]
fn rejects_bad_csv_size() {
    let err = CandidateCatalog::from_csv_str(
        "bad.csv",
        "semantic_type,name,expected_size\npressure,plev19,nineteen\n",
    )
    .unwrap_err();
    assert!(err.to_string().contains("nineteen"));
}

#[test]
fn rejects_csv_without_name_column() {
    let err =
        CandidateCatalog::from_csv_str("bad.csv", "semantic_type,size\npressure,19\n").unwrap_err();
    assert!(matches!(err, StandardsError::InvalidCatalog { .. }));
}

#[test]
fn loads_catalog_file_by_extension() {
    let dir = unique_temp_dir("load");
    let csv_path = dir.join("catalog.csv");
    write(&csv_path, "semantic_type,name\ntime,time\n");
    let catalog = load_catalog(Some(&csv_path)).expect("load csv catalog");
    assert_eq!(names(&catalog, SemanticType::Time), vec!["time"]);
    assert_eq!(catalog.origin(), csv_path.display().to_string());

    let txt_path = dir.join("catalog.txt");
    write(&txt_path, "time,time\n");
    let err = CandidateCatalog::load(&txt_path).unwrap_err();
    assert!(matches!(err, StandardsError::UnsupportedFormat { .. }));

    let missing = CandidateCatalog::load(&dir.join("missing.toml")).unwrap_err();
    assert!(matches!(missing, StandardsError::Io { .. }));

    let _ = fs::remove_dir_all(&dir);
}
