//! CSV catalog parsing.
//!
//! Expected header: `semantic_type,name,expected_size`. Rows keep their file
//! order, which is the declaration order used by the resolver.

use cmor_model::SemanticType;
use csv::ReaderBuilder;

use crate::catalog::TargetCandidate;
use crate::error::{Result, StandardsError};

const REQUIRED_COLUMNS: [&str; 2] = ["semantic_type", "name"];

pub(crate) fn parse_catalog_csv(
    origin: &str,
    text: &str,
) -> Result<Vec<(SemanticType, TargetCandidate)>> {
    let csv_error = |e: csv::Error| StandardsError::Csv {
        origin: origin.to_string(),
        message: e.to_string(),
    };

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').to_lowercase())
        .collect();

    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(StandardsError::invalid(
                origin,
                format!("missing column '{column}'"),
            ));
        }
    }
    let position = |name: &str| headers.iter().position(|h| h == name);
    let type_idx = position("semantic_type");
    let name_idx = position("name");
    let size_idx = position("expected_size");

    let mut entries = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.map_err(csv_error)?;
        let get = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("");

        let raw_type = get(type_idx);
        if raw_type.is_empty() && get(name_idx).is_empty() {
            continue;
        }
        let semantic_type: SemanticType = raw_type
            .parse()
            .map_err(|e| StandardsError::invalid(origin, format!("row {}: {e}", line + 1)))?;

        let raw_size = get(size_idx);
        let expected_size = if raw_size.is_empty() {
            None
        } else {
            Some(raw_size.parse::<usize>().map_err(|_| {
                StandardsError::invalid(
                    origin,
                    format!("row {}: invalid expected_size '{raw_size}'", line + 1),
                )
            })?)
        };

        entries.push((
            semantic_type,
            TargetCandidate {
                name: get(name_idx).to_string(),
                expected_size,
            },
        ));
    }
    Ok(entries)
}
