//! Utility functions for mapping operations.

/// Normalizes a dimension name for pattern matching: trimmed, lowercased,
/// with `-`, `.` and spaces folded to `_`.
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_lowercase().replace(['-', '.', ' '], "_")
}

/// Normalizes an attribute value for dictionary lookup.
pub fn normalize_value(raw: &str) -> String {
    raw.trim().to_lowercase()
}
