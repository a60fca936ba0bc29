//! Catalog source resolution.

use std::path::{Path, PathBuf};

use crate::catalog::CandidateCatalog;
use crate::error::Result;

/// Environment variable for overriding the catalog file.
pub const CATALOG_ENV_VAR: &str = "CMOR_DIMENSION_CATALOG";

/// Catalog path from the environment, if set and non-empty.
pub fn catalog_path_from_env() -> Option<PathBuf> {
    std::env::var_os(CATALOG_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Load the catalog to use for this process.
///
/// Resolution order:
/// 1. `explicit` path (e.g. a `--catalog` flag)
/// 2. `CMOR_DIMENSION_CATALOG` environment variable
/// 3. the embedded default catalog
pub fn load_catalog(explicit: Option<&Path>) -> Result<CandidateCatalog> {
    if let Some(path) = explicit {
        return CandidateCatalog::load(path);
    }
    if let Some(path) = catalog_path_from_env() {
        return CandidateCatalog::load(&path);
    }
    CandidateCatalog::embedded()
}
