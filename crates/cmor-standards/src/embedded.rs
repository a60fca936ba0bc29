//! Embedded catalog data.
//!
//! The default catalog is compiled in with `include_str!()` so the engine
//! works without any file on disk.

/// Default dimension candidate catalog (TOML).
pub const EMBEDDED_CATALOG: &str = include_str!("../data/dimension_candidates.toml");
