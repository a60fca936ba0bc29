//! Target dimension catalog for the mapping engine.
//!
//! This crate provides:
//!
//! - [`CandidateCatalog`]: the immutable `semantic type -> candidate names`
//!   table consulted by the resolver
//! - loaders for TOML and CSV catalog files
//! - an embedded default catalog with CMIP coordinate names
//!
//! # Catalog Format
//!
//! ```text
//! [catalog]
//! schema = "cmor-dims.dimension-candidates"
//! schema_version = 1
//!
//! [[candidates.pressure]]
//! name = "plev19"
//! expected_size = 19
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use cmor_model::SemanticType;
//! use cmor_standards::CandidateCatalog;
//!
//! let catalog = CandidateCatalog::embedded()?;
//! for candidate in catalog.candidates(SemanticType::Pressure) {
//!     println!("{} {:?}", candidate.name, candidate.expected_size);
//! }
//! ```

#![deny(unsafe_code)]

pub mod catalog;
mod csv_loader;
pub mod document;
pub mod embedded;
pub mod error;
pub mod hash;
pub mod paths;

pub use catalog::{CandidateCatalog, TargetCandidate};
pub use document::{CATALOG_SCHEMA, CATALOG_SCHEMA_VERSION};
pub use error::{Result, StandardsError};
pub use paths::{CATALOG_ENV_VAR, load_catalog};
