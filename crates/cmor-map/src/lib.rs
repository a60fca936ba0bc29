//! Dimension classification and mapping onto standardized target names.
//!
//! A dataset's dimensions are classified by attributes, name and coordinate
//! values, resolved to catalog target names (sizes disambiguate), merged
//! with user overrides and validated under a configurable mode.
//!
//! # Example
//!
//! ```rust,ignore
//! use cmor_map::map_dimensions;
//! use cmor_model::{DimensionDescriptor, DimensionMappingOptions};
//! use cmor_standards::CandidateCatalog;
//!
//! let catalog = CandidateCatalog::embedded()?;
//! let dims = vec![
//!     DimensionDescriptor::new("latitude", 180),
//!     DimensionDescriptor::new("lev", 19),
//! ];
//! let required = vec!["lat".to_string(), "plev19".to_string()];
//! let result = map_dimensions(&catalog, &dims, &required, &DimensionMappingOptions::default())?;
//! assert_eq!(result.target_for("lev"), Some("plev19"));
//! ```

#![deny(unsafe_code)]

pub mod attributes;
pub mod detect;
pub mod engine;
pub mod error;
pub mod patterns;
pub mod resolver;
mod state;
pub mod utils;
pub mod validate;
pub mod values;

use cmor_model::{DimensionDescriptor, DimensionMappingOptions, MappingResult};
use cmor_standards::CandidateCatalog;

pub use attributes::classify_by_attributes;
pub use detect::{Detection, detect};
pub use engine::DimensionMapper;
pub use error::{MappingValidationError, RejectedOverride};
pub use patterns::classify_by_name;
pub use resolver::{resolve, resolve_in_catalog};
pub use validate::validate;
pub use values::classify_by_values;

/// Builds and validates a mapping in one call.
pub fn map_dimensions(
    catalog: &CandidateCatalog,
    dimensions: &[DimensionDescriptor],
    required: &[String],
    options: &DimensionMappingOptions,
) -> Result<MappingResult, MappingValidationError> {
    DimensionMapper::new(catalog).map_dimensions(dimensions, required, options)
}
