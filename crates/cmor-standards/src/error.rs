//! Error types for catalog loading operations.

use std::path::PathBuf;

use cmor_model::SemanticType;
use thiserror::Error;

/// Errors that can occur when loading a dimension candidate catalog.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML catalog {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse CSV catalog {origin}: {message}")]
    Csv { origin: String, message: String },

    #[error("invalid catalog {origin}: {message}")]
    InvalidCatalog { origin: String, message: String },

    #[error("catalog {origin}: candidate '{name}' declared for {first} and {second}")]
    DuplicateCandidate {
        origin: String,
        name: String,
        first: SemanticType,
        second: SemanticType,
    },

    #[error("catalog {origin}: empty candidate name for {semantic_type}")]
    EmptyCandidateName {
        origin: String,
        semantic_type: SemanticType,
    },

    #[error("unsupported catalog format for {path} (expected .toml or .csv)")]
    UnsupportedFormat { path: PathBuf },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn invalid(origin: &str, message: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            origin: origin.to_string(),
            message: message.into(),
        }
    }
}

/// Result type for catalog loading operations.
pub type Result<T> = std::result::Result<T, StandardsError>;
