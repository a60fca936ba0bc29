use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown semantic type: {0}")]
    UnknownSemanticType(String),
    #[error("unknown validation mode: {0} (expected ignore, warn or error)")]
    UnknownValidationMode(String),
    #[error("invalid user mapping entry '{0}' (expected SOURCE=TARGET)")]
    InvalidUserMapping(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
