//! Mapping diagnostics.
//!
//! Each variant carries only the names it needs. Whether a diagnostic is
//! surfaced, logged or turned into a failure is decided by the validator
//! according to the configured [`ValidationMode`](crate::ValidationMode).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminant of a [`Diagnostic`], usable as a map key or filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    UserOverrideRejected,
    MappingCollision,
    MissingRequiredDimension,
    UnmappedSourceDimension,
    UserMappingReferencesUnknownSource,
    ExtraTargetDimension,
    DimensionCountMismatch,
}

impl DiagnosticKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::UserOverrideRejected => "User override rejected",
            Self::MappingCollision => "Mapping collision",
            Self::MissingRequiredDimension => "Missing required dimension",
            Self::UnmappedSourceDimension => "Unmapped source dimension",
            Self::UserMappingReferencesUnknownSource => "User mapping references unknown source",
            Self::ExtraTargetDimension => "Target not in required list",
            Self::DimensionCountMismatch => "Dimension count mismatch",
        }
    }
}

/// A single finding produced while building a dimension mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A user override was refused because overrides are disabled and the
    /// catalog resolves the dimension to a different name.
    UserOverrideRejected {
        source: String,
        requested: String,
        resolved: String,
    },
    /// Two sources resolved to the same target; `claimed_by` keeps it.
    MappingCollision {
        source: String,
        target: String,
        claimed_by: String,
    },
    /// A required target has no source mapped to it.
    MissingRequiredDimension { target: String },
    /// A source could not be classified or was displaced by a collision.
    UnmappedSourceDimension { source: String },
    /// A user mapping key names a dimension absent from the dataset.
    UserMappingReferencesUnknownSource { source: String, target: String },
    /// A mapped target is not part of the required target list.
    ExtraTargetDimension { source: String, target: String },
    /// Number of mapped targets differs from the number of required targets.
    DimensionCountMismatch { expected: usize, actual: usize },
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::UserOverrideRejected { .. } => DiagnosticKind::UserOverrideRejected,
            Diagnostic::MappingCollision { .. } => DiagnosticKind::MappingCollision,
            Diagnostic::MissingRequiredDimension { .. } => {
                DiagnosticKind::MissingRequiredDimension
            }
            Diagnostic::UnmappedSourceDimension { .. } => DiagnosticKind::UnmappedSourceDimension,
            Diagnostic::UserMappingReferencesUnknownSource { .. } => {
                DiagnosticKind::UserMappingReferencesUnknownSource
            }
            Diagnostic::ExtraTargetDimension { .. } => DiagnosticKind::ExtraTargetDimension,
            Diagnostic::DimensionCountMismatch { .. } => DiagnosticKind::DimensionCountMismatch,
        }
    }

    /// The dimension name this diagnostic is about, if any.
    pub fn subject(&self) -> Option<&str> {
        match self {
            Diagnostic::UserOverrideRejected { source, .. } => Some(source),
            Diagnostic::MappingCollision { source, .. } => Some(source),
            Diagnostic::MissingRequiredDimension { target } => Some(target),
            Diagnostic::UnmappedSourceDimension { source } => Some(source),
            Diagnostic::UserMappingReferencesUnknownSource { source, .. } => Some(source),
            Diagnostic::ExtraTargetDimension { source, .. } => Some(source),
            Diagnostic::DimensionCountMismatch { .. } => None,
        }
    }

    /// True for diagnostics that make `error` mode fail.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Diagnostic::UserOverrideRejected { .. }
                | Diagnostic::MappingCollision { .. }
                | Diagnostic::MissingRequiredDimension { .. }
        )
    }

    /// True for diagnostics surfaced regardless of validation mode.
    pub fn is_always_surfaced(&self) -> bool {
        matches!(self, Diagnostic::UserMappingReferencesUnknownSource { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UserOverrideRejected {
                source,
                requested,
                resolved,
            } => write!(
                f,
                "user mapping {source} -> {requested} rejected (overrides disabled, catalog requires {resolved})"
            ),
            Diagnostic::MappingCollision {
                source,
                target,
                claimed_by,
            } => write!(
                f,
                "source dimension {source} resolves to {target}, already claimed by {claimed_by}"
            ),
            Diagnostic::MissingRequiredDimension { target } => {
                write!(f, "required dimension {target} has no source dimension")
            }
            Diagnostic::UnmappedSourceDimension { source } => {
                write!(f, "source dimension {source} is not mapped")
            }
            Diagnostic::UserMappingReferencesUnknownSource { source, target } => write!(
                f,
                "user mapping {source} -> {target} names a dimension absent from the dataset"
            ),
            Diagnostic::ExtraTargetDimension { source, target } => write!(
                f,
                "source dimension {source} maps to {target}, which is not a required dimension"
            ),
            Diagnostic::DimensionCountMismatch { expected, actual } => write!(
                f,
                "expected {expected} target dimensions, mapping provides {actual}"
            ),
        }
    }
}
