//! Error types for profile construction

use thiserror::Error;

/// Errors raised while building a [`Profile`](crate::Profile).
///
/// These are construction defects, not validation outcomes: a profile that
/// fails a rule is still a well-formed profile.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    /// The kind tag is not one of [`ProfileKind::ALL`](crate::ProfileKind::ALL).
    #[error("Unrecognized profile kind: '{kind}'")]
    UnrecognizedKind {
        /// The tag as supplied by the caller
        kind: String,
    },
}

impl ProfileError {
    /// Creates an [`UnrecognizedKind`](Self::UnrecognizedKind) error.
    pub fn unrecognized_kind(kind: impl Into<String>) -> Self {
        Self::UnrecognizedKind { kind: kind.into() }
    }

    /// Returns the offending tag for [`UnrecognizedKind`](Self::UnrecognizedKind).
    pub fn kind(&self) -> Option<&str> {
        match self {
            Self::UnrecognizedKind { kind } => Some(kind),
        }
    }
}

/// Result type for profile operations
pub type Result<T> = std::result::Result<T, ProfileError>;
