//! Resolution error types.

use thiserror::Error;

/// Result type for variant resolution.
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Errors that can occur while classifying an edit request.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The action code demands a different identifier shape.
    #[error("identifier mismatch for action {action:?}: expected {expected}, got {actual}")]
    TypeMismatch {
        action: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// No resolution rule matches this (identifier, action) combination.
    #[error("unsupported edit variant: action {action:?} with {identifier} identifier")]
    UnsupportedVariant {
        action: String,
        identifier: &'static str,
    },
}

impl ResolveError {
    pub fn type_mismatch(
        action: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            action: action.into(),
            expected,
            actual,
        }
    }

    pub fn unsupported_variant(action: impl Into<String>, identifier: &'static str) -> Self {
        Self::UnsupportedVariant {
            action: action.into(),
            identifier,
        }
    }
}
