//! Composition and session error types.

use thiserror::Error;

/// Result type for composition.
pub type ComposeResult<T> = Result<T, ComposeError>;

/// Errors that can occur while composing a commit plan.
///
/// Any of these aborts composition before a single descriptor is built;
/// there is no partial plan to clean up.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// A required URI field does not parse.
    #[error("invalid URI in {field} field: {value:?}")]
    InvalidUri { field: &'static str, value: String },
}

impl ComposeError {
    pub fn invalid_uri(field: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidUri {
            field,
            value: value.into(),
        }
    }
}

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors surfaced by an edit session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The edit request did not resolve to a supported variant.
    #[error("resolve error: {0}")]
    Resolve(#[from] marq_resolver::ResolveError),

    /// A field failed validation during composition.
    #[error("compose error: {0}")]
    Compose(#[from] ComposeError),

    /// The executor rejected the committed aggregate.
    #[error("execution error: {0}")]
    Exec(#[from] marq_txn::ExecError),
}
