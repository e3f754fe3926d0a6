//! MARQ Resolver
//!
//! Classify an edit request into exactly one supported edit variant.
//!
//! Responsibilities:
//! - Validate the (identifier shape, action code) combination at the boundary
//! - Produce an immutable `ResolvedVariant` for the rest of the session
//! - Reject every unsupported combination instead of guessing a default
//!
//! Resolution is a pure, single-shot classification: it runs once when an
//! edit session opens and its output never changes afterwards.

mod error;
mod request;
mod resolve;
mod variant;

pub use error::{ResolveError, ResolveResult};
pub use request::{EditRequest, Identifier};
pub use resolve::{
    resolve, ACTION_ADD, ACTION_ADD_MULTI, ACTION_EDIT_FOLDER, ACTION_EDIT_ITEM,
};
pub use variant::{EditActionKind, EditSubjectKind, ResolvedVariant};
