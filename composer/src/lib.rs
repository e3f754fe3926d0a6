//! MARQ Composer
//!
//! Translate edited field values into an ordered, undoable transaction plan.
//!
//! Responsibilities:
//! - Snapshot the edit fields (`FieldSnapshot`) the host reads at commit time
//! - Validate every URI-bearing field before any descriptor is built
//! - Compose the minimal descriptor list for the resolved variant and wrap
//!   it in one labeled `Aggregate`
//! - Carry the one non-transactional write (`UriChange`) as an explicit
//!   side channel on the plan
//! - Orchestrate a whole edit session (`EditSession`): resolve once, derive
//!   initial field values, compose at commit
//!
//! # Module Structure
//!
//! - `compose` - the transaction composer itself
//! - `fields` - field snapshot and folder pick types
//! - `validation` - shared URI parsing and field validity helpers
//! - `labels` - dialog title and accept-button strings per variant
//! - `plan` - the commit plan handed to the executor
//! - `session` - session orchestration over resolver, composer and executor
//! - `error` - error types for composition failures

mod compose;
mod error;
mod fields;
pub mod labels;
mod plan;
mod session;
pub mod validation;

pub use compose::{compose, ComposerServices};
pub use error::{ComposeError, ComposeResult, SessionError, SessionResult};
pub use fields::{FieldSnapshot, FolderPick};
pub use plan::{CommitPlan, UriChange};
pub use session::{CommitOutcome, CommitTarget, EditSession, SessionServices};
