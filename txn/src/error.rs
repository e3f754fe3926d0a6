//! Execution error types.

use marq_core::{FolderId, ItemId};
use thiserror::Error;

/// Result type for executor operations.
pub type ExecResult<T> = Result<T, ExecError>;

/// Errors that can occur while applying or undoing an aggregate.
#[derive(Debug, Error)]
pub enum ExecError {
    /// Item not found.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    /// Folder not found.
    #[error("folder not found: {0}")]
    FolderNotFound(FolderId),

    /// Livemark descriptor targeted a plain folder.
    #[error("not a livemark container: {0}")]
    NotALivemark(FolderId),

    /// A `Pending` target appeared outside a create descriptor.
    #[error("pending target with no enclosing create descriptor")]
    UnresolvedPendingTarget,

    /// Undo requested with an empty undo stack.
    #[error("nothing to undo")]
    NothingToUndo,
}
