//! MARQ Transactions
//!
//! Typed descriptors for undoable bookmark-store mutations, plus a
//! reference executor.
//!
//! Responsibilities:
//! - Describe mutations as plain data (`TxnDescriptor`), not applied writes
//! - Bundle ordered descriptors into one atomically committed `Aggregate`
//! - Define the executor seam (`TxnExecutor`) the host's undo machinery
//!   plugs into
//! - Provide `MemoryStore`, an in-memory store and executor with a full
//!   undo stack, for tests and embeddings

mod descriptor;
mod error;
mod executor;
mod store;

pub use descriptor::{Aggregate, ItemTarget, ParentFolder, TxnDescriptor};
pub use error::{ExecError, ExecResult};
pub use executor::TxnExecutor;
pub use store::MemoryStore;
