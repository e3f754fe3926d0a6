//! The executor seam.
//!
//! The composer never applies anything itself; it hands one `Aggregate` to
//! whatever implements this trait. In production that is the host's undo
//! machinery; in tests it is `MemoryStore`.

use crate::descriptor::Aggregate;
use crate::error::ExecResult;

/// Applies aggregates atomically and undoes them as whole units.
pub trait TxnExecutor {
    /// Apply every descriptor in the aggregate, in order.
    ///
    /// Either all descriptors apply or none do: a failure part-way through
    /// must leave no partial writes behind.
    fn commit(&mut self, aggregate: Aggregate) -> ExecResult<()>;

    /// Reverse the most recently committed aggregate.
    fn undo(&mut self) -> ExecResult<()>;
}
