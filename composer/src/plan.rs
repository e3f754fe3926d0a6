//! The commit plan handed back to the caller.

use marq_core::ItemId;
use marq_txn::Aggregate;
use url::Url;

/// The direct, non-transactional URI rewrite for an edited bookmark.
///
/// This write goes straight to the bookmark store instead of through the
/// undoable aggregate, so undo will not restore the old URI. A known
/// inconsistency in the edit workflow; the plan keeps it visible as data
/// rather than folding it into the aggregate and silently changing undo
/// semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriChange {
    /// The bookmark whose URI changes.
    pub item: ItemId,
    /// The new URI.
    pub uri: Url,
}

/// Everything one commit performs: an undoable aggregate plus the optional
/// URI side channel. Both absent means there is nothing to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitPlan {
    /// The undoable unit, absent when no descriptors were produced.
    pub aggregate: Option<Aggregate>,
    /// The non-undoable URI rewrite, applied outside the aggregate.
    pub uri_change: Option<UriChange>,
}

impl CommitPlan {
    /// A plan that performs nothing at all.
    pub const NO_OP: CommitPlan = CommitPlan {
        aggregate: None,
        uri_change: None,
    };

    /// Returns true if committing this plan would perform no writes.
    pub fn is_noop(&self) -> bool {
        self.aggregate.is_none() && self.uri_change.is_none()
    }
}
