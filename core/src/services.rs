//! Service traits for host collaborators.
//!
//! MARQ never touches the bookmark store, the history database or the
//! microsummary service directly; it reads them through these traits and
//! leaves all persistence to the host. `marq_txn::MemoryStore` implements
//! the read side for tests and embeddings.

use url::Url;

use crate::{FolderId, ItemId, MicrosummaryRef};

/// Read access to the host's bookmark store.
pub trait BookmarkReader {
    /// The root folder new bookmarks fall back to when no folder is picked.
    fn root_folder(&self) -> FolderId;

    /// Title of a bookmark item, if the item exists.
    fn item_title(&self, item: ItemId) -> Option<String>;

    /// Title of a folder, if the folder exists.
    fn folder_title(&self, folder: FolderId) -> Option<String>;

    /// The URI a bookmark item points at.
    fn bookmark_uri(&self, item: ItemId) -> Option<Url>;

    /// The keyword (shortcut) assigned to a bookmark, if any.
    fn keyword_for(&self, item: ItemId) -> Option<String>;
}

/// Livemark membership and feed metadata.
pub trait LivemarkStatus {
    /// Returns true if the folder is a livemark container.
    fn is_livemark(&self, folder: FolderId) -> bool;

    /// Feed URI backing a livemark container.
    fn feed_uri(&self, folder: FolderId) -> Option<Url>;

    /// Site URI associated with a livemark container, if set.
    fn site_uri(&self, folder: FolderId) -> Option<Url>;
}

/// Page-title lookup against the host's history database.
pub trait HistoryTitles {
    /// Title recorded in history for the given page, if any.
    fn page_title(&self, uri: &Url) -> Option<String>;
}

/// Current microsummary state for a bookmarked URI.
pub trait MicrosummaryStatus {
    /// Returns true if the bookmark at `uri` currently has a microsummary.
    fn has_microsummary(&self, uri: &Url) -> bool;

    /// Returns true if `summary` is the microsummary currently set for `uri`.
    fn is_current(&self, uri: &Url, summary: &MicrosummaryRef) -> bool;
}

/// Direct, non-transactional URI rewrite on the bookmark store.
///
/// This is the one write that bypasses the undoable aggregate; see the
/// composer's `CommitPlan` for why it is kept separate.
pub trait BookmarkUriSink {
    /// Point an existing bookmark at a new URI.
    fn change_bookmark_uri(&mut self, item: ItemId, uri: Url);
}
