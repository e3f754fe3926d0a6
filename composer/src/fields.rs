//! The field snapshot read at commit time.

use marq_core::{FolderId, MicrosummaryChoice};
use url::Url;

/// One folder selected in the host's folder tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FolderPick {
    /// The selected folder.
    pub id: FolderId,
    /// False when the tree node is read-only and cannot take new children.
    pub writable: bool,
}

impl FolderPick {
    /// A writable pick.
    pub fn writable(id: FolderId) -> Self {
        Self { id, writable: true }
    }

    /// A read-only pick.
    pub fn read_only(id: FolderId) -> Self {
        Self {
            id,
            writable: false,
        }
    }
}

/// Current values of the edit fields, read fresh when the user commits.
///
/// Fields that do not apply to the session's variant stay `None` and are
/// ignored by the composer. The composer never reads host UI state directly;
/// everything it needs is captured here.
#[derive(Debug, Clone, Default)]
pub struct FieldSnapshot {
    /// Title field, verbatim; an empty string is a deliberate empty title.
    pub title: String,
    /// Location (URL) field, bookmark subjects only.
    pub location: Option<String>,
    /// Keyword (shortcut) field, bookmark subjects only.
    pub keyword: Option<String>,
    /// Feed location field, livemark subjects only.
    pub feed_location: Option<String>,
    /// Site location field, livemark subjects only.
    pub site_location: Option<String>,
    /// Folders selected as the add target, add variants only.
    pub folder_picks: Vec<FolderPick>,
    /// Microsummary selection; `None` when the picker is disabled.
    pub microsummary: Option<MicrosummaryChoice>,
    /// The URI the subject had when the session opened, for change detection.
    pub original_uri: Option<Url>,
}

impl FieldSnapshot {
    /// Snapshot with the given title and everything else unset.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}
