//! The resolved edit variant.
//!
//! Supported combinations:
//! - Bookmark: Edit, AddSingle
//! - Folder: Edit, AddMultiple
//! - Livemark container: Edit
//!
//! The enum carries exactly these five combinations, so an invalid pairing
//! of subject and action cannot be represented at all.

use marq_core::{FolderId, ItemId};
use url::Url;

/// What kind of entity the session edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditSubjectKind {
    Bookmark,
    Folder,
    LivemarkContainer,
}

/// What the session does to its subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditActionKind {
    Edit,
    AddSingle,
    AddMultiple,
}

/// The resolved variant, immutable for the lifetime of the session.
#[derive(Debug, Clone)]
pub enum ResolvedVariant {
    /// Add a single bookmark for `uri`.
    AddBookmark { uri: Url },
    /// Create a folder and bookmark every URI in `uris` inside it.
    AddFolderWithItems { uris: Vec<Url> },
    /// Edit an existing bookmark item.
    EditBookmark { bookmark_id: ItemId },
    /// Edit a plain folder.
    EditFolder { folder_id: FolderId },
    /// Edit a livemark container.
    EditLivemark { folder_id: FolderId },
}

impl ResolvedVariant {
    /// The subject kind of this variant.
    pub fn subject_kind(&self) -> EditSubjectKind {
        match self {
            ResolvedVariant::AddBookmark { .. } | ResolvedVariant::EditBookmark { .. } => {
                EditSubjectKind::Bookmark
            }
            ResolvedVariant::AddFolderWithItems { .. } | ResolvedVariant::EditFolder { .. } => {
                EditSubjectKind::Folder
            }
            ResolvedVariant::EditLivemark { .. } => EditSubjectKind::LivemarkContainer,
        }
    }

    /// The action kind of this variant.
    pub fn action_kind(&self) -> EditActionKind {
        match self {
            ResolvedVariant::AddBookmark { .. } => EditActionKind::AddSingle,
            ResolvedVariant::AddFolderWithItems { .. } => EditActionKind::AddMultiple,
            ResolvedVariant::EditBookmark { .. }
            | ResolvedVariant::EditFolder { .. }
            | ResolvedVariant::EditLivemark { .. } => EditActionKind::Edit,
        }
    }

    /// Returns true if this variant creates new entities.
    pub fn is_add(&self) -> bool {
        self.action_kind() != EditActionKind::Edit
    }
}
