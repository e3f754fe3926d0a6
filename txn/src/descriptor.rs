//! Transaction descriptors.
//!
//! A descriptor is a data value describing one bookmark-store mutation that
//! has not been applied yet. Descriptors own all of their arguments; none of
//! them reference dialog or picker state. Create descriptors may nest child
//! descriptors that run against the entity the parent creates.

use marq_core::{FolderId, ItemId, MicrosummaryRef};
use url::Url;

/// Target of an item-level descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemTarget {
    /// An item that already exists in the store.
    Existing(ItemId),
    /// The item created by the enclosing `CreateItem`.
    Pending,
}

/// Parent folder of a create descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParentFolder {
    /// A folder that already exists in the store.
    Existing(FolderId),
    /// The folder created by the enclosing `CreateFolder`.
    Pending,
}

/// One undoable bookmark-store mutation, described but not applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxnDescriptor {
    /// Create a bookmark item at the end of `parent`.
    CreateItem {
        uri: Url,
        parent: ParentFolder,
        children: Vec<TxnDescriptor>,
    },
    /// Create a folder at the end of `parent`.
    CreateFolder {
        title: String,
        parent: ParentFolder,
        children: Vec<TxnDescriptor>,
    },
    /// Retitle a bookmark item.
    EditItemTitle { item: ItemTarget, title: String },
    /// Retitle a folder.
    EditFolderTitle { folder: FolderId, title: String },
    /// Set the keyword (shortcut) of a bookmark item.
    EditKeyword { item: ItemTarget, keyword: String },
    /// Repoint a livemark container's feed.
    EditLivemarkFeedUri { folder: FolderId, uri: Url },
    /// Set a livemark container's site link.
    EditLivemarkSiteUri { folder: FolderId, uri: Url },
    /// Set or clear (`None`) the microsummary shown for a bookmarked URI.
    EditMicrosummary {
        uri: Url,
        summary: Option<MicrosummaryRef>,
    },
}

impl TxnDescriptor {
    /// Create-item descriptor with no children yet.
    pub fn create_item(uri: Url, parent: ParentFolder) -> Self {
        TxnDescriptor::CreateItem {
            uri,
            parent,
            children: Vec::new(),
        }
    }

    /// Create-folder descriptor with no children yet.
    pub fn create_folder(title: impl Into<String>, parent: ParentFolder) -> Self {
        TxnDescriptor::CreateFolder {
            title: title.into(),
            parent,
            children: Vec::new(),
        }
    }

    /// Append a child descriptor to a create descriptor.
    ///
    /// No-op on descriptors that cannot nest children.
    pub fn push_child(&mut self, child: TxnDescriptor) {
        match self {
            TxnDescriptor::CreateItem { children, .. }
            | TxnDescriptor::CreateFolder { children, .. } => children.push(child),
            _ => {}
        }
    }

    /// Total number of descriptors in this subtree, itself included.
    pub fn count(&self) -> usize {
        match self {
            TxnDescriptor::CreateItem { children, .. }
            | TxnDescriptor::CreateFolder { children, .. } => {
                1 + children.iter().map(TxnDescriptor::count).sum::<usize>()
            }
            _ => 1,
        }
    }
}

/// An ordered bundle of descriptors committed and undone as one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    /// Label shown by the host's undo UI; the dialog title in practice.
    pub label: String,
    /// Child descriptors, applied in order.
    pub children: Vec<TxnDescriptor>,
}

impl Aggregate {
    /// Create an aggregate over an ordered descriptor list.
    pub fn new(label: impl Into<String>, children: Vec<TxnDescriptor>) -> Self {
        Self {
            label: label.into(),
            children,
        }
    }

    /// Returns true if the aggregate holds no descriptors at all.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of descriptors across all children.
    pub fn count(&self) -> usize {
        self.children.iter().map(TxnDescriptor::count).sum()
    }
}
