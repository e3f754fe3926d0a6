//! In-memory reference store and executor.
//!
//! `MemoryStore` plays the role of the host bookmark store for tests and
//! embeddings: it applies aggregates atomically, keeps an undo stack of
//! inverse operations, and implements the read-side service traits so it
//! can back a whole edit session on its own.

use std::collections::HashMap;

use marq_core::{
    BookmarkReader, BookmarkUriSink, FolderId, ItemId, LivemarkStatus, MicrosummaryRef,
    MicrosummaryStatus,
};
use url::Url;

use crate::descriptor::{Aggregate, ItemTarget, ParentFolder, TxnDescriptor};
use crate::error::{ExecError, ExecResult};
use crate::executor::TxnExecutor;

#[derive(Debug, Clone)]
struct ItemRecord {
    uri: Url,
    title: String,
    keyword: Option<String>,
    parent: FolderId,
}

#[derive(Debug, Clone)]
struct FolderRecord {
    title: String,
    parent: Option<FolderId>,
    feed: Option<Url>,
    site: Option<Url>,
    livemark: bool,
}

/// Inverse of one applied descriptor, recorded for undo.
#[derive(Debug, Clone)]
enum InverseOp {
    RemoveItem(ItemId),
    RemoveFolder(FolderId),
    RestoreItemTitle(ItemId, String),
    RestoreFolderTitle(FolderId, String),
    RestoreKeyword(ItemId, Option<String>),
    RestoreFeed(FolderId, Option<Url>),
    RestoreSite(FolderId, Option<Url>),
    RestoreMicrosummary(Url, Option<MicrosummaryRef>),
}

/// In-memory bookmark store with undoable aggregate execution.
pub struct MemoryStore {
    root: FolderId,
    items: HashMap<ItemId, ItemRecord>,
    folders: HashMap<FolderId, FolderRecord>,
    microsummaries: HashMap<Url, MicrosummaryRef>,
    next_id: i64,
    undo_stack: Vec<Vec<InverseOp>>,
}

impl MemoryStore {
    /// Create a store holding only the root folder.
    pub fn new() -> Self {
        let root = FolderId::new(1);
        let mut folders = HashMap::new();
        folders.insert(
            root,
            FolderRecord {
                title: "Bookmarks".to_string(),
                parent: None,
                feed: None,
                site: None,
                livemark: false,
            },
        );
        Self {
            root,
            items: HashMap::new(),
            folders,
            microsummaries: HashMap::new(),
            next_id: 2,
            undo_stack: Vec::new(),
        }
    }

    fn alloc_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Seed a folder outside any transaction.
    pub fn add_folder(&mut self, title: impl Into<String>) -> FolderId {
        let id = FolderId::new(self.alloc_id());
        self.folders.insert(
            id,
            FolderRecord {
                title: title.into(),
                parent: Some(self.root),
                feed: None,
                site: None,
                livemark: false,
            },
        );
        id
    }

    /// Seed a livemark container outside any transaction.
    pub fn add_livemark(
        &mut self,
        title: impl Into<String>,
        feed: Url,
        site: Option<Url>,
    ) -> FolderId {
        let id = FolderId::new(self.alloc_id());
        self.folders.insert(
            id,
            FolderRecord {
                title: title.into(),
                parent: Some(self.root),
                feed: Some(feed),
                site,
                livemark: true,
            },
        );
        id
    }

    /// Seed a bookmark outside any transaction.
    pub fn add_bookmark(&mut self, uri: Url, title: impl Into<String>, parent: FolderId) -> ItemId {
        let id = ItemId::new(self.alloc_id());
        self.items.insert(
            id,
            ItemRecord {
                uri,
                title: title.into(),
                keyword: None,
                parent,
            },
        );
        id
    }

    /// Seed a keyword outside any transaction.
    pub fn set_keyword(&mut self, item: ItemId, keyword: impl Into<String>) {
        if let Some(record) = self.items.get_mut(&item) {
            record.keyword = Some(keyword.into());
        }
    }

    /// Seed a microsummary outside any transaction.
    pub fn set_microsummary(&mut self, uri: Url, summary: MicrosummaryRef) {
        self.microsummaries.insert(uri, summary);
    }

    /// The microsummary currently set for a URI.
    pub fn microsummary_for(&self, uri: &Url) -> Option<&MicrosummaryRef> {
        self.microsummaries.get(uri)
    }

    /// Items filed under a folder, in id order.
    pub fn items_in(&self, folder: FolderId) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = self
            .items
            .iter()
            .filter(|(_, record)| record.parent == folder)
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    /// Returns true if the folder exists.
    pub fn folder_exists(&self, folder: FolderId) -> bool {
        self.folders.contains_key(&folder)
    }

    /// Parent of a folder; `None` for the root or a missing folder.
    pub fn folder_parent(&self, folder: FolderId) -> Option<FolderId> {
        self.folders.get(&folder).and_then(|record| record.parent)
    }

    /// Folders filed under a parent, in id order.
    pub fn folders_in(&self, parent: FolderId) -> Vec<FolderId> {
        let mut ids: Vec<FolderId> = self
            .folders
            .iter()
            .filter(|(_, record)| record.parent == Some(parent))
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    /// Number of committed aggregates that can still be undone.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    fn resolve_item(&self, target: &ItemTarget, pending: Option<ItemId>) -> ExecResult<ItemId> {
        match target {
            ItemTarget::Existing(id) => {
                if self.items.contains_key(id) {
                    Ok(*id)
                } else {
                    Err(ExecError::ItemNotFound(*id))
                }
            }
            ItemTarget::Pending => pending.ok_or(ExecError::UnresolvedPendingTarget),
        }
    }

    fn resolve_parent(
        &self,
        parent: &ParentFolder,
        pending: Option<FolderId>,
    ) -> ExecResult<FolderId> {
        match parent {
            ParentFolder::Existing(id) => {
                if self.folders.contains_key(id) {
                    Ok(*id)
                } else {
                    Err(ExecError::FolderNotFound(*id))
                }
            }
            ParentFolder::Pending => pending.ok_or(ExecError::UnresolvedPendingTarget),
        }
    }

    fn livemark_mut(&mut self, folder: FolderId) -> ExecResult<&mut FolderRecord> {
        let record = self
            .folders
            .get_mut(&folder)
            .ok_or(ExecError::FolderNotFound(folder))?;
        if !record.livemark {
            return Err(ExecError::NotALivemark(folder));
        }
        Ok(record)
    }

    fn apply(
        &mut self,
        descriptor: &TxnDescriptor,
        pending_folder: Option<FolderId>,
        pending_item: Option<ItemId>,
        inverses: &mut Vec<InverseOp>,
    ) -> ExecResult<()> {
        match descriptor {
            TxnDescriptor::CreateItem {
                uri,
                parent,
                children,
            } => {
                let parent = self.resolve_parent(parent, pending_folder)?;
                let id = ItemId::new(self.alloc_id());
                self.items.insert(
                    id,
                    ItemRecord {
                        uri: uri.clone(),
                        title: String::new(),
                        keyword: None,
                        parent,
                    },
                );
                inverses.push(InverseOp::RemoveItem(id));
                for child in children {
                    self.apply(child, pending_folder, Some(id), inverses)?;
                }
                Ok(())
            }

            TxnDescriptor::CreateFolder {
                title,
                parent,
                children,
            } => {
                let parent = self.resolve_parent(parent, pending_folder)?;
                let id = FolderId::new(self.alloc_id());
                self.folders.insert(
                    id,
                    FolderRecord {
                        title: title.clone(),
                        parent: Some(parent),
                        feed: None,
                        site: None,
                        livemark: false,
                    },
                );
                inverses.push(InverseOp::RemoveFolder(id));
                for child in children {
                    self.apply(child, Some(id), pending_item, inverses)?;
                }
                Ok(())
            }

            TxnDescriptor::EditItemTitle { item, title } => {
                let id = self.resolve_item(item, pending_item)?;
                let record = self.items.get_mut(&id).ok_or(ExecError::ItemNotFound(id))?;
                inverses.push(InverseOp::RestoreItemTitle(id, record.title.clone()));
                record.title = title.clone();
                Ok(())
            }

            TxnDescriptor::EditFolderTitle { folder, title } => {
                let record = self
                    .folders
                    .get_mut(folder)
                    .ok_or(ExecError::FolderNotFound(*folder))?;
                inverses.push(InverseOp::RestoreFolderTitle(*folder, record.title.clone()));
                record.title = title.clone();
                Ok(())
            }

            TxnDescriptor::EditKeyword { item, keyword } => {
                let id = self.resolve_item(item, pending_item)?;
                let record = self.items.get_mut(&id).ok_or(ExecError::ItemNotFound(id))?;
                inverses.push(InverseOp::RestoreKeyword(id, record.keyword.clone()));
                record.keyword = Some(keyword.clone());
                Ok(())
            }

            TxnDescriptor::EditLivemarkFeedUri { folder, uri } => {
                let record = self.livemark_mut(*folder)?;
                let old = record.feed.clone();
                record.feed = Some(uri.clone());
                inverses.push(InverseOp::RestoreFeed(*folder, old));
                Ok(())
            }

            TxnDescriptor::EditLivemarkSiteUri { folder, uri } => {
                let record = self.livemark_mut(*folder)?;
                let old = record.site.clone();
                record.site = Some(uri.clone());
                inverses.push(InverseOp::RestoreSite(*folder, old));
                Ok(())
            }

            TxnDescriptor::EditMicrosummary { uri, summary } => {
                let old = self.microsummaries.get(uri).cloned();
                match summary {
                    Some(summary) => {
                        self.microsummaries.insert(uri.clone(), summary.clone());
                    }
                    None => {
                        self.microsummaries.remove(uri);
                    }
                }
                inverses.push(InverseOp::RestoreMicrosummary(uri.clone(), old));
                Ok(())
            }
        }
    }

    fn apply_inverse(&mut self, op: InverseOp) {
        match op {
            InverseOp::RemoveItem(id) => {
                self.items.remove(&id);
            }
            InverseOp::RemoveFolder(id) => {
                self.folders.remove(&id);
            }
            InverseOp::RestoreItemTitle(id, title) => {
                if let Some(record) = self.items.get_mut(&id) {
                    record.title = title;
                }
            }
            InverseOp::RestoreFolderTitle(id, title) => {
                if let Some(record) = self.folders.get_mut(&id) {
                    record.title = title;
                }
            }
            InverseOp::RestoreKeyword(id, keyword) => {
                if let Some(record) = self.items.get_mut(&id) {
                    record.keyword = keyword;
                }
            }
            InverseOp::RestoreFeed(id, feed) => {
                if let Some(record) = self.folders.get_mut(&id) {
                    record.feed = feed;
                }
            }
            InverseOp::RestoreSite(id, site) => {
                if let Some(record) = self.folders.get_mut(&id) {
                    record.site = site;
                }
            }
            InverseOp::RestoreMicrosummary(uri, summary) => match summary {
                Some(summary) => {
                    self.microsummaries.insert(uri, summary);
                }
                None => {
                    self.microsummaries.remove(&uri);
                }
            },
        }
    }

    fn rollback(&mut self, inverses: Vec<InverseOp>) {
        for op in inverses.into_iter().rev() {
            self.apply_inverse(op);
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TxnExecutor for MemoryStore {
    fn commit(&mut self, aggregate: Aggregate) -> ExecResult<()> {
        let mut inverses = Vec::new();
        for descriptor in &aggregate.children {
            if let Err(e) = self.apply(descriptor, None, None, &mut inverses) {
                self.rollback(inverses);
                return Err(e);
            }
        }
        self.undo_stack.push(inverses);
        Ok(())
    }

    fn undo(&mut self) -> ExecResult<()> {
        let inverses = self.undo_stack.pop().ok_or(ExecError::NothingToUndo)?;
        self.rollback(inverses);
        Ok(())
    }
}

impl BookmarkReader for MemoryStore {
    fn root_folder(&self) -> FolderId {
        self.root
    }

    fn item_title(&self, item: ItemId) -> Option<String> {
        self.items.get(&item).map(|record| record.title.clone())
    }

    fn folder_title(&self, folder: FolderId) -> Option<String> {
        self.folders
            .get(&folder)
            .map(|record| record.title.clone())
    }

    fn bookmark_uri(&self, item: ItemId) -> Option<Url> {
        self.items.get(&item).map(|record| record.uri.clone())
    }

    fn keyword_for(&self, item: ItemId) -> Option<String> {
        self.items.get(&item).and_then(|record| record.keyword.clone())
    }
}

impl LivemarkStatus for MemoryStore {
    fn is_livemark(&self, folder: FolderId) -> bool {
        self.folders
            .get(&folder)
            .is_some_and(|record| record.livemark)
    }

    fn feed_uri(&self, folder: FolderId) -> Option<Url> {
        self.folders.get(&folder).and_then(|record| record.feed.clone())
    }

    fn site_uri(&self, folder: FolderId) -> Option<Url> {
        self.folders.get(&folder).and_then(|record| record.site.clone())
    }
}

impl MicrosummaryStatus for MemoryStore {
    fn has_microsummary(&self, uri: &Url) -> bool {
        self.microsummaries.contains_key(uri)
    }

    fn is_current(&self, uri: &Url, summary: &MicrosummaryRef) -> bool {
        self.microsummaries.get(uri) == Some(summary)
    }
}

impl BookmarkUriSink for MemoryStore {
    // Deliberately not recorded on the undo stack; this mirrors the host
    // store's direct URI rewrite that bypasses the transaction manager.
    fn change_bookmark_uri(&mut self, item: ItemId, uri: Url) {
        if let Some(record) = self.items.get_mut(&item) {
            record.uri = uri;
        }
    }
}
