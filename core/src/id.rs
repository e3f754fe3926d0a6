//! Identity types for bookmark-store entities.
//!
//! All identifiers are signed 64-bit values assigned by the host's bookmark
//! storage engine. They are:
//! - Unique within their namespace
//! - Immutable once assigned
//! - Opaque to MARQ itself

use std::fmt;

/// Unique identifier for a bookmark item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub i64);

impl ItemId {
    /// Create a new ItemId from a raw value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item {}", self.0)
    }
}

/// Unique identifier for a bookmark folder (plain or livemark container).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FolderId(pub i64);

impl FolderId {
    /// Create a new FolderId from a raw value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub fn raw(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "folder {}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_id_equality() {
        let id1 = ItemId::new(1);
        let id2 = ItemId::new(1);
        let id3 = ItemId::new(2);

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_folder_id_display() {
        assert_eq!(FolderId::new(42).to_string(), "folder 42");
    }
}
