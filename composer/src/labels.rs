//! Dialog title and accept-button strings per edit variant.
//!
//! The dialog title doubles as the label of the committed aggregate, which
//! is what the host's undo UI shows for the whole edit.

use marq_resolver::ResolvedVariant;

/// Dialog title: adding a single bookmark.
pub const DIALOG_TITLE_ADD: &str = "Add Bookmark";

/// Dialog title: bookmarking a list of URIs into a new folder.
pub const DIALOG_TITLE_ADD_MULTI: &str = "Add Bookmarks";

/// Dialog title: editing a bookmark item.
pub const DIALOG_TITLE_BOOKMARK_EDIT: &str = "Bookmark Properties";

/// Dialog title: editing a plain folder.
pub const DIALOG_TITLE_FOLDER_EDIT: &str = "Folder Properties";

/// Dialog title: editing a livemark container.
pub const DIALOG_TITLE_LIVEMARK_EDIT: &str = "Livemark Properties";

/// Accept button: add variants.
pub const ACCEPT_LABEL_ADD: &str = "Add";

/// Accept button: add-multiple variant.
pub const ACCEPT_LABEL_ADD_MULTI: &str = "Add Bookmarks";

/// Accept button: edit variants.
pub const ACCEPT_LABEL_EDIT: &str = "Save";

/// Default folder title when bookmarking all tabs with no supplied title.
pub const BOOKMARK_ALL_TABS_DEFAULT: &str = "Bookmarked Tabs";

/// The dialog title for a resolved variant.
pub fn dialog_title(variant: &ResolvedVariant) -> &'static str {
    match variant {
        ResolvedVariant::AddBookmark { .. } => DIALOG_TITLE_ADD,
        ResolvedVariant::AddFolderWithItems { .. } => DIALOG_TITLE_ADD_MULTI,
        ResolvedVariant::EditBookmark { .. } => DIALOG_TITLE_BOOKMARK_EDIT,
        ResolvedVariant::EditFolder { .. } => DIALOG_TITLE_FOLDER_EDIT,
        ResolvedVariant::EditLivemark { .. } => DIALOG_TITLE_LIVEMARK_EDIT,
    }
}

/// The accept-button label for a resolved variant.
pub fn accept_label(variant: &ResolvedVariant) -> &'static str {
    match variant {
        ResolvedVariant::AddBookmark { .. } => ACCEPT_LABEL_ADD,
        ResolvedVariant::AddFolderWithItems { .. } => ACCEPT_LABEL_ADD_MULTI,
        _ => ACCEPT_LABEL_EDIT,
    }
}
