//! Variant resolution.
//!
//! A conservative classifier with five terminal states and one rejecting
//! state. Rules are evaluated in order and the first match wins; nothing
//! ever falls through to a default variant.

use marq_core::{FolderId, ItemId, LivemarkStatus};

use crate::error::{ResolveError, ResolveResult};
use crate::request::{EditRequest, Identifier};
use crate::variant::ResolvedVariant;

/// Action code for adding a single bookmark.
pub const ACTION_ADD: &str = "add";
/// Action code for bookmarking a list of URIs into a new folder.
pub const ACTION_ADD_MULTI: &str = "addmulti";
/// Action code for editing an existing bookmark item.
pub const ACTION_EDIT_ITEM: &str = "edititem";
/// Action code for editing an existing folder or livemark container.
pub const ACTION_EDIT_FOLDER: &str = "editfolder";

/// Classify an edit request into the variant it denotes.
///
/// `livemarks` is consulted only for the "editfolder" action, to separate
/// plain folders from livemark containers.
pub fn resolve(
    request: &EditRequest,
    livemarks: &dyn LivemarkStatus,
) -> ResolveResult<ResolvedVariant> {
    let action = request.action.as_str();

    match action {
        ACTION_ADD => match &request.identifier {
            Identifier::Uri(uri) => Ok(ResolvedVariant::AddBookmark { uri: uri.clone() }),
            other => Err(ResolveError::type_mismatch(action, "URI", other.shape())),
        },

        ACTION_ADD_MULTI => match &request.identifier {
            Identifier::UriList(uris) => Ok(ResolvedVariant::AddFolderWithItems {
                uris: uris.clone(),
            }),
            other => Err(ResolveError::type_mismatch(
                action,
                "URI list",
                other.shape(),
            )),
        },

        ACTION_EDIT_ITEM | ACTION_EDIT_FOLDER => match &request.identifier {
            Identifier::ItemId(raw) => {
                if action == ACTION_EDIT_ITEM {
                    Ok(ResolvedVariant::EditBookmark {
                        bookmark_id: ItemId::new(*raw),
                    })
                } else {
                    let folder_id = FolderId::new(*raw);
                    if livemarks.is_livemark(folder_id) {
                        Ok(ResolvedVariant::EditLivemark { folder_id })
                    } else {
                        Ok(ResolvedVariant::EditFolder { folder_id })
                    }
                }
            }
            other => Err(ResolveError::unsupported_variant(action, other.shape())),
        },

        _ => Err(ResolveError::unsupported_variant(
            action,
            request.identifier.shape(),
        )),
    }
}
