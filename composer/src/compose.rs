//! The transaction composer.
//!
//! Runs once, at commit time, over the resolved variant and the field
//! snapshot, and produces the minimal ordered descriptor list for the
//! user's changes. Required URIs are parsed before any descriptor is
//! materialized, so a failure yields zero descriptors, never a partial
//! list.

use marq_core::{
    BookmarkReader, FolderId, HistoryTitles, ItemId, MicrosummaryChoice, MicrosummaryStatus,
};
use marq_txn::{Aggregate, ItemTarget, ParentFolder, TxnDescriptor};
use url::Url;

use crate::error::ComposeResult;
use crate::fields::FieldSnapshot;
use crate::plan::{CommitPlan, UriChange};
use crate::validation::{
    parse_optional_uri, parse_uri, synthesize_title, FEED_LOCATION_FIELD, LOCATION_FIELD,
    SITE_LOCATION_FIELD,
};
use marq_resolver::ResolvedVariant;

/// Read-side collaborators the composer consults while building a plan.
pub struct ComposerServices<'a> {
    /// Bookmark store read access (root folder fallback).
    pub bookmarks: &'a dyn BookmarkReader,
    /// History titles for add-multiple item naming.
    pub history: &'a dyn HistoryTitles,
    /// Current microsummary state for change detection.
    pub microsummaries: &'a dyn MicrosummaryStatus,
}

/// Compose the commit plan for one edit session.
///
/// `label` becomes the aggregate's label; callers normally pass the dialog
/// title from `labels::dialog_title`.
pub fn compose(
    variant: &ResolvedVariant,
    fields: &FieldSnapshot,
    services: &ComposerServices<'_>,
    label: &str,
) -> ComposeResult<CommitPlan> {
    let mut descriptors = Vec::new();
    let mut uri_change = None;

    match variant {
        ResolvedVariant::AddBookmark { .. } => {
            let uri = parse_uri(LOCATION_FIELD, fields.location.as_deref().unwrap_or(""))?;
            let target = target_folder(fields, services.bookmarks);

            let mut create = TxnDescriptor::create_item(uri, ParentFolder::Existing(target));
            create.push_child(TxnDescriptor::EditItemTitle {
                item: ItemTarget::Pending,
                title: fields.title.clone(),
            });
            descriptors.push(create);
        }

        ResolvedVariant::AddFolderWithItems { uris } => {
            let target = target_folder(fields, services.bookmarks);
            let mut folder =
                TxnDescriptor::create_folder(fields.title.clone(), ParentFolder::Existing(target));

            for uri in uris {
                let mut item = TxnDescriptor::create_item(uri.clone(), ParentFolder::Pending);
                item.push_child(TxnDescriptor::EditItemTitle {
                    item: ItemTarget::Pending,
                    title: item_title_for(uri, services.history),
                });
                folder.push_child(item);
            }

            descriptors.push(folder);
        }

        ResolvedVariant::EditBookmark { bookmark_id } => {
            let new_uri = parse_uri(LOCATION_FIELD, fields.location.as_deref().unwrap_or(""))?;

            // Unconditional, even when unchanged: one retitle beats
            // tracking field dirtiness.
            descriptors.push(TxnDescriptor::EditItemTitle {
                item: ItemTarget::Existing(*bookmark_id),
                title: fields.title.clone(),
            });

            if let Some(keyword) = fields.keyword.as_deref() {
                if !keyword.is_empty() {
                    descriptors.push(TxnDescriptor::EditKeyword {
                        item: ItemTarget::Existing(*bookmark_id),
                        keyword: keyword.to_string(),
                    });
                }
            }

            if let Some(descriptor) = microsummary_edit(fields, services.microsummaries) {
                descriptors.push(descriptor);
            }

            uri_change = uri_change_for(*bookmark_id, &new_uri, fields);
        }

        ResolvedVariant::EditFolder { folder_id } => {
            descriptors.push(TxnDescriptor::EditFolderTitle {
                folder: *folder_id,
                title: fields.title.clone(),
            });
        }

        ResolvedVariant::EditLivemark { folder_id } => {
            // Both parses happen before the first descriptor exists.
            let feed = parse_uri(
                FEED_LOCATION_FIELD,
                fields.feed_location.as_deref().unwrap_or(""),
            )?;
            let site = parse_optional_uri(SITE_LOCATION_FIELD, fields.site_location.as_deref())?;

            descriptors.push(TxnDescriptor::EditFolderTitle {
                folder: *folder_id,
                title: fields.title.clone(),
            });
            descriptors.push(TxnDescriptor::EditLivemarkFeedUri {
                folder: *folder_id,
                uri: feed,
            });
            if let Some(site) = site {
                descriptors.push(TxnDescriptor::EditLivemarkSiteUri {
                    folder: *folder_id,
                    uri: site,
                });
            }
        }
    }

    if descriptors.is_empty() && uri_change.is_none() {
        return Ok(CommitPlan::NO_OP);
    }

    let aggregate = if descriptors.is_empty() {
        None
    } else {
        Some(Aggregate::new(label, descriptors))
    };

    Ok(CommitPlan {
        aggregate,
        uri_change,
    })
}

/// The folder a new entity is filed under: the first pick, iff it is
/// writable, else the store's root. Later picks are never consulted.
fn target_folder(fields: &FieldSnapshot, bookmarks: &dyn BookmarkReader) -> FolderId {
    fields
        .folder_picks
        .first()
        .filter(|pick| pick.writable)
        .map(|pick| pick.id)
        .unwrap_or_else(|| bookmarks.root_folder())
}

/// Title for a bookmarked URI: its history title, else a synthesized one.
fn item_title_for(uri: &Url, history: &dyn HistoryTitles) -> String {
    history
        .page_title(uri)
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| synthesize_title(uri))
}

/// A microsummary descriptor when, and only when, the selection differs
/// from the bookmark's current state: the user cleared an existing
/// microsummary, or picked one that is not current.
fn microsummary_edit(
    fields: &FieldSnapshot,
    microsummaries: &dyn MicrosummaryStatus,
) -> Option<TxnDescriptor> {
    let choice = fields.microsummary.as_ref()?;
    let uri = fields.original_uri.as_ref()?;

    match choice.summary() {
        None => {
            if microsummaries.has_microsummary(uri) {
                Some(TxnDescriptor::EditMicrosummary {
                    uri: uri.clone(),
                    summary: None,
                })
            } else {
                None
            }
        }
        Some(summary) => {
            if microsummaries.is_current(uri, summary) {
                None
            } else {
                Some(TxnDescriptor::EditMicrosummary {
                    uri: uri.clone(),
                    summary: Some(summary.clone()),
                })
            }
        }
    }
}

/// The URI side channel, only when the location field differs from the URI
/// the session opened with.
fn uri_change_for(item: ItemId, new_uri: &Url, fields: &FieldSnapshot) -> Option<UriChange> {
    let original = fields.original_uri.as_ref()?;
    if new_uri == original {
        None
    } else {
        Some(UriChange {
            item,
            uri: new_uri.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComposeError;
    use crate::fields::FolderPick;
    use marq_core::MicrosummaryRef;
    use std::collections::HashMap;

    struct Fixture {
        root: FolderId,
        history: HashMap<Url, String>,
        current_summary: HashMap<Url, MicrosummaryRef>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                root: FolderId::new(1),
                history: HashMap::new(),
                current_summary: HashMap::new(),
            }
        }

        fn services(&self) -> ComposerServices<'_> {
            ComposerServices {
                bookmarks: self,
                history: self,
                microsummaries: self,
            }
        }
    }

    impl BookmarkReader for Fixture {
        fn root_folder(&self) -> FolderId {
            self.root
        }

        fn item_title(&self, _item: ItemId) -> Option<String> {
            None
        }

        fn folder_title(&self, _folder: FolderId) -> Option<String> {
            None
        }

        fn bookmark_uri(&self, _item: ItemId) -> Option<Url> {
            None
        }

        fn keyword_for(&self, _item: ItemId) -> Option<String> {
            None
        }
    }

    impl HistoryTitles for Fixture {
        fn page_title(&self, uri: &Url) -> Option<String> {
            self.history.get(uri).cloned()
        }
    }

    impl MicrosummaryStatus for Fixture {
        fn has_microsummary(&self, uri: &Url) -> bool {
            self.current_summary.contains_key(uri)
        }

        fn is_current(&self, uri: &Url, summary: &MicrosummaryRef) -> bool {
            self.current_summary.get(uri) == Some(summary)
        }
    }

    fn uri(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_add_bookmark_falls_back_to_root() {
        // GIVEN no folder picked
        let fixture = Fixture::new();
        let variant = ResolvedVariant::AddBookmark {
            uri: uri("https://example.com/"),
        };
        let mut fields = FieldSnapshot::new("Example");
        fields.location = Some("https://example.com/".into());

        // WHEN
        let plan = compose(&variant, &fields, &fixture.services(), "Add Bookmark").unwrap();

        // THEN
        let aggregate = plan.aggregate.unwrap();
        assert_eq!(aggregate.children.len(), 1);
        match &aggregate.children[0] {
            TxnDescriptor::CreateItem {
                parent, children, ..
            } => {
                assert_eq!(*parent, ParentFolder::Existing(fixture.root));
                assert_eq!(
                    children[0],
                    TxnDescriptor::EditItemTitle {
                        item: ItemTarget::Pending,
                        title: "Example".into(),
                    }
                );
            }
            other => panic!("unexpected descriptor: {other:?}"),
        }
    }

    #[test]
    fn test_add_bookmark_read_only_first_pick_falls_back_to_root() {
        // GIVEN the first pick is read-only, with a writable pick after it
        let fixture = Fixture::new();
        let variant = ResolvedVariant::AddBookmark {
            uri: uri("https://example.com/"),
        };
        let mut fields = FieldSnapshot::new("Example");
        fields.location = Some("https://example.com/".into());
        fields.folder_picks = vec![
            FolderPick::read_only(FolderId::new(5)),
            FolderPick::writable(FolderId::new(6)),
        ];

        // WHEN
        let plan = compose(&variant, &fields, &fixture.services(), "Add Bookmark").unwrap();

        // THEN the later writable pick is ignored; the item lands at the root
        match &plan.aggregate.unwrap().children[0] {
            TxnDescriptor::CreateItem { parent, .. } => {
                assert_eq!(*parent, ParentFolder::Existing(fixture.root));
            }
            other => panic!("unexpected descriptor: {other:?}"),
        }
    }

    #[test]
    fn test_add_bookmark_with_bad_location_fails() {
        // GIVEN
        let fixture = Fixture::new();
        let variant = ResolvedVariant::AddBookmark {
            uri: uri("https://example.com/"),
        };
        let mut fields = FieldSnapshot::new("Example");
        fields.location = Some("not a uri".into());

        // WHEN
        let err = compose(&variant, &fields, &fixture.services(), "Add Bookmark").unwrap_err();

        // THEN
        assert!(matches!(err, ComposeError::InvalidUri { field, .. } if field == LOCATION_FIELD));
    }

    #[test]
    fn test_add_bookmark_keeps_empty_title_verbatim() {
        // GIVEN an explicitly empty title
        let fixture = Fixture::new();
        let variant = ResolvedVariant::AddBookmark {
            uri: uri("https://example.com/"),
        };
        let mut fields = FieldSnapshot::new("");
        fields.location = Some("https://example.com/".into());

        // WHEN
        let plan = compose(&variant, &fields, &fixture.services(), "Add Bookmark").unwrap();

        // THEN
        match &plan.aggregate.unwrap().children[0] {
            TxnDescriptor::CreateItem { children, .. } => {
                assert_eq!(
                    children[0],
                    TxnDescriptor::EditItemTitle {
                        item: ItemTarget::Pending,
                        title: String::new(),
                    }
                );
            }
            other => panic!("unexpected descriptor: {other:?}"),
        }
    }

    #[test]
    fn test_add_multiple_titles_from_history_with_fallback() {
        // GIVEN u1 has a history title, u2 does not
        let mut fixture = Fixture::new();
        let u1 = uri("https://a.example/");
        let u2 = uri("https://b.example/");
        fixture.history.insert(u1.clone(), "Foo".into());
        let variant = ResolvedVariant::AddFolderWithItems {
            uris: vec![u1.clone(), u2.clone()],
        };
        let mut fields = FieldSnapshot::new("Tabs");
        fields.folder_picks = vec![FolderPick::writable(FolderId::new(2))];

        // WHEN
        let plan = compose(&variant, &fields, &fixture.services(), "Add Bookmarks").unwrap();

        // THEN one folder with two nested items, titled "Foo" and a
        // synthesized fallback
        let aggregate = plan.aggregate.unwrap();
        assert_eq!(aggregate.children.len(), 1);
        match &aggregate.children[0] {
            TxnDescriptor::CreateFolder {
                title,
                parent,
                children,
            } => {
                assert_eq!(title, "Tabs");
                assert_eq!(*parent, ParentFolder::Existing(FolderId::new(2)));
                assert_eq!(children.len(), 2);

                let titles: Vec<&str> = children
                    .iter()
                    .map(|child| match child {
                        TxnDescriptor::CreateItem { children, .. } => match &children[0] {
                            TxnDescriptor::EditItemTitle { title, .. } => title.as_str(),
                            other => panic!("unexpected child: {other:?}"),
                        },
                        other => panic!("unexpected child: {other:?}"),
                    })
                    .collect();
                assert_eq!(titles, vec!["Foo", synthesize_title(&u2).as_str()]);
            }
            other => panic!("unexpected descriptor: {other:?}"),
        }
    }

    #[test]
    fn test_edit_bookmark_unchanged_fields_still_retitles() {
        // GIVEN title and location both unchanged
        let fixture = Fixture::new();
        let id = ItemId::new(10);
        let variant = ResolvedVariant::EditBookmark { bookmark_id: id };
        let mut fields = FieldSnapshot::new("Same");
        fields.location = Some("https://example.com/".into());
        fields.original_uri = Some(uri("https://example.com/"));

        // WHEN
        let plan = compose(&variant, &fields, &fixture.services(), "Bookmark Properties").unwrap();

        // THEN exactly one retitle and no URI side channel
        let aggregate = plan.aggregate.unwrap();
        assert_eq!(aggregate.children.len(), 1);
        assert_eq!(
            aggregate.children[0],
            TxnDescriptor::EditItemTitle {
                item: ItemTarget::Existing(id),
                title: "Same".into(),
            }
        );
        assert!(plan.uri_change.is_none());
    }

    #[test]
    fn test_edit_bookmark_changed_location_uses_side_channel() {
        // GIVEN the location field differs from the session-open URI
        let fixture = Fixture::new();
        let id = ItemId::new(10);
        let variant = ResolvedVariant::EditBookmark { bookmark_id: id };
        let mut fields = FieldSnapshot::new("Same");
        fields.location = Some("https://new.example/".into());
        fields.original_uri = Some(uri("https://old.example/"));

        // WHEN
        let plan = compose(&variant, &fields, &fixture.services(), "Bookmark Properties").unwrap();

        // THEN the rewrite rides outside the aggregate
        let aggregate = plan.aggregate.unwrap();
        assert!(aggregate
            .children
            .iter()
            .all(|d| matches!(d, TxnDescriptor::EditItemTitle { .. })));
        assert_eq!(
            plan.uri_change,
            Some(UriChange {
                item: id,
                uri: uri("https://new.example/"),
            })
        );
    }

    #[test]
    fn test_edit_bookmark_keyword_only_when_non_empty() {
        // GIVEN
        let fixture = Fixture::new();
        let variant = ResolvedVariant::EditBookmark {
            bookmark_id: ItemId::new(10),
        };
        let mut fields = FieldSnapshot::new("Same");
        fields.location = Some("https://example.com/".into());
        fields.original_uri = Some(uri("https://example.com/"));
        fields.keyword = Some(String::new());

        // WHEN empty keyword
        let plan = compose(&variant, &fields, &fixture.services(), "Bookmark Properties").unwrap();
        assert_eq!(plan.aggregate.unwrap().children.len(), 1);

        // WHEN non-empty keyword
        fields.keyword = Some("ex".into());
        let plan = compose(&variant, &fields, &fixture.services(), "Bookmark Properties").unwrap();

        // THEN
        let aggregate = plan.aggregate.unwrap();
        assert_eq!(aggregate.children.len(), 2);
        assert!(matches!(
            &aggregate.children[1],
            TxnDescriptor::EditKeyword { keyword, .. } if keyword == "ex"
        ));
    }

    #[test]
    fn test_edit_bookmark_microsummary_cleared() {
        // GIVEN the bookmark has a microsummary and the user chose none
        let mut fixture = Fixture::new();
        let page = uri("https://example.com/");
        let summary = MicrosummaryRef::new(uri("https://example.com/gen.xml"));
        fixture.current_summary.insert(page.clone(), summary);
        let variant = ResolvedVariant::EditBookmark {
            bookmark_id: ItemId::new(10),
        };
        let mut fields = FieldSnapshot::new("Same");
        fields.location = Some("https://example.com/".into());
        fields.original_uri = Some(page.clone());
        fields.microsummary = Some(MicrosummaryChoice::PageTitle);

        // WHEN
        let plan = compose(&variant, &fields, &fixture.services(), "Bookmark Properties").unwrap();

        // THEN
        let aggregate = plan.aggregate.unwrap();
        assert!(aggregate.children.contains(&TxnDescriptor::EditMicrosummary {
            uri: page,
            summary: None,
        }));
    }

    #[test]
    fn test_edit_bookmark_microsummary_unchanged_selection_is_skipped() {
        // GIVEN the user re-selected the current microsummary
        let mut fixture = Fixture::new();
        let page = uri("https://example.com/");
        let summary = MicrosummaryRef::new(uri("https://example.com/gen.xml"));
        fixture
            .current_summary
            .insert(page.clone(), summary.clone());
        let variant = ResolvedVariant::EditBookmark {
            bookmark_id: ItemId::new(10),
        };
        let mut fields = FieldSnapshot::new("Same");
        fields.location = Some("https://example.com/".into());
        fields.original_uri = Some(page);
        fields.microsummary = Some(MicrosummaryChoice::Summary(summary));

        // WHEN
        let plan = compose(&variant, &fields, &fixture.services(), "Bookmark Properties").unwrap();

        // THEN only the retitle remains
        assert_eq!(plan.aggregate.unwrap().children.len(), 1);
    }

    #[test]
    fn test_edit_folder_retitles_unconditionally() {
        // GIVEN
        let fixture = Fixture::new();
        let variant = ResolvedVariant::EditFolder {
            folder_id: FolderId::new(3),
        };
        let fields = FieldSnapshot::new("Renamed");

        // WHEN
        let plan = compose(&variant, &fields, &fixture.services(), "Folder Properties").unwrap();

        // THEN
        let aggregate = plan.aggregate.unwrap();
        assert_eq!(
            aggregate.children,
            vec![TxnDescriptor::EditFolderTitle {
                folder: FolderId::new(3),
                title: "Renamed".into(),
            }]
        );
    }

    #[test]
    fn test_edit_livemark_bad_feed_produces_zero_descriptors() {
        // GIVEN an unparsable feed field
        let fixture = Fixture::new();
        let variant = ResolvedVariant::EditLivemark {
            folder_id: FolderId::new(3),
        };
        let mut fields = FieldSnapshot::new("News");
        fields.feed_location = Some("not a uri".into());

        // WHEN
        let result = compose(&variant, &fields, &fixture.services(), "Livemark Properties");

        // THEN no partial aggregate escapes
        assert!(matches!(
            result,
            Err(ComposeError::InvalidUri { field, .. }) if field == FEED_LOCATION_FIELD
        ));
    }

    #[test]
    fn test_edit_livemark_empty_site_is_omitted() {
        // GIVEN
        let fixture = Fixture::new();
        let variant = ResolvedVariant::EditLivemark {
            folder_id: FolderId::new(3),
        };
        let mut fields = FieldSnapshot::new("News");
        fields.feed_location = Some("https://example.com/feed.xml".into());
        fields.site_location = Some(String::new());

        // WHEN
        let plan = compose(&variant, &fields, &fixture.services(), "Livemark Properties").unwrap();

        // THEN title and feed only
        let aggregate = plan.aggregate.unwrap();
        assert_eq!(aggregate.children.len(), 2);
        assert!(matches!(
            aggregate.children[1],
            TxnDescriptor::EditLivemarkFeedUri { .. }
        ));
    }

    #[test]
    fn test_edit_livemark_with_site_emits_all_three() {
        // GIVEN
        let fixture = Fixture::new();
        let variant = ResolvedVariant::EditLivemark {
            folder_id: FolderId::new(3),
        };
        let mut fields = FieldSnapshot::new("News");
        fields.feed_location = Some("https://example.com/feed.xml".into());
        fields.site_location = Some("https://example.com/".into());

        // WHEN
        let plan = compose(&variant, &fields, &fixture.services(), "Livemark Properties").unwrap();

        // THEN
        let aggregate = plan.aggregate.unwrap();
        assert_eq!(aggregate.children.len(), 3);
        assert!(matches!(
            aggregate.children[2],
            TxnDescriptor::EditLivemarkSiteUri { .. }
        ));
    }

    #[test]
    fn test_aggregate_label_is_the_dialog_title() {
        // GIVEN
        let fixture = Fixture::new();
        let variant = ResolvedVariant::EditFolder {
            folder_id: FolderId::new(3),
        };

        // WHEN
        let plan = compose(
            &variant,
            &FieldSnapshot::new("x"),
            &fixture.services(),
            "Folder Properties",
        )
        .unwrap();

        // THEN
        assert_eq!(plan.aggregate.unwrap().label, "Folder Properties");
    }
}
