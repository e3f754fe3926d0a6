//! Edit session orchestration.
//!
//! A session resolves its variant once at open, derives the initial field
//! values the host shows in its dialog, and at accept time composes a plan
//! and hands it to the commit target. There is no feedback loop: the
//! resolved variant is read-only input to every later step.

use marq_core::{BookmarkReader, BookmarkUriSink, HistoryTitles, LivemarkStatus, MicrosummaryStatus};
use url::Url;
use marq_resolver::{resolve, EditRequest, ResolvedVariant};
use marq_txn::TxnExecutor;

use crate::compose::{compose, ComposerServices};
use crate::error::{ComposeResult, SessionResult};
use crate::fields::FieldSnapshot;
use crate::labels;
use crate::plan::CommitPlan;
use crate::validation::synthesize_title;

/// All read-side collaborators a session consults.
pub struct SessionServices<'a> {
    pub bookmarks: &'a dyn BookmarkReader,
    pub history: &'a dyn HistoryTitles,
    pub livemarks: &'a dyn LivemarkStatus,
    pub microsummaries: &'a dyn MicrosummaryStatus,
}

impl<'a> SessionServices<'a> {
    fn composer(&self) -> ComposerServices<'a> {
        ComposerServices {
            bookmarks: self.bookmarks,
            history: self.history,
            microsummaries: self.microsummaries,
        }
    }
}

/// Where a committed plan lands: the undoable executor plus the direct
/// URI sink. One store usually implements both.
pub trait CommitTarget: TxnExecutor + BookmarkUriSink {}

impl<T: TxnExecutor + BookmarkUriSink> CommitTarget for T {}

/// What a commit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The plan was applied.
    Committed,
    /// The plan was a no-op; nothing touched the store.
    NoChanges,
}

/// One dialog's worth of edit state: the immutable variant plus the field
/// values the dialog opened with.
pub struct EditSession {
    variant: ResolvedVariant,
    initial: FieldSnapshot,
}

impl EditSession {
    /// Resolve the request and derive the initial field values.
    ///
    /// A pre-supplied title (even an empty one) wins over every derived
    /// title; otherwise adds take the history title of the URI or the
    /// all-tabs default, and edits take the subject's stored title.
    pub fn open(request: &EditRequest, services: &SessionServices<'_>) -> SessionResult<Self> {
        let variant = resolve(request, services.livemarks)?;
        let initial = initial_fields(&variant, request.title.clone(), services);
        Ok(Self { variant, initial })
    }

    /// The resolved variant, immutable for the session's lifetime.
    pub fn variant(&self) -> &ResolvedVariant {
        &self.variant
    }

    /// The dialog title; also the label of the committed aggregate.
    pub fn dialog_title(&self) -> &'static str {
        labels::dialog_title(&self.variant)
    }

    /// The accept-button label for this variant.
    pub fn accept_label(&self) -> &'static str {
        labels::accept_label(&self.variant)
    }

    /// The field values the dialog opens with; the host clones and edits.
    pub fn initial_fields(&self) -> &FieldSnapshot {
        &self.initial
    }

    /// Compose the commit plan for the current field values.
    pub fn plan(
        &self,
        fields: &FieldSnapshot,
        services: &SessionServices<'_>,
    ) -> ComposeResult<CommitPlan> {
        compose(&self.variant, fields, &services.composer(), self.dialog_title())
    }

    /// Apply a composed plan: the aggregate through the undoable executor,
    /// the URI change straight to the store.
    pub fn commit(&self, plan: CommitPlan, target: &mut dyn CommitTarget) -> SessionResult<CommitOutcome> {
        if plan.is_noop() {
            return Ok(CommitOutcome::NoChanges);
        }
        if let Some(aggregate) = plan.aggregate {
            target.commit(aggregate)?;
        }
        if let Some(change) = plan.uri_change {
            target.change_bookmark_uri(change.item, change.uri);
        }
        Ok(CommitOutcome::Committed)
    }
}

fn initial_fields(
    variant: &ResolvedVariant,
    supplied_title: Option<String>,
    services: &SessionServices<'_>,
) -> FieldSnapshot {
    let mut fields = FieldSnapshot::default();

    match variant {
        ResolvedVariant::AddBookmark { uri } => {
            fields.title = supplied_title.unwrap_or_else(|| {
                services
                    .history
                    .page_title(uri)
                    .filter(|title| !title.is_empty())
                    .unwrap_or_else(|| synthesize_title(uri))
            });
            fields.location = Some(uri.to_string());
            fields.original_uri = Some(uri.clone());
        }

        ResolvedVariant::AddFolderWithItems { .. } => {
            fields.title =
                supplied_title.unwrap_or_else(|| labels::BOOKMARK_ALL_TABS_DEFAULT.to_string());
        }

        ResolvedVariant::EditBookmark { bookmark_id } => {
            fields.title = supplied_title.unwrap_or_else(|| {
                services
                    .bookmarks
                    .item_title(*bookmark_id)
                    .unwrap_or_default()
            });
            let uri = services.bookmarks.bookmark_uri(*bookmark_id);
            fields.location = uri.as_ref().map(Url::to_string);
            fields.original_uri = uri;
            fields.keyword = services.bookmarks.keyword_for(*bookmark_id);
        }

        ResolvedVariant::EditFolder { folder_id } => {
            fields.title = supplied_title.unwrap_or_else(|| {
                services
                    .bookmarks
                    .folder_title(*folder_id)
                    .unwrap_or_default()
            });
        }

        ResolvedVariant::EditLivemark { folder_id } => {
            fields.title = supplied_title.unwrap_or_else(|| {
                services
                    .bookmarks
                    .folder_title(*folder_id)
                    .unwrap_or_default()
            });
            fields.feed_location = services
                .livemarks
                .feed_uri(*folder_id)
                .map(|uri| uri.to_string());
            fields.site_location = services
                .livemarks
                .site_uri(*folder_id)
                .map(|uri| uri.to_string());
        }
    }

    fields
}
