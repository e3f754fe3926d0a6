//! Shared validation helpers.
//!
//! All URI-bearing fields pass through here before the composer builds a
//! single descriptor, so a parse failure can never leave a partial plan.

use marq_resolver::{EditSubjectKind, ResolvedVariant};
use url::Url;

use crate::error::{ComposeError, ComposeResult};
use crate::fields::FieldSnapshot;

/// Field name used in location errors.
pub const LOCATION_FIELD: &str = "location";
/// Field name used in feed location errors.
pub const FEED_LOCATION_FIELD: &str = "feed location";
/// Field name used in site location errors.
pub const SITE_LOCATION_FIELD: &str = "site location";

/// Synthesized titles are capped at this many characters of the URI string.
pub const SYNTHESIZED_TITLE_LIMIT: usize = 100;

/// Parse a required URI field.
pub fn parse_uri(field: &'static str, value: &str) -> ComposeResult<Url> {
    Url::parse(value).map_err(|_| ComposeError::invalid_uri(field, value))
}

/// Parse an optional URI field; an empty or absent value is an omission.
pub fn parse_optional_uri(field: &'static str, value: Option<&str>) -> ComposeResult<Option<Url>> {
    match value {
        None => Ok(None),
        Some(v) if v.is_empty() => Ok(None),
        Some(v) => parse_uri(field, v).map(Some),
    }
}

/// Fallback title for a URI with no history entry: the first
/// `SYNTHESIZED_TITLE_LIMIT` characters of the URI string. A created item
/// is never left untitled.
pub fn synthesize_title(uri: &Url) -> String {
    uri.as_str().chars().take(SYNTHESIZED_TITLE_LIMIT).collect()
}

/// Pre-commit validity check mirroring the accept-button gating:
/// adding requires a folder pick, bookmark subjects require a parsable
/// location, livemark subjects require a parsable feed and a
/// parsable-or-empty site.
pub fn fields_are_valid(variant: &ResolvedVariant, fields: &FieldSnapshot) -> bool {
    if variant.is_add() && fields.folder_picks.is_empty() {
        return false;
    }

    if variant.subject_kind() == EditSubjectKind::Bookmark {
        let location = fields.location.as_deref().unwrap_or("");
        if Url::parse(location).is_err() {
            return false;
        }
    }

    if variant.subject_kind() == EditSubjectKind::LivemarkContainer {
        let feed = fields.feed_location.as_deref().unwrap_or("");
        if Url::parse(feed).is_err() {
            return false;
        }
        if parse_optional_uri(SITE_LOCATION_FIELD, fields.site_location.as_deref()).is_err() {
            return false;
        }
    }

    true
}
