//! Microsummary reference and selection types.
//!
//! Microsummary *content* is generated asynchronously by an external host
//! service; MARQ only ever handles opaque references to a generator and the
//! user's selection among them.

use url::Url;

/// Reference to a microsummary, identified by its generator URI.
///
/// Two references to the same generator are the same microsummary, whether
/// or not content has been generated for either yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MicrosummaryRef {
    /// URI of the generator that produces this microsummary.
    pub generator_uri: Url,
}

impl MicrosummaryRef {
    /// Create a reference from a generator URI.
    pub fn new(generator_uri: Url) -> Self {
        Self { generator_uri }
    }
}

/// The user's microsummary selection for a bookmark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MicrosummaryChoice {
    /// Show the page title instead of any microsummary.
    PageTitle,
    /// Show the given microsummary.
    Summary(MicrosummaryRef),
}

impl MicrosummaryChoice {
    /// Get the selected reference, if any.
    pub fn summary(&self) -> Option<&MicrosummaryRef> {
        match self {
            MicrosummaryChoice::PageTitle => None,
            MicrosummaryChoice::Summary(m) => Some(m),
        }
    }
}
