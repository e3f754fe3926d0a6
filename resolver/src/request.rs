//! The raw edit request as handed over by the host.

use url::Url;

/// The thing the host wants edited, in one of three shapes.
///
/// The shape is validated against the action code during resolution; no
/// shape is ever coerced into another.
#[derive(Debug, Clone)]
pub enum Identifier {
    /// A page URI (add-single workflows).
    Uri(Url),
    /// A numeric bookmark-store id (edit workflows).
    ItemId(i64),
    /// A list of page URIs (add-multiple workflows).
    UriList(Vec<Url>),
}

impl Identifier {
    /// Short human-readable name of this identifier's shape.
    pub fn shape(&self) -> &'static str {
        match self {
            Identifier::Uri(_) => "URI",
            Identifier::ItemId(_) => "numeric id",
            Identifier::UriList(_) => "URI list",
        }
    }
}

/// A request to open an edit session.
#[derive(Debug, Clone)]
pub struct EditRequest {
    /// What is being edited or added.
    pub identifier: Identifier,
    /// Action code from the host UI: "add", "addmulti", "edititem"
    /// or "editfolder".
    pub action: String,
    /// Pre-supplied title. `Some("")` is an explicitly empty title and is
    /// honored as-is; `None` means "derive a title during session setup".
    pub title: Option<String>,
}

impl EditRequest {
    /// Create a request with no pre-supplied title.
    pub fn new(identifier: Identifier, action: impl Into<String>) -> Self {
        Self {
            identifier,
            action: action.into(),
            title: None,
        }
    }

    /// Attach a pre-supplied title (empty string allowed).
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
