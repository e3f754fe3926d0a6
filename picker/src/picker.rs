//! Microsummary menu state.

use marq_core::{MicrosummaryChoice, MicrosummaryRef};

/// One selectable microsummary in the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MicrosummaryEntry {
    /// The microsummary this entry represents.
    pub summary: MicrosummaryRef,
    /// Generated content, once the host service has produced it.
    pub content: Option<String>,
    /// Human-readable generator name, if the generator declares one.
    pub generator_name: Option<String>,
}

impl MicrosummaryEntry {
    /// Entry whose content has not been generated yet.
    pub fn pending(summary: MicrosummaryRef) -> Self {
        Self {
            summary,
            content: None,
            generator_name: None,
        }
    }

    /// Menu label: the content when present, else the generator name, else
    /// the generator URI itself.
    pub fn label(&self) -> &str {
        if let Some(content) = &self.content {
            content
        } else if let Some(name) = &self.generator_name {
            name
        } else {
            self.summary.generator_uri.as_str()
        }
    }
}

/// State of the microsummary menu.
///
/// Index 0 is always the implicit "show the page title instead" entry;
/// real entries start at index 1. Disabled pickers (unsupported scheme,
/// non-HTML page) keep `enabled` false and never surface a choice.
pub struct MicrosummaryPicker {
    entries: Vec<MicrosummaryEntry>,
    selected: usize,
    enabled: bool,
}

impl MicrosummaryPicker {
    /// A disabled picker with no entries.
    pub fn disabled() -> Self {
        Self {
            entries: Vec::new(),
            selected: 0,
            enabled: false,
        }
    }

    /// An enabled picker with the page-title entry selected.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            selected: 0,
            enabled: true,
        }
    }

    /// Returns true if the picker is shown at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The available entries, page-title entry excluded.
    pub fn entries(&self) -> &[MicrosummaryEntry] {
        &self.entries
    }

    /// Rebuild the menu from a fresh list of entries, keeping the entry for
    /// the bookmark's current microsummary selected. Runs after every
    /// content-loaded or element-appended event.
    pub fn rebuild(
        &mut self,
        entries: Vec<MicrosummaryEntry>,
        is_current: impl Fn(&MicrosummaryRef) -> bool,
    ) {
        self.entries = entries;
        self.selected = self
            .entries
            .iter()
            .position(|entry| is_current(&entry.summary))
            .map(|index| index + 1)
            .unwrap_or(0);
    }

    /// Select a menu index; 0 is the page-title entry. Out-of-range
    /// selections conservatively fall back to the page title.
    pub fn select(&mut self, index: usize) {
        if index <= self.entries.len() {
            self.selected = index;
        } else {
            self.selected = 0;
        }
    }

    /// The selection as a composer-facing choice; `None` while disabled.
    pub fn choice(&self) -> Option<MicrosummaryChoice> {
        if !self.enabled {
            return None;
        }
        if self.selected == 0 {
            Some(MicrosummaryChoice::PageTitle)
        } else {
            self.entries
                .get(self.selected - 1)
                .map(|entry| MicrosummaryChoice::Summary(entry.summary.clone()))
        }
    }
}

impl Default for MicrosummaryPicker {
    fn default() -> Self {
        Self::new()
    }
}
