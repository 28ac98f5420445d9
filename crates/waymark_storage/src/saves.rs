//! Save-slot navigation state.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use waymark_foundation::constants::SAVE_SLOTS_DISPLAYED;

/// Which page of saved games is on screen, and which save was picked.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SaveBrowser {
    count: usize,
    lower_limit: bool,
    upper_limit: bool,
    displayed: [String; SAVE_SLOTS_DISPLAYED],
    selected: Option<String>,
}

impl SaveBrowser {
    /// Creates a browser on the first page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current page index.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Moves one page forward.
    pub fn increase(&mut self) {
        self.count += 1;
    }

    /// Moves one page back, stopping at the first page.
    pub fn decrease(&mut self) {
        self.count = self.count.saturating_sub(1);
    }

    /// Returns to the first page.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    /// Fills the displayed labels from the full, sorted list of save names.
    ///
    /// A page index past the end is pulled back to the last page.
    pub fn show_page(&mut self, names: &[String]) {
        let pages = names.len().div_ceil(SAVE_SLOTS_DISPLAYED).max(1);
        self.count = self.count.min(pages - 1);

        let start = self.count * SAVE_SLOTS_DISPLAYED;
        self.displayed = std::array::from_fn(|i| names.get(start + i).cloned().unwrap_or_default());
        self.lower_limit = self.count == 0;
        self.upper_limit = start + SAVE_SLOTS_DISPLAYED >= names.len();
        tracing::debug!(
            page = self.count,
            lower = self.lower_limit,
            upper = self.upper_limit,
            "save page shown"
        );
    }

    /// True when the first page is showing.
    #[must_use]
    pub fn lower_limit(&self) -> bool {
        self.lower_limit
    }

    /// True when the last page is showing.
    #[must_use]
    pub fn upper_limit(&self) -> bool {
        self.upper_limit
    }

    /// Labels on the current page; unused slots are empty.
    #[must_use]
    pub fn displayed(&self) -> &[String; SAVE_SLOTS_DISPLAYED] {
        &self.displayed
    }

    /// Picks a displayed slot. Returns false for empty or out-of-range slots.
    pub fn select(&mut self, slot: usize) -> bool {
        match self.displayed.get(slot) {
            Some(label) if !label.is_empty() => {
                self.selected = Some(label.clone());
                true
            }
            _ => false,
        }
    }

    /// Takes the picked save name, clearing the selection.
    pub fn take_selected(&mut self) -> Option<String> {
        self.selected.take()
    }
}
