//! Suggestion panel
//!
//! The panel owns nothing but the input's focus flag. Everything it shows is
//! derived on demand from the focus flag, the live query and the debounced
//! filtered list handed down by the [`SearchWidget`](super::SearchWidget).

use std::borrow::Cow;

/// Focus state and display rule for the suggestion list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuggestionPanel {
    is_focused: bool,
}

impl SuggestionPanel {
    /// Create an unfocused panel
    #[must_use]
    pub const fn new() -> Self {
        Self { is_focused: false }
    }

    /// Whether the search input has focus
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// The search input gained focus
    pub fn focus(&mut self) {
        self.is_focused = true;
    }

    /// The search input lost focus
    pub fn blur(&mut self) {
        self.is_focused = false;
    }

    /// Whether the whole dataset is shown instead of the filtered list
    ///
    /// True only while the input is focused and the query is empty.
    #[must_use]
    pub const fn shows_full_dataset(&self, query: &str) -> bool {
        self.is_focused && query.is_empty()
    }

    /// Dataset indices to display, in order
    #[must_use]
    pub fn displayed<'a>(&self, query: &str, total: usize, filtered: &'a [usize]) -> Cow<'a, [usize]> {
        if self.shows_full_dataset(query) {
            Cow::Owned((0..total).collect())
        } else {
            Cow::Borrowed(filtered)
        }
    }

    /// Dataset index behind the clicked `row`
    #[must_use]
    pub fn row_target(&self, query: &str, total: usize, filtered: &[usize], row: usize) -> Option<usize> {
        if self.shows_full_dataset(query) {
            (row < total).then_some(row)
        } else {
            filtered.get(row).copied()
        }
    }
}
