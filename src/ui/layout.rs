//! Element identifiers and the hit map
//!
//! Every element the picker draws is tagged with an [`ElementId`] whose string
//! form never changes (`title`, `search-input`, ...). Each frame records where
//! those elements landed in a [`HitMap`], which is what mouse clicks are
//! resolved against and what tests query to find things on screen.

use ratatui::layout::{Position, Rect};
use std::fmt;

/// Stable identifier of a rendered element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementId {
    /// Header showing the selected person
    Title,
    /// The query input
    SearchInput,
    /// Container of the suggestion rows
    SuggestionsList,
    /// One suggestion row
    SuggestionItem,
    /// Notice shown when the filtered list is empty
    NoSuggestionsMessage,
}

impl ElementId {
    /// Identifier string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::SearchInput => "search-input",
            Self::SuggestionsList => "suggestions-list",
            Self::SuggestionItem => "suggestion-item",
            Self::NoSuggestionsMessage => "no-suggestions-message",
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an element was drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: ElementId,
    pub area: Rect,
    /// Row in the suggestion list, for `SuggestionItem` regions
    pub row: Option<usize>,
    /// Slug of the person on that row
    pub key: Option<String>,
}

/// Regions drawn in the last frame, in drawing order
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    regions: Vec<Region>,
}

impl HitMap {
    /// Create an empty hit map
    #[must_use]
    pub const fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Forget the previous frame
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    /// Record an element's area
    pub fn record(&mut self, id: ElementId, area: Rect) {
        self.regions.push(Region {
            id,
            area,
            row: None,
            key: None,
        });
    }

    /// Record one suggestion row
    pub fn record_item(&mut self, row: usize, key: impl Into<String>, area: Rect) {
        self.regions.push(Region {
            id: ElementId::SuggestionItem,
            area,
            row: Some(row),
            key: Some(key.into()),
        });
    }

    /// Innermost region under `(x, y)`
    ///
    /// Regions recorded later sit on top of earlier ones.
    #[must_use]
    pub fn hit(&self, x: u16, y: u16) -> Option<&Region> {
        let position = Position::new(x, y);
        self.regions
            .iter()
            .rev()
            .find(|region| region.area.contains(position))
    }

    /// First region with `id`
    #[must_use]
    pub fn find(&self, id: ElementId) -> Option<&Region> {
        self.regions.iter().find(|region| region.id == id)
    }

    /// All regions with `id`, in drawing order
    pub fn find_all(&self, id: ElementId) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(move |region| region.id == id)
    }

    /// Whether an element with `id` was drawn
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.find(id).is_some()
    }
}
