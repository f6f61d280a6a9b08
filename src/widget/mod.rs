//! Headless autocomplete widget
//!
//! [`SearchWidget`] is the whole behavior of the picker with no terminal
//! attached: the live query, the debounced filtered list, the selected person
//! and the composed [`SuggestionPanel`]. A host feeds it input events and the
//! current time, and reads back a [`WidgetView`] to draw.
//!
//! # State transitions
//!
//! - Editing the query updates it immediately and (re)schedules the filter
//!   recomputation. A non-empty query also clears the current selection.
//! - [`SearchWidget::tick`] applies the recomputation once the debounce delay
//!   has passed with no further edits.
//! - Selecting a suggestion stores the person and fires the `on_selected`
//!   callback.
//!
//! # Example
//!
//! ```
//! use peoplepick::people::{Dataset, Person};
//! use peoplepick::widget::{SearchWidget, WidgetConfig};
//! use std::time::{Duration, Instant};
//!
//! let dataset = Dataset::new(vec![
//!     Person::new("Alice", 1900, 1980, "alice"),
//!     Person::new("Bob", 1920, 1990, "bob"),
//! ]);
//! let mut widget = SearchWidget::new(dataset, WidgetConfig::default());
//!
//! let start = Instant::now();
//! widget.change_query("ali", start);
//! widget.tick(start + Duration::from_millis(300));
//!
//! widget.click_suggestion(0);
//! assert_eq!(widget.header_text(), "Alice (1900 - 1980)");
//! ```

mod panel;

pub use panel::SuggestionPanel;

use crate::debounce::Debouncer;
use crate::people::{Dataset, Person, filter_indices};
use std::borrow::Cow;
use std::fmt;
use std::time::{Duration, Instant};

/// Header text shown while nobody is selected
pub const NO_SELECTION: &str = "No selected person";

/// Default quiet period before the filtered list is recomputed
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Callback fired after a person is selected
pub type SelectionCallback = Box<dyn FnMut(&Person)>;

/// Widget configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidgetConfig {
    /// Quiet period after the last edit before filtering
    pub debounce_delay: Duration,
}

impl WidgetConfig {
    /// Configuration with a debounce delay in milliseconds
    #[must_use]
    pub const fn from_millis(debounce_ms: u64) -> Self {
        Self {
            debounce_delay: Duration::from_millis(debounce_ms),
        }
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            debounce_delay: DEFAULT_DEBOUNCE,
        }
    }
}

/// One row of the suggestion list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRow<'a> {
    /// Position of the person in the dataset
    pub index: usize,
    pub person: &'a Person,
}

/// Snapshot of everything a host needs to draw the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetView<'a> {
    pub header: String,
    pub query: &'a str,
    pub is_focused: bool,
    pub rows: Vec<SuggestionRow<'a>>,
    pub show_empty_notice: bool,
}

/// Debounced autocomplete over a fixed dataset
pub struct SearchWidget {
    dataset: Dataset,
    query: String,
    selected: Option<usize>,
    filtered: Vec<usize>,
    debouncer: Debouncer<String>,
    panel: SuggestionPanel,
    on_selected: Option<SelectionCallback>,
}

impl fmt::Debug for SearchWidget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchWidget")
            .field("query", &self.query)
            .field("selected", &self.selected)
            .field("filtered", &self.filtered)
            .field("debouncer", &self.debouncer)
            .field("panel", &self.panel)
            .field("on_selected", &self.on_selected.is_some())
            .finish_non_exhaustive()
    }
}

impl SearchWidget {
    /// Mount a widget over `dataset`
    ///
    /// Starts with an empty query, no selection, a blurred input and the whole
    /// dataset as the filtered list.
    #[must_use]
    pub fn new(dataset: Dataset, config: WidgetConfig) -> Self {
        let filtered = (0..dataset.len()).collect();
        Self {
            dataset,
            query: String::new(),
            selected: None,
            filtered,
            debouncer: Debouncer::new(config.debounce_delay),
            panel: SuggestionPanel::new(),
            on_selected: None,
        }
    }

    /// Set the selection callback
    #[must_use]
    pub fn with_on_selected(mut self, callback: impl FnMut(&Person) + 'static) -> Self {
        self.on_selected = Some(Box::new(callback));
        self
    }

    /// The full dataset
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// The live query, as typed
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The selected person, if any
    #[must_use]
    pub fn selected_person(&self) -> Option<&Person> {
        self.selected.and_then(|idx| self.dataset.get(idx))
    }

    /// Dataset indices of the debounced filtered list
    #[must_use]
    pub fn filtered_indices(&self) -> &[usize] {
        &self.filtered
    }

    /// People in the debounced filtered list
    #[must_use]
    pub fn filtered_people(&self) -> Vec<&Person> {
        self.people_at(&self.filtered)
    }

    /// The composed suggestion panel
    #[must_use]
    pub const fn panel(&self) -> &SuggestionPanel {
        &self.panel
    }

    /// Whether the search input has focus
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.panel.is_focused()
    }

    /// Current debounce delay
    #[must_use]
    pub const fn debounce_delay(&self) -> Duration {
        self.debouncer.delay()
    }

    /// Whether a filter recomputation is waiting on the debounce
    #[must_use]
    pub const fn is_refresh_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Focus the search input
    pub fn focus(&mut self) {
        self.panel.focus();
    }

    /// Blur the search input
    pub fn blur(&mut self) {
        self.panel.blur();
    }

    /// Replace the query
    ///
    /// The query changes immediately; the filtered list follows after the
    /// debounce delay. A non-empty query clears the selection. Returns `false`
    /// if `query` equals the current one, in which case nothing happens.
    pub fn change_query(&mut self, query: impl Into<String>, now: Instant) -> bool {
        let query = query.into();
        if query == self.query {
            return false;
        }

        self.query = query;

        if !self.query.is_empty() && self.selected.take().is_some() {
            tracing::debug!(query = %self.query, "selection cleared by typing");
        }

        self.debouncer.schedule(self.query.clone(), now);
        tracing::trace!(query = %self.query, "filter scheduled");
        true
    }

    /// Change the debounce delay, re-arming a pending recomputation
    pub fn set_debounce_delay(&mut self, delay: Duration, now: Instant) {
        self.debouncer.set_delay(delay, now);
    }

    /// Apply the pending filter recomputation if its delay has passed
    ///
    /// Returns `true` when the filtered list was recomputed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(query) = self.debouncer.poll(now) else {
            return false;
        };

        self.filtered = filter_indices(self.dataset.people(), &query);
        tracing::debug!(query = %query, matches = self.filtered.len(), "filter applied");
        true
    }

    /// Time until the pending recomputation fires, if one is pending
    #[must_use]
    pub fn time_until_refresh(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_ready(now)
    }

    /// Select the person at dataset position `index`
    ///
    /// Fires the `on_selected` callback after the selection is stored.
    pub fn select(&mut self, index: usize) -> Option<&Person> {
        let person = self.dataset.get(index)?;
        self.selected = Some(index);
        tracing::info!(slug = %person.slug, "person selected");

        if let Some(callback) = self.on_selected.as_mut() {
            callback(person);
        }
        Some(person)
    }

    /// Select the person shown at `row` of the suggestion list
    pub fn click_suggestion(&mut self, row: usize) -> Option<&Person> {
        let index = self
            .panel
            .row_target(&self.query, self.dataset.len(), &self.filtered, row)?;
        self.select(index)
    }

    /// Dataset indices currently shown in the suggestion list
    #[must_use]
    pub fn displayed_indices(&self) -> Cow<'_, [usize]> {
        self.panel
            .displayed(&self.query, self.dataset.len(), &self.filtered)
    }

    /// People currently shown in the suggestion list
    #[must_use]
    pub fn displayed_people(&self) -> Vec<&Person> {
        self.people_at(&self.displayed_indices())
    }

    /// Header text: the selected person's label or the placeholder
    #[must_use]
    pub fn header_text(&self) -> String {
        self.selected_person()
            .map_or_else(|| NO_SELECTION.to_string(), Person::label)
    }

    /// Whether the "no matching suggestions" notice is shown
    ///
    /// Follows the debounced list, not what the panel is displaying.
    #[must_use]
    pub fn shows_empty_notice(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Snapshot for rendering
    #[must_use]
    pub fn view(&self) -> WidgetView<'_> {
        let rows = self
            .displayed_indices()
            .iter()
            .filter_map(|&index| {
                self.dataset
                    .get(index)
                    .map(|person| SuggestionRow { index, person })
            })
            .collect();

        WidgetView {
            header: self.header_text(),
            query: &self.query,
            is_focused: self.is_focused(),
            rows,
            show_empty_notice: self.shows_empty_notice(),
        }
    }

    /// Unmount the widget, cancelling any pending recomputation
    ///
    /// Returns the person that was selected at the time.
    pub fn teardown(mut self) -> Option<Person> {
        if self.debouncer.cancel().is_some() {
            tracing::debug!("pending filter cancelled on teardown");
        }
        self.selected.and_then(|idx| self.dataset.get(idx).cloned())
    }

    fn people_at(&self, indices: &[usize]) -> Vec<&Person> {
        indices
            .iter()
            .filter_map(|&idx| self.dataset.get(idx))
            .collect()
    }
}
