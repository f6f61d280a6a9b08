//! Application state for the picker TUI
//!
//! Wraps the headless [`SearchWidget`] with what only a terminal needs: the
//! text cursor inside the query, the highlighted suggestion row for keyboard
//! selection, list scrolling and the hit map of the last frame.

use crate::ui::layout::HitMap;
use crate::widget::SearchWidget;
use std::time::Instant;

/// Application state for the picker
#[derive(Debug)]
pub struct AppState {
    /// The widget being driven
    pub widget: SearchWidget,
    /// Byte position of the text cursor within the query
    pub query_cursor: usize,
    /// Highlighted row in the displayed suggestion list
    pub cursor: usize,
    /// Scroll offset for the suggestion list
    pub scroll_offset: usize,
    /// Height of the visible suggestion area (set during render)
    pub visible_height: usize,
    /// Regions drawn in the last frame
    pub hit_map: HitMap,
    /// Quit right after a selection
    pub exit_on_select: bool,
    /// Whether the picker should exit
    pub should_exit: bool,
}

impl AppState {
    /// Create new application state around `widget`
    #[must_use]
    pub fn new(widget: SearchWidget) -> Self {
        let query_cursor = widget.query().len();
        Self {
            widget,
            query_cursor,
            cursor: 0,
            scroll_offset: 0,
            visible_height: 10, // Default, updated during render
            hit_map: HitMap::new(),
            exit_on_select: false,
            should_exit: false,
        }
    }

    /// Quit after the first selection
    #[must_use]
    pub const fn with_exit_on_select(mut self, exit_on_select: bool) -> Self {
        self.exit_on_select = exit_on_select;
        self
    }

    /// Give the widget back, e.g. to tear it down
    #[must_use]
    pub fn into_widget(self) -> SearchWidget {
        self.widget
    }

    /// Number of rows currently displayed
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.widget.displayed_indices().len()
    }

    /// Move highlight up
    pub fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move highlight down
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.row_count() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move highlight up by one page
    pub fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height.max(1));
        self.adjust_scroll();
    }

    /// Move highlight down by one page
    pub fn page_down(&mut self) {
        let max_cursor = self.row_count().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height.max(1)).min(max_cursor);
        self.adjust_scroll();
    }

    /// Keep the highlight inside the displayed list
    ///
    /// The list changes under the highlight when the debounce fires or focus
    /// toggles, so this runs every frame.
    pub fn clamp_cursor(&mut self) {
        let max_cursor = self.row_count().saturating_sub(1);
        if self.cursor > max_cursor {
            self.cursor = max_cursor;
        }
        if self.scroll_offset > self.cursor {
            self.scroll_offset = self.cursor;
        }
        self.adjust_scroll();
    }

    /// Adjust scroll offset to keep the highlight visible
    fn adjust_scroll(&mut self) {
        let height = self.visible_height.max(1);
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    /// Focus the search input
    pub fn focus_input(&mut self) {
        self.widget.focus();
        self.clamp_cursor();
    }

    /// Blur the search input
    pub fn blur_input(&mut self) {
        self.widget.blur();
        self.clamp_cursor();
    }

    /// Toggle focus of the search input
    pub fn toggle_focus(&mut self) {
        if self.widget.is_focused() {
            self.widget.blur();
        } else {
            self.widget.focus();
        }
        self.clamp_cursor();
    }

    /// Select the highlighted row
    ///
    /// Returns `true` if someone was selected.
    pub fn select_highlighted(&mut self) -> bool {
        self.select_row(self.cursor)
    }

    /// Select the person on `row` of the displayed list
    ///
    /// Returns `true` if someone was selected.
    pub fn select_row(&mut self, row: usize) -> bool {
        if self.widget.click_suggestion(row).is_none() {
            return false;
        }
        self.cursor = row;
        if self.exit_on_select {
            self.should_exit = true;
        }
        true
    }

    /// Replace the query and restart the highlight from the top
    fn set_query(&mut self, query: String, cursor: usize, now: Instant) -> bool {
        self.query_cursor = cursor;
        let changed = self.widget.change_query(query, now);
        if changed {
            self.cursor = 0;
            self.scroll_offset = 0;
        }
        changed
    }

    /// Pull the text cursor back inside the query
    ///
    /// The widget is public, so its query can change without going through
    /// these editors.
    fn sync_query_cursor(&mut self) {
        let query = self.widget.query();
        let mut cursor = self.query_cursor.min(query.len());
        while !query.is_char_boundary(cursor) {
            cursor -= 1;
        }
        self.query_cursor = cursor;
    }

    /// Insert a character at the text cursor
    pub fn query_push(&mut self, c: char, now: Instant) -> bool {
        self.sync_query_cursor();
        let mut query = self.widget.query().to_string();
        query.insert(self.query_cursor, c);
        let cursor = self.query_cursor + c.len_utf8();
        self.set_query(query, cursor, now)
    }

    /// Remove the character before the text cursor (backspace)
    pub fn query_backspace(&mut self, now: Instant) -> bool {
        self.sync_query_cursor();
        if self.query_cursor == 0 {
            return false;
        }
        let mut query = self.widget.query().to_string();
        let prev_char_boundary = query[..self.query_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        query.remove(prev_char_boundary);
        self.set_query(query, prev_char_boundary, now)
    }

    /// Delete the character under the text cursor
    pub fn query_delete(&mut self, now: Instant) -> bool {
        self.sync_query_cursor();
        if self.query_cursor >= self.widget.query().len() {
            return false;
        }
        let mut query = self.widget.query().to_string();
        query.remove(self.query_cursor);
        self.set_query(query, self.query_cursor, now)
    }

    /// Delete the word before the text cursor
    pub fn query_delete_word(&mut self, now: Instant) -> bool {
        self.sync_query_cursor();
        let mut query = self.widget.query().to_string();
        let trimmed = query[..self.query_cursor].trim_end();
        let start = trimmed.rfind(' ').map_or(0, |last_space| last_space + 1);
        query.drain(start..self.query_cursor);
        self.set_query(query, start, now)
    }

    /// Clear the query
    pub fn query_clear(&mut self, now: Instant) -> bool {
        self.set_query(String::new(), 0, now)
    }

    /// Move text cursor left
    pub fn query_cursor_left(&mut self) {
        self.sync_query_cursor();
        if self.query_cursor > 0 {
            self.query_cursor = self.widget.query()[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move text cursor right
    pub fn query_cursor_right(&mut self) {
        self.sync_query_cursor();
        let query = self.widget.query();
        if self.query_cursor < query.len() {
            self.query_cursor = query[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(query.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Move text cursor to the start of the query
    pub const fn query_cursor_home(&mut self) {
        self.query_cursor = 0;
    }

    /// Move text cursor to the end of the query
    pub fn query_cursor_end(&mut self) {
        self.query_cursor = self.widget.query().len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{alice_and_bob, haverbeke_family};
    use crate::widget::{DEFAULT_DEBOUNCE, WidgetConfig};

    fn make_state() -> AppState {
        AppState::new(SearchWidget::new(haverbeke_family(), WidgetConfig::default()))
    }

    #[test]
    fn test_cursor_navigation() {
        let mut state = AppState::new(SearchWidget::new(alice_and_bob(), WidgetConfig::default()));

        assert_eq!(state.cursor, 0);
        state.cursor_down();
        assert_eq!(state.cursor, 1);

        // Should not go past end
        state.cursor_down();
        assert_eq!(state.cursor, 1);

        state.cursor_up();
        state.cursor_up();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut state = make_state();
        state.visible_height = 5;

        for _ in 0..7 {
            state.cursor_down();
        }
        assert_eq!(state.cursor, 7);
        assert_eq!(state.scroll_offset, 3);

        state.page_up();
        assert_eq!(state.cursor, 2);
        assert_eq!(state.scroll_offset, 2);

        state.page_down();
        assert_eq!(state.cursor, 7);
    }

    #[test]
    fn test_query_editing() {
        let mut state = make_state();
        let now = Instant::now();

        for c in "hello".chars() {
            state.query_push(c, now);
        }
        assert_eq!(state.widget.query(), "hello");
        assert_eq!(state.query_cursor, 5);

        state.query_backspace(now);
        assert_eq!(state.widget.query(), "hell");
        assert_eq!(state.query_cursor, 4);

        state.query_cursor_left();
        state.query_cursor_left();
        assert_eq!(state.query_cursor, 2);

        state.query_push('y', now);
        assert_eq!(state.widget.query(), "heyll");

        state.query_cursor_home();
        state.query_delete(now);
        assert_eq!(state.widget.query(), "eyll");

        state.query_cursor_end();
        assert_eq!(state.query_cursor, 4);

        state.query_clear(now);
        assert!(state.widget.query().is_empty());
        assert_eq!(state.query_cursor, 0);
    }

    #[test]
    fn test_multibyte_query_editing() {
        let mut state = make_state();
        let now = Instant::now();

        state.query_push('é', now);
        state.query_push('x', now);
        assert_eq!(state.query_cursor, 3);

        state.query_cursor_left();
        state.query_cursor_left();
        assert_eq!(state.query_cursor, 0);
        state.query_cursor_right();
        assert_eq!(state.query_cursor, 2);

        state.query_backspace(now);
        assert_eq!(state.widget.query(), "x");
    }

    #[test]
    fn test_delete_word() {
        let mut state = make_state();
        let now = Instant::now();

        for c in "jan van ".chars() {
            state.query_push(c, now);
        }
        state.query_delete_word(now);
        assert_eq!(state.widget.query(), "jan ");

        state.query_delete_word(now);
        assert_eq!(state.widget.query(), "");
    }

    #[test]
    fn test_no_op_edits_report_unchanged() {
        let mut state = make_state();
        let now = Instant::now();

        assert!(!state.query_backspace(now));
        assert!(!state.query_delete(now));
        assert!(!state.query_clear(now));
        assert!(!state.widget.is_refresh_pending());
    }

    #[test]
    fn test_typing_resets_highlight() {
        let mut state = make_state();
        let now = Instant::now();

        state.cursor_down();
        state.cursor_down();
        state.query_push('a', now);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_clamp_after_filter() {
        let mut state = make_state();
        let start = Instant::now();

        state.visible_height = 100;
        state.page_down();
        assert!(state.cursor > 0);

        state.query_push('z', start);
        state.cursor = 20;
        state.widget.tick(start + DEFAULT_DEBOUNCE);
        state.clamp_cursor();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_select_row_and_exit_on_select() {
        let widget = SearchWidget::new(alice_and_bob(), WidgetConfig::default());
        let mut state = AppState::new(widget).with_exit_on_select(true);

        assert!(!state.select_row(5));
        assert!(!state.should_exit);

        assert!(state.select_row(1));
        assert_eq!(state.cursor, 1);
        assert!(state.should_exit);
        assert_eq!(state.widget.header_text(), "Bob (1920 - 1990)");
    }

    #[test]
    fn test_external_query_change_keeps_cursor_in_bounds() {
        let mut state = make_state();
        let now = Instant::now();

        state.query_push('a', now);
        state.query_push('b', now);
        state.widget.change_query("", now);

        assert!(state.query_push('c', now));
        assert_eq!(state.widget.query(), "c");
        assert_eq!(state.query_cursor, 1);
    }

    #[test]
    fn test_external_query_change_off_char_boundary() {
        let mut state = make_state();
        let now = Instant::now();

        for c in "abc".chars() {
            state.query_push(c, now);
        }
        // Byte 3 is inside the second two-byte 'é'
        state.widget.change_query("éé", now);

        state.query_backspace(now);
        assert_eq!(state.widget.query(), "é");
        assert_eq!(state.query_cursor, 0);

        state.widget.change_query("x", now);
        state.query_cursor = 10;
        state.query_cursor_left();
        assert_eq!(state.query_cursor, 0);
        assert!(!state.query_delete_word(now));
        state.query_cursor = 10;
        assert!(!state.query_delete(now));
    }

    #[test]
    fn test_focus_input_clamps_highlight() {
        let mut state = make_state();
        let start = Instant::now();

        state.query_push('z', start);
        state.widget.tick(start + DEFAULT_DEBOUNCE);
        state.blur_input();
        state.cursor = 20;

        state.focus_input();
        assert!(state.widget.is_focused());
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_toggle_focus() {
        let mut state = make_state();

        state.toggle_focus();
        assert!(state.widget.is_focused());
        state.toggle_focus();
        assert!(!state.widget.is_focused());
    }
}
