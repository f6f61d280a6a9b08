//! Terminal host for the search widget
//!
//! Owns the terminal for the lifetime of the picker: sets it up, runs the
//! draw/poll/tick loop and restores it on the way out.

use super::error::{Result, UiError};
use super::events::{EventResult, poll_and_handle};
use super::layout::ElementId;
use super::state::AppState;
use super::theme::Theme;
use super::widgets::{EmptyNotice, HelpBar, KeyHint, SearchBar, SuggestionList, TitleBar};
use crate::people::Person;
use crate::widget::SearchWidget;
use crossterm::{
    event::{DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, IsTerminal, Stdout};
use std::time::{Duration, Instant};

/// Longest the loop waits for input before redrawing
const TICK_RATE: Duration = Duration::from_millis(50);

/// Draw one frame of the picker and record its hit map
pub fn draw(frame: &mut Frame, state: &mut AppState, theme: &Theme, hints: &[KeyHint]) {
    let area = frame.area();
    let show_notice = state.widget.shows_empty_notice();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                                 // Title
            Constraint::Length(3),                                 // Search input
            Constraint::Min(3),                                    // Suggestions
            Constraint::Length(if show_notice { 3 } else { 0 }),  // Empty notice
            Constraint::Length(1),                                 // Help bar
        ])
        .split(area);

    state.visible_height = layout[2].height.saturating_sub(2) as usize;
    state.clamp_cursor();
    state.hit_map.clear();

    let header = state.widget.header_text();
    frame.render_widget(TitleBar::new(&header, theme), layout[0]);
    state.hit_map.record(ElementId::Title, layout[0]);

    let search_bar = SearchBar::new(state.widget.query(), state.query_cursor, theme)
        .focused(state.widget.is_focused());
    frame.render_widget(search_bar, layout[1]);
    state.hit_map.record(ElementId::SearchInput, layout[1]);

    let view = state.widget.view();
    let list = SuggestionList::new(&view.rows, state.widget.dataset().len(), theme)
        .cursor(state.cursor, state.scroll_offset);
    let row_areas = list.row_areas(layout[2]);
    frame.render_widget(list, layout[2]);
    state.hit_map.record(ElementId::SuggestionsList, layout[2]);
    for (row, key, row_area) in row_areas {
        state.hit_map.record_item(row, key, row_area);
    }

    if view.show_empty_notice {
        frame.render_widget(EmptyNotice::new(theme), layout[3]);
        state.hit_map.record(ElementId::NoSuggestionsMessage, layout[3]);
    }

    frame.render_widget(HelpBar::new(hints, theme), layout[4]);
}

/// Interactive picker running in the terminal
pub struct PickerApp {
    theme: Theme,
    hints: Vec<KeyHint>,
    exit_on_select: bool,
}

impl Default for PickerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl PickerApp {
    /// Create a new picker with the default theme
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
            hints: HelpBar::default_hints(),
            exit_on_select: false,
        }
    }

    /// Set custom theme
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Quit as soon as someone is selected
    #[must_use]
    pub const fn exit_on_select(mut self, exit_on_select: bool) -> Self {
        self.exit_on_select = exit_on_select;
        self
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(
            io::stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        )?;
        Ok(())
    }

    /// Run the picker until the user quits
    ///
    /// Returns the person selected when the picker closed, if any.
    ///
    /// # Errors
    ///
    /// Returns `UiError` if stdout is not a terminal or the terminal fails.
    pub fn run(&self, widget: SearchWidget) -> Result<Option<Person>> {
        if !io::stdout().is_terminal() {
            return Err(UiError::NotATerminal);
        }

        let mut terminal = Self::setup_terminal()?;
        tracing::debug!("terminal ready");

        let mut state = AppState::new(widget).with_exit_on_select(self.exit_on_select);
        let outcome = self.run_loop(&mut terminal, &mut state);
        let cleanup = Self::cleanup_terminal();
        tracing::debug!("terminal restored");

        outcome?;
        cleanup?;
        Ok(state.into_widget().teardown())
    }

    /// Run the draw/poll/tick loop
    fn run_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut AppState,
    ) -> Result<()> {
        loop {
            if state.widget.tick(Instant::now()) {
                state.clamp_cursor();
            }

            terminal.draw(|frame| draw(frame, state, &self.theme, &self.hints))?;

            // Wake up in time for a pending filter
            let timeout = state
                .widget
                .time_until_refresh(Instant::now())
                .map_or(TICK_RATE, |left| left.min(TICK_RATE));

            match poll_and_handle(state, timeout)? {
                EventResult::Quit => break,
                EventResult::Selected => {
                    tracing::trace!(header = %state.widget.header_text(), "selection shown");
                }
                EventResult::Continue | EventResult::QueryChanged | EventResult::Ignored => {}
            }

            if state.should_exit {
                break;
            }
        }

        Ok(())
    }
}
