//! Event handling for the picker TUI
//!
//! Maps keyboard and mouse events to widget operations.

use super::layout::ElementId;
use super::state::AppState;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::time::{Duration, Instant};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Query changed, a filter recomputation is scheduled
    QueryChanged,
    /// A person was selected
    Selected,
    /// Exit the picker
    Quit,
    /// No action taken
    Ignored,
}

fn edited(changed: bool) -> EventResult {
    if changed {
        EventResult::QueryChanged
    } else {
        EventResult::Ignored
    }
}

/// Handle a key press
pub fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Quit,
        (KeyCode::Esc, _) => {
            if state.widget.is_focused() {
                state.blur_input();
                EventResult::Continue
            } else {
                EventResult::Quit
            }
        }

        // Focus
        (KeyCode::Tab | KeyCode::BackTab, _) => {
            state.toggle_focus();
            EventResult::Continue
        }

        // Selection
        (KeyCode::Enter, _) => {
            if state.select_highlighted() {
                EventResult::Selected
            } else {
                EventResult::Ignored
            }
        }

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k' | 'p'), KeyModifiers::CONTROL) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j' | 'n'), KeyModifiers::CONTROL) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down();
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => edited(state.query_clear(now)),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => edited(state.query_delete_word(now)),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            // Typing goes to the input, so it takes focus first
            state.focus_input();
            edited(state.query_push(c, now))
        }
        (KeyCode::Backspace, _) => edited(state.query_backspace(now)),
        (KeyCode::Delete, _) => edited(state.query_delete(now)),
        (KeyCode::Left, _) => {
            state.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.query_cursor_right();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.query_cursor_home();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.query_cursor_end();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle mouse events
///
/// Clicks are resolved against the hit map of the last frame.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down();
            EventResult::Continue
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let target = state
                .hit_map
                .hit(mouse.column, mouse.row)
                .map(|region| (region.id, region.row));

            match target {
                Some((ElementId::SuggestionItem, Some(row))) => {
                    if state.select_row(row) {
                        EventResult::Selected
                    } else {
                        EventResult::Ignored
                    }
                }
                Some((ElementId::SearchInput, _)) => {
                    state.focus_input();
                    EventResult::Continue
                }
                _ => {
                    state.blur_input();
                    EventResult::Continue
                }
            }
        }
        _ => EventResult::Ignored,
    }
}

/// Dispatch one terminal event
pub fn handle_event(state: &mut AppState, event: Event, now: Instant) -> EventResult {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(state, key, now),
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::FocusLost => {
            state.blur_input();
            EventResult::Continue
        }
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(state: &mut AppState, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let event = event::read()?;
    Ok(handle_event(state, event, Instant::now()))
}
