//! Terminal user interface
//!
//! Hosts the headless [`SearchWidget`](crate::widget::SearchWidget) in a
//! terminal using ratatui for drawing and crossterm for input.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │              PickerApp                  │
//! │   (terminal setup, draw/poll/tick)      │
//! └────────────────────┬────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │  AppState  │ │  Widgets  │ │  Events   │
//! │ (widget +  │ │ (ratatui) │ │(crossterm)│
//! │  cursor)   │ │           │ │           │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! # Screen
//!
//! Top to bottom: the title with the selected person, the search input, the
//! suggestion list, the empty-result notice (only when the filtered list is
//! empty) and a line of key hints. Each element is recorded in the frame's
//! [`HitMap`] under its [`ElementId`].
//!
//! # Keys
//!
//! | Key | Action |
//! |-----|--------|
//! | any character | focus the input and type |
//! | Backspace / Delete / ←/→ / Home / End | edit the query |
//! | Ctrl-U / Ctrl-W | clear the query / delete a word |
//! | TAB | toggle input focus |
//! | ↑/↓, PgUp/PgDn | move the highlight |
//! | Enter | select the highlighted person |
//! | ESC | blur the input, or quit when already blurred |
//! | Ctrl-C | quit |
//!
//! Left clicks select a suggestion, focus the input, or blur it when they
//! land anywhere else.

mod app;
mod error;
mod events;
mod layout;
mod state;
mod theme;
pub mod widgets;

pub use app::{PickerApp, draw};
pub use error::{Result, UiError};
pub use events::{EventResult, handle_event, handle_key, handle_mouse};
pub use layout::{ElementId, HitMap, Region};
pub use state::AppState;
pub use theme::{Theme, ThemeName};
