//! Ratatui widgets for the picker TUI
//!
//! One widget per element of the picker screen.

mod empty_notice;
mod help_bar;
mod search_bar;
mod suggestion_list;
mod title_bar;

pub use empty_notice::{EmptyNotice, NO_MATCHES};
pub use help_bar::{HelpBar, KeyHint};
pub use search_bar::{PLACEHOLDER, SearchBar};
pub use suggestion_list::SuggestionList;
pub use title_bar::TitleBar;
