//! peoplepick - a debounced autocomplete picker for people
//!
//! This library provides a headless search widget that filters a fixed list
//! of people by name as the user types, plus a terminal host for it.
//!
//! The widget ([`widget::SearchWidget`]) keeps the live query, a filtered list
//! that follows the query after a debounce delay, the input's focus and the
//! selected person. The terminal host ([`ui::PickerApp`]) feeds it key presses,
//! mouse clicks and the current time, and draws it with ratatui.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod debounce;
pub mod logging;
pub mod output;
pub mod people;
pub mod ui;
pub mod widget;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PickerError {
    /// Dataset could not be loaded
    #[error("Dataset error: {0}")]
    DatasetError(#[from] people::DatasetError),
    /// Terminal failure
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Output could not be serialized
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
    /// Logging could not be set up
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type used across the crate
pub type Result<T> = std::result::Result<T, PickerError>;
