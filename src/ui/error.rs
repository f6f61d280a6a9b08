//! UI error types

use thiserror::Error;

/// Errors that can occur while driving the terminal
#[derive(Debug, Error)]
pub enum UiError {
    /// IO error during terminal setup, drawing or event polling
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Standard output is not a terminal
    #[error("Interactive picker needs a terminal")]
    NotATerminal,
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
