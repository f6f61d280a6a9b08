//! Dataset loading error types
//!
//! The widget itself never fails; these errors only come from reading a
//! dataset file supplied by the user.
//!
//! # Error Types
//!
//! - **`Io`**: The dataset file could not be read
//! - **`Json`**: The file is not a JSON array of people
//! - **`Csv`**: A CSV row could not be decoded into a person
//! - **`UnsupportedFormat`**: The file extension is neither `.json` nor `.csv`

use std::path::PathBuf;
use thiserror::Error;

/// Dataset-specific errors
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON decoding failed
    #[error("Invalid JSON dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV decoding failed
    #[error("Invalid CSV dataset: {0}")]
    Csv(#[from] csv::Error),

    /// Extension is not one we know how to read
    #[error("Unsupported dataset format: {0} (expected .json or .csv)")]
    UnsupportedFormat(PathBuf),
}

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
