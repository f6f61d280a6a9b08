//! People dataset
//!
//! The dataset is a fixed, ordered list of [`Person`] records. It is loaded once
//! (from the built-in list or a user-supplied file) and never modified.
//!
//! # Formats
//!
//! - **JSON**: an array of objects with `name`, `born`, `died` and `slug`.
//!   Extra fields are ignored.
//! - **CSV**: a header row `name,born,died,slug` followed by one person per row.

mod error;
pub mod filter;

pub use error::{DatasetError, Result};
pub use filter::{filter_indices, name_matches};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const BUILTIN_PEOPLE: &str = include_str!("../../data/people.json");

/// A single person in the dataset
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub born: i32,
    pub died: i32,
    /// Unique key used to identify the person's row
    pub slug: String,
}

impl Person {
    /// Create a new Person
    #[must_use]
    pub fn new(name: impl Into<String>, born: i32, died: i32, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            born,
            died,
            slug: slug.into(),
        }
    }

    /// Display label, e.g. `Alice (1900 - 1980)`
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({} - {})", self.name, self.born, self.died)
    }
}

/// Ordered, read-only collection of people
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    people: Vec<Person>,
}

impl Dataset {
    /// Wrap an already-built list of people
    #[must_use]
    pub const fn new(people: Vec<Person>) -> Self {
        Self { people }
    }

    /// The list of people bundled with the binary
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Json` if the bundled list is malformed.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_PEOPLE)
    }

    /// Parse a JSON array of people
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Json` if the input is not a JSON array of people.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let people: Vec<Person> = serde_json::from_str(json)?;
        Ok(Self::new(people))
    }

    /// Parse CSV with a `name,born,died,slug` header
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Csv` if a row cannot be decoded.
    pub fn from_csv_reader(reader: impl std::io::Read) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let people = csv_reader
            .deserialize::<Person>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self::new(people))
    }

    /// Load a dataset file, picking the format from its extension
    ///
    /// # Errors
    ///
    /// Returns `DatasetError` if the file cannot be read, has an unknown
    /// extension, or cannot be decoded.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let dataset = match extension.as_deref() {
            Some("json") => {
                let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_json_str(&content)?
            }
            Some("csv") => {
                let file = fs::File::open(path).map_err(|source| DatasetError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_csv_reader(file)?
            }
            _ => return Err(DatasetError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::info!(path = %path.display(), count = dataset.len(), "loaded dataset");
        Ok(dataset)
    }

    /// Load `path` if given, otherwise the built-in list
    ///
    /// # Errors
    ///
    /// See [`Dataset::from_path`] and [`Dataset::builtin`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(Self::builtin, Self::from_path)
    }

    /// All people, in dataset order
    #[must_use]
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Person at `idx`
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Person> {
        self.people.get(idx)
    }

    /// Number of people
    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Whether the dataset has no people
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Iterate people in dataset order
    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.people.iter()
    }

    /// People whose name matches `query`, in dataset order
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Person> {
        filter_indices(&self.people, query)
            .into_iter()
            .filter_map(|idx| self.people.get(idx))
            .collect()
    }
}
