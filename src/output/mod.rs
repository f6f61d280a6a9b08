//! Output formatting for CLI display
//!
//! Formats people for the non-interactive commands and for the selection
//! printed when the picker closes.

use crate::people::Person;
use colored::Colorize;

/// Format a person for a listing
///
/// Quiet output is the bare label so it can be piped; otherwise the slug is
/// appended and the name highlighted.
#[must_use]
pub fn person_line(person: &Person, quiet: bool) -> String {
    if quiet {
        person.label()
    } else {
        format!(
            "  {} {} [{}]",
            person.name.bold(),
            format!("({} - {})", person.born, person.died).dimmed(),
            person.slug.cyan()
        )
    }
}

/// Summary line after a listing
#[must_use]
pub fn match_summary(matches: usize, total: usize, query: &str) -> String {
    if query.is_empty() {
        format!("{total} people")
    } else {
        format!("{matches} of {total} people match '{query}'")
    }
}

/// Serialize people as a JSON array
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn people_json(people: &[&Person]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(people)
}

/// Serialize a single person as JSON
///
/// # Errors
///
/// Returns a `serde_json::Error` if serialization fails.
pub fn person_json(person: &Person) -> Result<String, serde_json::Error> {
    serde_json::to_string(person)
}
