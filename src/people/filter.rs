//! Name matching
//!
//! Matching is a single case-insensitive substring test. There is no ranking:
//! results keep the dataset's order.

use super::Person;

/// Check whether `name` contains `query`, ignoring case
///
/// An empty query matches every name.
#[must_use]
pub fn name_matches(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

/// Indices of the people whose name matches `query`, in dataset order
#[must_use]
pub fn filter_indices(people: &[Person], query: &str) -> Vec<usize> {
    people
        .iter()
        .enumerate()
        .filter(|(_, person)| name_matches(&person.name, query))
        .map(|(idx, _)| idx)
        .collect()
}
