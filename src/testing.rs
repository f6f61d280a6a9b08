//! Testing utilities for peoplepick
//!
//! Fixture datasets shared by the unit tests.
//!
//! Only available when compiled with `cfg(test)`.

use crate::people::{Dataset, Person};

/// Two-person dataset: Alice (1900-1980) and Bob (1920-1990)
#[must_use]
pub fn alice_and_bob() -> Dataset {
    Dataset::new(vec![
        Person::new("Alice", 1900, 1980, "alice"),
        Person::new("Bob", 1920, 1990, "bob"),
    ])
}

/// The bundled dataset
///
/// # Panics
/// Panics if the bundled JSON is malformed.
#[must_use]
pub fn haverbeke_family() -> Dataset {
    Dataset::builtin().expect("bundled dataset should parse")
}

/// Names of `people`, for compact assertions
#[must_use]
pub fn names<'a>(people: &[&'a Person]) -> Vec<&'a str> {
    people.iter().map(|person| person.name.as_str()).collect()
}
