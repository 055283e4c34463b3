//! Person model definition.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store when a person is inserted.
pub type PersonId = u64;

/// A named contact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Person {
    /// Unique identifier for the person
    pub id: PersonId,

    /// Display name; not required to be unique
    pub name: String,
}

impl Person {
    /// Creates a person value from its parts.
    pub fn new(id: PersonId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Case-insensitive substring match on the name.
    ///
    /// Uses Unicode lowercasing, so it also works for names outside ASCII
    /// where SQLite's `LIKE` would fall back to exact case.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
