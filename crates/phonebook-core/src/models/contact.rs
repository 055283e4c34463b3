//! Contact read model.

use serde::{Deserialize, Serialize};

use super::{Person, PersonId};

/// A person together with the numbers it owns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    #[serde(flatten)]
    pub person: Person,

    /// Phone numbers in insertion order
    #[serde(default)]
    pub numbers: Vec<String>,
}

impl Contact {
    pub fn new(person: Person, numbers: Vec<String>) -> Self {
        Self { person, numbers }
    }

    pub fn id(&self) -> PersonId {
        self.person.id
    }

    pub fn name(&self) -> &str {
        &self.person.name
    }

    /// Numbers joined the way the listing shows them.
    pub fn numbers_joined(&self) -> String {
        self.numbers.join(", ")
    }
}
