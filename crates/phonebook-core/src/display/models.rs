//! Display implementations for domain models.

use std::fmt;

use crate::models::{Contact, Person};

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {})", self.name, self.id)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numbers = if self.numbers.is_empty() {
            "(none)".to_string()
        } else {
            self.numbers_joined()
        };
        writeln!(
            f,
            "- Name: {}, Numbers: {} (ID: {})",
            self.person.name, numbers, self.person.id
        )
    }
}
