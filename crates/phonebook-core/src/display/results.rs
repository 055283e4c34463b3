//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Contact;

/// Outcome of adding a contact.
///
/// `created` is false when the name was merged into an existing person and
/// only numbers were added.
#[derive(Debug)]
pub struct CreateResult<T> {
    pub resource: T,
    pub created: bool,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper for a freshly inserted resource.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            created: true,
        }
    }

    /// Wrap a resource that already existed.
    pub fn merged(resource: T) -> Self {
        Self {
            resource,
            created: false,
        }
    }
}

impl fmt::Display for CreateResult<Contact> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.created {
            writeln!(f, "Added contact with ID: {}", self.resource.id())?;
        } else {
            writeln!(
                f,
                "Added numbers to existing contact with ID: {}",
                self.resource.id()
            )?;
        }
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of an edit, with a list of what changed.
#[derive(Debug)]
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Contact> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated contact with ID: {}", self.resource.id())?;

        if self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Nothing to change.")?;
        } else {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of a delete. Holds the contact as it was before removal.
#[derive(Debug)]
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Contact> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted contact '{}' (ID: {})",
            self.resource.name(),
            self.resource.id()
        )
    }
}
