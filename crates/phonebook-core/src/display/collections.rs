//! Collection wrapper for displaying contact listings.

use std::{fmt, ops::Index};

use serde::Serialize;

use crate::models::Contact;

/// Newtype wrapper for displaying a list of contacts.
///
/// Prints one line per contact, or `No contacts found.` for an empty list.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Contacts(pub Vec<Contact>);

impl Contacts {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of contacts in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the contacts.
    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.0.iter()
    }

    /// Names in listing order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(Contact::name).collect()
    }
}

impl Index<usize> for Contacts {
    type Output = Contact;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Contacts {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Contacts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No contacts found.")
        } else {
            for contact in self {
                write!(f, "{contact}")?;
            }
            Ok(())
        }
    }
}
