//! Parameter structures for phonebook operations.
//!
//! These are the interface-agnostic inputs of the [`crate::PhoneBook`]
//! handlers. The CLI builds them from its clap argument structs through
//! `From` conversions, so the core never depends on a front-end framework.
//!
//! Free-form text typed by the user is cleaned here: names are trimmed and
//! must not be blank, and number lists are split on commas with blank
//! entries dropped.

use serde::{Deserialize, Serialize};

use crate::error::{PhoneBookError, Result};

/// How an operation picks the person it acts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// A known person ID
    Id(u64),
    /// An exact name that has to match exactly one person
    Name(String),
}

impl Target {
    /// Builds a target from an optional explicit ID and a name, preferring
    /// the ID when both are given.
    pub fn from_parts(id: Option<u64>, name: impl Into<String>) -> Self {
        match id {
            Some(id) => Self::Id(id),
            None => Self::Name(name.into()),
        }
    }
}

/// Parameters for adding a contact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddContact {
    /// Name of the person (required)
    pub name: String,
    /// Numbers to attach, in order
    #[serde(default)]
    pub numbers: Vec<String>,
    /// Reuse an existing person with exactly this name instead of adding a
    /// duplicate
    #[serde(default)]
    pub merge: bool,
}

impl AddContact {
    /// Returns the trimmed name and the cleaned number list.
    pub fn validate(&self) -> Result<(String, Vec<String>)> {
        let name = required_text("name", &self.name)?;
        Ok((name, clean_numbers(&self.numbers)))
    }
}

/// Parameters for editing a contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditContact {
    /// Person to edit
    pub target: Target,
    /// New name; blank or missing keeps the current one
    pub new_name: Option<String>,
    /// Replacement number list; missing keeps the current numbers
    pub numbers: Option<Vec<String>>,
}

impl EditContact {
    /// Returns the cleaned new name and number list.
    pub fn validate(&self) -> (Option<String>, Option<Vec<String>>) {
        let new_name = self
            .new_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from);
        let numbers = self.numbers.as_deref().map(clean_numbers);
        (new_name, numbers)
    }
}

/// Parameters for rewriting one number of a contact in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNumber {
    /// Person owning the number
    pub target: Target,
    /// Number as currently stored
    pub old: String,
    /// Replacement number
    pub new: String,
}

impl UpdateNumber {
    pub fn validate(&self) -> Result<(String, String)> {
        let old = required_text("old", &self.old)?;
        let new = required_text("new", &self.new)?;
        Ok((old, new))
    }
}

/// Parameters for deleting a contact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteContact {
    /// Person to delete
    pub target: Target,
}

/// Parameters for searching contacts by part of a name or number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchContacts {
    /// Text to look for
    pub text: String,
}

/// Splits a comma separated number list as typed by a user.
///
/// ```rust
/// use phonebook_core::params::split_numbers;
///
/// assert_eq!(split_numbers(" 123, ,456 "), vec!["123", "456"]);
/// ```
pub fn split_numbers(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|number| !number.is_empty())
        .map(String::from)
        .collect()
}

fn clean_numbers(numbers: &[String]) -> Vec<String> {
    numbers
        .iter()
        .flat_map(|entry| split_numbers(entry))
        .collect()
}

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn required_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PhoneBookError::invalid_input(field).with_reason("must not be blank"));
    }
    Ok(trimmed.to_string())
}
