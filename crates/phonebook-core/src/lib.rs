//! Core library for the phonebook editor.
//!
//! This crate stores people and their phone numbers in SQLite and exposes
//! the list, add, edit, delete and search operations a phone-book user
//! interface needs.
//!
//! - [`db`]: the [`Database`] handle, schema initialization and SQL
//! - [`phonebook`]: the [`PhoneBook`] facade and its builder
//! - [`models`]: [`Person`] and the [`Contact`] read model
//! - [`params`]: interface-agnostic operation parameters
//! - [`display`]: markdown formatting for listings and results
//! - [`error`]: [`PhoneBookError`] and the crate [`Result`] alias
//!
//! Names are not unique. Adding the same name twice creates two people,
//! and operations that pick a person by name fail with
//! [`PhoneBookError::Ambiguous`] when the name is shared. Upsert-by-name is
//! available explicitly through [`PhoneBook::upsert_person`] and the `merge`
//! flag of [`params::AddContact`].
//!
//! # Quick Start
//!
//! ```rust
//! use phonebook_core::{params::SearchContacts, PhoneBookBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut book = PhoneBookBuilder::new().in_memory().build()?;
//!
//! let id = book.add_person("Ivan Petrov")?;
//! book.add_phone_number(id, "+1-555-0100")?;
//! book.add_phone_number(id, "+1-555-0101")?;
//!
//! assert_eq!(
//!     book.get_phone_numbers(id)?,
//!     vec!["+1-555-0100", "+1-555-0101"]
//! );
//!
//! let found = book.search_contacts(&SearchContacts {
//!     text: "0101".to_string(),
//! })?;
//! print!("{found}");
//!
//! book.delete_person(id)?;
//! assert!(book.get_people()?.is_empty());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod phonebook;

// Re-export commonly used types
pub use db::Database;
pub use display::{Contacts, CreateResult, DeleteResult, UpdateResult};
pub use error::{PhoneBookError, Result};
pub use models::{Contact, Person, PersonId};
pub use params::{AddContact, DeleteContact, EditContact, SearchContacts, Target, UpdateNumber};
pub use phonebook::{PhoneBook, PhoneBookBuilder};
