//! High-level phonebook API.
//!
//! [`PhoneBook`] is what a user interface talks to. It owns the
//! [`Database`] handed to it at construction and keeps that single
//! connection until [`PhoneBook::close`] is called or the value is dropped.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (contact_       │───▶│ (contact_ops)   │───▶│   (via db/)     │
//! │  handlers)      │    │                 │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Display results       Lookups, logging        SQL, transactions
//! ```
//!
//! - [`builder`]: resolves the database location and opens it
//! - [`contact_ops`]: person and number operations, name resolution
//! - [`contact_handlers`]: parameter-driven operations returning display
//!   wrappers
//!
//! # Example
//!
//! ```rust
//! use phonebook_core::{params::AddContact, PhoneBookBuilder};
//!
//! # fn example() -> phonebook_core::Result<()> {
//! let mut book = PhoneBookBuilder::new().in_memory().build()?;
//!
//! book.add_contact(&AddContact {
//!     name: "Ivan Petrov".to_string(),
//!     numbers: vec!["+1-555-0100".to_string(), "+1-555-0101".to_string()],
//!     merge: false,
//! })?;
//!
//! let found = book.find_person_by_name_or_number("0101")?;
//! assert_eq!(found[0].name, "Ivan Petrov");
//! book.close()?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod builder;
pub mod contact_handlers;
pub mod contact_ops;


pub use builder::PhoneBookBuilder;

use log::debug;

use crate::{db::Database, error::Result};

/// Main phonebook interface.
pub struct PhoneBook {
    pub(crate) db: Database,
}

impl PhoneBook {
    /// Creates a phonebook on top of an already opened database.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Releases the database connection.
    ///
    /// Dropping the phonebook also releases it; this variant reports errors.
    pub fn close(self) -> Result<()> {
        debug!("Closing phonebook");
        self.db.close()
    }
}
