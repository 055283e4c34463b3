//! Display formatting for listings and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Collections and operation outcomes are wrapped in small newtypes so the
//! same data can be printed differently depending on context:
//!
//! - [`collections`]: the contact listing ([`Contacts`])
//! - [`results`]: create, update and delete outcomes
//!
//! All output is plain markdown, which the CLI either prints as is or hands
//! to its terminal renderer.
//!
//! ```rust
//! use phonebook_core::{
//!     display::Contacts,
//!     models::{Contact, Person},
//! };
//!
//! let listing = Contacts(vec![Contact::new(
//!     Person::new(1, "Ivan Petrov"),
//!     vec!["+1-555-0100".to_string()],
//! )]);
//! assert!(listing.to_string().contains("Name: Ivan Petrov, Numbers: +1-555-0100"));
//! ```

pub mod collections;
pub mod models;
pub mod results;

pub use collections::Contacts;
pub use results::{CreateResult, DeleteResult, UpdateResult};
