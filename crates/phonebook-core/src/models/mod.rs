//! Data models for people and their phone numbers.
//!
//! [`Person`] mirrors a row of the `people` table. [`Contact`] is the read
//! model used by listings: a person together with every number it owns, in
//! insertion order. Display implementations live in
//! [`crate::display::models`].

pub mod contact;
pub mod person;


pub use contact::Contact;
pub use person::{Person, PersonId};
