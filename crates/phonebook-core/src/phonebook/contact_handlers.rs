//! Contact handler operations that return formatted wrapper types.
//!
//! Each handler matches one action of the user interface: list, add, edit,
//! delete and search, plus an in-place number update. They take the
//! parameter structs from [`crate::params`], validate them, and return the
//! display wrappers the interface prints.

use log::{debug, info};

use super::PhoneBook;
use crate::{
    display::{Contacts, CreateResult, DeleteResult, UpdateResult},
    error::Result,
    models::Contact,
    params::{AddContact, DeleteContact, EditContact, SearchContacts, UpdateNumber},
};

impl PhoneBook {
    /// Handle listing every contact with its numbers.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use phonebook_core::PhoneBookBuilder;
    /// let book = PhoneBookBuilder::new().in_memory().build()?;
    /// assert!(book.list_contacts()?.is_empty());
    /// # Ok::<(), phonebook_core::PhoneBookError>(())
    /// ```
    pub fn list_contacts(&self) -> Result<Contacts> {
        let contacts = self.db.get_contacts()?;
        debug!("Listing {} contacts", contacts.len());
        Ok(Contacts(contacts))
    }

    /// Handle adding a contact with its numbers.
    ///
    /// With `merge` set, an existing person with exactly the same name gets
    /// the numbers instead of a duplicate person being created.
    ///
    /// # Errors
    ///
    /// Returns `PhoneBookError::InvalidInput` for a blank name.
    pub fn add_contact(&mut self, params: &AddContact) -> Result<CreateResult<Contact>> {
        let (name, numbers) = params.validate()?;

        let (id, created) = self.db.add_contact(&name, &numbers, params.merge)?;
        if created {
            info!("Added person {id} ({name}) with {} number(s)", numbers.len());
        } else {
            info!("Added {} number(s) to existing person {id}", numbers.len());
        }

        let contact = self.get_contact(id)?;
        Ok(if created {
            CreateResult::new(contact)
        } else {
            CreateResult::merged(contact)
        })
    }

    /// Handle editing a contact: rename and/or replace all numbers.
    ///
    /// A blank new name keeps the current one. Returns the contact after the
    /// edit together with a description of each change.
    pub fn update_contact(&mut self, params: &EditContact) -> Result<UpdateResult<Contact>> {
        let person = self.resolve_target(&params.target)?;
        let before = self.get_contact(person.id)?;
        let (new_name, new_numbers) = params.validate();

        let mut changes = Vec::new();
        if let Some(ref name) = new_name {
            if *name != before.person.name {
                changes.push(format!("Renamed from '{}' to '{name}'", before.person.name));
            }
        }
        if let Some(ref numbers) = new_numbers {
            if *numbers != before.numbers {
                changes.push(format!("Replaced numbers with: {}", numbers.join(", ")));
            }
        }

        if changes.is_empty() {
            return Ok(UpdateResult::with_changes(before, changes));
        }

        self.edit_contact(person.id, new_name.as_deref(), new_numbers.as_deref())?;

        let after = self.get_contact(person.id)?;
        Ok(UpdateResult::with_changes(after, changes))
    }

    /// Handle rewriting a single number of a contact in place.
    pub fn update_number(&mut self, params: &UpdateNumber) -> Result<UpdateResult<Contact>> {
        let (old, new) = params.validate()?;
        let person = self.resolve_target(&params.target)?;

        self.update_phone_number(person.id, &old, &new)?;

        let after = self.get_contact(person.id)?;
        Ok(UpdateResult::with_changes(
            after,
            vec![format!("Changed number {old} to {new}")],
        ))
    }

    /// Handle deleting a contact. Returns the contact as it was before the
    /// delete for confirmation.
    pub fn remove_contact(&mut self, params: &DeleteContact) -> Result<DeleteResult<Contact>> {
        let person = self.resolve_target(&params.target)?;
        let contact = self.get_contact(person.id)?;

        self.delete_person(person.id)?;

        Ok(DeleteResult::new(contact))
    }

    /// Handle searching by part of a name or number.
    ///
    /// An empty result is not an error.
    pub fn search_contacts(&self, params: &SearchContacts) -> Result<Contacts> {
        let text = params.text.trim();
        let contacts = self.db.find_contacts(text)?;
        debug!("Search for '{text}' found {} contacts", contacts.len());
        Ok(Contacts(contacts))
    }
}
