//! Person and phone number operations for the PhoneBook.

use log::{debug, info, warn};

use super::PhoneBook;
use crate::{
    error::{PhoneBookError, Result},
    models::{Contact, Person, PersonId},
    params::{required_text, Target},
};

impl PhoneBook {
    /// Inserts a new person and returns its ID. Duplicate names are allowed.
    ///
    /// The name is trimmed; a blank name is `PhoneBookError::InvalidInput`.
    pub fn add_person(&mut self, name: &str) -> Result<PersonId> {
        let name = required_text("name", name)?;
        let id = self.db.add_person(&name)?;
        info!("Added person {id} ({name})");
        Ok(id)
    }

    /// Returns the existing person called exactly `name`, or adds one. The
    /// flag tells whether a new person was inserted.
    pub fn upsert_person(&mut self, name: &str) -> Result<(PersonId, bool)> {
        let name = required_text("name", name)?;
        let (id, created) = self.db.upsert_person(&name)?;
        if created {
            info!("Added person {id} ({name})");
        } else {
            debug!("Reusing person {id} for name {name}");
        }
        Ok((id, created))
    }

    /// Adds one number to a person. A missing person is reported by the
    /// store as a constraint violation.
    pub fn add_phone_number(&mut self, person_id: PersonId, number: &str) -> Result<()> {
        debug!("Adding number to person {person_id}");
        self.db.add_phone_number(person_id, number)
    }

    /// Adds several numbers to a person in one transaction.
    pub fn add_phone_numbers(&mut self, person_id: PersonId, numbers: &[String]) -> Result<()> {
        debug!("Adding {} numbers to person {person_id}", numbers.len());
        self.db.add_phone_numbers(person_id, numbers)
    }

    /// Every person, ordered by ID.
    pub fn get_people(&self) -> Result<Vec<Person>> {
        self.db.get_people()
    }

    /// A person's numbers in the order they were added.
    pub fn get_phone_numbers(&self, person_id: PersonId) -> Result<Vec<String>> {
        self.db.get_phone_numbers(person_id)
    }

    /// People whose name contains `text` (any case) or who own a number
    /// containing it.
    pub fn find_person_by_name_or_number(&self, text: &str) -> Result<Vec<Person>> {
        self.db.find_person_by_name_or_number(text)
    }

    /// People named exactly `name`.
    pub fn find_person_by_exact_name(&self, name: &str) -> Result<Vec<Person>> {
        self.db.find_person_by_exact_name(name)
    }

    /// Deletes a person together with its numbers.
    pub fn delete_person(&mut self, person_id: PersonId) -> Result<()> {
        self.db.delete_person(person_id)?;
        info!("Deleted person {person_id}");
        Ok(())
    }

    /// Renames a person and/or replaces all of its numbers atomically.
    pub fn edit_contact(
        &mut self,
        person_id: PersonId,
        new_name: Option<&str>,
        new_numbers: Option<&[String]>,
    ) -> Result<()> {
        self.db.edit_contact(person_id, new_name, new_numbers)?;
        info!("Edited person {person_id}");
        Ok(())
    }

    /// Rewrites one of a person's numbers in place.
    ///
    /// # Errors
    ///
    /// Returns `PhoneBookError::NotFound` when the person has no such number.
    pub fn update_phone_number(&mut self, person_id: PersonId, old: &str, new: &str) -> Result<()> {
        let changed = self.db.update_phone_number(person_id, old, new)?;
        if changed == 0 {
            return Err(PhoneBookError::NotFound {
                query: old.to_string(),
            });
        }
        info!("Updated {changed} number(s) of person {person_id}");
        Ok(())
    }

    /// Resolves an exact name to exactly one person.
    ///
    /// # Errors
    ///
    /// * `PhoneBookError::NotFound` - nobody has this name
    /// * `PhoneBookError::Ambiguous` - several people share it
    pub fn resolve_person(&self, name: &str) -> Result<Person> {
        let mut matches = self.find_person_by_exact_name(name)?;
        match matches.len() {
            0 => Err(PhoneBookError::NotFound {
                query: name.to_string(),
            }),
            1 => Ok(matches.remove(0)),
            count => {
                warn!("Name '{name}' matches {count} people");
                Err(PhoneBookError::Ambiguous {
                    name: name.to_string(),
                    count,
                })
            }
        }
    }

    /// Resolves a [`Target`] to the person it designates.
    pub fn resolve_target(&self, target: &Target) -> Result<Person> {
        match target {
            Target::Id(id) => self
                .db
                .get_person(*id)?
                .ok_or(PhoneBookError::PersonNotFound { id: *id }),
            Target::Name(name) => self.resolve_person(name.trim()),
        }
    }

    /// A person with its numbers.
    pub fn get_contact(&self, person_id: PersonId) -> Result<Contact> {
        let person = self
            .db
            .get_person(person_id)?
            .ok_or(PhoneBookError::PersonNotFound { id: person_id })?;
        let numbers = self.get_phone_numbers(person_id)?;
        Ok(Contact::new(person, numbers))
    }
}
