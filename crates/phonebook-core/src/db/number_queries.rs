//! Phone number operations and contact listing queries.

use rusqlite::{params, Connection};

use crate::{
    error::{DatabaseResultExt, Result},
    models::{Contact, Person, PersonId},
};

const INSERT_NUMBER_SQL: &str = "INSERT INTO phone_numbers (person_id, number) VALUES (?1, ?2)";
const SELECT_NUMBERS_SQL: &str =
    "SELECT number FROM phone_numbers WHERE person_id = ?1 ORDER BY id";
const DELETE_NUMBERS_SQL: &str = "DELETE FROM phone_numbers WHERE person_id = ?1";
const UPDATE_NUMBER_SQL: &str =
    "UPDATE phone_numbers SET number = ?1 WHERE person_id = ?2 AND number = ?3";

impl super::Database {
    /// Adds one number to a person.
    ///
    /// The person is not looked up first: a missing owner is rejected by the
    /// foreign key and surfaces as a constraint violation.
    pub fn add_phone_number(&mut self, person_id: PersonId, number: &str) -> Result<()> {
        self.connection
            .execute(INSERT_NUMBER_SQL, params![person_id as i64, number])
            .db_context("Failed to insert phone number")?;
        Ok(())
    }

    /// Adds several numbers to a person, in order, as one unit.
    pub fn add_phone_numbers(&mut self, person_id: PersonId, numbers: &[String]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        Self::insert_numbers(&tx, person_id, numbers)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Returns a person's numbers in insertion order. Unknown IDs yield an
    /// empty list.
    pub fn get_phone_numbers(&self, person_id: PersonId) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_NUMBERS_SQL)
            .db_context("Failed to prepare query")?;

        let numbers = stmt
            .query_map(params![person_id as i64], |row| row.get(0))
            .db_context("Failed to query phone numbers")?
            .collect::<std::result::Result<Vec<String>, _>>()
            .db_context("Failed to fetch phone numbers")?;

        Ok(numbers)
    }

    /// Rewrites `old` to `new` in place for one person. Returns the number of
    /// rows changed; zero means the person has no such number.
    pub fn update_phone_number(
        &mut self,
        person_id: PersonId,
        old: &str,
        new: &str,
    ) -> Result<usize> {
        self.connection
            .execute(UPDATE_NUMBER_SQL, params![new, person_id as i64, old])
            .db_context("Failed to update phone number")
    }

    /// Deletes all numbers of a person and inserts `numbers` in their place.
    /// Runs on the caller's transaction.
    pub(super) fn replace_numbers(
        conn: &Connection,
        person_id: PersonId,
        numbers: &[String],
    ) -> Result<()> {
        conn.execute(DELETE_NUMBERS_SQL, params![person_id as i64])
            .db_context("Failed to delete phone numbers")?;

        Self::insert_numbers(conn, person_id, numbers)
    }

    /// Inserts `numbers` in order on the caller's connection or transaction.
    pub(super) fn insert_numbers(
        conn: &Connection,
        person_id: PersonId,
        numbers: &[String],
    ) -> Result<()> {
        for number in numbers {
            conn.execute(INSERT_NUMBER_SQL, params![person_id as i64, number])
                .db_context("Failed to insert phone number")?;
        }
        Ok(())
    }

    /// Pairs each person with its numbers.
    pub fn contacts_for(&self, people: Vec<Person>) -> Result<Vec<Contact>> {
        people
            .into_iter()
            .map(|person| {
                let numbers = self.get_phone_numbers(person.id)?;
                Ok(Contact::new(person, numbers))
            })
            .collect()
    }

    /// The full listing: every person with its numbers.
    pub fn get_contacts(&self) -> Result<Vec<Contact>> {
        let people = self.get_people()?;
        self.contacts_for(people)
    }

    /// Search results with their numbers, see
    /// [`Self::find_person_by_name_or_number`].
    pub fn find_contacts(&self, text: &str) -> Result<Vec<Contact>> {
        let people = self.find_person_by_name_or_number(text)?;
        self.contacts_for(people)
    }
}
