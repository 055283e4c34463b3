//! Person CRUD operations and queries.

use std::collections::BTreeMap;

use log::debug;
use rusqlite::{params, OptionalExtension, Params, Row};

use crate::{
    error::{DatabaseResultExt, PhoneBookError, Result},
    models::{Person, PersonId},
};

const INSERT_PERSON_SQL: &str = "INSERT INTO people (name) VALUES (?1)";
const SELECT_PEOPLE_SQL: &str = "SELECT id, name FROM people ORDER BY id";
const SELECT_PERSON_SQL: &str = "SELECT id, name FROM people WHERE id = ?1";
const SELECT_PEOPLE_BY_NAME_SQL: &str = "SELECT id, name FROM people WHERE name = ?1 ORDER BY id";
const SELECT_FIRST_PERSON_BY_NAME_SQL: &str =
    "SELECT id FROM people WHERE name = ?1 ORDER BY id LIMIT 1";
// instr() keeps '%' and '_' literal and compares case-sensitively
const SELECT_PEOPLE_BY_NUMBER_SQL: &str = "SELECT DISTINCT people.id, people.name FROM people \
     INNER JOIN phone_numbers ON people.id = phone_numbers.person_id \
     WHERE instr(phone_numbers.number, ?1) > 0 ORDER BY people.id";
const CHECK_PERSON_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM people WHERE id = ?1)";
const UPDATE_PERSON_NAME_SQL: &str = "UPDATE people SET name = ?1 WHERE id = ?2";
const DELETE_PERSON_NUMBERS_SQL: &str = "DELETE FROM phone_numbers WHERE person_id = ?1";
const DELETE_PERSON_SQL: &str = "DELETE FROM people WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a Person from a database row
    fn build_person_from_row(row: &Row) -> rusqlite::Result<Person> {
        Ok(Person {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
        })
    }

    /// Runs a query whose rows are `(id, name)` pairs.
    fn query_people<P: Params>(&self, sql: &str, params: P) -> Result<Vec<Person>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare query")?;

        let people = stmt
            .query_map(params, Self::build_person_from_row)
            .db_context("Failed to query people")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch people")?;

        Ok(people)
    }

    /// Inserts a new person and returns the generated identifier.
    ///
    /// Names are not unique: adding the same name twice creates two people.
    pub fn add_person(&mut self, name: &str) -> Result<PersonId> {
        self.connection
            .execute(INSERT_PERSON_SQL, params![name])
            .db_context("Failed to insert person")?;

        Ok(self.connection.last_insert_rowid() as u64)
    }

    /// Returns the lowest-id person called exactly `name`, inserting one if
    /// nobody has that name yet. The flag is true when a row was inserted.
    pub fn upsert_person(&mut self, name: &str) -> Result<(PersonId, bool)> {
        self.add_contact(name, &[], true)
    }

    /// Adds a person and its numbers as one unit.
    ///
    /// With `merge` set, an existing person with exactly this name (the
    /// lowest ID if there are several) receives the numbers instead. The
    /// flag is true when a new person row was inserted.
    pub fn add_contact(
        &mut self,
        name: &str,
        numbers: &[String],
        merge: bool,
    ) -> Result<(PersonId, bool)> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let existing: Option<i64> = if merge {
            tx.query_row(SELECT_FIRST_PERSON_BY_NAME_SQL, params![name], |row| {
                row.get(0)
            })
            .optional()
            .db_context("Failed to look up person by name")?
        } else {
            None
        };

        let (id, created) = match existing {
            Some(id) => (id as u64, false),
            None => {
                tx.execute(INSERT_PERSON_SQL, params![name])
                    .db_context("Failed to insert person")?;
                (tx.last_insert_rowid() as u64, true)
            }
        };

        Self::insert_numbers(&tx, id, numbers)?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok((id, created))
    }

    /// Retrieves a person by its ID.
    pub fn get_person(&self, id: PersonId) -> Result<Option<Person>> {
        self.connection
            .query_row(
                SELECT_PERSON_SQL,
                params![id as i64],
                Self::build_person_from_row,
            )
            .optional()
            .db_context("Failed to query person")
    }

    /// Lists every person, ordered by ID. Always re-queried.
    pub fn get_people(&self) -> Result<Vec<Person>> {
        self.query_people(SELECT_PEOPLE_SQL, [])
    }

    /// Exact-name lookup. May return several people since names are not
    /// unique; the caller decides what to do with more than one.
    pub fn find_person_by_exact_name(&self, name: &str) -> Result<Vec<Person>> {
        self.query_people(SELECT_PEOPLE_BY_NAME_SQL, params![name])
    }

    /// Finds people whose name contains `text` (ignoring case) or who own a
    /// number containing `text`. Each person appears once, ordered by ID.
    pub fn find_person_by_name_or_number(&self, text: &str) -> Result<Vec<Person>> {
        let by_name = self
            .get_people()?
            .into_iter()
            .filter(|person| person.name_contains(text));
        let by_number = self.query_people(SELECT_PEOPLE_BY_NUMBER_SQL, params![text])?;

        let merged: BTreeMap<PersonId, Person> = by_name
            .chain(by_number)
            .map(|person| (person.id, person))
            .collect();

        debug!("Search for '{text}' matched {} people", merged.len());

        Ok(merged.into_values().collect())
    }

    /// Returns true when a person with this ID exists.
    pub fn person_exists(&self, id: PersonId) -> Result<bool> {
        self.connection
            .query_row(CHECK_PERSON_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check person existence")
    }

    /// Deletes a person and every number it owns as one unit.
    ///
    /// Either both deletes commit or neither does.
    pub fn delete_person(&mut self, id: PersonId) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PERSON_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check person existence")?;

        if !exists {
            return Err(PhoneBookError::PersonNotFound { id });
        }

        // Numbers first, the foreign key would reject removing the owner
        tx.execute(DELETE_PERSON_NUMBERS_SQL, params![id as i64])
            .db_context("Failed to delete phone numbers")?;

        tx.execute(DELETE_PERSON_SQL, params![id as i64])
            .db_context("Failed to delete person")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Renames a person and/or replaces all of its numbers in one
    /// transaction.
    ///
    /// `None` or a blank name leaves that part untouched. An empty number
    /// list removes all numbers.
    pub fn edit_contact(
        &mut self,
        id: PersonId,
        new_name: Option<&str>,
        new_numbers: Option<&[String]>,
    ) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_PERSON_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check person existence")?;

        if !exists {
            return Err(PhoneBookError::PersonNotFound { id });
        }

        if let Some(name) = new_name.map(str::trim).filter(|name| !name.is_empty()) {
            tx.execute(UPDATE_PERSON_NAME_SQL, params![name, id as i64])
                .db_context("Failed to rename person")?;
        }

        if let Some(numbers) = new_numbers {
            Self::replace_numbers(&tx, id, numbers)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
