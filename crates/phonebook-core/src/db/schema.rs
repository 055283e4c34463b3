//! Schema initialization for the `people` and `phone_numbers` tables.

use crate::error::{DatabaseResultExt, Result};

const SCHEMA_SQL: &str = include_str!("../../assets/schema.sql");
const COUNT_TABLES_SQL: &str =
    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('people', 'phone_numbers')";

impl super::Database {
    /// Creates the tables if they are missing. Existing data is untouched, so
    /// this runs on every open.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Foreign keys are off by default in SQLite and are a per-connection
        // setting.
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .connection_context("Failed to enable foreign keys")?;

        self.connection
            .execute_batch(SCHEMA_SQL)
            .connection_context("Failed to initialize database schema")?;

        Ok(())
    }

    /// Returns true when both phonebook tables exist.
    pub fn schema_ready(&self) -> Result<bool> {
        let count: i64 = self
            .connection
            .query_row(COUNT_TABLES_SQL, [], |row| row.get(0))
            .db_context("Failed to inspect schema")?;
        Ok(count == 2)
    }

    /// Returns true when foreign key enforcement is on for this connection.
    pub fn foreign_keys_enabled(&self) -> Result<bool> {
        self.connection
            .query_row("PRAGMA foreign_keys", [], |row| row.get::<_, i64>(0))
            .map(|flag| flag == 1)
            .db_context("Failed to read foreign key setting")
    }
}
