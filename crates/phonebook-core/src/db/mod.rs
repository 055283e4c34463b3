//! Database operations and SQLite management for people and phone numbers.
//!
//! This module owns the single SQLite connection used by the phonebook. The
//! schema is initialized whenever a [`Database`] is constructed, and the
//! person and number queries live in their own submodules as `impl` blocks
//! on the same type.

use std::path::Path;

use log::{debug, info, warn};
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, PhoneBookError, Result};

pub mod number_queries;
pub mod person_queries;
pub mod schema;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens the database file at `path` and initializes the schema.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Opening contact database at {}", path.display());
        let connection =
            Connection::open(path).connection_context("Failed to open database connection")?;
        Self::from_connection(connection)
    }

    /// Opens a private in-memory database. Mostly useful for tests.
    pub fn open_in_memory() -> Result<Self> {
        debug!("Opening in-memory contact database");
        let connection = Connection::open_in_memory()
            .connection_context("Failed to open in-memory database")?;
        Self::from_connection(connection)
    }

    /// Wraps an already opened connection and initializes the schema on it.
    pub fn from_connection(connection: Connection) -> Result<Self> {
        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Closes the underlying connection, reporting any error SQLite raises
    /// while finalizing it.
    pub fn close(self) -> Result<()> {
        self.connection.close().map_err(|(_, source)| {
            warn!("Failed to close contact database: {source}");
            PhoneBookError::database("Failed to close database connection").with_source(source)
        })
    }
}
