//! Error types for the phonebook library.

use std::path::PathBuf;

use rusqlite::ErrorCode;
use thiserror::Error;

/// Comprehensive error type for all phonebook operations.
#[derive(Error, Debug)]
pub enum PhoneBookError {
    /// The store could not be opened or its schema could not be created
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A foreign key or NOT NULL constraint rejected the statement
    #[error("Constraint violation: {message}")]
    ConstraintViolation {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Any other database query error
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Person not found for the given ID
    #[error("Person with ID {id} not found")]
    PersonNotFound { id: u64 },
    /// A lookup matched nothing
    #[error("No contact found for '{query}'")]
    NotFound { query: String },
    /// An exact-name lookup matched more than one person
    #[error("Found {count} contacts named '{name}', use an ID to pick one")]
    Ambiguous { name: String, count: usize },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    ///
    /// Constraint failures reported by SQLite become
    /// [`PhoneBookError::ConstraintViolation`]; everything else is a plain
    /// [`PhoneBookError::Database`].
    pub fn with_source(self, source: rusqlite::Error) -> PhoneBookError {
        if source.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) {
            PhoneBookError::ConstraintViolation {
                message: self.message,
                source,
            }
        } else {
            PhoneBookError::Database {
                message: self.message,
                source,
            }
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PhoneBookError {
        PhoneBookError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PhoneBookError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Returns true when the error means the store itself is unusable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;

    /// Map errors raised while opening or initializing the store.
    fn connection_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PhoneBookError::database(message).with_source(e))
    }

    fn connection_context(self, message: &str) -> Result<T> {
        self.map_err(|source| PhoneBookError::Connection {
            message: message.to_string(),
            source,
        })
    }
}

/// Result type alias for phonebook operations
pub type Result<T> = std::result::Result<T, PhoneBookError>;
