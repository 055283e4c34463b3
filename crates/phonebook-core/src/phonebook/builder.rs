//! Builder for creating and configuring PhoneBook instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::PhoneBook;
use crate::{
    db::Database,
    error::{PhoneBookError, Result},
};

/// Builder for creating and configuring PhoneBook instances.
#[derive(Debug, Clone, Default)]
pub struct PhoneBookBuilder {
    database_path: Option<PathBuf>,
    in_memory: bool,
}

impl PhoneBookBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/phonebook/phonebook.db` or
    /// `~/.local/share/phonebook/phonebook.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses a private in-memory database instead of a file.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Opens the database and builds the phonebook.
    ///
    /// # Errors
    ///
    /// Returns `PhoneBookError::FileSystem` if the parent directory cannot be
    /// created, `PhoneBookError::XdgDirectory` if no default location can be
    /// determined, and `PhoneBookError::Connection` if the database cannot be
    /// opened or initialized.
    pub fn build(self) -> Result<PhoneBook> {
        if self.in_memory {
            return Ok(PhoneBook::new(Database::open_in_memory()?));
        }

        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PhoneBookError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Using database file {}", db_path.display());
        Ok(PhoneBook::new(Database::open(&db_path)?))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    pub fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("phonebook")
            .place_data_file("phonebook.db")
            .map_err(|e| PhoneBookError::XdgDirectory(e.to_string()))
    }
}
