use phonebook_core::{Database, PhoneBook, PhoneBookBuilder};
use tempfile::TempDir;

/// Helper function to create a phonebook backed by a file in a temp dir
#[allow(dead_code)]
pub fn create_test_phonebook() -> (TempDir, PhoneBook) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let book = PhoneBookBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create phonebook");
    (temp_dir, book)
}

/// Helper function to create a database file in a temp dir
#[allow(dead_code)]
pub fn create_test_db() -> (TempDir, Database) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db = Database::open(temp_dir.path().join("test.db")).expect("Failed to create database");
    (temp_dir, db)
}
