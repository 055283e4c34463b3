use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and a database file
fn phonebook_cmd(db_path: &Path) -> Command {
    let mut cmd = Command::cargo_bin("phonebook").expect("Failed to find phonebook binary");
    cmd.env_remove("PHONEBOOK_DB")
        .arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

fn add(db_path: &Path, args: &[&str]) {
    phonebook_cmd(db_path)
        .arg("add")
        .args(args)
        .assert()
        .success();
}

#[test]
fn test_cli_empty_book_lists_nothing() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("book.db");

    phonebook_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("# Contacts"))
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn test_cli_add_then_list() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("book.db");

    phonebook_cmd(&db_path)
        .args(["add", "Ivan Petrov", "+1-555-0100", "+1-555-0101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added contact with ID: 1"))
        .stdout(predicate::str::contains(
            "- Name: Ivan Petrov, Numbers: +1-555-0100, +1-555-0101 (ID: 1)",
        ));

    phonebook_cmd(&db_path)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- Name: Ivan Petrov, Numbers: +1-555-0100, +1-555-0101 (ID: 1)",
        ));
}

#[test]
fn test_cli_add_with_comma_separated_numbers() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("book.db");

    phonebook_cmd(&db_path)
        .args(["add", "Anna", "111, 222"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Anna, Numbers: 111, 222"));
}

#[test]
fn test_cli_add_blank_name_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("book.db");

    phonebook_cmd(&db_path)
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("name"));
}

#[test]
fn test_cli_add_merge_reuses_contact() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("book.db");
    add(&db_path, &["Anna", "111"]);

    phonebook_cmd(&db_path)
        .args(["add", "--merge", "Anna", "222"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Added numbers to existing contact with ID: 1",
        ))
        .stdout(predicate::str::contains("Name: Anna, Numbers: 111, 222 (ID: 1)"));
}

#[test]
fn test_cli_search_by_name_and_number() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("book.db");
    add(&db_path, &["Ivan Petrov", "+1-555-0100"]);
    add(&db_path, &["Anna Smirnova", "+7-900-1234"]);

    phonebook_cmd(&db_path)
        .args(["search", "ivan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Ivan Petrov"))
        .stdout(predicate::str::contains("Anna").not());

    phonebook_cmd(&db_path)
        .args(["search", "900"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Anna Smirnova"))
        .stdout(predicate::str::contains("Ivan").not());

    phonebook_cmd(&db_path)
        .args(["search", "nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn test_cli_edit_renames_and_replaces_numbers() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("book.db");
    add(&db_path, &["Ivan", "1", "2"]);

    phonebook_cmd(&db_path)
        .args(["edit", "Ivan", "--rename", "Ivan Petrov", "--numbers", "3,4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changes made:"))
        .stdout(predicate::str::contains("Name: Ivan Petrov, Numbers: 3, 4 (ID: 1)"));
}

#[test]
fn test_cli_edit_empty_numbers_clears_all() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("book.db");
    add(&db_path, &["Anna", "1", "2"]);

    phonebook_cmd(&db_path)
        .args(["edit", "Anna", "--numbers", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Anna, Numbers: (none)"));

    let output = phonebook_cmd(&db_path)
        .args(["--json", "list"])
        .output()
        .expect("Failed to run phonebook");
    assert!(output.status.success());

    let contacts: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output is not JSON");
    assert_eq!(contacts[0]["name"], "Anna");
    assert_eq!(contacts[0]["numbers"], serde_json::json!([]));
}

#[test]
fn test_cli_edit_unknown_name_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("book.db");

    phonebook_cmd(&db_path)
        .args(["edit", "Nobody", "--rename", "Somebody"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No contact found for 'Nobody'"));
}

#[test]
fn test_cli_renumber() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("book.db");
    add(&db_path, &["Ivan", "100", "200"]);

    phonebook_cmd(&db_path)
        .args(["renumber", "100", "150", "--name", "Ivan"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changed number 100 to 150"))
        .stdout(predicate::str::contains("Name: Ivan, Numbers: 150, 200"));

    phonebook_cmd(&db_path)
        .args(["renumber", "999", "1", "--id", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No contact found for '999'"));
}

#[test]
fn test_cli_delete_by_name() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("book.db");
    add(&db_path, &["Ivan Petrov", "+1-555-0100"]);
    add(&db_path, &["Anna"]);

    phonebook_cmd(&db_path)
        .args(["delete", "Ivan Petrov"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted contact 'Ivan Petrov' (ID: 1)"))
        .stdout(predicate::str::contains("Name: Ivan Petrov").not());

    phonebook_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Anna"))
        .stdout(predicate::str::contains("Ivan").not());
}

#[test]
fn test_cli_ambiguous_name_needs_id() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("book.db");
    add(&db_path, &["Twin", "1"]);
    add(&db_path, &["Twin", "2"]);

    phonebook_cmd(&db_path)
        .args(["delete", "Twin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Found 2 contacts named 'Twin'"));

    phonebook_cmd(&db_path)
        .args(["delete", "--id", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted contact 'Twin' (ID: 2)"));

    phonebook_cmd(&db_path)
        .args(["delete", "--id", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Person with ID 2 not found"));
}

#[test]
fn test_cli_json_output() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("book.db");
    add(&db_path, &["Ivan Petrov", "+1-555-0100"]);

    let output = phonebook_cmd(&db_path)
        .args(["--json", "list"])
        .output()
        .expect("Failed to run phonebook");
    assert!(output.status.success());

    let contacts: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output is not JSON");
    assert_eq!(contacts[0]["id"], 1);
    assert_eq!(contacts[0]["name"], "Ivan Petrov");
    assert_eq!(contacts[0]["numbers"][0], "+1-555-0100");
}

#[test]
fn test_cli_database_from_environment() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("env.db");

    Command::cargo_bin("phonebook")
        .expect("Failed to find phonebook binary")
        .env("PHONEBOOK_DB", &db_path)
        .args(["--no-color", "add", "Olga"])
        .assert()
        .success();

    assert!(db_path.exists());
    phonebook_cmd(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Olga, Numbers: (none)"));
}

#[test]
fn test_cli_unopenable_database_fails() {
    let temp_dir = create_cli_test_environment();

    phonebook_cmd(temp_dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to open the contact database"));
}
