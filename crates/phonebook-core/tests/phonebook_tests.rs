mod common;

use common::create_test_phonebook;
use phonebook_core::{
    params::{AddContact, DeleteContact, EditContact, SearchContacts, Target},
    PhoneBookBuilder, PhoneBookError,
};
use tempfile::TempDir;

#[test]
fn test_numbers_round_trip_in_order() {
    let (_temp_dir, mut book) = create_test_phonebook();

    let cases: &[(&str, &[&str])] = &[
        ("Ivan Petrov", &["+1-555-0100", "+1-555-0101"]),
        ("Anna", &["3", "2", "1"]),
        ("No Numbers", &[]),
    ];

    for (name, numbers) in cases {
        let id = book.add_person(name).expect("Failed to add person");
        for number in *numbers {
            book.add_phone_number(id, number)
                .expect("Failed to add number");
        }
        assert_eq!(book.get_phone_numbers(id).unwrap(), *numbers);
    }
}

#[test]
fn test_ivan_petrov_walkthrough() {
    let (_temp_dir, mut book) = create_test_phonebook();

    let id = book.add_person("Ivan Petrov").unwrap();
    book.add_phone_number(id, "+1-555-0100").unwrap();
    book.add_phone_number(id, "+1-555-0101").unwrap();
    let other = book.add_person("Anna Smirnova").unwrap();
    book.add_phone_number(other, "+7-900-1234").unwrap();

    assert_eq!(
        book.get_phone_numbers(id).unwrap(),
        vec!["+1-555-0100", "+1-555-0101"]
    );

    let found = book.find_person_by_name_or_number("0101").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Ivan Petrov");

    book.delete_person(id).unwrap();

    let people = book.get_people().unwrap();
    assert!(people.iter().all(|p| p.name != "Ivan Petrov"));
    assert_eq!(people.len(), 1);
    assert!(book.get_phone_numbers(id).unwrap().is_empty());
}

#[test]
fn test_search_matches_name_case_insensitively() {
    let (_temp_dir, mut book) = create_test_phonebook();

    book.add_person("Ivan Petrov").unwrap();
    book.add_person("Petra Ivanova").unwrap();
    book.add_person("Olga").unwrap();

    let found = book.find_person_by_name_or_number("IVAN").unwrap();
    let names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Ivan Petrov", "Petra Ivanova"]);
}

#[test]
fn test_exact_name_lookup_follows_add_history() {
    let (_temp_dir, mut book) = create_test_phonebook();

    assert_eq!(book.find_person_by_exact_name("Boris").unwrap().len(), 0);
    book.add_person("Boris").unwrap();
    assert_eq!(book.find_person_by_exact_name("Boris").unwrap().len(), 1);
    book.add_person("Boris").unwrap();
    assert_eq!(book.find_person_by_exact_name("Boris").unwrap().len(), 2);
}

#[test]
fn test_orphan_number_is_rejected() {
    let (_temp_dir, mut book) = create_test_phonebook();

    let err = book.add_phone_number(1000, "555").unwrap_err();
    assert!(matches!(err, PhoneBookError::ConstraintViolation { .. }));
}

#[test]
fn test_data_survives_reopen() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("book.db");

    let mut book = PhoneBookBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to build phonebook");
    book.add_contact(&AddContact {
        name: "Ivan Petrov".to_string(),
        numbers: vec!["+1-555-0100".to_string()],
        merge: false,
    })
    .unwrap();
    book.close().expect("Failed to close phonebook");

    let book = PhoneBookBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to reopen phonebook");
    let listing = book.list_contacts().unwrap();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].numbers, vec!["+1-555-0100"]);
}

#[test]
fn test_full_workflow_through_handlers() {
    let (_temp_dir, mut book) = create_test_phonebook();

    for (name, numbers) in [("Ivan Petrov", "+1-555-0100"), ("Anna", "+1-555-0200")] {
        book.add_contact(&AddContact {
            name: name.to_string(),
            numbers: vec![numbers.to_string()],
            merge: false,
        })
        .unwrap();
    }

    let edited = book
        .update_contact(&EditContact {
            target: Target::Name("Anna".to_string()),
            new_name: Some("Anna Smirnova".to_string()),
            numbers: Some(vec!["+1-555-0201, +1-555-0202".to_string()]),
        })
        .unwrap();
    assert_eq!(edited.resource.numbers, vec!["+1-555-0201", "+1-555-0202"]);

    let found = book
        .search_contacts(&SearchContacts {
            text: "smirnova".to_string(),
        })
        .unwrap();
    assert_eq!(found.names(), vec!["Anna Smirnova"]);

    let deleted = book
        .remove_contact(&DeleteContact {
            target: Target::Name("Ivan Petrov".to_string()),
        })
        .unwrap();
    assert!(deleted.to_string().contains("Deleted contact 'Ivan Petrov'"));

    let listing = book.list_contacts().unwrap().to_string();
    assert_eq!(
        listing,
        format!(
            "- Name: Anna Smirnova, Numbers: +1-555-0201, +1-555-0202 (ID: {})\n",
            edited.resource.id()
        )
    );
}
