//! Integration tests for record and directory operations.
//!
//! These tests validate adding, finding, editing and deleting contacts
//! through the public API, including the documented no-op cases.

mod common;
use common::fixtures::*;

use contact_directory::{
    Birthday, Directory, DirectoryError, Name, PhoneNumber, Record, ValidationError,
};

fn phones(record: &Record) -> Vec<String> {
    record.phones().iter().map(|p| p.as_str().to_string()).collect()
}

#[test]
fn test_contact_lifecycle() {
    let mut directory = Directory::new();

    // CREATE
    let record = record_with_phones("John", &["1234567890", "5555555555"]);
    directory.add(record);
    assert_eq!(directory.len(), 1);

    // READ
    let john = directory.find("John").expect("John should be stored");
    assert_eq!(phones(john), vec!["1234567890", "5555555555"]);

    // UPDATE
    let john = directory.find_mut("John").unwrap();
    john.edit_phone("1234567890", "1112223333").unwrap();
    john.set_birthday("05.06.1980").unwrap();

    let john = directory.find("John").unwrap();
    assert_eq!(phones(john), vec!["1112223333", "5555555555"]);
    assert_eq!(john.find_phone("5555555555").map(PhoneNumber::as_str), Some("5555555555"));
    assert_eq!(john.birthday().map(Birthday::to_string), Some("05.06.1980".to_string()));

    // DELETE
    directory.delete("John").unwrap();
    assert!(directory.find("John").is_none());
    assert!(directory.is_empty());
}

#[test]
fn test_edit_phone_replaces_single_number() {
    let mut record = record_with_phones("Alice", &["1111111111"]);
    record.edit_phone("1111111111", "2222222222").unwrap();
    assert_eq!(phones(&record), vec!["2222222222"]);
}

#[test]
fn test_edit_unknown_phone_fails() {
    let mut record = record_with_phones("Alice", &["1111111111"]);
    assert_eq!(
        record.edit_phone("0000000000", "2222222222"),
        Err(DirectoryError::PhoneNotFound("0000000000".to_string()))
    );
    assert_eq!(phones(&record), vec!["1111111111"]);
}

#[test]
fn test_remove_phone_without_match_is_noop() {
    let mut record = record_with_phones("Alice", &["1111111111"]);
    record.remove_phone("2222222222");
    assert_eq!(phones(&record), vec!["1111111111"]);
}

#[test]
fn test_adding_same_name_twice_keeps_second_record() {
    let mut directory = Directory::new();
    directory.add(record_with_phones("Alice", &["1111111111"]));
    directory.add(record_with_phones("Alice", &["2222222222"]));

    assert_eq!(directory.len(), 1);
    assert_eq!(phones(directory.find("Alice").unwrap()), vec!["2222222222"]);
}

#[test]
fn test_delete_absent_name_fails() {
    let mut directory = Directory::new();
    directory.add(record_with_phones("Alice", &["1111111111"]));

    assert_eq!(
        directory.delete("Bob"),
        Err(DirectoryError::RecordNotFound("Bob".to_string()))
    );
    assert_eq!(directory.len(), 1);
}

#[test]
fn test_find_absent_name_returns_none() {
    let directory = sample_directory();
    assert!(directory.find("Zed").is_none());
}

#[test]
fn test_validation_errors_surface_through_record() {
    let mut record = Record::new(Name::new("Alice").unwrap());

    assert_eq!(
        record.add_phone("12345abcde"),
        Err(DirectoryError::Validation(ValidationError::InvalidPhoneFormat(
            "12345abcde".to_string()
        )))
    );

    for bad in ["30.02.2020", "1990-10-25", "32.01.2000"] {
        assert_eq!(
            record.set_birthday(bad),
            Err(DirectoryError::Validation(ValidationError::InvalidDateFormat(
                bad.to_string()
            )))
        );
    }
    assert!(record.birthday().is_none());
}

#[test]
fn test_valid_phones_round_trip() {
    for text in ["0000000000", "0123456789", "9999999999", "5551234567"] {
        let phone = PhoneNumber::new(text).unwrap();
        assert_eq!(phone.as_str(), text);
        assert_eq!(phone.to_string(), text);
    }
}

#[test]
fn test_records_iterate_in_insertion_order() {
    let directory = sample_directory();
    let names: Vec<&str> = directory.records().map(|r| r.name().as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie", "Diana"]);
}
