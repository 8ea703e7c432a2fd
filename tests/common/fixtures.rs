//! Test fixtures and sample data for integration tests.

use chrono::NaiveDate;
use contact_directory::{Directory, Name, Record};

/// Friday 24 October 2025, the reference date used across the birthday tests.
pub fn reference_friday() -> NaiveDate {
    date(2025, 10, 24)
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Create a record with a birthday and no phones.
pub fn record_with_birthday(name: &str, birthday: &str) -> Record {
    let mut record = Record::new(Name::new(name).expect("valid fixture name"));
    record
        .set_birthday(birthday)
        .expect("valid fixture birthday");
    record
}

/// Create a record with the given phones and no birthday.
pub fn record_with_phones(name: &str, phones: &[&str]) -> Record {
    let mut record = Record::new(Name::new(name).expect("valid fixture name"));
    for phone in phones {
        record.add_phone(phone).expect("valid fixture phone");
    }
    record
}

/// The four-contact directory: Alice (Saturday), Bob (Thursday),
/// Charlie (eight days out) and Diana (Monday), added in that order.
pub fn sample_directory() -> Directory {
    let mut directory = Directory::new();
    directory.add(record_with_birthday("Alice", "25.10.1990"));
    directory.add(record_with_birthday("Bob", "30.10.1985"));
    directory.add(record_with_birthday("Charlie", "01.11.1992"));
    directory.add(record_with_birthday("Diana", "27.10.1995"));
    directory
}
