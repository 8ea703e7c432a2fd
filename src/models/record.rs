//! Record model representing one contact in the directory.

use crate::birthdays::{self, LeapDayPolicy};
use crate::domain::{Birthday, Name, PhoneNumber};
use crate::error::{DirectoryError, DirectoryResult};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A contact: one name, any number of phones and an optional birthday.
///
/// Phones keep their insertion order and duplicates are allowed. The name is
/// fixed for the lifetime of the record; renaming a contact means deleting
/// the record and adding a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: Name,

    phones: Vec<PhoneNumber>,

    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate `phone` and append it.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `phone` is not exactly ten digits.
    pub fn add_phone(&mut self, phone: &str) -> DirectoryResult<()> {
        self.phones.push(PhoneNumber::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Removing an unknown number is a no-op.
    pub fn remove_phone(&mut self, phone: &str) {
        self.phones.retain(|existing| existing.as_str() != phone);
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::PhoneNotFound` when no phone matches `old`,
    /// or a validation error when `new` is not a valid phone number.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> DirectoryResult<()> {
        let index = self
            .phones
            .iter()
            .position(|existing| existing.as_str() == old)
            .ok_or_else(|| DirectoryError::PhoneNotFound(old.to_string()))?;

        self.phones[index] = PhoneNumber::new(new)?;
        Ok(())
    }

    /// First phone equal to `phone`, if any.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|existing| existing.as_str() == phone)
    }

    /// Parse `birthday` as `DD.MM.YYYY` and store it, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the date is malformed or not a real date.
    pub fn set_birthday(&mut self, birthday: &str) -> DirectoryResult<()> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    /// Days from `reference` to this contact's next birthday.
    ///
    /// Returns `None` when no birthday is set. A birthday on `reference`
    /// itself is 0 days away.
    pub fn days_to_birthday(&self, reference: NaiveDate) -> Option<i64> {
        self.days_to_birthday_with(reference, LeapDayPolicy::default())
    }

    /// Like [`Record::days_to_birthday`], with an explicit leap-day policy.
    pub fn days_to_birthday_with(
        &self,
        reference: NaiveDate,
        policy: LeapDayPolicy,
    ) -> Option<i64> {
        let birthday = self.birthday.as_ref()?;
        birthdays::days_until(birthday, reference, policy)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "Name: {}, Phones: [{}], Birthday: ", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, "{}", birthday),
            None => f.write_str("N/A"),
        }
    }
}
