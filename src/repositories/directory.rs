use crate::birthdays::{self, LeapDayPolicy, UpcomingBirthday};
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Record;
use chrono::NaiveDate;
use tracing::debug;

/// In-memory, name-keyed collection of contact records.
///
/// Records are kept in insertion order, which is also the order of
/// birthday reports. Adding a record under a name that is already present
/// replaces the old record in its existing position.
#[derive(Debug, Clone, Default)]
pub struct Directory {
    records: Vec<Record>,
}

impl Directory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records
            .iter()
            .position(|record| record.name().as_str() == name)
    }

    /// Store `record` under its name, replacing any record with the same name.
    pub fn add(&mut self, record: Record) {
        match self.position(record.name().as_str()) {
            Some(index) => {
                debug!(name = %record.name(), "Replacing existing record");
                self.records[index] = record;
            }
            None => {
                debug!(name = %record.name(), "Adding record");
                self.records.push(record);
            }
        }
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records
            .iter()
            .find(|record| record.name().as_str() == name)
    }

    /// Look up a record by exact name for in-place changes.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records
            .iter_mut()
            .find(|record| record.name().as_str() == name)
    }

    /// Remove the record stored under `name`.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::RecordNotFound` if no such record exists.
    pub fn delete(&mut self, name: &str) -> DirectoryResult<()> {
        let index = self
            .position(name)
            .ok_or_else(|| DirectoryError::RecordNotFound(name.to_string()))?;

        self.records.remove(index);
        debug!(name = %name, "Deleted record");
        Ok(())
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Contacts whose birthday falls within `window_days` days of `reference`,
    /// inclusive at both ends, in insertion order.
    ///
    /// Leap-day birthdays fall on 28 February in common years. Use
    /// [`Directory::upcoming_birthdays_with`] to pick another policy.
    pub fn upcoming_birthdays(
        &self,
        reference: NaiveDate,
        window_days: u32,
    ) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_with(reference, window_days, LeapDayPolicy::default())
    }

    pub fn upcoming_birthdays_with(
        &self,
        reference: NaiveDate,
        window_days: u32,
        policy: LeapDayPolicy,
    ) -> Vec<UpcomingBirthday> {
        birthdays::upcoming_birthdays(&self.records, reference, window_days, policy)
    }
}
