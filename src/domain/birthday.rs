//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Input and display format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts single-digit days and months, the input pattern does not.
static BIRTHDAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("valid birthday regex"));

/// A birthday parsed from `DD.MM.YYYY`.
///
/// The year is kept for display, but only the month and day matter when
/// working out the next occurrence.
///
/// # Example
///
/// ```
/// use contact_directory::domain::Birthday;
///
/// let birthday = Birthday::new("25.10.1990").unwrap();
/// assert_eq!(birthday.month(), 10);
/// assert_eq!(birthday.day(), 25);
/// assert_eq!(birthday.to_string(), "25.10.1990");
/// assert!(Birthday::new("30.02.2020").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDateFormat` if the text does not match
    /// the pattern or does not name a real calendar date.
    pub fn new(text: &str) -> Result<Self, ValidationError> {
        if !BIRTHDAY_PATTERN.is_match(text) {
            return Err(ValidationError::InvalidDateFormat(text.to_string()));
        }

        NaiveDate::parse_from_str(text, BIRTHDAY_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDateFormat(text.to_string()))
    }

    /// The full stored date, year included.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Whether this birthday falls on 29 February.
    pub fn is_leap_day(&self) -> bool {
        self.month() == 2 && self.day() == 29
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Birthday::new(s)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("25.10.1990").unwrap();
        assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(1990, 10, 25).unwrap());
        assert_eq!(birthday.month(), 10);
        assert_eq!(birthday.day(), 25);
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("30.02.2020").is_err());
        assert!(Birthday::new("32.01.2000").is_err());
        assert!(Birthday::new("00.01.2000").is_err());
        assert!(Birthday::new("15.13.2000").is_err());
        assert!(Birthday::new("29.02.2021").is_err());
    }

    #[test]
    fn test_birthday_rejects_other_layouts() {
        assert!(Birthday::new("1990-10-25").is_err());
        assert!(Birthday::new("25/10/1990").is_err());
        assert!(Birthday::new("5.10.1990").is_err());
        assert!(Birthday::new("25.1.1990").is_err());
        assert!(Birthday::new("25.10.90").is_err());
        assert!(Birthday::new(" 25.10.1990").is_err());
        assert!(Birthday::new("").is_err());
    }

    #[test]
    fn test_birthday_error_kind() {
        assert_eq!(
            Birthday::new("30.02.2020"),
            Err(ValidationError::InvalidDateFormat("30.02.2020".to_string()))
        );
    }

    #[test]
    fn test_birthday_leap_day() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert!(birthday.is_leap_day());
        assert!(!Birthday::new("28.02.2000").unwrap().is_leap_day());
    }

    #[test]
    fn test_birthday_display_keeps_leading_zeros() {
        let birthday: Birthday = "01.02.1992".parse().unwrap();
        assert_eq!(birthday.to_string(), "01.02.1992");
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("01.11.1992").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"01.11.1992\"");

        let parsed: Birthday = serde_json::from_str("\"01.11.1992\"").unwrap();
        assert_eq!(parsed, birthday);

        let invalid: Result<Birthday, _> = serde_json::from_str("\"1992-11-01\"");
        assert!(invalid.is_err());
    }
}
