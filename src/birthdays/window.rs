//! Birthday window implementation.
//!
//! Everything here is a pure function of its inputs. The reference date is
//! always supplied by the caller, never read from the wall clock, so the same
//! records and reference date always produce the same report.
//!
//! For each record with a birthday:
//! - project the month/day onto the reference year, or the next year if that
//!   date has already passed
//! - keep the record when the projected date is `0..=window_days` days away
//! - greet on the following Monday when the projected date is a weekend day

use crate::domain::Birthday;
use crate::models::Record;
use chrono::{Datelike, Days, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Window used when the caller does not pick one.
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Output format for congratulation dates.
pub const CONGRATULATION_DATE_FORMAT: &str = "%d-%m-%Y";

/// How a 29 February birthday is projected onto a common year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeapDayPolicy {
    /// Celebrate on 28 February.
    #[default]
    Feb28,

    /// Celebrate on 1 March.
    Mar1,
}

impl FromStr for LeapDayPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "feb28" => Ok(LeapDayPolicy::Feb28),
            "mar1" => Ok(LeapDayPolicy::Mar1),
            other => Err(format!("expected 'feb28' or 'mar1', got '{}'", other)),
        }
    }
}

/// One contact whose birthday falls inside the requested window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// The birthday as it falls this cycle, before any weekend shift
    #[serde(serialize_with = "serialize_dashed_date")]
    pub occurs_on: NaiveDate,

    /// Days from the reference date to `occurs_on` (0 means today)
    pub days_left: i64,

    /// Date the greeting should go out, moved off weekends
    #[serde(serialize_with = "serialize_dashed_date")]
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// Congratulation date rendered as `DD-MM-YYYY`.
    pub fn congratulation_date_string(&self) -> String {
        self.congratulation_date
            .format(CONGRATULATION_DATE_FORMAT)
            .to_string()
    }

    /// Whether the greeting was moved off a weekend.
    pub fn is_shifted(&self) -> bool {
        self.occurs_on != self.congratulation_date
    }
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.name,
            self.congratulation_date.format(CONGRATULATION_DATE_FORMAT)
        )
    }
}

fn serialize_dashed_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(CONGRATULATION_DATE_FORMAT))
}

/// Place a birthday's month and day in `year`.
///
/// Returns `None` only when `year` is outside the range chrono can represent.
pub fn project_onto_year(
    birthday: &Birthday,
    year: i32,
    policy: LeapDayPolicy,
) -> Option<NaiveDate> {
    if !birthday.is_leap_day() {
        return NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day());
    }

    if let Some(date) = NaiveDate::from_ymd_opt(year, 2, 29) {
        return Some(date);
    }

    trace!(year, ?policy, "Projecting leap-day birthday onto a common year");
    match policy {
        LeapDayPolicy::Feb28 => NaiveDate::from_ymd_opt(year, 2, 28),
        LeapDayPolicy::Mar1 => NaiveDate::from_ymd_opt(year, 3, 1),
    }
}

/// The first occurrence of `birthday` on or after `reference`.
pub fn next_occurrence(
    birthday: &Birthday,
    reference: NaiveDate,
    policy: LeapDayPolicy,
) -> Option<NaiveDate> {
    let candidate = project_onto_year(birthday, reference.year(), policy)?;
    if candidate < reference {
        return project_onto_year(birthday, reference.year() + 1, policy);
    }
    Some(candidate)
}

/// Days from `reference` to the next occurrence of `birthday`.
pub fn days_until(birthday: &Birthday, reference: NaiveDate, policy: LeapDayPolicy) -> Option<i64> {
    next_occurrence(birthday, reference, policy).map(|date| (date - reference).num_days())
}

/// Move a Saturday or Sunday to the following Monday.
///
/// Other weekdays are returned unchanged.
pub fn congratulation_date(occurs_on: NaiveDate) -> NaiveDate {
    let weekday_index = occurs_on.weekday().num_days_from_monday();
    if weekday_index < 5 {
        return occurs_on;
    }

    let offset = u64::from(7 - weekday_index);
    occurs_on
        .checked_add_days(Days::new(offset))
        .unwrap_or(occurs_on)
}

/// Collect the records whose birthday is `0..=window_days` days after
/// `reference`.
///
/// The result follows the iteration order of `records`; it is not sorted by
/// date. Filtering uses the unshifted date, so a weekend birthday at the edge
/// of the window can be greeted on a Monday just past it.
pub fn upcoming_birthdays<'a, I>(
    records: I,
    reference: NaiveDate,
    window_days: u32,
    policy: LeapDayPolicy,
) -> Vec<UpcomingBirthday>
where
    I: IntoIterator<Item = &'a Record>,
{
    let window = i64::from(window_days);

    let upcoming: Vec<UpcomingBirthday> = records
        .into_iter()
        .filter_map(|record| {
            let birthday = record.birthday()?;
            let occurs_on = next_occurrence(birthday, reference, policy)?;
            let days_left = (occurs_on - reference).num_days();

            if !(0..=window).contains(&days_left) {
                return None;
            }

            Some(UpcomingBirthday {
                name: record.name().as_str().to_string(),
                occurs_on,
                days_left,
                congratulation_date: congratulation_date(occurs_on),
            })
        })
        .collect();

    debug!(
        reference = %reference,
        window_days,
        matched = upcoming.len(),
        "Computed upcoming birthdays"
    );

    upcoming
}
