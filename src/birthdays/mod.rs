//! Upcoming birthday computation.
//!
//! This module projects stored birthdays onto a reference date, keeps those
//! that fall inside an inclusive day window, and moves weekend greetings to
//! the following Monday.

pub mod window;

pub use window::{
    congratulation_date, days_until, next_occurrence, project_onto_year, upcoming_birthdays,
    LeapDayPolicy, UpcomingBirthday, CONGRATULATION_DATE_FORMAT, DEFAULT_WINDOW_DAYS,
};
