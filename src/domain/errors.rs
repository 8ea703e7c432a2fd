//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided contact name is empty or blank.
    #[error("Contact name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    #[error("Invalid phone number '{0}'. Must contain exactly 10 digits")]
    InvalidPhoneFormat(String),

    /// The provided birthday is not a real date in `DD.MM.YYYY` form.
    #[error("Invalid date format '{0}'. Use DD.MM.YYYY")]
    InvalidDateFormat(String),
}
