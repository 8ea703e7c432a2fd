//! Error types for the contact directory.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors raised by record and directory operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The record has no phone equal to the one being edited
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),

    /// No record is stored under the given name
    #[error("Record not found: {0}")]
    RecordNotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised while executing an assistant command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command was given fewer arguments than it needs
    #[error("Not enough arguments for '{command}'. Usage: {usage}")]
    InsufficientArguments {
        command: &'static str,
        usage: &'static str,
    },

    /// The command word is not recognised
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The named contact does not exist
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// A core operation failed
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        CommandError::Directory(DirectoryError::Validation(err))
    }
}

/// Convenience type alias for Results with DirectoryError
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;
