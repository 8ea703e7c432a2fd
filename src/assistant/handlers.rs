//! Command handlers for the assistant prompt.
//!
//! Each handler calls into the directory and turns the outcome into reply
//! text. Errors are returned as `CommandError` and rendered in one place by
//! [`error_message`], so no handler formats its own failures.

use super::command::Command;
use crate::birthdays::LeapDayPolicy;
use crate::config::Config;
use crate::domain::{Name, PhoneNumber};
use crate::error::{CommandError, CommandResult, DirectoryError};
use crate::models::Record;
use crate::repositories::Directory;
use chrono::NaiveDate;
use tracing::debug;

/// What the prompt should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print the text and keep reading commands.
    Message(String),

    /// Print the text and end the session.
    Exit(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Message(text) | Reply::Exit(text) => text,
        }
    }
}

/// The assistant: a directory plus the settings its commands run with.
#[derive(Debug, Clone)]
pub struct Assistant {
    directory: Directory,
    window_days: u32,
    leap_day_policy: LeapDayPolicy,
}

impl Assistant {
    /// Create an assistant with an empty directory.
    pub fn new(config: &Config) -> Self {
        Self::with_directory(Directory::new(), config)
    }

    /// Create an assistant around an existing directory.
    pub fn with_directory(directory: Directory, config: &Config) -> Self {
        Self {
            directory,
            window_days: config.window_days,
            leap_day_policy: config.leap_day_policy,
        }
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Parse and run one input line, rendering any error as reply text.
    ///
    /// `today` is the reference date for birthday commands.
    pub fn handle_line(&mut self, line: &str, today: NaiveDate) -> Reply {
        let result = line
            .parse::<Command>()
            .and_then(|command| self.execute(command, today));

        match result {
            Ok(reply) => reply,
            Err(err) => {
                debug!(error = %err, "Command failed");
                Reply::Message(error_message(&err))
            }
        }
    }

    /// Run a parsed command.
    pub fn execute(&mut self, command: Command, today: NaiveDate) -> CommandResult<Reply> {
        debug!(?command, "Executing command");

        let text = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add { name, phone } => self.add_contact(&name, &phone)?,
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => self.change_contact(&name, &old_phone, &new_phone)?,
            Command::Phone { name } => self.show_phone(&name)?,
            Command::All => self.show_all(),
            Command::AddBirthday { name, birthday } => self.add_birthday(&name, &birthday)?,
            Command::ShowBirthday { name } => self.show_birthday(&name)?,
            Command::Birthdays => self.birthdays(today),
            Command::Delete { name } => self.delete_contact(&name)?,
            Command::Exit => return Ok(Reply::Exit("Good bye!".to_string())),
        };

        Ok(Reply::Message(text))
    }

    fn record_mut(&mut self, name: &str) -> CommandResult<&mut Record> {
        self.directory
            .find_mut(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }

    fn record(&self, name: &str) -> CommandResult<&Record> {
        self.directory
            .find(name)
            .ok_or_else(|| CommandError::ContactNotFound(name.to_string()))
    }

    fn add_contact(&mut self, name: &str, phone: &str) -> CommandResult<String> {
        if let Some(record) = self.directory.find_mut(name) {
            record.add_phone(phone)?;
            return Ok("Contact updated.".to_string());
        }

        // Validate before storing so a bad phone leaves no empty record behind.
        let mut record = Record::new(Name::new(name)?);
        record.add_phone(phone)?;
        self.directory.add(record);
        Ok("Contact added.".to_string())
    }

    fn change_contact(&mut self, name: &str, old: &str, new: &str) -> CommandResult<String> {
        self.record_mut(name)?.edit_phone(old, new)?;
        Ok(format!(
            "Contact {} updated with new phone number {}.",
            name, new
        ))
    }

    fn show_phone(&self, name: &str) -> CommandResult<String> {
        let record = self.record(name)?;
        if record.phones().is_empty() {
            return Ok(format!("{} has no phone numbers.", name));
        }

        let phones = record
            .phones()
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!("{}: {}", name, phones))
    }

    fn show_all(&self) -> String {
        if self.directory.is_empty() {
            return "No contacts found.".to_string();
        }

        self.directory
            .records()
            .map(Record::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn add_birthday(&mut self, name: &str, birthday: &str) -> CommandResult<String> {
        self.record_mut(name)?.set_birthday(birthday)?;
        Ok(format!("Birthday added for {}.", name))
    }

    fn show_birthday(&self, name: &str) -> CommandResult<String> {
        let record = self.record(name)?;
        Ok(match record.birthday() {
            Some(birthday) => format!("{} birthday is on {}", name, birthday),
            None => format!("Birthday not set for {}.", name),
        })
    }

    fn birthdays(&self, today: NaiveDate) -> String {
        let upcoming =
            self.directory
                .upcoming_birthdays_with(today, self.window_days, self.leap_day_policy);

        if upcoming.is_empty() {
            return "No upcoming birthdays.".to_string();
        }

        upcoming
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn delete_contact(&mut self, name: &str) -> CommandResult<String> {
        self.directory.delete(name)?;
        Ok(format!("Contact {} deleted.", name))
    }
}

/// Render a command error as the line shown to the user.
pub fn error_message(err: &CommandError) -> String {
    match err {
        CommandError::UnknownCommand(_) => "Invalid command.".to_string(),
        CommandError::InsufficientArguments { usage, .. } => {
            format!("Error: Not enough arguments provided. Usage: {}", usage)
        }
        CommandError::ContactNotFound(_)
        | CommandError::Directory(DirectoryError::RecordNotFound(_)) => {
            "Error: Contact not found.".to_string()
        }
        CommandError::Directory(DirectoryError::PhoneNotFound(phone)) => {
            format!("Error: Phone number {} not found.", phone)
        }
        CommandError::Directory(DirectoryError::Validation(validation)) => {
            format!("Error: {}", validation)
        }
    }
}
