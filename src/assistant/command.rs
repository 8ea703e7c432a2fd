//! Parsing of assistant command lines.

use crate::error::{CommandError, CommandResult};
use std::str::FromStr;

/// A parsed assistant command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    /// Create the contact if needed and append a phone.
    Add { name: String, phone: String },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    Delete { name: String },
    Exit,
}

/// Split a line into a lowercased command word and its arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<&str>)> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    Some((command, parts.collect()))
}

fn arg(
    args: &[&str],
    index: usize,
    command: &'static str,
    usage: &'static str,
) -> CommandResult<String> {
    args.get(index)
        .map(|value| value.to_string())
        .ok_or(CommandError::InsufficientArguments { command, usage })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (command, args) =
            parse_input(line).ok_or_else(|| CommandError::UnknownCommand(String::new()))?;

        match command.as_str() {
            "hello" => Ok(Command::Hello),
            "add" => {
                const USAGE: &str = "add <name> <phone>";
                Ok(Command::Add {
                    name: arg(&args, 0, "add", USAGE)?,
                    phone: arg(&args, 1, "add", USAGE)?,
                })
            }
            "change" => {
                const USAGE: &str = "change <name> <old phone> <new phone>";
                Ok(Command::Change {
                    name: arg(&args, 0, "change", USAGE)?,
                    old_phone: arg(&args, 1, "change", USAGE)?,
                    new_phone: arg(&args, 2, "change", USAGE)?,
                })
            }
            "phone" => Ok(Command::Phone {
                name: arg(&args, 0, "phone", "phone <name>")?,
            }),
            "all" => Ok(Command::All),
            "add-birthday" => {
                const USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
                Ok(Command::AddBirthday {
                    name: arg(&args, 0, "add-birthday", USAGE)?,
                    birthday: arg(&args, 1, "add-birthday", USAGE)?,
                })
            }
            "show-birthday" => Ok(Command::ShowBirthday {
                name: arg(&args, 0, "show-birthday", "show-birthday <name>")?,
            }),
            "birthdays" => Ok(Command::Birthdays),
            "delete" => Ok(Command::Delete {
                name: arg(&args, 0, "delete", "delete <name>")?,
            }),
            "close" | "exit" => Ok(Command::Exit),
            _ => Err(CommandError::UnknownCommand(command)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_lowercases_command_only() {
        let (command, args) = parse_input("  ADD Alice 1234567890 ").unwrap();
        assert_eq!(command, "add");
        assert_eq!(args, vec!["Alice", "1234567890"]);
        assert!(parse_input("   ").is_none());
    }

    #[test]
    fn test_parse_add() {
        let command: Command = "add Alice 1234567890".parse().unwrap();
        assert_eq!(
            command,
            Command::Add {
                name: "Alice".to_string(),
                phone: "1234567890".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_ignores_extra_arguments() {
        let command: Command = "add-birthday Alice 25.10.1990 extra".parse().unwrap();
        assert_eq!(
            command,
            Command::AddBirthday {
                name: "Alice".to_string(),
                birthday: "25.10.1990".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_missing_arguments() {
        let err = "change Alice 1111111111".parse::<Command>().unwrap_err();
        assert_eq!(
            err,
            CommandError::InsufficientArguments {
                command: "change",
                usage: "change <name> <old phone> <new phone>",
            }
        );

        assert!(matches!(
            "phone".parse::<Command>(),
            Err(CommandError::InsufficientArguments { command: "phone", .. })
        ));
    }

    #[test]
    fn test_parse_exit_aliases() {
        assert_eq!("close".parse::<Command>(), Ok(Command::Exit));
        assert_eq!("EXIT".parse::<Command>(), Ok(Command::Exit));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "dance now".parse::<Command>(),
            Err(CommandError::UnknownCommand("dance".to_string()))
        );
    }
}
