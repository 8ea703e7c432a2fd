//! Contact Directory - a personal contact book with birthday reminders.
//!
//! Stores names, phone numbers and birthdays in memory, validates every field
//! on the way in, and reports which contacts have a birthday coming up,
//! moving weekend greetings to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (`Name`, `PhoneNumber`, `Birthday`)
//! - **models**: The contact `Record`
//! - **repositories**: The name-keyed `Directory`
//! - **birthdays**: Pure upcoming-birthday computation
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **assistant**: Line-based command prompt over the directory
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use contact_directory::{Directory, Name, Record};
//!
//! let mut directory = Directory::new();
//! let mut alice = Record::new(Name::new("Alice").unwrap());
//! alice.set_birthday("25.10.1990").unwrap();
//! directory.add(alice);
//!
//! let friday = NaiveDate::from_ymd_opt(2025, 10, 24).unwrap();
//! let upcoming = directory.upcoming_birthdays(friday, 7);
//! assert_eq!(upcoming[0].congratulation_date_string(), "27-10-2025");
//! ```

pub mod assistant;
pub mod birthdays;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;

pub use assistant::{Assistant, Command, Reply};
pub use birthdays::{LeapDayPolicy, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, DirectoryError};
pub use models::Record;
pub use repositories::Directory;
