//! Configuration management for the contact directory.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file. Every setting has a default, so an empty environment is valid.

use crate::birthdays::{LeapDayPolicy, DEFAULT_WINDOW_DAYS};
use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Largest accepted birthday window, one leap year.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Configuration for the contact directory assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Days ahead covered by the `birthdays` command (default: 7)
    pub window_days: u32,

    /// How 29 February birthdays are placed in common years (default: feb28)
    pub leap_day_policy: LeapDayPolicy,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: Days ahead to report birthdays (default: 7, max: 366)
    /// - `LEAP_DAY_POLICY`: `feb28` or `mar1` (default: `feb28`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let window_days = Self::parse_env_u32("BIRTHDAY_WINDOW_DAYS", DEFAULT_WINDOW_DAYS)?;
        if window_days > MAX_WINDOW_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be at most {}, got: {}", MAX_WINDOW_DAYS, window_days),
            });
        }

        let leap_day_policy = match env::var("LEAP_DAY_POLICY") {
            Ok(val) => val.parse().map_err(|reason| ConfigError::InvalidValue {
                var: "LEAP_DAY_POLICY".to_string(),
                reason,
            })?,
            Err(_) => LeapDayPolicy::default(),
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            window_days,
            leap_day_policy,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window_days: DEFAULT_WINDOW_DAYS,
            leap_day_policy: LeapDayPolicy::default(),
            log_level: "error".to_string(),
        }
    }
}
