//! Contact Directory - Main entry point
//!
//! Runs the assistant prompt on stdin/stdout. Logs go to stderr so they never
//! interleave with replies.

use anyhow::Result;
use contact_directory::assistant::{self, Assistant};
use contact_directory::Config;
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so LOG_LEVEL can seed the filter
    let config = Config::from_env();
    let log_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        window_days = config.window_days,
        leap_day_policy = ?config.leap_day_policy,
        "Starting contact directory assistant"
    );

    let mut assistant = Assistant::new(&config);
    let stdin = io::stdin();
    assistant::run_session(&mut assistant, stdin.lock(), io::stdout(), || {
        chrono::Local::now().date_naive()
    })?;

    info!("Assistant session finished");
    Ok(())
}
