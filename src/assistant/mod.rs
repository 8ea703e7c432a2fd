//! Line-based assistant prompt over the contact directory.
//!
//! The prompt reads one command per line, runs it against an in-memory
//! [`Directory`](crate::repositories::Directory) and writes a reply. It is a
//! thin layer: all validation and birthday logic lives in the core modules.

pub mod command;
pub mod handlers;

pub use command::{parse_input, Command};
pub use handlers::{error_message, Assistant, Reply};

use chrono::NaiveDate;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Greeting printed when a session starts.
pub const WELCOME: &str = "Welcome to the assistant bot!";

/// Prompt printed before each command is read.
pub const PROMPT: &str = "Enter a command: ";

/// Run an interactive session until `exit`/`close` or end of input.
///
/// Only I/O failures end the session early; bad input of any kind, including
/// lines that are not valid UTF-8, gets an error reply.
///
/// `today` is called once per command so a session left open past midnight
/// reports birthdays against the new date.
pub fn run_session<R, W, F>(
    assistant: &mut Assistant,
    mut input: R,
    mut output: W,
    today: F,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    writeln!(output, "{}", WELCOME)?;

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf)? == 0 {
            info!("Input closed, ending session");
            writeln!(output)?;
            return Ok(());
        }

        // Undecodable bytes become U+FFFD and fail validation like any other bad input.
        let line = String::from_utf8_lossy(&buf);

        if line.trim().is_empty() {
            continue;
        }

        match assistant.handle_line(&line, today()) {
            Reply::Message(text) => writeln!(output, "{}", text)?,
            Reply::Exit(text) => {
                writeln!(output, "{}", text)?;
                return Ok(());
            }
        }
    }
}
