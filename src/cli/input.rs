//! User input utilities for interactive CLI prompts

use anyhow::{Context, Result};
use colored::*;
use std::io::{self, BufRead, Write};

/// Ask for a username, offering the last one used as the default
///
/// An empty answer with no default yields an empty string; rejecting it is
/// left to the session logic so the message is the same everywhere.
pub fn prompt_username(last_username: Option<&str>) -> Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_username(&mut stdin.lock(), &mut stdout.lock(), last_username)
}

fn read_username<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    last_username: Option<&str>,
) -> Result<String> {
    let prompt = match last_username {
        Some(last) => write!(
            writer,
            "{} {} ",
            "Username".bright_white().bold(),
            format!("[{}]:", last).bright_black()
        ),
        None => write!(writer, "{} ", "Username:".bright_white().bold()),
    };
    prompt.context("Failed to write prompt")?;
    writer.flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    reader
        .read_line(&mut input)
        .context("Failed to read username")?;

    let input = input.trim();
    if input.is_empty() {
        return Ok(last_username.unwrap_or_default().to_string());
    }

    Ok(input.to_string())
}
