//! Login and logout commands

use super::shared::{CommandStats, load_configuration, open_store, print_json};
use crate::app::services::session;
use crate::cli::args::{Args, LoginArgs};
use crate::cli::input::prompt_username;
use crate::config::OutputFormat;
use crate::{Error, Result};
use colored::*;

/// Sign in with the given username, prompting when none was passed
pub fn run_login(args: &Args, login_args: &LoginArgs) -> Result<CommandStats> {
    let config = load_configuration(args)?;
    let mut store = open_store(&config)?;

    let username = match &login_args.username {
        Some(username) => username.clone(),
        None => {
            let last = session::last_username(&store)?;
            prompt_username(last.as_deref())
                .map_err(|e| Error::authentication(format!("{:#}", e)))?
        }
    };

    let user = session::login(&mut store, &username)?;

    match config.display.output_format {
        OutputFormat::Json => print_json(&user)?,
        OutputFormat::Human => println!(
            "{} {}",
            "Signed in as".bright_green().bold(),
            user.username.bright_white().bold()
        ),
    }

    Ok(CommandStats {
        rows_shown: 1,
        ..CommandStats::default()
    })
}

/// Sign out
pub fn run_logout(args: &Args) -> Result<CommandStats> {
    let config = load_configuration(args)?;
    let mut store = open_store(&config)?;

    let was_signed_in = session::current_user(&store)?.is_some();
    session::logout(&mut store)?;

    match config.display.output_format {
        OutputFormat::Json => print_json(&serde_json::json!({ "signedOut": was_signed_in }))?,
        OutputFormat::Human if was_signed_in => println!("{}", "Signed out".bright_green()),
        OutputFormat::Human => println!("{}", "Not signed in".bright_black()),
    }

    Ok(CommandStats::default())
}
