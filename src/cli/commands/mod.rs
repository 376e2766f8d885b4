//! Command implementations for the valdi CLI
//!
//! Each group of subcommands lives in its own module:
//! - `session`: login and logout
//! - `modules`: module listing
//! - `select`: selection toggles and the event-type listing
//! - `events`: visible events with progress badges
//! - `directions`: room directions and map links

pub mod directions;
pub mod events;
pub mod modules;
pub mod select;
pub mod session;
pub mod shared;

pub use shared::CommandStats;

use crate::cli::args::{Args, Commands};
use crate::{Error, Result};
use std::time::Instant;

/// Main command runner
///
/// Logging must already be set up by the caller.
pub async fn run(args: Args) -> Result<CommandStats> {
    let Some(command) = args.command.clone() else {
        return Err(Error::configuration("No command given"));
    };

    let start = Instant::now();
    let mut stats = match &command {
        Commands::Login(login_args) => session::run_login(&args, login_args),
        Commands::Logout => session::run_logout(&args),
        Commands::Modules(modules_args) => modules::run_modules(&args, modules_args).await,
        Commands::Select(select_args) => select::run_select(&args, select_args).await,
        Commands::Types => select::run_types(&args).await,
        Commands::Events(events_args) => events::run_events(&args, events_args).await,
        Commands::Directions(directions_args) => directions::run_directions(&args, directions_args),
        Commands::MapUrl(map_args) => directions::run_map_url(&args, map_args),
    }?;

    stats.elapsed = start.elapsed();
    Ok(stats)
}
