//! Room directions and map link commands
//!
//! Neither command reads the timetable, so neither needs a session.

use super::shared::{CommandStats, load_configuration, print_json};
use crate::app::services::map_link::map_url;
use crate::app::services::room_directions::{RoomLocation, room_directions};
use crate::cli::args::{Args, DirectionsArgs, MapUrlArgs};
use crate::config::OutputFormat;
use crate::Result;
use colored::*;

/// Print walking directions for a room code
pub fn run_directions(args: &Args, directions_args: &DirectionsArgs) -> Result<CommandStats> {
    let config = load_configuration(args)?;
    let code = directions_args.code.as_str();
    let sentence = room_directions(code);

    match config.display.output_format {
        OutputFormat::Json => {
            let location = RoomLocation::parse(code);
            print_json(&serde_json::json!({
                "code": code.trim().to_uppercase(),
                "valid": location.is_some(),
                "building": location.as_ref().map(|l| l.building.as_str()),
                "campus": location.as_ref().and_then(|l| l.campus.as_deref()),
                "floor": location.as_ref().map(|l| l.floor.as_str()),
                "room": location.as_ref().map(|l| l.room.as_str()),
                "directions": sentence,
            }))?;
        }
        OutputFormat::Human if RoomLocation::parse(code).is_some() => {
            println!("{}", sentence.bright_white());
        }
        OutputFormat::Human => println!("{}", sentence.bright_yellow()),
    }

    Ok(CommandStats {
        rows_shown: 1,
        ..CommandStats::default()
    })
}

/// Print a map search URL for a location
pub fn run_map_url(args: &Args, map_args: &MapUrlArgs) -> Result<CommandStats> {
    let config = load_configuration(args)?;
    let url = map_url(&map_args.location);

    match config.display.output_format {
        OutputFormat::Json => print_json(&serde_json::json!({
            "location": map_args.location,
            "url": url,
        }))?,
        OutputFormat::Human => println!("{}", url),
    }

    Ok(CommandStats {
        rows_shown: 1,
        ..CommandStats::default()
    })
}
