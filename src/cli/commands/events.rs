//! Visible events with progress badges

use super::shared::{CommandStats, open_workspace, print_json};
use crate::app::models::{EventStatus, EventStatusInfo, ScheduleItem};
use crate::app::services::event_progress::local_now;
use crate::app::services::map_link::map_url;
use crate::cli::args::{Args, EventsArgs};
use crate::config::OutputFormat;
use crate::Result;
use chrono::{NaiveDate, NaiveDateTime};
use colored::*;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EventRow<'a> {
    #[serde(flatten)]
    item: &'a ScheduleItem,
    status: EventStatus,
    status_label: String,
    building: String,
    map_url: String,
}

/// Selected events, optionally limited to one day, in start order
pub fn events_for_day<'a>(
    visible: Vec<&'a ScheduleItem>,
    day: Option<NaiveDate>,
) -> Vec<&'a ScheduleItem> {
    let mut events: Vec<&ScheduleItem> = visible
        .into_iter()
        .filter(|item| day.is_none_or(|date| item.starts_on(date)))
        .collect();
    events.sort_by_key(|item| item.start);
    events
}

/// Show the events of the selected modules and types
pub async fn run_events(args: &Args, events_args: &EventsArgs) -> Result<CommandStats> {
    let workspace = open_workspace(args).await?;
    // One clock read so every badge is computed against the same instant
    let now = local_now();
    let day = events_args.selected_date(now.date());

    let events = events_for_day(
        workspace.selection.visible_events(workspace.catalog.modules()),
        day,
    );

    match workspace.output_format() {
        OutputFormat::Json => {
            let rows: Vec<EventRow> = events
                .iter()
                .map(|&item| {
                    let info = item.progress_at(now);
                    EventRow {
                        item,
                        status: info.status,
                        status_label: info.label,
                        building: item.building_key(),
                        map_url: map_url(&item.location),
                    }
                })
                .collect();
            print_json(&rows)?;
        }
        OutputFormat::Human => print_events(&events, now),
    }

    Ok(CommandStats {
        rows_shown: events.len(),
        ..workspace.stats()
    })
}

fn print_events(events: &[&ScheduleItem], now: NaiveDateTime) {
    if events.is_empty() {
        println!("{}", "No events for the current selection".bright_yellow());
        return;
    }

    let mut current_day = None;
    for item in events {
        let day = item.start.date();
        if current_day != Some(day) {
            println!("\n{}", day.format("%A %-d %B %Y").to_string().bright_green().bold());
            current_day = Some(day);
        }

        let lecturer = item
            .lecturer
            .as_deref()
            .map(|name| format!(" - {}", name))
            .unwrap_or_default();

        println!(
            "  {}-{}  {} {}  {} {}{} {}",
            item.start.format("%H:%M"),
            item.end.format("%H:%M"),
            format!("{:<8}", item.module_code).bright_cyan().bold(),
            item.title,
            format!("[{}]", item.event_type).bright_black(),
            item.location.bright_white(),
            lecturer,
            status_badge(&item.progress_at(now))
        );
    }
}

fn status_badge(info: &EventStatusInfo) -> ColoredString {
    match info.status {
        EventStatus::Starting => info.label.bright_green().bold(),
        EventStatus::Ongoing => info.label.bright_blue().bold(),
        EventStatus::Finished => info.label.bright_yellow().bold(),
        EventStatus::None => "".normal(),
    }
}
