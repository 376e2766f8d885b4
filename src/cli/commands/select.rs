//! Selection commands: toggle modules and event types, list event types

use super::shared::{CommandStats, Workspace, open_workspace, print_json, selection_mark};
use crate::cli::args::{Args, SelectArgs};
use crate::config::OutputFormat;
use crate::Result;
use colored::*;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SelectionSummary<'a> {
    selected_modules: Vec<&'a str>,
    selected_event_types: Vec<&'a str>,
    changes: usize,
}

#[derive(Debug, Serialize)]
struct TypeRow<'a> {
    #[serde(rename = "type")]
    event_type: &'a str,
    selected: bool,
}

/// Apply bulk and per-code selection changes, persisting each immediately
///
/// Bulk changes run first, so `--none --module CI4100` leaves exactly that
/// module selected. Codes and types not present in the timetable are skipped.
pub async fn run_select(args: &Args, select_args: &SelectArgs) -> Result<CommandStats> {
    let mut workspace = open_workspace(args).await?;
    let (changes, toggled) = apply_selection(&mut workspace, select_args)?;

    let summary = SelectionSummary {
        selected_modules: workspace.selection.modules().iter().map(String::as_str).collect(),
        selected_event_types: workspace
            .selection
            .event_types()
            .iter()
            .map(String::as_str)
            .collect(),
        changes,
    };

    match workspace.output_format() {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Human => {
            for (name, now_selected) in &toggled {
                report_toggle(name, *now_selected);
            }
            println!(
                "{} modules and {} event types selected",
                summary.selected_modules.len().to_string().bright_white().bold(),
                summary.selected_event_types.len().to_string().bright_white().bold()
            );
        }
    }

    Ok(CommandStats {
        selection_changes: changes,
        ..workspace.stats()
    })
}

/// Returns the number of changes and each toggled name with its new state
fn apply_selection(
    workspace: &mut Workspace,
    select_args: &SelectArgs,
) -> Result<(usize, Vec<(String, bool)>)> {
    let Workspace {
        store,
        catalog,
        selection,
        ..
    } = workspace;
    let mut changes = 0;
    let mut toggled = Vec::new();

    if select_args.none {
        selection.deselect_all_modules(store)?;
        changes += 1;
    }

    if select_args.all {
        let level = select_args.level.clone().unwrap_or_default();
        let shown = catalog.listing(&level, Default::default());
        selection.select_modules(shown.iter().map(|module| module.code.as_str()), store)?;
        changes += 1;
    }

    for code in &select_args.modules {
        let code = code.trim().to_uppercase();
        if !catalog.contains(&code) {
            warn!("Unknown module code '{}'", code);
            eprintln!("{} {}", "Unknown module:".bright_yellow(), code);
            continue;
        }

        let now_selected = selection.toggle_module(&code, store)?;
        toggled.push((code, now_selected));
        changes += 1;
    }

    let available = catalog.event_types();
    for event_type in &select_args.event_types {
        let Some(known) = available
            .iter()
            .find(|known| known.eq_ignore_ascii_case(event_type.trim()))
        else {
            warn!("Unknown event type '{}'", event_type);
            eprintln!("{} {}", "Unknown event type:".bright_yellow(), event_type);
            continue;
        };

        let now_selected = selection.toggle_event_type(known, store)?;
        toggled.push((known.clone(), now_selected));
        changes += 1;
    }

    Ok((changes, toggled))
}

fn report_toggle(name: &str, now_selected: bool) {
    if now_selected {
        println!("{} {}", "+".bright_green().bold(), name);
    } else {
        println!("{} {}", "-".bright_red().bold(), name);
    }
}

/// List every event type in the timetable with its selection state
pub async fn run_types(args: &Args) -> Result<CommandStats> {
    let workspace = open_workspace(args).await?;
    let available = workspace.catalog.event_types();

    let rows: Vec<TypeRow> = available
        .iter()
        .map(|event_type| TypeRow {
            event_type,
            selected: workspace.selection.is_type_selected(event_type),
        })
        .collect();

    match workspace.output_format() {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Human => {
            for row in &rows {
                println!("{} {}", selection_mark(row.selected), row.event_type);
            }
        }
    }

    Ok(CommandStats {
        rows_shown: rows.len(),
        ..workspace.stats()
    })
}
