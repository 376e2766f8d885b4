//! Module listing command

use super::shared::{CommandStats, open_workspace, print_json, selection_mark};
use crate::cli::args::{Args, ModulesArgs};
use crate::config::OutputFormat;
use crate::Result;
use colored::*;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ModuleRow<'a> {
    code: &'a str,
    name: &'a str,
    event_count: usize,
    selected: bool,
}

/// List modules at a level, sorted, with their selection state
pub async fn run_modules(args: &Args, modules_args: &ModulesArgs) -> Result<CommandStats> {
    let workspace = open_workspace(args).await?;
    let level = modules_args.level.clone().unwrap_or_default();

    let rows: Vec<ModuleRow> = workspace
        .catalog
        .listing(&level, modules_args.sort)
        .into_iter()
        .map(|module| ModuleRow {
            code: &module.code,
            name: &module.name,
            event_count: module.event_count(),
            selected: workspace.selection.is_module_selected(&module.code),
        })
        .collect();

    match workspace.output_format() {
        OutputFormat::Json => print_json(&rows)?,
        OutputFormat::Human => {
            if rows.is_empty() {
                println!("{}", "No modules found".bright_yellow());
            }
            for row in &rows {
                println!(
                    "{} {} {} {}",
                    selection_mark(row.selected),
                    format!("{:<8}", row.code).bright_cyan().bold(),
                    row.name,
                    format!("({} events)", row.event_count).bright_black()
                );
            }
        }
    }

    Ok(CommandStats {
        rows_shown: rows.len(),
        ..workspace.stats()
    })
}
