//! Command-line argument definitions for the valdi timetable viewer
//!
//! This module defines the complete CLI interface using the clap derive API.
//! Global flags override the layered configuration; each subcommand maps to
//! one page of the timetable viewer.

use crate::app::services::module_aggregator::{LevelFilter, ModuleSort};
use crate::config::{Config, OutputFormat};
use crate::{Error, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the timetable viewer
///
/// Loads university timetable CSV exports, lets you pick modules and event
/// types, and shows what is on with live progress badges.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "valdi",
    version,
    about = "Browse and filter university timetable exports from the terminal",
    long_about = "Loads the per-level timetable CSV exports, groups every session by module, \
                  and shows the events of the modules and event types you select. Selections \
                  are remembered between runs. Also resolves room codes into walking directions."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// <config dir>/valdi/config.toml and falls back to defaults.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Base directory for relative timetable document paths
    #[arg(
        long = "data-root",
        value_name = "DIR",
        global = true,
        help = "Base directory for relative timetable documents"
    )]
    pub data_root: Option<PathBuf>,

    /// File holding the session and remembered selections
    #[arg(
        long = "state-file",
        value_name = "FILE",
        global = true,
        help = "JSON file for the session and remembered selections"
    )]
    pub state_file: Option<PathBuf>,

    /// Output format for command results
    #[arg(
        long = "format",
        value_enum,
        global = true,
        help = "Output format for results [default: human]"
    )]
    pub output_format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long = "no-color", global = true, help = "Disable colored output")]
    pub no_color: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings and hides the spinner.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Sign in (prompts for a username when none is given)
    Login(LoginArgs),
    /// Sign out
    Logout,
    /// List modules with their selection state
    Modules(ModulesArgs),
    /// Toggle modules and event types; changes are saved immediately
    Select(SelectArgs),
    /// List event types with their selection state
    Types,
    /// Show the events of the selected modules and event types
    Events(EventsArgs),
    /// Explain how to find a room from its code
    Directions(DirectionsArgs),
    /// Print a map search link for a location code
    MapUrl(MapUrlArgs),
}

/// Arguments for the login command
#[derive(Debug, Clone, Parser)]
pub struct LoginArgs {
    /// Username to sign in with
    #[arg(value_name = "USERNAME")]
    pub username: Option<String>,
}

/// Arguments for the modules command
#[derive(Debug, Clone, Parser)]
pub struct ModulesArgs {
    /// Only show modules whose code starts with this prefix (CI4, CI5, CI6 or all)
    #[arg(short = 'l', long = "level", value_name = "LEVEL")]
    pub level: Option<LevelFilter>,

    /// Sort order
    #[arg(short = 's', long = "sort", value_enum, default_value = "name")]
    pub sort: ModuleSort,
}

/// Arguments for the select command
#[derive(Debug, Clone, Parser)]
pub struct SelectArgs {
    /// Toggle a module by code (repeatable)
    #[arg(short = 'm', long = "module", value_name = "CODE")]
    pub modules: Vec<String>,

    /// Toggle an event type (repeatable)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub event_types: Vec<String>,

    /// Select every module shown at the chosen level
    #[arg(long = "all", conflicts_with = "none")]
    pub all: bool,

    /// Deselect every module
    #[arg(long = "none")]
    pub none: bool,

    /// Level used by --all (CI4, CI5, CI6 or all)
    #[arg(short = 'l', long = "level", value_name = "LEVEL", requires = "all")]
    pub level: Option<LevelFilter>,
}

/// Arguments for the events command
#[derive(Debug, Clone, Parser)]
pub struct EventsArgs {
    /// Only show events starting on this day (YYYY-MM-DD)
    #[arg(short = 'd', long = "date", value_name = "DATE", conflicts_with = "today")]
    pub date: Option<NaiveDate>,

    /// Only show events starting today
    #[arg(long = "today")]
    pub today: bool,
}

/// Arguments for the directions command
#[derive(Debug, Clone, Parser)]
pub struct DirectionsArgs {
    /// Room code such as SB2025 or PR.JG.1003
    #[arg(value_name = "CODE")]
    pub code: String,
}

/// Arguments for the map-url command
#[derive(Debug, Clone, Parser)]
pub struct MapUrlArgs {
    /// Location code as shown on an event
    #[arg(value_name = "LOCATION")]
    pub location: String,
}

impl Args {
    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show the loading spinner (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate global arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        if let Some(data_root) = &self.data_root {
            if !data_root.is_dir() {
                return Err(Error::configuration(format!(
                    "Data root is not a directory: {}",
                    data_root.display()
                )));
            }
        }

        if let Some(state_file) = &self.state_file {
            if state_file.is_dir() {
                return Err(Error::configuration(format!(
                    "State file is a directory: {}",
                    state_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Apply command-line overrides on top of the layered configuration
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(data_root) = &self.data_root {
            config.sources.data_root = data_root.clone();
        }

        if let Some(state_file) = &self.state_file {
            config.storage.state_file = state_file.clone();
        }

        if let Some(output_format) = self.output_format {
            config.display.output_format = output_format;
        }

        if self.no_color {
            config.display.color = false;
        }
    }
}

impl EventsArgs {
    /// Day to filter on, if any
    pub fn selected_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        if self.today { Some(today) } else { self.date }
    }
}
