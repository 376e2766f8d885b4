//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::app::models::User;
use crate::app::services::module_aggregator::ModuleCatalog;
use crate::app::services::selection::{JsonFileStore, SelectionState};
use crate::app::services::session;
use crate::app::services::timetable_service::TimetableService;
use crate::cli::args::Args;
use crate::config::{Config, OutputFormat};
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::time::Instant;
use tracing::{debug, info};

/// Command statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct CommandStats {
    /// Number of modules loaded from the timetable documents
    pub modules_loaded: usize,
    /// Number of schedule items loaded
    pub items_loaded: usize,
    /// Number of events or rows printed
    pub rows_shown: usize,
    /// Number of persisted selection changes
    pub selection_changes: usize,
    /// Total command time
    pub elapsed: std::time::Duration,
}

/// Everything a timetable-reading command needs
pub struct Workspace {
    pub config: Config,
    pub store: JsonFileStore,
    pub user: User,
    pub catalog: ModuleCatalog,
    pub selection: SelectionState,
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("valdi_timetable={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load, override and validate configuration
pub fn load_configuration(args: &Args) -> Result<Config> {
    args.validate()?;

    let mut config = Config::load_layered(args.config_file.as_deref())?;
    args.apply_overrides(&mut config);
    config.validate()?;

    colored::control::set_override(config.display.color);
    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Open the persisted key-value state
pub fn open_store(config: &Config) -> Result<JsonFileStore> {
    JsonFileStore::open(config.storage.state_file.clone())
}

/// Create a simple spinner for indeterminate operations
pub fn create_spinner(message: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Fetch and aggregate every configured timetable document
pub async fn load_catalog(config: &Config, show_progress: bool) -> Result<ModuleCatalog> {
    let service = TimetableService::from_config(config)?;
    let spinner = create_spinner(
        &format!("Loading {} timetable documents...", service.documents().len()),
        show_progress,
    );

    let catalog = service.load_catalog().await;
    spinner.finish_and_clear();

    Ok(catalog)
}

/// Open the workspace of a signed-in user: session, modules and selection
pub async fn open_workspace(args: &Args) -> Result<Workspace> {
    let config = load_configuration(args)?;
    let store = open_store(&config)?;
    let user = session::require_user(&store)?;

    let start = Instant::now();
    let catalog = load_catalog(&config, args.show_progress()).await?;
    info!(
        "Timetable ready for {} in {:.2}s",
        user.username,
        start.elapsed().as_secs_f64()
    );

    let selection = SelectionState::load(&store, &catalog)?;

    Ok(Workspace {
        config,
        store,
        user,
        catalog,
        selection,
    })
}

impl Workspace {
    pub fn output_format(&self) -> OutputFormat {
        self.config.display.output_format
    }

    pub fn stats(&self) -> CommandStats {
        CommandStats {
            modules_loaded: self.catalog.len(),
            items_loaded: self.catalog.item_count(),
            ..CommandStats::default()
        }
    }
}

/// Print a value as pretty JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Selection checkbox for human output
pub fn selection_mark(selected: bool) -> &'static str {
    if selected { "[x]" } else { "[ ]" }
}
