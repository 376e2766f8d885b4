use clap::Parser;
use std::process;
use valdi_timetable::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    if let Err(error) = commands::shared::setup_logging(&args) {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(async {
        // Fetches cannot be aborted individually; Ctrl+C abandons the whole command
        let shutdown_signal = async {
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        };

        tokio::select! {
            result = commands::run(args) => result,
            _ = shutdown_signal => {
                eprintln!("\nReceived CTRL+C, stopping...");
                Err(valdi_timetable::Error::processing_interrupted(
                    "Interrupted by user",
                ))
            }
        }
    });

    match result {
        Ok(stats) => {
            tracing::debug!("Command finished in {:.2?}: {:?}", stats.elapsed, stats);
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Valdi - University Timetable Viewer");
    println!("===================================");
    println!();
    println!("Browse the per-level timetable exports, pick your modules and event");
    println!("types, and see what is on right now.");
    println!();
    println!("USAGE:");
    println!("    valdi <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    login        Sign in (prompts for a username)");
    println!("    logout       Sign out");
    println!("    modules      List modules with their selection state");
    println!("    select       Toggle modules and event types");
    println!("    types        List event types with their selection state");
    println!("    events       Show events for the current selection");
    println!("    directions   Explain how to find a room from its code");
    println!("    map-url      Print a map search link for a location code");
    println!("    help         Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Sign in and pick level 5 modules:");
    println!("    valdi login k1234567");
    println!("    valdi select --none");
    println!("    valdi select --all --level CI5");
    println!();
    println!("    # Hide practicals and show today's events:");
    println!("    valdi select --type Practical");
    println!("    valdi events --today");
    println!();
    println!("    # Find a room:");
    println!("    valdi directions PR.JG.1003");
    println!();
    println!("For detailed help on any command, use:");
    println!("    valdi <COMMAND> --help");
}
