//! # Ostrich Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the `ostrich` CLI.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handler
//!
//! ## Examples
//!
//! ```bash
//! # Ask the copilot a question
//! ostrich ask "How is the system health?"
//!
//! # Work on a snapshot file with debug logging
//! ostrich -vv --data ./snapshot.toml status
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level (`RUST_LOG` takes precedence)
//! 3. Route to the command handler
//! 4. Print any error and exit with status 1
//!
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

/// Top-level command-line arguments.
#[derive(Parser, Debug)]
#[command(
    name = "ostrich",
    about = "Ostrich: integration monitor with a keyword-driven copilot",
    long_about = "Inspect integration status and logs, ask the copilot about health, errors\n\
                  and performance, and watch simulated live updates.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Snapshot file to read instead of the configured or built-in data.
    #[arg(long, global = true, env = "OSTRICH_DATA")]
    data: Option<PathBuf>,
}

#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    #[command(alias = "s")]
    Status(commands::status::StatusArgs),
    #[command(alias = "l")]
    Logs(commands::logs::LogsArgs),
    Optimize(commands::optimize::OptimizeArgs),
    Simulate(commands::simulate::SimulateArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let data = cli.data.as_deref();
    let command_result = match cli.command {
        Commands::Ask(args) => commands::ask::handle_ask(args, data).await,
        Commands::Chat(args) => commands::chat::handle_chat(args, data).await,
        Commands::Status(args) => commands::status::handle_status(args, data).await,
        Commands::Logs(args) => commands::logs::handle_logs(args, data).await,
        Commands::Optimize(args) => commands::optimize::handle_optimize(args, data).await,
        Commands::Simulate(args) => commands::simulate::handle_simulate(args, data).await,
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
