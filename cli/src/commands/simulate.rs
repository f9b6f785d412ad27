//! # Ostrich Simulate Handler
//!
//! File: cli/src/commands/simulate.rs
//!
//! ## Overview
//!
//! Implements `ostrich simulate`, the terminal version of the dashboard's live
//! view. On every tick of a `tokio::time::interval` the integration counters
//! receive random increments (`data::simulation::tick`) and the status table
//! is printed again. The copilot is not involved.
//!
//! `--ticks 0` keeps running until Ctrl+C (or SIGTERM on Unix).
//!
//! ```bash
//! ostrich simulate --ticks 5 --interval-ms 500 --seed 7
//! ```
//!
use clap::Parser;
use ostrich::common::ui;
use ostrich::core::error::Result;
use ostrich::data::simulation::{self, TickParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(about = "Simulate live counter updates and print the status table")]
pub struct SimulateArgs {
    /// Number of ticks to run; 0 runs until interrupted.
    #[arg(long, default_value_t = 3)]
    ticks: u64,

    /// Milliseconds between ticks. Defaults to `simulation.interval_ms` from the configuration.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    interval_ms: Option<u64>,

    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

pub async fn handle_simulate(args: SimulateArgs, data: Option<&Path>) -> Result<()> {
    debug!("Simulate args: {:?}", args);
    let (cfg, mut snapshot) = super::load_snapshot(data)?;
    let interval_ms = args.interval_ms.unwrap_or(cfg.simulation.interval_ms);
    let params = TickParams::from(&cfg.simulation);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    info!(
        "Simulating {} ticks every {} ms",
        if args.ticks == 0 {
            "unbounded".to_string()
        } else {
            args.ticks.to_string()
        },
        interval_ms
    );

    let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    let mut completed = 0u64;
    while args.ticks == 0 || completed < args.ticks {
        tokio::select! {
            _ = interval.tick() => {}
            _ = &mut shutdown => {
                println!("Interrupted after {} ticks.", completed);
                break;
            }
        }
        simulation::tick(
            &mut snapshot.integrations,
            &mut rng,
            chrono::Utc::now(),
            params,
        );
        completed += 1;
        println!("--- Tick {} ---", completed);
        print!("{}", ui::render_status_table(&snapshot.status_lines()));
    }

    println!();
    print!(
        "{}",
        ui::render_performance_summary(&snapshot.performance_summary())
    );
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix. A handler that cannot be
/// installed leaves its branch pending forever.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, stopping simulation..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, stopping simulation...");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
