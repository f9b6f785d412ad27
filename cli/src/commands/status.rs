//! # Ostrich Status Handler
//!
//! File: cli/src/commands/status.rs
//!
//! ## Overview
//!
//! Implements `ostrich status`. Without arguments it prints the real-time
//! status table followed by the performance summary. With `--id` it prints
//! the detail view of one integration instead; an unknown id is an error.
//!
//! ## Usage
//!
//! ```bash
//! ostrich status
//! ostrich status --id 2
//! ```
//!
use clap::Parser;
use ostrich::common::ui;
use ostrich::core::error::{OstrichError, Result};
use std::path::Path;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(about = "Show integration status and performance")]
pub struct StatusArgs {
    /// Show the full detail of a single integration.
    #[arg(long)]
    id: Option<String>,
}

pub async fn handle_status(args: StatusArgs, data: Option<&Path>) -> Result<()> {
    debug!("Status args: {:?}", args);
    let (_cfg, snapshot) = super::load_snapshot(data)?;

    if let Some(id) = args.id {
        let integration = snapshot
            .find_integration(&id)
            .ok_or(OstrichError::IntegrationNotFound { id })?;
        print!("{}", ui::render_integration_detail(integration));
        return Ok(());
    }

    info!(
        "Showing status for {} integrations",
        snapshot.integrations.len()
    );
    print!("{}", ui::render_status_table(&snapshot.status_lines()));
    println!();
    print!(
        "{}",
        ui::render_performance_summary(&snapshot.performance_summary())
    );
    Ok(())
}
