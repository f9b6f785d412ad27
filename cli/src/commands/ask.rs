//! # Ostrich Ask Handler
//!
//! File: cli/src/commands/ask.rs
//!
//! ## Overview
//!
//! Implements `ostrich ask`: routes one query through the copilot and prints
//! the reply, either rendered for the terminal or as JSON.
//!
//! ## Usage
//!
//! ```bash
//! ostrich ask How is the system health?
//! ostrich ask --json "Show me recent errors"
//! ```
//!
use anyhow::Context;
use clap::Parser;
use ostrich::common::ui;
use ostrich::copilot::Copilot;
use ostrich::core::error::Result;
use std::path::Path;
use tracing::{debug, info};

/// Arguments for `ostrich ask`.
#[derive(Parser, Debug)]
#[command(about = "Ask the copilot one question about your integrations")]
pub struct AskArgs {
    /// The question. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    query: Vec<String>,

    /// Print the full response as JSON instead of formatted text.
    #[arg(long)]
    json: bool,
}

pub async fn handle_ask(args: AskArgs, data: Option<&Path>) -> Result<()> {
    debug!("Ask args: {:?}", args);
    let (cfg, snapshot) = super::load_snapshot(data)?;
    let query = args.query.join(" ");
    info!("Copilot query: {}", query);

    let copilot = Copilot::new(&snapshot.integrations, &snapshot.logs);
    let response = copilot.respond(&query);

    if args.json {
        let json =
            serde_json::to_string_pretty(&response).context("Failed to serialize response")?;
        println!("{}", json);
    } else {
        print!("{}", ui::render_response(&response, &cfg.chat.assistant_name));
    }
    Ok(())
}
