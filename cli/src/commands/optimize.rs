//! # Ostrich Optimize Handler
//!
//! File: cli/src/commands/optimize.rs
//!
//! Implements `ostrich optimize`, printing the copilot's configuration
//! suggestions for the current snapshot.
//!
use clap::Parser;
use ostrich::common::ui;
use ostrich::copilot::Copilot;
use ostrich::core::error::Result;
use std::path::Path;

#[derive(Parser, Debug)]
#[command(about = "Suggest configuration improvements")]
pub struct OptimizeArgs {}

pub async fn handle_optimize(_args: OptimizeArgs, data: Option<&Path>) -> Result<()> {
    let (cfg, snapshot) = super::load_snapshot(data)?;
    let copilot = Copilot::new(&snapshot.integrations, &snapshot.logs);
    print!(
        "{}",
        ui::render_response(&copilot.suggest_optimizations(), &cfg.chat.assistant_name)
    );
    Ok(())
}
