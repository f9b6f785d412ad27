//! # Ostrich Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates all subcommands of the `ostrich` CLI. Each
//! subcommand lives in its own file and exposes an `Args` struct parsed by
//! Clap plus a `handle_*` function that `main.rs` routes to.
//!
//! ## Commands
//!
//! - `ask`: one copilot answer for a query
//! - `chat`: interactive copilot session
//! - `status`: integration status table or one integration's detail
//! - `logs`: filtered log listing
//! - `optimize`: configuration suggestions
//! - `simulate`: live counter updates on a ticker
//!
//! Every handler resolves its snapshot the same way, through `load_snapshot`:
//! the global `--data` path, then the configured snapshot, then built-in data.
//!
use anyhow::Context;
use ostrich::core::config::{self, Config};
use ostrich::core::error::Result;
use ostrich::data::Snapshot;
use std::path::Path;
use tracing::debug;

/// Implements `ostrich ask` (single copilot query).
pub mod ask;
/// Implements `ostrich chat` (interactive copilot REPL).
pub mod chat;
/// Implements `ostrich logs` (search and filter log entries).
pub mod logs;
/// Implements `ostrich optimize` (configuration suggestions).
pub mod optimize;
/// Implements `ostrich simulate` (randomized live updates).
pub mod simulate;
/// Implements `ostrich status` (status table, summary and detail view).
pub mod status;

/// Loads the configuration and the snapshot a command should work on.
pub fn load_snapshot(data: Option<&Path>) -> Result<(Config, Snapshot)> {
    let cfg = config::load_config().context("Failed to load Ostrich configuration")?;
    let snapshot = Snapshot::resolve(data, &cfg)?;
    debug!(
        integrations = snapshot.integrations.len(),
        logs = snapshot.logs.len(),
        "Snapshot ready"
    );
    Ok((cfg, snapshot))
}
