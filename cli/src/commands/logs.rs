//! # Ostrich Logs Handler
//!
//! File: cli/src/commands/logs.rs
//!
//! ## Overview
//!
//! Implements `ostrich logs`: lists log entries, newest first, optionally
//! narrowed by a case-insensitive search over message, source and target, and
//! by status. Failed entries with a known error code get a remediation hint.
//!
//! ```bash
//! ostrich logs --status failed
//! ostrich logs --search github
//! ```
//!
use clap::Parser;
use ostrich::common::ui;
use ostrich::core::error::Result;
use ostrich::data::LogStatus;
use std::path::Path;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(about = "List and filter integration log entries")]
pub struct LogsArgs {
    /// Only entries whose message, source or target contains this text.
    #[arg(short, long)]
    search: Option<String>,

    /// Only entries with this status (success, failed, warning, pending).
    #[arg(long)]
    status: Option<LogStatus>,
}

pub async fn handle_logs(args: LogsArgs, data: Option<&Path>) -> Result<()> {
    debug!("Logs args: {:?}", args);
    let (_cfg, snapshot) = super::load_snapshot(data)?;
    let matching = snapshot.filter_logs(args.search.as_deref(), args.status);
    debug!(
        "{} of {} log entries match",
        matching.len(),
        snapshot.logs.len()
    );
    print!("{}", ui::render_logs(&matching));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_args_parse_status() {
        let args = LogsArgs::try_parse_from(["logs", "--status", "failed", "-s", "jira"]).unwrap();
        assert_eq!(args.status, Some(LogStatus::Failed));
        assert_eq!(args.search.as_deref(), Some("jira"));
    }

    #[test]
    fn test_logs_args_reject_unknown_status() {
        assert!(LogsArgs::try_parse_from(["logs", "--status", "exploded"]).is_err());
    }
}
