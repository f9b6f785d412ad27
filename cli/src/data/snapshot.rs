//! # Ostrich Snapshot
//!
//! File: cli/src/data/snapshot.rs
//!
//! ## Overview
//!
//! A `Snapshot` is the pair of integration and log lists that every read-only
//! view in Ostrich works from: the copilot, `ostrich status` and `ostrich logs`.
//!
//! Snapshots come from one of three places, in order of precedence:
//! 1. The `--data <PATH>` command-line flag
//! 2. The `[data] snapshot` configuration key
//! 3. The built-in fixture compiled into the binary
//!
//! ## File Format
//!
//! ```toml
//! [[integrations]]
//! id = "1"
//! name = "GitHub → Slack"
//! # ...
//!
//! [[logs]]
//! id = "1"
//! integration_id = "1"
//! timestamp = "2025-01-30T14:23:45Z"
//! # ...
//! ```
//!
use crate::common::fs::io;
use crate::core::config::Config;
use crate::core::error::{OstrichError, Result};
use crate::data::model::{Integration, IntegrationStatus, LogEntry, LogStatus};
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

const BUILTIN_SNAPSHOT: &str = include_str!("default_snapshot.toml");

/// Integrations and their logs, as read by the copilot and the dashboards.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    #[serde(default)]
    pub integrations: Vec<Integration>,
    /// Newest first.
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

/// The compact "real-time" projection of one integration.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub id: String,
    pub name: String,
    pub status: IntegrationStatus,
    pub last_sync: DateTime<Utc>,
    pub is_healthy: bool,
    pub consecutive_failures: u32,
}

/// Aggregates over every integration in a snapshot.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct PerformanceSummary {
    pub total_requests: u64,
    pub success_rate: f64,
    pub error_rate: f64,
    pub avg_response_time: f64,
    pub uptime: f64,
    pub active_integrations: usize,
    pub failing_integrations: usize,
}

impl Snapshot {
    /// The fixture shipped with the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_SNAPSHOT).context("Built-in snapshot is malformed")
    }

    /// Parses and checks a TOML snapshot.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let snapshot: Snapshot = toml::from_str(content)
            .map_err(|e| OstrichError::Snapshot(format!("invalid snapshot TOML: {}", e)))?;
        snapshot.check()?;
        Ok(snapshot)
    }

    /// Reads a snapshot file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading snapshot from: {}", path.display());
        let content = io::read_file_to_string(path)?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load snapshot file: {}", path.display()))
    }

    /// Picks the snapshot for a command: explicit path, then configuration, then built-in.
    pub fn resolve(explicit: Option<&Path>, config: &Config) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(configured) = &config.data.snapshot {
            let path = Path::new(configured);
            if path.is_dir() {
                return Err(OstrichError::Config(format!(
                    "Configured snapshot path '{}' is a directory, expected a TOML file.",
                    path.display()
                ))
                .into());
            }
            return Self::load(path);
        }
        debug!("No snapshot configured, using built-in data.");
        Self::builtin()
    }

    fn check(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for integration in &self.integrations {
            if !seen.insert(integration.id.as_str()) {
                return Err(OstrichError::Snapshot(format!(
                    "duplicate integration id '{}'",
                    integration.id
                ))
                .into());
            }
        }
        for log in &self.logs {
            if !seen.contains(log.integration_id.as_str()) {
                warn!(
                    "Log '{}' references unknown integration '{}'.",
                    log.id, log.integration_id
                );
            }
        }
        Ok(())
    }

    pub fn find_integration(&self, id: &str) -> Option<&Integration> {
        self.integrations.iter().find(|i| i.id == id)
    }

    /// Logs whose message, source or target contains `search` (case-insensitive)
    /// and whose status equals `status`, when given.
    pub fn filter_logs(&self, search: Option<&str>, status: Option<LogStatus>) -> Vec<&LogEntry> {
        let needle = search.map(str::to_lowercase).unwrap_or_default();
        self.logs
            .iter()
            .filter(|log| {
                needle.is_empty()
                    || log.message.to_lowercase().contains(&needle)
                    || log.source.to_lowercase().contains(&needle)
                    || log.target.to_lowercase().contains(&needle)
            })
            .filter(|log| status.map_or(true, |s| log.status == s))
            .collect()
    }

    pub fn status_lines(&self) -> Vec<StatusLine> {
        self.integrations
            .iter()
            .map(|i| StatusLine {
                id: i.id.clone(),
                name: i.name.clone(),
                status: i.status,
                last_sync: i.last_sync,
                is_healthy: i.health.is_healthy,
                consecutive_failures: i.health.consecutive_failures,
            })
            .collect()
    }

    pub fn performance_summary(&self) -> PerformanceSummary {
        let count = self.integrations.len();
        if count == 0 {
            return PerformanceSummary::default();
        }
        let successes = self
            .integrations
            .iter()
            .fold(0u64, |acc, i| acc.saturating_add(i.success_count));
        let errors = self
            .integrations
            .iter()
            .fold(0u64, |acc, i| acc.saturating_add(i.error_count));
        let total_requests = successes.saturating_add(errors);
        let (success_rate, error_rate) = if total_requests == 0 {
            (0.0, 0.0)
        } else {
            let rate = successes as f64 / total_requests as f64 * 100.0;
            (rate, 100.0 - rate)
        };
        PerformanceSummary {
            total_requests,
            success_rate,
            error_rate,
            avg_response_time: self
                .integrations
                .iter()
                .map(|i| i.avg_response_time)
                .sum::<f64>()
                / count as f64,
            uptime: self.integrations.iter().map(|i| i.uptime).sum::<f64>() / count as f64,
            active_integrations: self
                .integrations
                .iter()
                .filter(|i| i.status == IntegrationStatus::Active)
                .count(),
            failing_integrations: self
                .integrations
                .iter()
                .filter(|i| i.status == IntegrationStatus::Error)
                .count(),
        }
    }
}
