//! # Ostrich Data Model
//!
//! File: cli/src/data/model.rs
//!
//! ## Overview
//!
//! Plain data records describing monitored integrations and the events they
//! log. All of them (de)serialize with `serde` so a snapshot can be read from
//! TOML; timestamps are RFC 3339 strings stored as `DateTime<Utc>`.
//!
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of an integration.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationStatus {
    Active,
    Error,
    Warning,
    Paused,
    Configuring,
}

impl fmt::Display for IntegrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IntegrationStatus::Active => "active",
            IntegrationStatus::Error => "error",
            IntegrationStatus::Warning => "warning",
            IntegrationStatus::Paused => "paused",
            IntegrationStatus::Configuring => "configuring",
        };
        f.write_str(s)
    }
}

/// Connection settings of an integration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct IntegrationSettings {
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    pub retry_attempts: u32,
    /// Request timeout in milliseconds.
    pub timeout: u64,
    /// Requests per minute.
    pub rate_limit: u32,
}

impl IntegrationSettings {
    /// The API key with everything but the last four characters masked.
    pub fn masked_api_key(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| {
            let chars: Vec<char> = key.chars().collect();
            let visible = chars.len().saturating_sub(4);
            chars
                .iter()
                .enumerate()
                .map(|(i, c)| if i < visible { '*' } else { *c })
                .collect()
        })
    }
}

/// Health bookkeeping for an integration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct HealthRecord {
    pub is_healthy: bool,
    pub last_health_check: DateTime<Utc>,
    pub consecutive_failures: u32,
    #[serde(default)]
    pub next_retry: Option<DateTime<Utc>>,
}

/// A configured source→target pipeline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Integration {
    pub id: String,
    pub name: String,
    pub source: String,
    pub target: String,
    pub status: IntegrationStatus,
    pub last_sync: DateTime<Utc>,
    pub success_count: u64,
    pub error_count: u64,
    /// Seconds.
    pub avg_response_time: f64,
    /// Percent.
    pub uptime: f64,
    pub config: IntegrationSettings,
    pub health: HealthRecord,
}

impl Integration {
    /// Percentage of successful runs, or 0 when the integration never ran.
    pub fn success_rate(&self) -> f64 {
        let total = self.success_count.saturating_add(self.error_count);
        if total == 0 {
            return 0.0;
        }
        self.success_count as f64 / total as f64 * 100.0
    }
}

/// Outcome recorded by a log entry.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogStatus {
    Success,
    Failed,
    Warning,
    Pending,
}

impl fmt::Display for LogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogStatus::Success => "success",
            LogStatus::Failed => "failed",
            LogStatus::Warning => "warning",
            LogStatus::Pending => "pending",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for LogStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "success" => Ok(LogStatus::Success),
            "failed" => Ok(LogStatus::Failed),
            "warning" => Ok(LogStatus::Warning),
            "pending" => Ok(LogStatus::Pending),
            other => Err(format!(
                "unknown log status '{}' (expected success, failed, warning or pending)",
                other
            )),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct LogMetadata {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub headers: Option<serde_json::Value>,
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
}

/// One recorded event of an integration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct LogEntry {
    pub id: String,
    pub integration_id: String,
    pub source: String,
    pub target: String,
    pub timestamp: DateTime<Utc>,
    pub status: LogStatus,
    pub message: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub error_code: Option<String>,
    /// Seconds.
    #[serde(default)]
    pub response_time: Option<f64>,
    #[serde(default)]
    pub retry_count: Option<u32>,
    #[serde(default)]
    pub metadata: Option<LogMetadata>,
}

impl LogEntry {
    pub fn is_failed(&self) -> bool {
        self.status == LogStatus::Failed
    }
}
