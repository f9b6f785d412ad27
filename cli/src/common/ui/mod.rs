//! # Ostrich Terminal Rendering (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Turns copilot responses, status lines and logs into the plain text the
//! commands print. Every function here returns a `String` instead of printing,
//! so the formatting can be tested without capturing stdout.
//!
//! Timestamps are shown in the local time zone, the way the dashboard showed
//! them; the copilot's own messages keep UTC.
//!
use crate::copilot::patterns;
use crate::copilot::CopilotResponse;
use crate::data::{Integration, LogEntry, PerformanceSummary, StatusLine};
use chrono::{DateTime, Local, Utc};
use std::fmt::Write;

/// Formats a UTC timestamp as local `YYYY-MM-DD HH:MM:SS`.
pub fn local_time(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// A copilot reply as shown in `ask` and `chat`.
pub fn render_response(response: &CopilotResponse, speaker: &str) -> String {
    let mut out = format!("{}: {}\n", speaker, response.message.trim_end());
    let _ = writeln!(
        out,
        "\n  [{} | confidence {:.0}%]",
        response.kind,
        response.confidence * 100.0
    );
    if let Some(metrics) = &response.metrics {
        let _ = writeln!(
            out,
            "  Impact: {} | Urgency: {} | Estimated resolution: {}",
            metrics.impact, metrics.urgency, metrics.estimated_resolution_time
        );
    }
    if let Some(actions) = response.actions.as_deref().filter(|a| !a.is_empty()) {
        out.push_str("\n  Suggested actions:\n");
        for action in actions {
            let _ = writeln!(
                out,
                "    [{}] {} ({}): {}",
                action.id, action.label, action.kind, action.description
            );
        }
    }
    if !response.related_logs.is_empty() {
        let _ = writeln!(out, "  Related logs: {}", response.related_logs.join(", "));
    }
    out
}

/// The real-time status table printed by `status` and `simulate`.
pub fn render_status_table(lines: &[StatusLine]) -> String {
    let name_width = lines
        .iter()
        .map(|l| l.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("NAME".len());
    let mut out = format!(
        "{:<4} {:<name_width$} {:<12} {:<8} {:<9} {}\n",
        "ID",
        "NAME",
        "STATUS",
        "HEALTHY",
        "FAILURES",
        "LAST SYNC",
        name_width = name_width
    );
    for line in lines {
        let padding = name_width - line.name.chars().count();
        let _ = writeln!(
            out,
            "{:<4} {}{} {:<12} {:<8} {:<9} {}",
            line.id,
            line.name,
            " ".repeat(padding),
            line.status.to_string(),
            if line.is_healthy { "yes" } else { "no" },
            line.consecutive_failures,
            local_time(&line.last_sync)
        );
    }
    out
}

pub fn render_performance_summary(summary: &PerformanceSummary) -> String {
    format!(
        "Total requests:    {}\nSuccess rate:      {:.1}%\nError rate:        {:.1}%\nAvg response time: {:.2}s\nUptime:            {:.1}%\nActive / failing:  {} / {}\n",
        summary.total_requests,
        summary.success_rate,
        summary.error_rate,
        summary.avg_response_time,
        summary.uptime,
        summary.active_integrations,
        summary.failing_integrations
    )
}

/// Full detail view of one integration. API keys are masked.
pub fn render_integration_detail(integration: &Integration) -> String {
    let mut out = format!("--- Integration {}: {} ---\n", integration.id, integration.name);
    let _ = writeln!(out, "  Route:          {} -> {}", integration.source, integration.target);
    let _ = writeln!(out, "  Status:         {}", integration.status);
    let _ = writeln!(out, "  Last Sync:      {}", local_time(&integration.last_sync));
    let _ = writeln!(
        out,
        "  Runs:           {} ok / {} failed ({:.1}% success)",
        integration.success_count,
        integration.error_count,
        integration.success_rate()
    );
    let _ = writeln!(out, "  Avg Response:   {}s", integration.avg_response_time);
    let _ = writeln!(out, "  Uptime:         {}%", integration.uptime);

    let health = &integration.health;
    out.push_str("  Health:\n");
    let _ = writeln!(
        out,
        "    Healthy:      {}",
        if health.is_healthy { "yes" } else { "no" }
    );
    let _ = writeln!(out, "    Last Check:   {}", local_time(&health.last_health_check));
    let _ = writeln!(out, "    Failures:     {}", health.consecutive_failures);
    if let Some(next) = &health.next_retry {
        let _ = writeln!(out, "    Next Retry:   {}", local_time(next));
    }

    let cfg = &integration.config;
    out.push_str("  Config:\n");
    if let Some(url) = &cfg.webhook_url {
        let _ = writeln!(out, "    Webhook:      {}", url);
    }
    if let Some(key) = cfg.masked_api_key() {
        let _ = writeln!(out, "    API Key:      {}", key);
    }
    let _ = writeln!(out, "    Retries:      {}", cfg.retry_attempts);
    let _ = writeln!(out, "    Timeout:      {} ms", cfg.timeout);
    let _ = writeln!(out, "    Rate Limit:   {}/min", cfg.rate_limit);
    out
}

/// Log list printed by `ostrich logs`, with hints for known error codes.
pub fn render_logs(logs: &[&LogEntry]) -> String {
    if logs.is_empty() {
        return "No log entries match.\n".to_string();
    }
    let mut out = String::new();
    for log in logs {
        let _ = writeln!(
            out,
            "{}  {:<8} {} -> {}: {}",
            local_time(&log.timestamp),
            log.status.to_string(),
            log.source,
            log.target,
            log.message
        );
        if let Some(code) = &log.error_code {
            let retries = log
                .retry_count
                .map(|n| format!(", {} retries", n))
                .unwrap_or_default();
            let _ = writeln!(out, "    code: {}{}", code, retries);
            if let Some(known) = patterns::lookup(code) {
                let _ = writeln!(
                    out,
                    "    {} ({} impact). Fix: {}",
                    known.description, known.impact, known.solution
                );
            }
        }
        if let Some(details) = &log.details {
            let _ = writeln!(out, "    {}", details);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::copilot::Copilot;
    use crate::data::{LogStatus, Snapshot};

    #[test]
    fn response_shows_actions_and_metrics() {
        let snapshot = Snapshot::builtin().unwrap();
        let copilot = Copilot::new(&snapshot.integrations, &snapshot.logs);
        let text = render_response(&copilot.respond("health"), "Ostrich Copilot");

        assert!(text.starts_with("Ostrich Copilot: System Health Analysis:"));
        assert!(text.contains("[analysis | confidence 95%]"));
        assert!(text.contains("Impact: medium | Urgency: medium"));
        assert!(text.contains("[retry-all] Retry All Failed Integrations (retry)"));
    }

    #[test]
    fn help_has_no_action_block() {
        let text = render_response(&crate::copilot::responder::general_help(), "Bot");
        assert!(text.contains("[suggestion | confidence 90%]"));
        assert!(!text.contains("Suggested actions"));
    }

    #[test]
    fn status_table_lists_every_integration() {
        let snapshot = Snapshot::builtin().unwrap();
        let table = render_status_table(&snapshot.status_lines());
        assert_eq!(table.lines().count(), 6);
        assert!(table.lines().next().unwrap().starts_with("ID"));
        assert!(table.contains("Notion → Discord"));
        assert!(table.contains("paused"));
    }

    #[test]
    fn detail_masks_api_key() {
        let snapshot = Snapshot::builtin().unwrap();
        let text = render_integration_detail(snapshot.find_integration("2").unwrap());
        assert!(text.contains("************-123"));
        assert!(!text.contains("jira-api-key-123"));
        assert!(text.contains("Next Retry:"));
    }

    #[test]
    fn logs_include_known_code_hints() {
        let snapshot = Snapshot::builtin().unwrap();
        let failed = snapshot.filter_logs(None, Some(LogStatus::Failed));
        let text = render_logs(&failed);
        assert!(text.contains("code: AUTH_401, 3 retries"));
        assert!(text.contains("Authentication token expired (high impact)"));
        assert!(text.contains("code: PAUSED_503"));
        assert_eq!(render_logs(&[]), "No log entries match.\n");
    }
}
