//! # Ostrich Copilot Library Tests
//!
//! File: cli/tests/copilot.rs
//!
//! ## Overview
//!
//! Black-box tests of `ostrich::copilot::Copilot` over hand-built snapshots,
//! covering routing priority, the numbers each analysis reports, and the
//! handling of empty data.
//!

use ostrich::copilot::{ActionKind, Copilot, Level, ResponseKind};
use ostrich::data::Snapshot;

fn integration(id: &str, name: &str, healthy: bool, errors: u64, avg: f64, streak: u32) -> String {
    format!(
        r#"
[[integrations]]
id = "{id}"
name = "{name}"
source = "A"
target = "B"
status = "{status}"
last_sync = "2025-03-01T12:00:00Z"
success_count = 100
error_count = {errors}
avg_response_time = {avg}
uptime = 99.0
config = {{ retry_attempts = 3, timeout = 5000, rate_limit = 60 }}
health = {{ is_healthy = {healthy}, last_health_check = "2025-03-01T12:00:00Z", consecutive_failures = {streak} }}
"#,
        status = if healthy { "active" } else { "error" },
    )
}

fn log(id: &str, integration_id: &str, status: &str, code: Option<&str>, rt: f64) -> String {
    let code = code
        .map(|c| format!("error_code = \"{}\"\n", c))
        .unwrap_or_default();
    format!(
        r#"
[[logs]]
id = "{id}"
integration_id = "{integration_id}"
source = "A"
target = "B"
timestamp = "2025-03-01T12:00:00Z"
status = "{status}"
message = "log {id}"
response_time = {rt}
{code}"#
    )
}

fn snapshot(parts: &[String]) -> Snapshot {
    Snapshot::from_toml_str(&parts.concat()).expect("fixture snapshot should parse")
}

#[test]
fn test_empty_snapshot_never_panics() {
    let snap = snapshot(&[]);
    let copilot = Copilot::new(&snap.integrations, &snap.logs);

    let health = copilot.respond("health");
    assert!(health.message.contains("🔴 0 integrations are unhealthy"));
    assert!(health.message.contains("📊 Overall success rate: 0.0%"));
    assert!(health.message.contains("All integrations are performing well!"));
    assert!(health.actions.is_none());

    let errors = copilot.respond("errors");
    assert!(errors.message.contains("📊 Total Errors: 0"));
    assert!(!errors.message.contains("**Common Issues:**"));
    assert!(errors.related_logs.is_empty());

    let missing = copilot.respond("slack");
    assert_eq!(missing.kind, ResponseKind::Error);
    assert_eq!(missing.confidence, 0.0);

    let perf = copilot.respond("speed");
    assert!(perf.message.contains("🐌 Slow Integrations: 0"));
    assert!(!perf.message.contains("**Slow Integrations:**"));

    let opt = copilot.suggest_optimizations();
    assert_eq!(opt.kind, ResponseKind::Suggestion);
    assert!(opt.message.starts_with("No optimization suggestions at this time."));
}

fn ranked_failures() -> Snapshot {
    snapshot(&[
        integration("1", "GitHub → Slack", true, 0, 1.0, 0),
        log("a", "1", "failed", Some("RATE_LIMIT_429"), 1.0),
        log("b", "1", "failed", Some("AUTH_401"), 1.0),
        log("c", "1", "failed", Some("TIMEOUT_408"), 1.0),
        log("d", "1", "failed", Some("TIMEOUT_408"), 1.0),
        log("e", "1", "failed", Some("AUTH_401"), 1.0),
        log("f", "1", "failed", Some("TIMEOUT_408"), 1.0),
        log("g", "1", "success", None, 1.0),
    ])
}

/// Codes are listed most frequent first, whatever order they appear in.
#[test]
fn test_error_patterns_ranked_by_frequency() {
    let snap = ranked_failures();
    let copilot = Copilot::new(&snap.integrations, &snap.logs);
    let response = copilot.analyze_errors();

    let msg = &response.message;
    assert!(msg.contains("📊 Total Errors: 6"));
    assert!(msg.contains("🔍 Error Patterns: 3"));
    let timeout = msg.find("• TIMEOUT_408: 3 occurrences").unwrap();
    let auth = msg.find("• AUTH_401: 2 occurrences").unwrap();
    let rate = msg.find("• RATE_LIMIT_429: 1 occurrences").unwrap();
    assert!(timeout < auth && auth < rate);
    assert_eq!(response.related_logs, ["a", "b", "c", "d", "e", "f"]);

    let metrics = response.metrics.unwrap();
    assert_eq!(metrics.impact, Level::High);
    assert_eq!(metrics.urgency, Level::Medium);
    assert_eq!(metrics.estimated_resolution_time, "20-30 minutes");
}

/// The plain-language question lands on the same ranked report.
#[test]
fn test_recent_errors_question_lists_codes_by_frequency() {
    let snap = ranked_failures();
    let copilot = Copilot::new(&snap.integrations, &snap.logs);
    let response = copilot.respond("Show me recent errors");

    assert_eq!(response.kind, ResponseKind::Analysis);
    assert_eq!(response.confidence, 0.85);
    let codes: Vec<&str> = response
        .message
        .lines()
        .filter(|line| line.ends_with(" occurrences"))
        .filter_map(|line| line.strip_prefix("• ")?.split_once(':'))
        .map(|(code, _)| code)
        .collect();
    assert_eq!(codes, ["TIMEOUT_408", "AUTH_401", "RATE_LIMIT_429"]);
}

#[test]
fn test_error_analysis_looks_at_ten_most_recent_failures() {
    let mut parts = vec![integration("1", "GitHub → Slack", true, 0, 1.0, 0)];
    for i in 0..12 {
        parts.push(log(&format!("f{}", i), "1", "failed", Some("TIMEOUT_408"), 1.0));
    }
    let snap = snapshot(&parts);
    let response = Copilot::new(&snap.integrations, &snap.logs).analyze_errors();
    assert!(response.message.contains("📊 Total Errors: 10"));
    assert_eq!(response.related_logs.len(), 10);
    assert_eq!(response.related_logs.last().map(String::as_str), Some("f9"));
}

#[test]
fn test_integration_analysis_recommendations() {
    let snap = snapshot(&[
        integration("1", "GitHub → Slack", false, 9, 1.0, 4),
        log("a", "1", "failed", Some("TIMEOUT_408"), 3.0),
        log("b", "1", "failed", None, 2.5),
        log("c", "1", "success", None, 1.0),
    ]);
    let copilot = Copilot::new(&snap.integrations, &snap.logs);
    let response = copilot.respond("What is up with GitHub?");

    assert_eq!(response.kind, ResponseKind::Analysis);
    assert_eq!(response.confidence, 0.9);
    let msg = &response.message;
    assert!(msg.starts_with("**GitHub → Slack Analysis:**"));
    assert!(msg.contains("⚡ Avg Response Time: 2.17s"));
    assert!(msg.contains("• log a (TIMEOUT_408)"));
    assert!(msg.contains("• log b\n"));
    assert!(msg.contains("High failure rate detected"));
    assert!(msg.contains("Response time is slow"));
    assert_eq!(response.related_logs, ["a", "b", "c"]);

    let actions = response.actions.as_deref().unwrap();
    assert_eq!(actions[0].kind, ActionKind::Retry);
    assert_eq!(actions[0].run(), "Retrying GitHub → Slack...");
    assert_eq!(actions[1].kind, ActionKind::Configure);

    let metrics = response.metrics.unwrap();
    assert_eq!(metrics.impact, Level::High);
    assert_eq!(metrics.urgency, Level::High);
}

#[test]
fn test_performance_lists_only_slow_integrations() {
    let snap = snapshot(&[
        integration("1", "Fast", true, 0, 1.9, 0),
        integration("2", "Sluggish", true, 6, 2.4, 0),
        integration("3", "Glacial", true, 0, 7.0, 0),
    ]);
    let copilot = Copilot::new(&snap.integrations, &snap.logs);
    let response = copilot.respond("why so slow");

    let msg = &response.message;
    assert!(msg.contains("🐌 Slow Integrations: 2"));
    assert!(msg.contains("❌ High Error Rate: 1"));
    assert!(msg.contains("• Sluggish: 2.4s"));
    assert!(msg.contains("• Glacial: 7s"));
    assert!(!msg.contains("• Fast:"));
    assert_eq!(response.metrics.as_ref().unwrap().impact, Level::Medium);
    assert_eq!(response.action("optimize-performance").map(|a| a.kind), Some(ActionKind::Optimize));
}

#[test]
fn test_classification_is_case_insensitive_and_ordered() {
    let snap = Snapshot::builtin().unwrap();
    let copilot = Copilot::new(&snap.integrations, &snap.logs);

    assert!(copilot.respond("STATUS please").message.starts_with("System Health Analysis"));
    assert!(copilot.respond("slack errors").message.starts_with("**GitHub → Slack Analysis:**"));
    assert!(copilot.respond("teams performance").message.starts_with("**Jira → Teams Analysis:**"));
    assert!(copilot.respond("any issue with speed?").message.starts_with("**Error Analysis:**"));
    assert_eq!(copilot.respond("").confidence, 0.9);
}
