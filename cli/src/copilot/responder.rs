//! # Copilot Responder
//!
//! File: cli/src/copilot/responder.rs
//!
//! ## Overview
//!
//! `Copilot` answers free-text questions about a snapshot of integrations and
//! logs. Every query produces exactly one `CopilotResponse`; nothing is cached
//! or mutated between calls, so the answer depends only on the query and the
//! borrowed snapshot.
//!
//! ## Architecture
//!
//! 1. `router::classify` picks a `Route` from keyword groups (first match wins).
//! 2. The matching `analyze_*` method computes its figures from the snapshot.
//! 3. The figures are formatted into a fixed message template, and the branch's
//!    constant confidence, actions and metrics are attached.
//!
//! ## Examples
//!
//! ```rust
//! use ostrich::copilot::{Copilot, ResponseKind};
//! use ostrich::data::Snapshot;
//!
//! let snapshot = Snapshot::builtin().unwrap();
//! let copilot = Copilot::new(&snapshot.integrations, &snapshot.logs);
//!
//! let response = copilot.respond("How is the system health?");
//! assert_eq!(response.kind, ResponseKind::Analysis);
//! assert_eq!(response.confidence, 0.95);
//! ```
//!
use crate::copilot::patterns::{self, PatternCount, AUTH_401};
use crate::copilot::response::{
    ActionKind, CopilotResponse, Level, ResponseKind, ResponseMetrics, SuggestedAction,
};
use crate::copilot::router::{self, Route};
use crate::data::model::{Integration, IntegrationStatus, LogEntry, LogStatus};
use std::fmt::Write;
use tracing::debug;

pub const HEALTH_CONFIDENCE: f64 = 0.95;
pub const INTEGRATION_CONFIDENCE: f64 = 0.90;
pub const ERRORS_CONFIDENCE: f64 = 0.85;
pub const PERFORMANCE_CONFIDENCE: f64 = 0.80;
pub const HELP_CONFIDENCE: f64 = 0.90;
pub const OPTIMIZATION_CONFIDENCE: f64 = 0.80;

/// Seconds above which an integration counts as slow.
pub const SLOW_RESPONSE_SECS: f64 = 2.0;
/// Lifetime error count above which an integration counts as error-prone.
pub const HIGH_ERROR_COUNT: u64 = 5;
/// Consecutive failures above which pausing is recommended.
pub const FAILURE_STREAK_LIMIT: u32 = 3;

const RECENT_LOGS_PER_INTEGRATION: usize = 5;
const RECENT_ERRORS_ANALYZED: usize = 10;

const HELP_MESSAGE: &str = "**Ostrich Copilot Help:**

I can help you with:

🔍 **Analysis:**
• \"How is the system health?\"
• \"Analyze GitHub → Slack integration\"
• \"What errors are occurring?\"

⚡ **Actions:**
• \"Retry failed integrations\"
• \"Fix authentication errors\"
• \"Optimize performance\"

📊 **Monitoring:**
• \"Show me recent logs\"
• \"What's the success rate?\"
• \"Which integrations are slow?\"

Just ask me anything about your integrations!";

/// Keyword-driven responder over a borrowed snapshot.
#[derive(Debug, Clone, Copy)]
pub struct Copilot<'a> {
    integrations: &'a [Integration],
    logs: &'a [LogEntry],
}

impl<'a> Copilot<'a> {
    pub fn new(integrations: &'a [Integration], logs: &'a [LogEntry]) -> Self {
        Self { integrations, logs }
    }

    /// Answers a free-text query. Never fails: unmatched or empty input gets the help text.
    pub fn respond(&self, query: &str) -> CopilotResponse {
        let route = router::classify(query);
        debug!(?route, "Routed copilot query");
        match route {
            Route::SystemHealth => self.analyze_system_health(),
            Route::Integration(id) => self.analyze_integration(id),
            Route::Errors => self.analyze_errors(),
            Route::Performance => self.analyze_performance(),
            Route::Help => general_help(),
        }
    }

    /// Counts unhealthy integrations and failed logs, and the log success rate.
    pub fn analyze_system_health(&self) -> CopilotResponse {
        let unhealthy = self
            .integrations
            .iter()
            .filter(|i| !i.health.is_healthy)
            .count();
        let error_count = self.logs.iter().filter(|l| l.is_failed()).count();
        let success_rate = self.log_success_rate();

        let advice = if unhealthy > 0 {
            "I recommend checking the authentication tokens and network connectivity for the failing integrations."
        } else {
            "All integrations are performing well!"
        };
        let message = format!(
            "System Health Analysis:\n\n🔴 {} integrations are unhealthy\n📊 Overall success rate: {:.1}%\n❌ {} errors in the last 24 hours\n\n{}",
            unhealthy, success_rate, error_count, advice
        );

        let mut response = CopilotResponse::new(ResponseKind::Analysis, message, HEALTH_CONFIDENCE)
            .with_metrics(ResponseMetrics::new(
                if unhealthy > 2 { Level::High } else { Level::Medium },
                if unhealthy > 0 { Level::Medium } else { Level::Low },
                if unhealthy > 0 {
                    "15-30 minutes"
                } else {
                    "No action needed"
                },
            ));
        if unhealthy > 0 {
            response = response.with_actions(vec![
                SuggestedAction::new(
                    "retry-all",
                    "Retry All Failed Integrations",
                    "Attempt to retry all integrations that are currently failing",
                    ActionKind::Retry,
                    "Retrying all failed integrations...",
                ),
                SuggestedAction::new(
                    "health-check",
                    "Run Health Check",
                    "Perform a comprehensive health check on all integrations",
                    ActionKind::Investigate,
                    "Running health check...",
                ),
            ]);
        }
        response
    }

    /// Reports on one integration. An unknown id yields an error-kind response
    /// with zero confidence.
    pub fn analyze_integration(&self, integration_id: &str) -> CopilotResponse {
        let Some(integration) = self.integrations.iter().find(|i| i.id == integration_id) else {
            debug!(integration_id, "Copilot lookup missed");
            return CopilotResponse::new(ResponseKind::Error, "Integration not found", 0.0);
        };

        let recent: Vec<&LogEntry> = self
            .logs
            .iter()
            .filter(|l| l.integration_id == integration_id)
            .take(RECENT_LOGS_PER_INTEGRATION)
            .collect();
        let recent_errors: Vec<&LogEntry> =
            recent.iter().copied().filter(|l| l.is_failed()).collect();
        let avg_response_time = if recent.is_empty() {
            0.0
        } else {
            recent
                .iter()
                .map(|l| l.response_time.unwrap_or(0.0))
                .sum::<f64>()
                / recent.len() as f64
        };

        let name = &integration.name;
        let mut message = format!("**{} Analysis:**\n\n", name);
        let _ = writeln!(message, "📊 Status: {}", integration.status);
        let _ = writeln!(message, "⚡ Avg Response Time: {:.2}s", avg_response_time);
        let _ = writeln!(message, "✅ Success Rate: {:.1}%", integration.success_rate());
        let _ = writeln!(
            message,
            "🔄 Last Sync: {}\n",
            integration.last_sync.format("%Y-%m-%d %H:%M:%S UTC")
        );

        if recent_errors.is_empty() {
            message.push_str("✅ No recent issues detected. Integration is performing well!");
        } else {
            message.push_str("**Recent Issues:**\n");
            for log in &recent_errors {
                match &log.error_code {
                    Some(code) => {
                        let _ = writeln!(message, "• {} ({})", log.message, code);
                    }
                    None => {
                        let _ = writeln!(message, "• {}", log.message);
                    }
                }
            }
            message.push_str("\n**Recommendations:**\n");
            if integration.health.consecutive_failures > FAILURE_STREAK_LIMIT {
                message.push_str(
                    "• High failure rate detected. Consider pausing and investigating.\n",
                );
            }
            if avg_response_time > SLOW_RESPONSE_SECS {
                message.push_str(
                    "• Response time is slow. Check network connectivity and API limits.\n",
                );
            }
        }

        let failing = integration.status == IntegrationStatus::Error;
        CopilotResponse::new(ResponseKind::Analysis, message, INTEGRATION_CONFIDENCE)
            .with_actions(vec![
                SuggestedAction::new(
                    "retry-integration",
                    format!("Retry {}", name),
                    format!("Attempt to retry the {} integration", name),
                    ActionKind::Retry,
                    format!("Retrying {}...", name),
                ),
                SuggestedAction::new(
                    "configure-integration",
                    format!("Configure {}", name),
                    format!("Open configuration panel for {}", name),
                    ActionKind::Configure,
                    format!("Opening configuration for {}...", name),
                ),
            ])
            .with_related_logs(recent.iter().map(|l| l.id.clone()).collect())
            .with_metrics(ResponseMetrics::new(
                if failing { Level::High } else { Level::Low },
                if integration.health.consecutive_failures > FAILURE_STREAK_LIMIT {
                    Level::High
                } else {
                    Level::Low
                },
                if failing {
                    "5-10 minutes"
                } else {
                    "No action needed"
                },
            ))
    }

    /// Ranks the error codes of the most recent failed logs.
    pub fn analyze_errors(&self) -> CopilotResponse {
        let recent_errors: Vec<&LogEntry> = self
            .logs
            .iter()
            .filter(|l| l.is_failed())
            .take(RECENT_ERRORS_ANALYZED)
            .collect();
        let ranked = patterns::rank_error_codes(recent_errors.iter().copied());

        let mut message = String::from("**Error Analysis:**\n\n");
        let _ = writeln!(message, "📊 Total Errors: {}", recent_errors.len());
        let _ = writeln!(message, "🔍 Error Patterns: {}\n", ranked.len());

        if !ranked.is_empty() {
            message.push_str("**Common Issues:**\n");
            for PatternCount { code, count } in &ranked {
                let _ = writeln!(message, "• {}: {} occurrences", code, count);
            }
            message.push_str("\n**Recommended Actions:**\n");
            for known in patterns::KNOWN_PATTERNS {
                if ranked.iter().any(|p| p.code == known.code) {
                    let _ = writeln!(message, "• {}", known.remediation);
                }
            }
        }

        let total = recent_errors.len();
        CopilotResponse::new(ResponseKind::Analysis, message, ERRORS_CONFIDENCE)
            .with_actions(vec![
                SuggestedAction::new(
                    "fix-auth-errors",
                    "Fix Authentication Errors",
                    "Automatically refresh expired tokens",
                    ActionKind::Configure,
                    "Fixing authentication errors...",
                ),
                SuggestedAction::new(
                    "optimize-timeouts",
                    "Optimize Timeout Settings",
                    "Adjust timeout settings based on error patterns",
                    ActionKind::Optimize,
                    "Optimizing timeout settings...",
                ),
            ])
            .with_related_logs(recent_errors.iter().map(|l| l.id.clone()).collect())
            .with_metrics(ResponseMetrics::new(
                if total > 5 { Level::High } else { Level::Medium },
                if total > 10 { Level::High } else { Level::Medium },
                if total > 5 {
                    "20-30 minutes"
                } else {
                    "10-15 minutes"
                },
            ))
    }

    /// Lists slow integrations and counts error-prone ones.
    pub fn analyze_performance(&self) -> CopilotResponse {
        let slow: Vec<&Integration> = self.slow_integrations().collect();
        let high_error = self.error_prone_integrations().count();

        let mut message = String::from("**Performance Analysis:**\n\n");
        let _ = writeln!(message, "🐌 Slow Integrations: {}", slow.len());
        let _ = writeln!(message, "❌ High Error Rate: {}\n", high_error);

        if !slow.is_empty() {
            message.push_str("**Slow Integrations:**\n");
            for integration in &slow {
                let _ = writeln!(
                    message,
                    "• {}: {}s",
                    integration.name, integration.avg_response_time
                );
            }
            message.push_str("\n**Optimization Suggestions:**\n");
            message.push_str("• Implement caching for frequently accessed data\n");
            message.push_str("• Use connection pooling for database integrations\n");
            message.push_str("• Consider async processing for non-critical operations\n");
        }

        CopilotResponse::new(ResponseKind::Analysis, message, PERFORMANCE_CONFIDENCE)
            .with_actions(vec![SuggestedAction::new(
                "optimize-performance",
                "Optimize Performance",
                "Apply performance optimizations to slow integrations",
                ActionKind::Optimize,
                "Optimizing performance...",
            )])
            .with_metrics(ResponseMetrics::new(
                if slow.len() > 2 { Level::High } else { Level::Medium },
                Level::Low,
                "30-60 minutes",
            ))
    }

    /// Configuration advice derived from error counts, response times and auth failures.
    pub fn suggest_optimizations(&self) -> CopilotResponse {
        let mut suggestions = Vec::new();

        let error_prone: Vec<&str> = self
            .error_prone_integrations()
            .map(|i| i.name.as_str())
            .collect();
        if !error_prone.is_empty() {
            suggestions.push(format!(
                "Consider implementing exponential backoff for {}",
                error_prone.join(", ")
            ));
        }

        let slow: Vec<&str> = self.slow_integrations().map(|i| i.name.as_str()).collect();
        if !slow.is_empty() {
            suggestions.push(format!("Optimize response times for {}", slow.join(", ")));
        }

        if self
            .logs
            .iter()
            .any(|l| l.error_code.as_deref() == Some(AUTH_401))
        {
            suggestions.push(
                "Set up automatic token refresh to prevent authentication failures".to_string(),
            );
        }

        let message = if suggestions.is_empty() {
            "No optimization suggestions at this time. Your integrations are well-configured!"
                .to_string()
        } else {
            let bullets: Vec<String> = suggestions.iter().map(|s| format!("• {}", s)).collect();
            format!("**Optimization Suggestions:**\n\n{}", bullets.join("\n"))
        };
        CopilotResponse::new(ResponseKind::Suggestion, message, OPTIMIZATION_CONFIDENCE)
    }

    fn slow_integrations(&self) -> impl Iterator<Item = &'a Integration> {
        let integrations: &'a [Integration] = self.integrations;
        integrations
            .iter()
            .filter(|i| i.avg_response_time > SLOW_RESPONSE_SECS)
    }

    fn error_prone_integrations(&self) -> impl Iterator<Item = &'a Integration> {
        let integrations: &'a [Integration] = self.integrations;
        integrations
            .iter()
            .filter(|i| i.error_count > HIGH_ERROR_COUNT)
    }

    fn log_success_rate(&self) -> f64 {
        if self.logs.is_empty() {
            return 0.0;
        }
        let successes = self
            .logs
            .iter()
            .filter(|l| l.status == LogStatus::Success)
            .count();
        successes as f64 / self.logs.len() as f64 * 100.0
    }
}

/// The static help text listing example questions.
pub fn general_help() -> CopilotResponse {
    CopilotResponse::new(ResponseKind::Suggestion, HELP_MESSAGE, HELP_CONFIDENCE)
}
