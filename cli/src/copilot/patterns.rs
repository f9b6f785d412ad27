//! # Error Pattern Catalog
//!
//! File: cli/src/copilot/patterns.rs
//!
//! ## Overview
//!
//! Known error codes with their remediation advice, and the frequency ranking
//! the error analysis reports on.
//!
use crate::copilot::response::Level;
use crate::data::model::LogEntry;
use serde::Serialize;

pub const AUTH_401: &str = "AUTH_401";
pub const TIMEOUT_408: &str = "TIMEOUT_408";
pub const RATE_LIMIT_429: &str = "RATE_LIMIT_429";

/// What Ostrich knows about a recurring error code.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorPatternInfo {
    pub code: &'static str,
    pub description: &'static str,
    pub solution: &'static str,
    /// Line printed under "Recommended Actions" when the code shows up.
    pub remediation: &'static str,
    pub impact: Level,
}

/// Catalog order is also the order remediation lines are printed in.
pub const KNOWN_PATTERNS: &[ErrorPatternInfo] = &[
    ErrorPatternInfo {
        code: AUTH_401,
        description: "Authentication token expired",
        solution: "Refresh OAuth token or regenerate API key",
        remediation: "Refresh authentication tokens for affected integrations",
        impact: Level::High,
    },
    ErrorPatternInfo {
        code: TIMEOUT_408,
        description: "Request timeout",
        solution: "Increase timeout settings or check network connectivity",
        remediation: "Increase timeout settings or check network connectivity",
        impact: Level::Medium,
    },
    ErrorPatternInfo {
        code: RATE_LIMIT_429,
        description: "Rate limit exceeded",
        solution: "Implement exponential backoff or reduce request frequency",
        remediation: "Implement exponential backoff or reduce request frequency",
        impact: Level::Medium,
    },
];

pub fn lookup(code: &str) -> Option<&'static ErrorPatternInfo> {
    KNOWN_PATTERNS.iter().find(|p| p.code == code)
}

/// One error code and how often it occurred.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PatternCount {
    pub code: String,
    pub count: usize,
}

/// Groups logs by error code, most frequent first.
///
/// Entries without an error code are skipped. Codes with equal counts keep
/// the order in which they first appeared.
pub fn rank_error_codes<'a, I>(logs: I) -> Vec<PatternCount>
where
    I: IntoIterator<Item = &'a LogEntry>,
{
    let mut counts: Vec<PatternCount> = Vec::new();
    for code in logs.into_iter().filter_map(|l| l.error_code.as_deref()) {
        match counts.iter_mut().find(|p| p.code == code) {
            Some(existing) => existing.count += 1,
            None => counts.push(PatternCount {
                code: code.to_string(),
                count: 1,
            }),
        }
    }
    // sort_by is stable, ties stay in first-seen order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::LogStatus;
    use chrono::{TimeZone, Utc};

    fn failed(id: &str, code: Option<&str>) -> LogEntry {
        LogEntry {
            id: id.to_string(),
            integration_id: "1".to_string(),
            source: "A".to_string(),
            target: "B".to_string(),
            timestamp: Utc.with_ymd_and_hms(2025, 1, 30, 12, 0, 0).unwrap(),
            status: LogStatus::Failed,
            message: "boom".to_string(),
            details: None,
            error_code: code.map(str::to_string),
            response_time: None,
            retry_count: None,
            metadata: None,
        }
    }

    #[test]
    fn ranks_by_descending_count() {
        let logs = vec![
            failed("1", Some(AUTH_401)),
            failed("2", Some(TIMEOUT_408)),
            failed("3", Some(TIMEOUT_408)),
            failed("4", None),
            failed("5", Some(RATE_LIMIT_429)),
            failed("6", Some(TIMEOUT_408)),
            failed("7", Some(AUTH_401)),
        ];
        let ranked = rank_error_codes(&logs);
        let codes: Vec<_> = ranked.iter().map(|p| (p.code.as_str(), p.count)).collect();
        assert_eq!(
            codes,
            vec![(TIMEOUT_408, 3), (AUTH_401, 2), (RATE_LIMIT_429, 1)]
        );
    }

    #[test]
    fn ties_keep_first_appearance() {
        let logs = vec![
            failed("1", Some("PAUSED_503")),
            failed("2", Some(AUTH_401)),
        ];
        let ranked = rank_error_codes(&logs);
        assert_eq!(ranked[0].code, "PAUSED_503");
        assert_eq!(ranked[1].code, AUTH_401);
    }

    #[test]
    fn catalog_lookup() {
        assert_eq!(lookup(AUTH_401).map(|p| p.impact), Some(Level::High));
        assert!(lookup("PAUSED_503").is_none());
    }
}
