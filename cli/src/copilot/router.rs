//! # Copilot Query Router
//!
//! File: cli/src/copilot/router.rs
//!
//! ## Overview
//!
//! Decides which analysis answers a free-text query. The query is lowercased
//! and tested against keyword groups in a fixed order; the first group with a
//! keyword contained in the query wins. Order matters more than specificity:
//! "health error report" is a health question, not an error question.
//!
//! | Priority | Keywords                              | Route                    |
//! |----------|---------------------------------------|--------------------------|
//! | 1        | `health`, `status`                    | `SystemHealth`           |
//! | 2        | `github`, `slack`                     | `Integration("1")`       |
//! | 3        | `jira`, `teams`                       | `Integration("2")`       |
//! | 4        | `error`, `fail`, `issue`              | `Errors`                 |
//! | 5        | `performance`, `slow`, `speed`        | `Performance`            |
//! | –        | anything else, including empty input  | `Help`                   |
//!

/// Fixed id of the GitHub → Slack integration.
pub const GITHUB_SLACK_ID: &str = "1";
/// Fixed id of the Jira → Teams integration.
pub const JIRA_TEAMS_ID: &str = "2";

/// The analysis a query is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SystemHealth,
    Integration(&'static str),
    Errors,
    Performance,
    Help,
}

const ROUTES: &[(&[&str], Route)] = &[
    (&["health", "status"], Route::SystemHealth),
    (&["github", "slack"], Route::Integration(GITHUB_SLACK_ID)),
    (&["jira", "teams"], Route::Integration(JIRA_TEAMS_ID)),
    (&["error", "fail", "issue"], Route::Errors),
    (&["performance", "slow", "speed"], Route::Performance),
];

/// Routes a query. Never fails; unmatched input gets `Route::Help`.
pub fn classify(query: &str) -> Route {
    let lowered = query.to_lowercase();
    ROUTES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map_or(Route::Help, |(_, route)| *route)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_each_keyword_group() {
        assert_eq!(classify("How is the system health?"), Route::SystemHealth);
        assert_eq!(classify("STATUS please"), Route::SystemHealth);
        assert_eq!(
            classify("Analyze GitHub → Slack integration"),
            Route::Integration(GITHUB_SLACK_ID)
        );
        assert_eq!(classify("is slack ok"), Route::Integration(GITHUB_SLACK_ID));
        assert_eq!(classify("Jira sync"), Route::Integration(JIRA_TEAMS_ID));
        assert_eq!(classify("ms teams"), Route::Integration(JIRA_TEAMS_ID));
        assert_eq!(classify("Show me recent errors"), Route::Errors);
        assert_eq!(classify("why did it FAIL"), Route::Errors);
        assert_eq!(classify("any issues?"), Route::Errors);
        assert_eq!(classify("Which integrations are slow?"), Route::Performance);
        assert_eq!(classify("speed report"), Route::Performance);
    }

    #[test]
    fn earlier_groups_win() {
        assert_eq!(classify("health error report"), Route::SystemHealth);
        assert_eq!(classify("github errors"), Route::Integration(GITHUB_SLACK_ID));
        assert_eq!(classify("slack and jira"), Route::Integration(GITHUB_SLACK_ID));
        assert_eq!(classify("slow failures"), Route::Errors);
    }

    #[test]
    fn falls_back_to_help() {
        assert_eq!(classify("banana"), Route::Help);
        assert_eq!(classify(""), Route::Help);
        assert_eq!(classify("   \n\t"), Route::Help);
        assert_eq!(classify("Show me recent logs"), Route::Help);
    }

    #[test]
    fn matches_substrings_not_words() {
        assert_eq!(classify("unhealthy"), Route::SystemHealth);
        assert_eq!(classify("failover"), Route::Errors);
    }
}
