//! # Copilot Response Types
//!
//! File: cli/src/copilot/response.rs
//!
//! ## Overview
//!
//! What the copilot hands back for a query: a kind tag, the message text, a
//! fixed confidence, and optionally suggested actions, related log ids and
//! impact/urgency metrics. Responses are created once and never mutated.
//!
use serde::Serialize;
use std::fmt;
use tracing::info;

/// Category tag of a response.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResponseKind {
    Analysis,
    Suggestion,
    Error,
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResponseKind::Analysis => "analysis",
            ResponseKind::Suggestion => "suggestion",
            ResponseKind::Error => "error",
        };
        f.write_str(s)
    }
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Retry,
    Configure,
    Investigate,
    Optimize,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionKind::Retry => "retry",
            ActionKind::Configure => "configure",
            ActionKind::Investigate => "investigate",
            ActionKind::Optimize => "optimize",
        };
        f.write_str(s)
    }
}

/// Low / medium / high grading used for impact and urgency.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Low => "low",
            Level::Medium => "medium",
            Level::High => "high",
        };
        f.write_str(s)
    }
}

/// A follow-up the user can trigger from a response.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SuggestedAction {
    pub id: String,
    pub label: String,
    pub description: String,
    pub kind: ActionKind,
    /// Console line emitted when the action is run.
    pub announcement: String,
}

impl SuggestedAction {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        kind: ActionKind,
        announcement: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            kind,
            announcement: announcement.into(),
        }
    }

    /// Runs the action. Actions are not wired to real operations; running one
    /// only logs and returns its announcement.
    pub fn run(&self) -> &str {
        info!(action = %self.id, kind = %self.kind, "{}", self.announcement);
        &self.announcement
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ResponseMetrics {
    pub impact: Level,
    pub urgency: Level,
    pub estimated_resolution_time: String,
}

impl ResponseMetrics {
    pub fn new(impact: Level, urgency: Level, estimate: impl Into<String>) -> Self {
        Self {
            impact,
            urgency,
            estimated_resolution_time: estimate.into(),
        }
    }
}

/// The single output of one copilot query.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CopilotResponse {
    pub kind: ResponseKind,
    pub message: String,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<SuggestedAction>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_logs: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<ResponseMetrics>,
}

impl CopilotResponse {
    pub fn new(kind: ResponseKind, message: impl Into<String>, confidence: f64) -> Self {
        Self {
            kind,
            message: message.into(),
            confidence,
            actions: None,
            related_logs: Vec::new(),
            metrics: None,
        }
    }

    pub fn with_actions(mut self, actions: Vec<SuggestedAction>) -> Self {
        self.actions = Some(actions);
        self
    }

    pub fn with_related_logs(mut self, ids: Vec<String>) -> Self {
        self.related_logs = ids;
        self
    }

    pub fn with_metrics(mut self, metrics: ResponseMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Looks up one of this response's actions by id.
    pub fn action(&self, id: &str) -> Option<&SuggestedAction> {
        self.actions.as_deref()?.iter().find(|a| a.id == id)
    }
}
