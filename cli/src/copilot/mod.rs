//! # Ostrich Copilot
//!
//! File: cli/src/copilot/mod.rs
//!
//! ## Overview
//!
//! The rule-based assistant behind `ostrich ask` and `ostrich chat`. It does
//! not learn or call out to any model: a query is routed by keyword to one of
//! a handful of fixed analyses, each producing a templated message with a
//! constant confidence score.
//!
//! - `router`: keyword groups and their priority order
//! - `responder`: the `Copilot` analyses
//! - `patterns`: known error codes and frequency ranking
//! - `response`: the `CopilotResponse` returned for every query
//!
pub mod patterns;
pub mod responder;
pub mod response;
pub mod router;

pub use responder::Copilot;
pub use response::{
    ActionKind, CopilotResponse, Level, ResponseKind, ResponseMetrics, SuggestedAction,
};
pub use router::{classify, Route};
