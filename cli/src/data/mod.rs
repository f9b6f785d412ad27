//! # Ostrich Data
//!
//! File: cli/src/data/mod.rs
//!
//! ## Overview
//!
//! Everything Ostrich knows about the monitored integrations:
//!
//! - `model`: the `Integration` and `LogEntry` records
//! - `snapshot`: loading a set of records and the read-only queries over it
//! - `simulation`: random "real-time" counter updates
//!
pub mod model;
pub mod simulation;
pub mod snapshot;

pub use model::{Integration, IntegrationStatus, LogEntry, LogStatus};
pub use snapshot::{PerformanceSummary, Snapshot, StatusLine};
