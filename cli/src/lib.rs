//! # Ostrich Library
//!
//! File: cli/src/lib.rs
//!
//! The public library behind the `ostrich` binary. Exposing the data model,
//! the copilot and the shared utilities here lets the integration tests in
//! `tests/` use them directly.

pub mod common;
pub mod copilot;
pub mod core;
pub mod data;
