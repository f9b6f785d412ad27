//! # Ostrich Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Shared utilities used by the library and the command handlers, kept apart
//! from domain logic (`copilot::`, `data::`) and core infrastructure (`core::`).
//!
//! - **`fs`**: filesystem reads with contextual errors.
//! - **`ui`**: plain-text rendering of responses, tables and logs.
//!

/// Utilities for filesystem operations.
pub mod fs;
/// Terminal rendering of copilot responses, status tables and logs.
pub mod ui;
