//! # Ostrich Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components shared by the
//! library and the command handlers:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//!
//! ```rust,ignore
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{OstrichError, Result}; // For error handling
//! ```
//!
pub mod config;
pub mod error;
