//! # Ostrich Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used throughout
//! the Ostrich application. It provides a consistent approach to error management
//! with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `OstrichError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The copilot responder itself never fails: an unknown integration is reported
//! as an error-kind *response*, not as an `Err`. The variants here cover the
//! surrounding plumbing (configuration, snapshot files, command arguments).
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Return a specific error type
//! let integration = snapshot
//!     .find_integration(id)
//!     .ok_or_else(|| OstrichError::IntegrationNotFound { id: id.to_string() })?;
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
use thiserror::Error;

/// Custom error type for the Ostrich application.
#[derive(Error, Debug)]
pub enum OstrichError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Integration '{id}' not found.")]
    IntegrationNotFound { id: String },

    #[error("Action '{id}' is not offered by the last response.")]
    ActionNotFound { id: String },

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
pub type Result<T> = anyhow::Result<T>;
