//! # Ostrich Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Filesystem helpers shared by the configuration and snapshot loaders.
//! Functionality lives in submodules and is imported from them directly
//! (e.g., `crate::common::fs::io::read_file_to_string`).
//!
//! - **`io`**: reading files with path-aware errors.
//!
pub mod io;
