//! # Ostrich Basic Filesystem I/O Utilities
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin wrappers around `std::fs` that turn failures into errors naming the
//! offending path. Snapshot loading reads through here.
//!
use crate::core::error::{OstrichError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads the entire content of a file into a string.
///
/// A missing path or a directory is reported as `OstrichError::FileSystem`;
/// any other I/O failure carries the path as context.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    if !path.exists() {
        anyhow::bail!(OstrichError::FileSystem(format!(
            "File not found: {}",
            path.display()
        )));
    }
    if path.is_dir() {
        anyhow::bail!(OstrichError::FileSystem(format!(
            "Expected a file but found a directory: {}",
            path.display()
        )));
    }
    debug!("Reading file: {}", path.display());
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_file_to_string_success() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("read_test.txt");
        fs::write(&file_path, "Hello, Ostrich!").unwrap();
        assert_eq!(read_file_to_string(&file_path).unwrap(), "Hello, Ostrich!");
    }

    #[test]
    fn test_read_file_to_string_not_found() {
        let temp_dir = tempdir().unwrap();
        let err = read_file_to_string(&temp_dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("File not found"));
    }

    #[test]
    fn test_read_file_to_string_directory() {
        let temp_dir = tempdir().unwrap();
        let err = read_file_to_string(temp_dir.path()).unwrap_err();
        assert!(err
            .downcast_ref::<OstrichError>()
            .is_some_and(|e| matches!(e, OstrichError::FileSystem(_))));
    }
}
