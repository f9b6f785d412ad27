//! # Ostrich CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Every command
//! built here runs with the user configuration directory pointed at an empty
//! location, so a developer's own `~/.config/ostrich/config.toml` cannot leak
//! into test results.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// A small snapshot with one failing integration and no GitHub → Slack entry.
pub const SMALL_SNAPSHOT: &str = r#"
[[integrations]]
id = "7"
name = "Linear → Email"
source = "Linear"
target = "Email"
status = "error"
last_sync = "2025-02-01T09:00:00Z"
success_count = 10
error_count = 9
avg_response_time = 3.5
uptime = 90.0
config = { retry_attempts = 1, timeout = 1000, rate_limit = 10 }
health = { is_healthy = false, last_health_check = "2025-02-01T09:00:00Z", consecutive_failures = 6 }

[[logs]]
id = "a"
integration_id = "7"
source = "Linear"
target = "Email"
timestamp = "2025-02-01T09:00:00Z"
status = "failed"
message = "Mail relay timed out"
error_code = "TIMEOUT_408"
response_time = 3.5

[[logs]]
id = "b"
integration_id = "7"
source = "Linear"
target = "Email"
timestamp = "2025-02-01T08:55:00Z"
status = "failed"
message = "Too many requests"
error_code = "RATE_LIMIT_429"

[[logs]]
id = "c"
integration_id = "7"
source = "Linear"
target = "Email"
timestamp = "2025-02-01T08:50:00Z"
status = "failed"
message = "Mail relay timed out again"
error_code = "TIMEOUT_408"
"#;

fn isolated_config_home() -> PathBuf {
    std::env::temp_dir().join("ostrich-tests-no-user-config")
}

/// An `ostrich` command with user configuration and data overrides cleared.
pub fn ostrich_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ostrich").expect("Failed to find ostrich binary for testing");
    cmd.env("XDG_CONFIG_HOME", isolated_config_home())
        .env_remove("OSTRICH_DATA")
        .env_remove("RUST_LOG");
    cmd
}

/// Like `ostrich_cmd`, but running inside `dir` so its `.ostrich.toml` applies.
pub fn ostrich_cmd_in(dir: &Path) -> Command {
    let mut cmd = ostrich_cmd();
    cmd.current_dir(dir);
    cmd
}

/// Writes `SMALL_SNAPSHOT` into `dir` and returns its path.
pub fn write_small_snapshot(dir: &Path) -> PathBuf {
    let path = dir.join("snapshot.toml");
    std::fs::write(&path, SMALL_SNAPSHOT).expect("Failed to write snapshot fixture");
    path
}
