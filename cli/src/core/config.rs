//! # Ostrich Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module implements the configuration system for Ostrich, handling loading,
//! merging, validation, and access to configuration data. It supports a multi-level
//! configuration approach that combines defaults, user settings, and project-specific
//! overrides.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. Project-specific `.ostrich.toml` in current directory or ancestors
//! 2. User-specific `~/.config/ostrich/config.toml`
//! 3. Default values defined in the code
//!
//! The project search walks up from the current directory and stops at the
//! first directory containing `.git`. A relative `[data] snapshot` path in a
//! project file is taken relative to that file's directory.
//!
//! ## Examples
//!
//! ```toml
//! [data]
//! snapshot = "~/ostrich/snapshot.toml"
//!
//! [chat]
//! assistant_name = "Ostrich Copilot"
//!
//! [simulation]
//! interval_ms = 5000
//! error_probability = 0.1
//! max_success_increment = 2
//! ```
//!
use crate::core::error::{OstrichError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Where the integration/log snapshot comes from.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Path to a TOML snapshot file (can use ~). `None` selects the built-in data.
    #[serde(default)]
    pub snapshot: Option<String>,
}

/// Settings for `ostrich chat`.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ChatConfig {
    /// Name printed in front of every assistant reply.
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,
    /// First line printed when the REPL starts.
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

/// Settings for the decorative "real-time" counter updates.
#[derive(Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
    /// Chance per integration per tick that `error_count` grows by one.
    #[serde(default = "default_error_probability")]
    pub error_probability: f64,
    /// Upper bound (inclusive) of the random `success_count` increment.
    #[serde(default = "default_max_success_increment")]
    pub max_success_increment: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            assistant_name: default_assistant_name(),
            greeting: default_greeting(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            error_probability: default_error_probability(),
            max_success_increment: default_max_success_increment(),
        }
    }
}

fn default_assistant_name() -> String {
    "Ostrich Copilot".to_string()
}
fn default_greeting() -> String {
    "Hi! I'm Ostrich Copilot. I can help you monitor integrations, analyze errors, and optimize performance. What would you like to know?".to_string()
}
fn default_interval_ms() -> u64 {
    5000
}
fn default_error_probability() -> f64 {
    0.1
}
fn default_max_success_increment() -> u32 {
    2
}

const PROJECT_CONFIG_FILENAME: &str = ".ostrich.toml";

/// Loads, merges, expands and validates the configuration for the current directory.
pub fn load_config() -> Result<Config> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let user_config = load_user_config()?;
    let project_config = load_project_config(&current_dir)?.map(|(mut cfg, dir)| {
        anchor_snapshot_path(&mut cfg, &dir);
        cfg
    });
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config).context("Failed to expand paths in configuration")?;
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "Ostrich", "ostrich") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

/// Loads the nearest project config and returns it with the directory it was found in.
fn load_project_config(start: &Path) -> Result<Option<(Config, PathBuf)>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        let dir = project_config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| start.to_path_buf());
        load_config_from_path(&project_config_path).map(|cfg| Some((cfg, dir)))
    } else {
        debug!("No project configuration file (.ostrich.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.data.snapshot = project_cfg.data.snapshot.or(user.data.snapshot);
    merged.chat.assistant_name = if project_cfg.chat.assistant_name != default_assistant_name() {
        project_cfg.chat.assistant_name
    } else {
        user.chat.assistant_name
    };
    merged.chat.greeting = if project_cfg.chat.greeting != default_greeting() {
        project_cfg.chat.greeting
    } else {
        user.chat.greeting
    };
    merged.simulation.interval_ms = if project_cfg.simulation.interval_ms != default_interval_ms()
    {
        project_cfg.simulation.interval_ms
    } else {
        user.simulation.interval_ms
    };
    merged.simulation.error_probability =
        if project_cfg.simulation.error_probability != default_error_probability() {
            project_cfg.simulation.error_probability
        } else {
            user.simulation.error_probability
        };
    merged.simulation.max_success_increment =
        if project_cfg.simulation.max_success_increment != default_max_success_increment() {
            project_cfg.simulation.max_success_increment
        } else {
            user.simulation.max_success_increment
        };
    merged
}

/// Makes a relative snapshot path relative to `base`, the directory of the
/// config file that named it. `~` is expanded first.
fn anchor_snapshot_path(config: &mut Config, base: &Path) {
    if let Some(snapshot) = config.data.snapshot.as_mut() {
        let expanded = PathBuf::from(shellexpand::tilde(snapshot.as_str()).as_ref());
        if expanded.is_relative() {
            *snapshot = base.join(expanded).to_string_lossy().into_owned();
            debug!("Anchored project snapshot path: {}", snapshot);
        }
    }
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    if let Some(snapshot) = config.data.snapshot.as_mut() {
        *snapshot = shellexpand::tilde(snapshot.as_str()).into_owned();
        debug!("Expanded snapshot path: {}", snapshot);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    debug!("Validating final configuration...");
    // The snapshot path is checked by `Snapshot::resolve`, and only when no
    // `--data` path takes precedence.
    let p = config.simulation.error_probability;
    if !(0.0..=1.0).contains(&p) {
        return Err(anyhow!(OstrichError::Config(format!(
            "simulation.error_probability must be between 0 and 1, got {}.",
            p
        ))));
    }
    if config.simulation.interval_ms == 0 {
        return Err(anyhow!(OstrichError::Config(
            "simulation.interval_ms must be greater than zero.".to_string()
        )));
    }
    if config.chat.assistant_name.trim().is_empty() {
        return Err(anyhow!(OstrichError::Config(
            "chat.assistant_name cannot be empty.".to_string()
        )));
    }
    debug!("Configuration validation successful.");
    Ok(())
}
