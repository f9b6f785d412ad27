//! # Ostrich Live-Update Simulation
//!
//! File: cli/src/data/simulation.rs
//!
//! ## Overview
//!
//! Makes a snapshot look alive: on every tick each integration is marked as
//! just synced, gains a few successful runs and occasionally an error. The
//! numbers mean nothing and nothing else reads them as a signal; the copilot
//! simply sees whatever counters are current when it is asked.
//!
//! The ticker in `ostrich simulate` drives `tick` from a `tokio::time::interval`.
//! Passing a seeded `StdRng` makes a run reproducible.
//!
use crate::core::config::SimulationConfig;
use crate::data::model::Integration;
use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::trace;

/// Per-tick randomization bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickParams {
    pub max_success_increment: u32,
    pub error_probability: f64,
}

impl Default for TickParams {
    fn default() -> Self {
        Self {
            max_success_increment: 2,
            error_probability: 0.1,
        }
    }
}

impl From<&SimulationConfig> for TickParams {
    fn from(cfg: &SimulationConfig) -> Self {
        Self {
            max_success_increment: cfg.max_success_increment,
            error_probability: cfg.error_probability,
        }
    }
}

/// Applies one round of random counter updates to every integration.
pub fn tick<R: Rng>(
    integrations: &mut [Integration],
    rng: &mut R,
    now: DateTime<Utc>,
    params: TickParams,
) {
    for integration in integrations.iter_mut() {
        let successes = rng.gen_range(0..=params.max_success_increment);
        let error = params.error_probability > 0.0 && rng.gen_bool(params.error_probability);
        integration.last_sync = now;
        integration.success_count = integration
            .success_count
            .saturating_add(u64::from(successes));
        if error {
            integration.error_count = integration.error_count.saturating_add(1);
        }
        trace!(
            id = %integration.id,
            successes,
            error,
            "Simulated tick"
        );
    }
}
