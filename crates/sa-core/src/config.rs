//! Run configuration.
//!
//! One flat struct constructed by the application and passed to the
//! simulator, enabling multiple independently configured runs in one
//! process.  All constraints are checked once, up front, by
//! [`SimConfig::validate`] — a bad value is rejected before the first tick,
//! never mid-simulation.

use crate::{SaError, SaResult};

/// Top-level simulation configuration.
///
/// Typically built in code or loaded from a JSON file by the application
/// crate (with the `serde` feature) and handed to `Simulator::new`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SimConfig {
    /// Inclusive tick bound: the loop runs for ticks `0..=simulation_length`,
    /// i.e. `simulation_length + 1` iterations.
    pub simulation_length: u64,

    /// Per-tick probability that a new flight requests landing.  Must be in
    /// `[0, 1]`.
    pub landing_probability: f64,

    /// Per-tick probability that a new flight requests take-off.  Must be in
    /// `[0, 1]`.
    pub takeoff_probability: f64,

    /// Ticks a landing flight occupies the runway.  Must be ≥ 1.
    pub landing_ticks: u32,

    /// Ticks a departing flight occupies the runway.  Must be ≥ 1.
    pub takeoff_ticks: u32,

    /// Wait time a flight starts with at creation.
    pub initial_wait_ticks: u64,

    /// Wait-time increment applied to every queued flight each tick.
    pub delta_wait_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Emit a queue snapshot to observers every N ticks.  0 disables
    /// snapshots entirely.
    pub snapshot_interval_ticks: u64,
}

impl SimConfig {
    /// Check every construction-time constraint.
    ///
    /// Returns the first violation found; field order matches declaration
    /// order so error output is stable.
    pub fn validate(&self) -> SaResult<()> {
        for value in [self.landing_probability, self.takeoff_probability] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SaError::InvalidProbability { value });
            }
        }
        if self.landing_ticks == 0 {
            return Err(SaError::ZeroDuration { what: "landing_ticks" });
        }
        if self.takeoff_ticks == 0 {
            return Err(SaError::ZeroDuration { what: "takeoff_ticks" });
        }
        Ok(())
    }
}

impl Default for SimConfig {
    /// A small but busy airport: both streams active, landings slower than
    /// take-offs, a 240-tick horizon.
    fn default() -> Self {
        Self {
            simulation_length:       240,
            landing_probability:     0.30,
            takeoff_probability:     0.30,
            landing_ticks:           3,
            takeoff_ticks:           2,
            initial_wait_ticks:      0,
            delta_wait_ticks:        1,
            seed:                    42,
            snapshot_interval_ticks: 1,
        }
    }
}
