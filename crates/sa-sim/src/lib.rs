//! `sa-sim` — tick loop orchestrator for the airport simulator.
//!
//! # Three-phase tick loop
//!
//! ```text
//! for tick in 0..=config.simulation_length:        (inclusive bound!)
//!   ① Arrivals  — draw the take-off source, then the landing source;
//!                 each success creates a flight and enqueues it.
//!   ② Admission / service — mutually exclusive:
//!                 runway free  → pop landing head (else take-off head),
//!                                assign to runway
//!                 runway busy  → advance service one tick; count a
//!                                completion into landed / taken_off
//!   ③ Accrual   — every flight still queued gains delta_wait_ticks.
//! then:
//!   occupant still on the runway → record a crash in the result.
//! ```
//!
//! The admission and service arms never both run in one tick: a flight
//! occupies the runway for its whole declared duration starting the tick it
//! is assigned, so the assignment tick must not also advance service.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use sa_core::SimConfig;
//! use sa_sim::{NoopObserver, Simulator};
//!
//! let result = Simulator::new(SimConfig::default())?.run(&mut NoopObserver);
//! println!("{} landed, {} took off", result.landed, result.taken_off);
//! ```

pub mod error;
pub mod observer;
pub mod result;
pub mod sim;

#[cfg(test)]
mod tests;

pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver, TickStats};
pub use result::{CrashRecord, SimulationResult};
pub use sim::Simulator;

use sa_core::SimConfig;

/// Run one whole simulation: validate `config`, drive every tick with no
/// observer, and return the final result.
///
/// The single-call entry point; use [`Simulator`] directly to attach
/// observers or step manually.
pub fn run(config: SimConfig) -> SimResult<SimulationResult> {
    Ok(Simulator::new(config)?.run(&mut NoopObserver))
}
