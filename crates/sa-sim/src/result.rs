//! Plain data describing a finished run.

use sa_airport::FlightAction;
use sa_core::FlightId;

/// A flight caught mid-service when the simulation horizon ended.
///
/// This is the "runway decommissioned mid-operation" outcome — recorded
/// data, deliberately distinct from the double-booking invariant violation,
/// which panics and never produces a result at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrashRecord {
    pub flight: FlightId,
    pub action: FlightAction,
    /// Ticks the flight needed on the runway for its action.
    pub required_ticks: u32,
}

/// Final counters and queue sizes for one simulation run.
///
/// Everything reporting needs is a queryable field here; no information is
/// only available as log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationResult {
    /// Flights that completed a landing.
    pub landed: u64,
    /// Flights that completed a take-off.
    pub taken_off: u64,
    /// Flights still in the landing queue at the horizon.
    pub waiting_to_land: usize,
    /// Flights still in the take-off queue at the horizon.
    pub waiting_to_take_off: usize,
    /// Total flights ever created.
    pub flights_created: u64,
    /// `Some` iff the horizon ended with a flight still on the runway.
    pub crash: Option<CrashRecord>,
}

impl SimulationResult {
    /// `true` iff the run ended with a flight mid-service.
    pub fn crashed(&self) -> bool {
        self.crash.is_some()
    }

    /// Flights still waiting in the airport, both queues combined.
    pub fn total_waiting(&self) -> usize {
        self.waiting_to_land + self.waiting_to_take_off
    }
}
