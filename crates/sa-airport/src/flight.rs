//! The flight entity.

use std::fmt;

use sa_core::{FlightId, SimConfig};

// ── FlightAction ──────────────────────────────────────────────────────────────

/// What a flight wants from the runway.  Fixed at creation.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FlightAction {
    Landing,
    TakingOff,
}

impl FlightAction {
    #[inline]
    pub fn is_landing(self) -> bool {
        matches!(self, FlightAction::Landing)
    }
}

impl fmt::Display for FlightAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightAction::Landing   => write!(f, "landing"),
            FlightAction::TakingOff => write!(f, "taking off"),
        }
    }
}

// ── Flight ────────────────────────────────────────────────────────────────────

/// One flight, from creation to completion (or crash).
///
/// Service durations are copied out of the configuration at creation time,
/// so a flight is self-contained: the runway never needs to see the config.
/// Only the duration matching [`action`][Self::action] is ever consulted.
///
/// The wait counter is the only mutable state, and only
/// [`advance_wait`][Self::advance_wait] touches it; once the flight is
/// admitted to the runway it leaves the queues and its wait is frozen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flight {
    id:            FlightId,
    action:        FlightAction,
    wait_ticks:    u64,
    landing_ticks: u32,
    takeoff_ticks: u32,
}

impl Flight {
    /// Create a flight with a fresh id and the configured durations and
    /// initial wait.
    pub fn new(id: FlightId, action: FlightAction, config: &SimConfig) -> Self {
        Self {
            id,
            action,
            wait_ticks:    config.initial_wait_ticks,
            landing_ticks: config.landing_ticks,
            takeoff_ticks: config.takeoff_ticks,
        }
    }

    #[inline]
    pub fn id(&self) -> FlightId {
        self.id
    }

    #[inline]
    pub fn action(&self) -> FlightAction {
        self.action
    }

    /// Accumulated waiting time in ticks.
    #[inline]
    pub fn wait_ticks(&self) -> u64 {
        self.wait_ticks
    }

    /// Ticks this flight occupies the runway: the duration matching its
    /// action.
    #[inline]
    pub fn required_ticks(&self) -> u32 {
        match self.action {
            FlightAction::Landing   => self.landing_ticks,
            FlightAction::TakingOff => self.takeoff_ticks,
        }
    }

    /// Add `delta` ticks of waiting time.
    pub fn advance_wait(&mut self, delta: u64) {
        self.wait_ticks += delta;
    }
}
