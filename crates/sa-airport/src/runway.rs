//! `Runway` — the one shared resource.
//!
//! # State machine
//!
//! ```text
//! FREE ──assign(flight)──▶ BUSY { occupant, elapsed = 1 }
//!   ▲                        │
//!   └──advance_tick(), elapsed >= required──┘   (occupant handed back)
//! ```
//!
//! At most one flight occupies the runway at any time.  `assign` on a busy
//! runway is a double-booking — a scheduling bug, not a runtime condition —
//! and panics immediately rather than returning an error the caller might
//! swallow.  The same goes for `advance_tick` on a free runway.
//!
//! `elapsed` is only meaningful while busy: it is set to 1 on assignment
//! (the assignment tick is the first tick of occupancy) and incremented once
//! per in-progress `advance_tick` call.

use sa_core::FlightId;

use crate::flight::{Flight, FlightAction};

/// Result of advancing a busy runway by one tick.
#[derive(Debug, PartialEq, Eq)]
pub enum ServiceOutcome {
    /// The occupant finished its action this tick; the runway is free again
    /// and the flight is handed back for accounting.
    Completed(Flight),

    /// The occupant needs `remaining` more ticks after this one.
    InProgress {
        action:    FlightAction,
        remaining: u32,
    },
}

/// Single-runway resource.  One instance per simulation, owned by the
/// simulator for the lifetime of the run.
#[derive(Default)]
pub struct Runway {
    occupant: Option<Flight>,
    elapsed:  u32,
}

impl Runway {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` iff no flight is on the runway.
    #[inline]
    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    /// Put `flight` on the runway for its whole service duration.
    ///
    /// # Panics
    /// Panics if the runway is already occupied.  Two flights on the runway
    /// at the same time is the modeled safety violation; it signals a bug in
    /// the admission logic and must surface immediately.
    pub fn assign(&mut self, flight: Flight) {
        if let Some(current) = &self.occupant {
            panic!(
                "two flights on the runway: {} assigned while {} is still {}",
                flight.id(),
                current.id(),
                current.action(),
            );
        }
        self.elapsed = 1;
        self.occupant = Some(flight);
    }

    /// Advance the occupant's service by one tick.
    ///
    /// The completion test runs before the increment and uses `>=`, so an
    /// occupant whose required duration is 1 (or 0) completes on the very
    /// first call after assignment.
    ///
    /// # Panics
    /// Panics if the runway is free — calling this without an occupant is
    /// the same class of scheduling bug as double-booking.
    pub fn advance_tick(&mut self) -> ServiceOutcome {
        let Some(flight) = self.occupant.take() else {
            panic!("advance_tick called on a free runway");
        };

        let required = flight.required_ticks();
        if self.elapsed >= required {
            self.elapsed = 0;
            return ServiceOutcome::Completed(flight);
        }

        let outcome = ServiceOutcome::InProgress {
            action:    flight.action(),
            remaining: required - self.elapsed,
        };
        self.elapsed += 1;
        self.occupant = Some(flight);
        outcome
    }

    /// Read-only peek at the occupant, if any.  Used at simulation teardown
    /// to detect a flight still mid-service when the horizon ends.
    #[inline]
    pub fn occupant(&self) -> Option<&Flight> {
        self.occupant.as_ref()
    }

    /// Id of the occupant, if any.
    pub fn occupant_id(&self) -> Option<FlightId> {
        self.occupant.as_ref().map(Flight::id)
    }
}
