//! `sa-airport` — the physical model of the airport.
//!
//! | Module     | Contents                                        |
//! |------------|-------------------------------------------------|
//! | [`flight`] | `Flight`, `FlightAction`                        |
//! | [`runway`] | `Runway` state machine, `ServiceOutcome`        |
//! | [`queue`]  | `FlightQueues` — landing/take-off FIFOs         |
//!
//! Ownership mirrors the physical reality: a flight is owned by exactly one
//! queue while waiting, then moves into the [`Runway`] for its whole service
//! duration, then is dropped on completion.  There is no registry of
//! in-flight entities — a flight that is nowhere is gone.

pub mod flight;
pub mod queue;
pub mod runway;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use flight::{Flight, FlightAction};
pub use queue::FlightQueues;
pub use runway::{Runway, ServiceOutcome};
