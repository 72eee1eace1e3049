//! Simulation observer trait for progress reporting and data collection.
//!
//! The tick loop computes; observers present.  Everything the original
//! design logged from inside the model — creations, admissions, the
//! service countdown, completions — arrives here as a structured callback
//! instead, so the core stays a pure computation over its inputs.

use sa_airport::{Flight, FlightAction, FlightQueues, Runway};
use sa_core::Tick;

use crate::result::SimulationResult;

/// Per-tick statistics passed to [`SimObserver::on_tick_end`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickStats {
    /// Flights waiting to land after this tick.
    pub landing_queue: usize,
    /// Flights waiting to take off after this tick.
    pub takeoff_queue: usize,
    /// Whether the runway is occupied after this tick.
    pub runway_busy: bool,
    /// Running total of completed landings.
    pub landed: u64,
    /// Running total of completed take-offs.
    pub taken_off: u64,
}

/// Callbacks invoked by [`Simulator::step`][crate::Simulator::step] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl SimObserver for ProgressPrinter {
///     fn on_completed(&mut self, tick: Tick, flight: &Flight) {
///         println!("{tick}: {} finished {}", flight.id(), flight.action());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A new flight was created this tick and is about to be enqueued.
    fn on_flight_created(&mut self, _tick: Tick, _flight: &Flight) {}

    /// A flight was popped from its queue and assigned to the runway.
    fn on_admitted(&mut self, _tick: Tick, _flight: &Flight) {}

    /// The occupant is mid-service with `remaining` ticks still to go
    /// after this one.
    fn on_service_progress(&mut self, _tick: Tick, _action: FlightAction, _remaining: u32) {}

    /// The occupant finished its action this tick and left the runway.
    fn on_completed(&mut self, _tick: Tick, _flight: &Flight) {}

    /// Called at the end of each tick with the post-tick statistics.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &TickStats) {}

    /// Called at snapshot intervals (every `config.snapshot_interval_ticks`
    /// ticks) with read-only access to the queues and runway, so output
    /// writers can record waiting-flight state without the simulator
    /// knowing about any specific output format.
    fn on_snapshot(&mut self, _tick: Tick, _queues: &FlightQueues, _runway: &Runway) {}

    /// Called once after the final tick, with the finished result (crash
    /// detail included, if the horizon caught a flight mid-service).
    fn on_sim_end(&mut self, _result: &SimulationResult) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
