//! The `Simulator` struct and its tick loop.

use sa_airport::{Flight, FlightAction, FlightQueues, Runway, ServiceOutcome};
use sa_core::{BooleanSource, FlightId, SimConfig, SimRng, Tick};

use crate::observer::{SimObserver, TickStats};
use crate::result::{CrashRecord, SimulationResult};
use crate::SimResult;

/// The main simulation runner.
///
/// Owns the single [`Runway`] instance for the lifetime of the run (the
/// resource is an explicit field, never ambient state), both waiting
/// queues, and the two independent Bernoulli arrival sources.  State fields
/// are public so tests and observers can inspect mid-run state directly.
///
/// Create via [`Simulator::new`]; drive with [`run`][Self::run] or tick by
/// tick with [`step`][Self::step].
pub struct Simulator {
    /// Global configuration (tick bound, probabilities, durations, seed).
    pub config: SimConfig,

    /// The one shared resource.
    pub runway: Runway,

    /// Landing and take-off FIFOs.
    pub queues: FlightQueues,

    /// Next tick to process.  `run` stops once this exceeds
    /// `config.simulation_length`.
    pub tick: Tick,

    /// Flights created so far; doubles as the id allocator.
    pub flights_created: u64,

    /// Completed landings.
    pub landed: u64,

    /// Completed take-offs.
    pub taken_off: u64,

    wants_takeoff: BooleanSource,
    wants_landing: BooleanSource,
}

impl Simulator {
    // ── Construction ──────────────────────────────────────────────────────

    /// Validate `config` and build a simulator positioned at tick 0.
    ///
    /// The arrival sources are seeded as distinct child streams of the
    /// master seed, so the draw count on one stream never perturbs the
    /// other.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;

        let mut master = SimRng::new(config.seed);
        let wants_takeoff = BooleanSource::new(config.takeoff_probability, master.child(0))?;
        let wants_landing = BooleanSource::new(config.landing_probability, master.child(1))?;

        Ok(Self {
            config,
            runway:          Runway::new(),
            queues:          FlightQueues::new(),
            tick:            Tick::ZERO,
            flights_created: 0,
            landed:          0,
            taken_off:       0,
            wants_takeoff,
            wants_landing,
        })
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick through `config.simulation_length`
    /// (inclusive), then tear down: a flight still mid-service when the
    /// horizon ends is recorded as a crash in the result — a modeled
    /// outcome, not an error.
    ///
    /// Consumes the simulator; the runway's lifetime is the run's lifetime.
    pub fn run<O: SimObserver>(mut self, observer: &mut O) -> SimulationResult {
        while self.tick.0 <= self.config.simulation_length {
            self.step(observer);
        }
        self.into_result(observer)
    }

    /// Process exactly one tick and advance the tick counter.
    ///
    /// Exposed for incremental stepping in tests; [`run`][Self::run] is the
    /// normal driver.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) {
        let now = self.tick;
        observer.on_tick_start(now);

        // ── Phase 1: arrivals ─────────────────────────────────────────────
        //
        // Draw order is fixed (take-off, then landing) so a given seed
        // always yields the same arrival sequence.
        if self.wants_takeoff.sample() {
            self.spawn_flight(FlightAction::TakingOff, now, observer);
        }
        if self.wants_landing.sample() {
            self.spawn_flight(FlightAction::Landing, now, observer);
        }

        // ── Phase 2: admission or service, never both ─────────────────────
        //
        // The tick a flight is assigned is its first tick of occupancy, so
        // an assignment must not also advance service.
        if self.runway.is_free() {
            if let Some(flight) = self.queues.admit_next() {
                observer.on_admitted(now, &flight);
                self.runway.assign(flight);
            }
        } else {
            match self.runway.advance_tick() {
                ServiceOutcome::Completed(flight) => {
                    match flight.action() {
                        FlightAction::Landing   => self.landed += 1,
                        FlightAction::TakingOff => self.taken_off += 1,
                    }
                    observer.on_completed(now, &flight);
                }
                ServiceOutcome::InProgress { action, remaining } => {
                    observer.on_service_progress(now, action, remaining);
                }
            }
        }

        // ── Phase 3: wait accrual ─────────────────────────────────────────
        //
        // Only flights still queued accrue; a flight admitted in phase 2
        // left its queue there, which freezes its wait.
        self.queues.accrue_wait(self.config.delta_wait_ticks);

        observer.on_tick_end(now, &self.tick_stats());
        if self.config.snapshot_interval_ticks > 0
            && now.0.is_multiple_of(self.config.snapshot_interval_ticks)
        {
            observer.on_snapshot(now, &self.queues, &self.runway);
        }

        self.tick = now + 1;
    }

    /// Current per-tick statistics snapshot.
    pub fn tick_stats(&self) -> TickStats {
        TickStats {
            landing_queue: self.queues.landing_len(),
            takeoff_queue: self.queues.takeoff_len(),
            runway_busy:   !self.runway.is_free(),
            landed:        self.landed,
            taken_off:     self.taken_off,
        }
    }

    // ── Teardown ──────────────────────────────────────────────────────────

    fn into_result<O: SimObserver>(self, observer: &mut O) -> SimulationResult {
        // The runway is decommissioned with the simulator; an occupant
        // caught mid-service has nowhere left to finish.
        let crash = self.runway.occupant().map(|flight| CrashRecord {
            flight:         flight.id(),
            action:         flight.action(),
            required_ticks: flight.required_ticks(),
        });

        let result = SimulationResult {
            landed:              self.landed,
            taken_off:           self.taken_off,
            waiting_to_land:     self.queues.landing_len(),
            waiting_to_take_off: self.queues.takeoff_len(),
            flights_created:     self.flights_created,
            crash,
        };
        observer.on_sim_end(&result);
        result
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn spawn_flight<O: SimObserver>(
        &mut self,
        action:   FlightAction,
        now:      Tick,
        observer: &mut O,
    ) {
        let id = FlightId(self.flights_created as u32);
        let flight = Flight::new(id, action, &self.config);
        self.flights_created += 1;
        observer.on_flight_created(now, &flight);
        self.queues.enqueue(flight);
    }
}
