//! Integration tests for sa-sim.

use sa_airport::{Flight, FlightAction, FlightQueues, Runway};
use sa_core::{FlightId, SimConfig, Tick};

use crate::observer::{NoopObserver, SimObserver, TickStats};
use crate::result::SimulationResult;
use crate::sim::Simulator;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Config with both arrival streams silenced.
fn quiet_config(simulation_length: u64) -> SimConfig {
    SimConfig {
        simulation_length,
        landing_probability: 0.0,
        takeoff_probability: 0.0,
        ..SimConfig::default()
    }
}

/// Records every flight-level event the simulator reports.
#[derive(Default)]
struct EventLog {
    created:   Vec<(Tick, FlightId, FlightAction)>,
    admitted:  Vec<(Tick, FlightId)>,
    completed: Vec<(Tick, FlightId, FlightAction)>,
    snapshots: Vec<Tick>,
    results:   Vec<SimulationResult>,
}

impl SimObserver for EventLog {
    fn on_flight_created(&mut self, tick: Tick, flight: &Flight) {
        self.created.push((tick, flight.id(), flight.action()));
    }
    fn on_admitted(&mut self, tick: Tick, flight: &Flight) {
        self.admitted.push((tick, flight.id()));
    }
    fn on_completed(&mut self, tick: Tick, flight: &Flight) {
        self.completed.push((tick, flight.id(), flight.action()));
    }
    fn on_snapshot(&mut self, tick: Tick, _queues: &FlightQueues, _runway: &Runway) {
        self.snapshots.push(tick);
    }
    fn on_sim_end(&mut self, result: &SimulationResult) {
        self.results.push(result.clone());
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn valid_config_builds() {
        assert!(Simulator::new(SimConfig::default()).is_ok());
    }

    #[test]
    fn bad_probability_rejected() {
        let config = SimConfig { landing_probability: 1.5, ..SimConfig::default() };
        assert!(Simulator::new(config).is_err());
    }

    #[test]
    fn zero_duration_rejected() {
        let config = SimConfig { takeoff_ticks: 0, ..SimConfig::default() };
        assert!(Simulator::new(config).is_err());
    }
}

// ── Basic run ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn quiet_airport_stays_empty() {
        let result = Simulator::new(quiet_config(5))
            .unwrap()
            .run(&mut NoopObserver);

        assert_eq!(result.flights_created, 0);
        assert_eq!(result.landed, 0);
        assert_eq!(result.taken_off, 0);
        assert_eq!(result.total_waiting(), 0);
        assert!(!result.crashed());
    }

    /// Observer that counts tick boundaries.
    #[derive(Default)]
    struct TickCounter {
        starts: usize,
        ends:   usize,
    }
    impl SimObserver for TickCounter {
        fn on_tick_start(&mut self, _t: Tick) { self.starts += 1; }
        fn on_tick_end(&mut self, _t: Tick, _s: &TickStats) { self.ends += 1; }
    }

    #[test]
    fn inclusive_bound_runs_length_plus_one_ticks() {
        // The loop bound is `t <= simulation_length`, preserved from the
        // original design: 7 means 8 iterations.
        let mut obs = TickCounter::default();
        let _ = Simulator::new(quiet_config(7)).unwrap().run(&mut obs);
        assert_eq!(obs.starts, 8);
        assert_eq!(obs.ends, 8);
    }

    #[test]
    fn zero_length_still_processes_tick_zero() {
        let mut obs = TickCounter::default();
        let _ = Simulator::new(quiet_config(0)).unwrap().run(&mut obs);
        assert_eq!(obs.starts, 1);
    }

    #[test]
    fn same_seed_reproduces_results() {
        let config = SimConfig {
            simulation_length:   200,
            landing_probability: 0.4,
            takeoff_probability: 0.5,
            seed:                777,
            ..SimConfig::default()
        };
        let a = Simulator::new(config.clone()).unwrap().run(&mut NoopObserver);
        let b = Simulator::new(config).unwrap().run(&mut NoopObserver);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge() {
        let config = SimConfig {
            simulation_length:   100,
            landing_probability: 0.5,
            takeoff_probability: 0.5,
            seed:                1,
            ..SimConfig::default()
        };
        let mut log_a = EventLog::default();
        let mut log_b = EventLog::default();
        let _ = Simulator::new(config.clone()).unwrap().run(&mut log_a);
        let _ = Simulator::new(SimConfig { seed: 2, ..config }).unwrap().run(&mut log_b);
        assert_ne!(log_a.created, log_b.created);
    }

    #[test]
    fn snapshot_cadence_honored() {
        let config = SimConfig {
            snapshot_interval_ticks: 2,
            ..quiet_config(5)
        };
        let mut log = EventLog::default();
        let _ = Simulator::new(config).unwrap().run(&mut log);
        assert_eq!(log.snapshots, vec![Tick(0), Tick(2), Tick(4)]);
    }

    #[test]
    fn snapshots_disabled_by_zero_interval() {
        let config = SimConfig {
            snapshot_interval_ticks: 0,
            ..quiet_config(5)
        };
        let mut log = EventLog::default();
        let _ = Simulator::new(config).unwrap().run(&mut log);
        assert!(log.snapshots.is_empty());
    }
}

// ── Admission policy ──────────────────────────────────────────────────────────

#[cfg(test)]
mod admission_tests {
    use super::*;

    #[test]
    fn landing_admitted_before_takeoff() {
        // Both streams fire every tick; the take-off flight is even created
        // first (draw order), yet the landing flight must win the runway.
        let config = SimConfig {
            simulation_length:   0,
            landing_probability: 1.0,
            takeoff_probability: 1.0,
            landing_ticks:       1,
            takeoff_ticks:       1,
            ..SimConfig::default()
        };
        let mut log = EventLog::default();
        let _ = Simulator::new(config).unwrap().run(&mut log);

        assert_eq!(
            log.created,
            vec![
                (Tick(0), FlightId(0), FlightAction::TakingOff),
                (Tick(0), FlightId(1), FlightAction::Landing),
            ]
        );
        // The landing flight (id 1) is admitted despite arriving second.
        assert_eq!(log.admitted, vec![(Tick(0), FlightId(1))]);
    }

    #[test]
    fn deterministic_event_timeline() {
        // landing_probability = 1, takeoff silent, 1-tick landings:
        //   T0: create F0, admit F0
        //   T1: create F1, F0 completes
        //   T2: create F2, admit F1
        //   T3: create F3, F1 completes
        let config = SimConfig {
            simulation_length:   3,
            landing_probability: 1.0,
            takeoff_probability: 0.0,
            landing_ticks:       1,
            ..SimConfig::default()
        };
        let mut log = EventLog::default();
        let result = Simulator::new(config).unwrap().run(&mut log);

        assert_eq!(log.admitted, vec![(Tick(0), FlightId(0)), (Tick(2), FlightId(1))]);
        assert_eq!(
            log.completed,
            vec![
                (Tick(1), FlightId(0), FlightAction::Landing),
                (Tick(3), FlightId(1), FlightAction::Landing),
            ]
        );
        assert_eq!(result.landed, 2);
        assert_eq!(result.flights_created, 4);
        assert_eq!(result.waiting_to_land, 2);
        assert!(!result.crashed(), "runway freed on the final tick");
    }

    #[test]
    fn admission_and_service_never_share_a_tick() {
        // With 1-tick landings and an arrival every tick, admissions and
        // completions must strictly alternate: admit on even ticks,
        // complete on odd ticks, never both on one tick.
        let config = SimConfig {
            simulation_length:   20,
            landing_probability: 1.0,
            takeoff_probability: 0.0,
            landing_ticks:       1,
            ..SimConfig::default()
        };
        let mut log = EventLog::default();
        let _ = Simulator::new(config).unwrap().run(&mut log);

        let admit_ticks: Vec<u64> = log.admitted.iter().map(|(t, _)| t.0).collect();
        let complete_ticks: Vec<u64> = log.completed.iter().map(|(t, _, _)| t.0).collect();
        assert!(admit_ticks.iter().all(|t| t % 2 == 0));
        assert!(complete_ticks.iter().all(|t| t % 2 == 1));
    }
}

// ── Conservation ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod conservation_tests {
    use super::*;

    #[test]
    fn every_flight_is_somewhere() {
        // At every tick boundary: completed + queued + on-runway equals
        // the number of flights ever created.
        let config = SimConfig {
            simulation_length:   300,
            landing_probability: 0.5,
            takeoff_probability: 0.4,
            seed:                9,
            ..SimConfig::default()
        };
        let mut sim = Simulator::new(config).unwrap();

        while sim.tick.0 <= sim.config.simulation_length {
            sim.step(&mut NoopObserver);
            let on_runway = u64::from(!sim.runway.is_free());
            assert_eq!(
                sim.landed + sim.taken_off + sim.queues.len() as u64 + on_runway,
                sim.flights_created,
                "conservation violated at {}",
                sim.tick,
            );
        }
    }

    #[test]
    fn result_accounts_for_crashed_occupant() {
        // A crashed flight is excluded from the waiting counts but present
        // in the crash record, so the totals still reconcile.
        let config = SimConfig {
            simulation_length:   50,
            landing_probability: 0.9,
            takeoff_probability: 0.9,
            landing_ticks:       4,
            takeoff_ticks:       3,
            seed:                3,
            ..SimConfig::default()
        };
        let result = Simulator::new(config).unwrap().run(&mut NoopObserver);

        let in_crash = u64::from(result.crashed());
        assert_eq!(
            result.landed
                + result.taken_off
                + result.total_waiting() as u64
                + in_crash,
            result.flights_created,
        );
    }
}

// ── Wait accrual ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod wait_tests {
    use super::*;

    #[test]
    fn queued_flight_accrues_delta_per_tick() {
        // A long-running occupant pins every later arrival in the queue, so
        // the flight created at T1 accrues exactly delta per elapsed tick.
        let config = SimConfig {
            simulation_length:   100,
            landing_probability: 1.0,
            takeoff_probability: 0.0,
            landing_ticks:       100,
            initial_wait_ticks:  10,
            delta_wait_ticks:    2,
            ..SimConfig::default()
        };
        let mut sim = Simulator::new(config).unwrap();

        // Process ticks 0..=6: F1 is created at T1 and accrues at T1..=T6.
        for _ in 0..7 {
            sim.step(&mut NoopObserver);
        }
        let f1 = sim
            .queues
            .iter()
            .find(|f| f.id() == FlightId(1))
            .expect("F1 still queued");
        assert_eq!(f1.wait_ticks(), 10 + 6 * 2);
    }

    #[test]
    fn admitted_flight_wait_is_frozen() {
        // F0 is admitted the tick it arrives; its wait must stay at the
        // initial value while queue mates keep accruing.
        let config = SimConfig {
            simulation_length:   100,
            landing_probability: 1.0,
            takeoff_probability: 0.0,
            landing_ticks:       100,
            initial_wait_ticks:  7,
            delta_wait_ticks:    3,
            ..SimConfig::default()
        };
        let mut sim = Simulator::new(config).unwrap();
        for _ in 0..5 {
            sim.step(&mut NoopObserver);
        }
        let occupant = sim.runway.occupant().expect("F0 on the runway");
        assert_eq!(occupant.id(), FlightId(0));
        assert_eq!(occupant.wait_ticks(), 7);
    }
}

// ── Horizon-end crash ─────────────────────────────────────────────────────────

#[cfg(test)]
mod crash_tests {
    use super::*;

    #[test]
    fn horizon_end_with_occupant_records_crash() {
        // One tick total: the only landing flight is admitted at T0 and the
        // loop ends before a second tick can clear it.
        let config = SimConfig {
            simulation_length:   0,
            landing_probability: 1.0,
            takeoff_probability: 0.0,
            landing_ticks:       1,
            ..SimConfig::default()
        };
        let result = Simulator::new(config).unwrap().run(&mut NoopObserver);

        assert_eq!(result.flights_created, 1);
        assert_eq!(result.landed, 0);
        assert_eq!(result.total_waiting(), 0);

        let crash = result.crash.expect("occupant at horizon end");
        assert_eq!(crash.flight, FlightId(0));
        assert_eq!(crash.action, FlightAction::Landing);
        assert_eq!(crash.required_ticks, 1);
    }

    #[test]
    fn crash_reported_to_observer() {
        let config = SimConfig {
            simulation_length:   0,
            takeoff_probability: 1.0,
            landing_probability: 0.0,
            takeoff_ticks:       2,
            ..SimConfig::default()
        };
        let mut log = EventLog::default();
        let result = Simulator::new(config).unwrap().run(&mut log);

        assert_eq!(log.results.len(), 1);
        assert_eq!(log.results[0], result);
        assert_eq!(result.crash.unwrap().action, FlightAction::TakingOff);
    }

    #[test]
    fn clean_horizon_has_no_crash() {
        let result = Simulator::new(quiet_config(10))
            .unwrap()
            .run(&mut NoopObserver);
        assert!(result.crash.is_none());
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod entry_tests {
    use super::*;

    #[test]
    fn run_function_is_equivalent_to_manual_drive() {
        let config = SimConfig { seed: 11, ..SimConfig::default() };
        let via_fn = crate::run(config.clone()).unwrap();
        let via_sim = Simulator::new(config).unwrap().run(&mut NoopObserver);
        assert_eq!(via_fn, via_sim);
    }

    #[test]
    fn run_function_rejects_bad_config() {
        let config = SimConfig { landing_probability: -1.0, ..SimConfig::default() };
        assert!(crate::run(config).is_err());
    }
}
