//! rush_hour — a busy morning at a single-runway airport.
//!
//! Runs one simulation with arrival pressure well above what one runway
//! can absorb, writes per-tick CSVs to `output/rush_hour/`, and prints a
//! narrated log plus the final report.  Pass a JSON file path to override
//! the built-in scenario:
//!
//!     cargo run -p rush_hour -- my-scenario.json

use std::fs::File;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use sa_airport::{Flight, FlightAction};
use sa_core::{SimConfig, Tick};
use sa_output::{report, CsvWriter, OutputWriter, SimOutputObserver};
use sa_sim::{SimObserver, SimulationResult, Simulator, TickStats};

// ── Built-in scenario ─────────────────────────────────────────────────────────

const SIMULATION_LENGTH:   u64 = 480; // one 8-hour shift at 1-minute ticks
const LANDING_PROBABILITY: f64 = 0.35;
const TAKEOFF_PROBABILITY: f64 = 0.40;
const LANDING_TICKS:       u32 = 3;
const TAKEOFF_TICKS:       u32 = 2;
const SEED:                u64 = 42;

fn builtin_config() -> SimConfig {
    SimConfig {
        simulation_length:       SIMULATION_LENGTH,
        landing_probability:     LANDING_PROBABILITY,
        takeoff_probability:     TAKEOFF_PROBABILITY,
        landing_ticks:           LANDING_TICKS,
        takeoff_ticks:           TAKEOFF_TICKS,
        initial_wait_ticks:      0,
        delta_wait_ticks:        1,
        seed:                    SEED,
        snapshot_interval_ticks: 10,
    }
}

// ── Console narration layered over the CSV observer ───────────────────────────

struct ConsoleObserver<W: OutputWriter> {
    inner:       SimOutputObserver<W>,
    event_lines: usize,
}

impl<W: OutputWriter> ConsoleObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, event_lines: 0 }
    }

    fn say(&mut self, line: String) {
        self.event_lines += 1;
        println!("{line}");
    }
}

impl<W: OutputWriter> SimObserver for ConsoleObserver<W> {
    fn on_flight_created(&mut self, tick: Tick, flight: &Flight) {
        self.say(format!("{tick:>5}  {} requests {}", flight.id(), flight.action()));
    }

    fn on_admitted(&mut self, tick: Tick, flight: &Flight) {
        self.say(format!(
            "{tick:>5}  {} cleared for {} ({} ticks, waited {})",
            flight.id(),
            flight.action(),
            flight.required_ticks(),
            flight.wait_ticks(),
        ));
    }

    fn on_completed(&mut self, tick: Tick, flight: &Flight) {
        let done = match flight.action() {
            FlightAction::Landing   => "landed",
            FlightAction::TakingOff => "taken off",
        };
        self.say(format!("{tick:>5}  {} has {done}", flight.id()));
    }

    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        self.inner.on_tick_end(tick, stats);
    }

    fn on_snapshot(
        &mut self,
        tick:   Tick,
        queues: &sa_airport::FlightQueues,
        runway: &sa_airport::Runway,
    ) {
        self.inner.on_snapshot(tick, queues, runway);
    }

    fn on_sim_end(&mut self, result: &SimulationResult) {
        self.inner.on_sim_end(result);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("open config {path}"))?;
            serde_json::from_reader(file).with_context(|| format!("parse config {path}"))?
        }
        None => builtin_config(),
    };

    println!("=== rush_hour — single-runway airport simulator ===");
    println!(
        "Ticks: {}  |  p(land): {}  |  p(takeoff): {}  |  Seed: {}",
        config.simulation_length,
        config.landing_probability,
        config.takeoff_probability,
        config.seed,
    );
    println!();

    // 1. Output directory + CSV writer.
    std::fs::create_dir_all("output/rush_hour")?;
    let writer = CsvWriter::new(Path::new("output/rush_hour"))?;
    let mut obs = ConsoleObserver::new(SimOutputObserver::new(writer));

    // 2. Build and run.
    let sim = Simulator::new(config)?;
    let t0 = Instant::now();
    let result = sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 3. Report.
    println!();
    println!(
        "Simulation complete in {:.3} s ({} event lines)",
        elapsed.as_secs_f64(),
        obs.event_lines,
    );
    println!("  output/rush_hour/queue_snapshots.csv");
    println!("  output/rush_hour/tick_summaries.csv");
    println!();
    print!("{}", report::render(&result));

    Ok(())
}
