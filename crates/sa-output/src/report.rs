//! Human-readable end-of-run summary.
//!
//! Pure formatting over [`SimulationResult`] — the counters are already
//! queryable data, this just lays them out for a terminal.

use std::fmt::Write;

use sa_sim::SimulationResult;

/// Render the run summary as a multi-line string.
pub fn render(result: &SimulationResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{:>6} flights created", result.flights_created);
    let _ = writeln!(out, "{:>6} flights landed", result.landed);
    let _ = writeln!(out, "{:>6} flights taken off", result.taken_off);
    let _ = writeln!(out, "{:>6} flights waiting to land", result.waiting_to_land);
    let _ = writeln!(out, "{:>6} flights waiting to take off", result.waiting_to_take_off);
    let _ = writeln!(out, "{:>6} flights still in the airport", result.total_waiting());

    match &result.crash {
        None => {
            let _ = writeln!(out, "runway clear at end of simulation");
        }
        Some(crash) => {
            let _ = writeln!(
                out,
                "CRASH: {} was still {} when the runway shut down ({} ticks required)",
                crash.flight, crash.action, crash.required_ticks,
            );
        }
    }

    out
}
