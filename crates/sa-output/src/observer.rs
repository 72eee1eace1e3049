//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sa_airport::{FlightQueues, Runway};
use sa_core::Tick;
use sa_sim::{SimObserver, SimulationResult, TickStats};

use crate::row::{QueueSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes queue snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        let row = TickSummaryRow {
            tick:            tick.0,
            landing_queue:   stats.landing_queue as u64,
            takeoff_queue:   stats.takeoff_queue as u64,
            runway_busy:     stats.runway_busy,
            landed_total:    stats.landed,
            taken_off_total: stats.taken_off,
        };
        let result = self.writer.write_tick_summary(&row);
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, queues: &FlightQueues, _runway: &Runway) {
        let rows: Vec<QueueSnapshotRow> = queues
            .iter()
            .map(|flight| QueueSnapshotRow {
                tick:       tick.0,
                flight_id:  flight.id().0,
                action:     flight.action(),
                wait_ticks: flight.wait_ticks(),
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _result: &SimulationResult) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
