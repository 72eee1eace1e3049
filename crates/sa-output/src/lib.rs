//! `sa-output` — simulation output for the airport simulator.
//!
//! Two kinds of output:
//!
//! - structured rows written through the [`OutputWriter`] trait (the CSV
//!   backend creates `queue_snapshots.csv` and `tick_summaries.csv`), fed
//!   by [`SimOutputObserver`], which implements `sa_sim::SimObserver`;
//! - a human-readable end-of-run summary from [`report::render`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use sa_output::{CsvWriter, SimOutputObserver, report};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! let result = sim.run(&mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! println!("{}", report::render(&result));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod report;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{QueueSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
