//! `sa-core` — foundational types for the single-runway airport simulator.
//!
//! This crate is a dependency of every other `sa-*` crate.  It intentionally
//! has no `sa-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                      |
//! |------------|-----------------------------------------------|
//! | [`ids`]    | `FlightId`                                    |
//! | [`time`]   | `Tick`                                        |
//! | [`rng`]    | `SimRng` (seed master), `BooleanSource`       |
//! | [`config`] | `SimConfig` + validation                      |
//! | [`error`]  | `SaError`, `SaResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                  |
//! |---------|---------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types so   |
//!           | applications can load `SimConfig` from a JSON file.     |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{SaError, SaResult};
pub use ids::FlightId;
pub use rng::{BooleanSource, SimRng};
pub use time::Tick;
