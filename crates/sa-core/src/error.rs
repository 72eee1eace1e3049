//! Configuration error type.
//!
//! Only construction-time data problems live here.  Runtime invariant
//! violations (double-booking the runway) are programming defects and
//! panic instead of returning a value — see `sa-airport`.

use thiserror::Error;

/// Rejection of an invalid configuration value.
#[derive(Debug, Error)]
pub enum SaError {
    #[error("probability {value} is outside [0, 1]")]
    InvalidProbability { value: f64 },

    #[error("{what} must be at least 1 tick")]
    ZeroDuration { what: &'static str },
}

/// Shorthand result type for all `sa-*` crates.
pub type SaResult<T> = Result<T, SaError>;
