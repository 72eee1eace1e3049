//! Strongly typed, zero-cost flight identifier.

use std::fmt;

/// Identity of one flight for the lifetime of a simulation run.
///
/// Allocated monotonically by the simulator (the creation counter is the
/// id), so an id is never reused within a run.  `Copy + Ord + Hash` so it
/// can be used as a map key or sorted without ceremony; the inner integer
/// is `pub` for direct use in output rows.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightId(pub u32);

impl FlightId {
    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for FlightId {
    /// Rendered as a flight number: `FL0007`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FL{:04}", self.0)
    }
}

impl From<FlightId> for usize {
    #[inline(always)]
    fn from(id: FlightId) -> usize {
        id.0 as usize
    }
}
