//! Plain data row types written by output backends.

use sa_airport::FlightAction;

/// One waiting flight's state at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueSnapshotRow {
    pub tick:       u64,
    pub flight_id:  u32,
    pub action:     FlightAction,
    /// Wait accumulated so far, in ticks.
    pub wait_ticks: u64,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:            u64,
    pub landing_queue:   u64,
    pub takeoff_queue:   u64,
    pub runway_busy:     bool,
    pub landed_total:    u64,
    pub taken_off_total: u64,
}

/// Stable lowercase label for the action column.
pub(crate) fn action_label(action: FlightAction) -> &'static str {
    match action {
        FlightAction::Landing   => "landing",
        FlightAction::TakingOff => "takeoff",
    }
}
