use std::collections::VecDeque;

use eldtrip_core::model::{RestStop, RouteSummary};

/// accounting carried from one log day to the next
#[derive(Clone, Debug)]
pub(super) struct TripLogState {
    /// driving time not yet placed on any day
    pub remaining_driving_hours: f64,
    pub pending_rests: VecDeque<RestStop>,
    /// driving + on-duty hours over the whole trip, never reset
    pub cycle_hours_used: f64,
    pub pickup_pending: bool,
    pub dropoff_pending: bool,
}

impl TripLogState {
    pub fn new(summary: &RouteSummary) -> TripLogState {
        TripLogState {
            remaining_driving_hours: summary.total_driving_hours,
            pending_rests: summary.rest_stops.iter().cloned().collect(),
            cycle_hours_used: 0.0,
            pickup_pending: true,
            dropoff_pending: true,
        }
    }

    pub fn has_work(&self) -> bool {
        self.remaining_driving_hours > 0.0 || self.dropoff_pending
    }
}
