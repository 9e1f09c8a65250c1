use serde::{Deserialize, Serialize};

use super::DayLog;

/// the day-by-day duty-status log for a whole trip.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct TripLog {
    pub days: Vec<DayLog>,
    /// driving time that did not fit into the generated days
    #[serde(default)]
    pub undelivered_driving_hours: f64,
}

impl TripLog {
    pub fn total_driving_hours(&self) -> f64 {
        self.days.iter().map(|d| d.driving_hours).sum()
    }

    pub fn final_cycle_hours(&self) -> f64 {
        self.days.last().map(|d| d.cycle_hours_used).unwrap_or_default()
    }

    pub fn is_complete(&self) -> bool {
        self.undelivered_driving_hours <= 0.0
    }
}
