use serde::{Deserialize, Serialize};

use super::{Coordinate, RestReason, TripLeg};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RestStop {
    pub coordinates: Coordinate,
    pub duration_hours: f64,
    pub reason: RestReason,
    /// miles walked along the combined route when the stop was emitted
    pub distance_at_stop: f64,
    pub leg: TripLeg,
}
