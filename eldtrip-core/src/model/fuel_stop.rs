use serde::{Deserialize, Serialize};

use super::{Coordinate, TripLeg};

/// a distance-triggered refueling waypoint. informational only, it has no
/// effect on duty status.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FuelStop {
    pub coordinates: Coordinate,
    pub distance_at_stop: f64,
    pub leg: TripLeg,
}
