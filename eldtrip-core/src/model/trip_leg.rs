use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// one directed segment of the trip.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TripLeg {
    /// current location to the pickup location
    ToPickup,
    /// pickup location to the dropoff location
    ToDropoff,
}

impl Display for TripLeg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripLeg::ToPickup => write!(f, "start -> pickup"),
            TripLeg::ToDropoff => write!(f, "pickup -> dropoff"),
        }
    }
}
