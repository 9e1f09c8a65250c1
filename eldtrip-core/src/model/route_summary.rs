use serde::{Deserialize, Serialize};

use super::{Coordinate, FuelStop, RestStop, TripEndpoint, HOURS_PER_DAY};

/// both legs of a trip combined with the rest and fuel stops the
/// Hours-of-Service rules require along the way.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RouteSummary {
    pub start: TripEndpoint,
    pub pickup: TripEndpoint,
    pub dropoff: TripEndpoint,
    pub total_distance_miles: f64,
    pub total_driving_hours: f64,
    /// driving time, rest time and the fixed pickup/dropoff handling time
    pub total_trip_hours: f64,
    pub rest_stops: Vec<RestStop>,
    pub fuel_stops: Vec<FuelStop>,
    pub route_coordinates: Vec<Coordinate>,
}

impl RouteSummary {
    pub fn total_rest_hours(&self) -> f64 {
        self.rest_stops.iter().map(|s| s.duration_hours).sum()
    }

    /// number of calendar days a duty-status log for this trip spans.
    pub fn trip_days(&self) -> usize {
        if self.total_trip_hours <= 0.0 {
            0
        } else {
            (self.total_trip_hours / HOURS_PER_DAY).ceil() as usize
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RestReason, TripLeg};

    fn summary(total_trip_hours: f64, rest: Vec<f64>) -> RouteSummary {
        let c = Coordinate::new(39.0, -105.0);
        let endpoint = TripEndpoint::new(None, c);
        RouteSummary {
            start: endpoint.clone(),
            pickup: endpoint.clone(),
            dropoff: endpoint,
            total_distance_miles: 0.0,
            total_driving_hours: 0.0,
            total_trip_hours,
            rest_stops: rest
                .into_iter()
                .map(|duration_hours| RestStop {
                    coordinates: c,
                    duration_hours,
                    reason: RestReason::BreakLimit,
                    distance_at_stop: 0.0,
                    leg: TripLeg::ToPickup,
                })
                .collect(),
            fuel_stops: vec![],
            route_coordinates: vec![c],
        }
    }

    #[test]
    fn test_trip_days_rounds_up() {
        assert_eq!(summary(7.45, vec![]).trip_days(), 1);
        assert_eq!(summary(24.0, vec![]).trip_days(), 1);
        assert_eq!(summary(24.01, vec![]).trip_days(), 2);
        assert_eq!(summary(0.0, vec![]).trip_days(), 0);
    }

    #[test]
    fn test_total_rest_hours() {
        assert_eq!(summary(30.0, vec![0.5, 10.0]).total_rest_hours(), 10.5);
    }
}
