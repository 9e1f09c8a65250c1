use eldtrip_core::model::{Coordinate, RouteLegResult, RouteSummary, TripEndpoint, TripLeg};
use eldtrip_core::util::geo_utils;

use super::stop_accumulator::{RouteSample, StopAccumulator};
use super::{HosConfiguration, HosState, PlanningError};

/// places mandatory rest stops and fuel stops along a two-leg trip.
#[derive(Clone, Debug, Default)]
pub struct HosStopPlanner {
    conf: HosConfiguration,
}

impl HosStopPlanner {
    pub fn new(conf: HosConfiguration) -> Result<HosStopPlanner, PlanningError> {
        conf.validate()?;
        Ok(HosStopPlanner { conf })
    }

    pub fn configuration(&self) -> &HosConfiguration {
        &self.conf
    }

    /// combines the start->pickup and pickup->dropoff legs into a route
    /// summary with rest and fuel stops.
    ///
    /// driving time is paced at the configured average speed from the
    /// routing service's distances; the service's own duration estimate is
    /// not used. HOS rules are only checked at sampled route points spaced
    /// roughly `sample_spacing_miles` apart.
    ///
    /// # Arguments
    ///
    /// * `to_pickup` - route from the current location to the pickup
    /// * `to_dropoff` - route from the pickup to the dropoff
    /// * `current_cycle_hours` - hours the driver has already used
    ///
    /// # Returns
    ///
    /// * the summary, or an error naming the leg that could not be routed
    pub fn plan(
        &self,
        to_pickup: &RouteLegResult,
        to_dropoff: &RouteLegResult,
        current_cycle_hours: f64,
    ) -> Result<RouteSummary, PlanningError> {
        validate_leg(to_pickup, TripLeg::ToPickup)?;
        validate_leg(to_dropoff, TripLeg::ToDropoff)?;
        if !(current_cycle_hours.is_finite() && current_cycle_hours >= 0.0) {
            return Err(PlanningError::InvalidInput(format!(
                "current cycle hours must be a non-negative number, found {current_cycle_hours}"
            )));
        }
        let conf = &self.conf;

        let total_distance_miles = to_pickup.distance_miles + to_dropoff.distance_miles;
        let total_driving_hours = total_distance_miles / conf.average_speed_mph;

        // the dropoff leg starts at the pickup point, which the first leg already ends on
        let route: Vec<Coordinate> = to_pickup
            .points
            .iter()
            .chain(to_dropoff.points.iter().skip(1))
            .copied()
            .collect();
        let walked = geo_utils::cumulative_miles(&route);
        let pickup_miles = geo_utils::polyline_miles(&to_pickup.points);
        let stride = sample_stride(route.len(), total_distance_miles, conf.sample_spacing_miles);

        let initial = StopAccumulator::new(HosState::initial(current_cycle_hours, conf));
        let result = (1..route.len())
            .filter(|idx| idx % stride == 0)
            .map(|idx| RouteSample {
                coordinates: route[idx],
                miles: walked[idx],
                leg: if walked[idx] < pickup_miles {
                    TripLeg::ToPickup
                } else {
                    TripLeg::ToDropoff
                },
            })
            .fold(initial, |acc, sample| acc.visit(sample, conf));

        let rest_hours: f64 = result.rest_stops.iter().map(|s| s.duration_hours).sum();
        let total_trip_hours = total_driving_hours + rest_hours + conf.handling_hours();
        log::info!(
            "planned {:.1} miles, {:.2} driving hours, {} rest stops, {} fuel stops (stride {stride} of {} points)",
            total_distance_miles,
            total_driving_hours,
            result.rest_stops.len(),
            result.fuel_stops.len(),
            route.len()
        );

        Ok(RouteSummary {
            start: endpoint(to_pickup.points.first(), TripLeg::ToPickup)?,
            pickup: endpoint(to_pickup.points.last(), TripLeg::ToPickup)?,
            dropoff: endpoint(to_dropoff.points.last(), TripLeg::ToDropoff)?,
            total_distance_miles,
            total_driving_hours,
            total_trip_hours,
            rest_stops: result.rest_stops,
            fuel_stops: result.fuel_stops,
            route_coordinates: route,
        })
    }
}

/// index step between HOS checks so that about one check happens per
/// `spacing_miles` of route. routes shorter than one spacing are not sampled.
pub fn sample_stride(point_count: usize, total_distance_miles: f64, spacing_miles: f64) -> usize {
    let checks = total_distance_miles / spacing_miles;
    if !(checks.is_finite() && checks > 0.0) {
        return point_count.max(1);
    }
    ((point_count as f64 / checks).floor() as usize).max(1)
}

fn validate_leg(leg: &RouteLegResult, which: TripLeg) -> Result<(), PlanningError> {
    if !leg.ok {
        return Err(PlanningError::LegRoutingFailed {
            leg: which,
            message: leg.error_description().to_string(),
        });
    }
    if leg.points.is_empty() {
        return Err(PlanningError::InvalidInput(format!(
            "leg {which} has no route points"
        )));
    }
    if !(leg.distance_miles.is_finite() && leg.distance_miles >= 0.0) {
        return Err(PlanningError::InvalidInput(format!(
            "leg {which} has invalid distance {}",
            leg.distance_miles
        )));
    }
    for point in leg.points.iter() {
        point.validate()?;
    }
    Ok(())
}

fn endpoint(point: Option<&Coordinate>, leg: TripLeg) -> Result<TripEndpoint, PlanningError> {
    point
        .map(|c| TripEndpoint::new(None, *c))
        .ok_or_else(|| PlanningError::InvalidInput(format!("leg {leg} has no route points")))
}
