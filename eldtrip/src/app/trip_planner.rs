use eldtrip_core::model::{Coordinate, RouteLegResult, RouteSummary, TripLeg};
use eldtrip_routing::{
    geocode::Geocoder,
    osrm::RouteService,
    provider::{RoadRouteProvider, Sleeper, ThreadSleeper},
};

use super::{EldTripAppError, ValidatedTripRequest};
use crate::model::hos::{HosStopPlanner, PlanningError};

/// geocodes a trip request, routes both legs and places the HOS stops
pub struct TripPlanner<G: Geocoder, S: RouteService, Z: Sleeper = ThreadSleeper> {
    geocoder: G,
    routes: RoadRouteProvider<S, Z>,
    stop_planner: HosStopPlanner,
}

impl<G: Geocoder, S: RouteService, Z: Sleeper> TripPlanner<G, S, Z> {
    pub fn new(
        geocoder: G,
        routes: RoadRouteProvider<S, Z>,
        stop_planner: HosStopPlanner,
    ) -> TripPlanner<G, S, Z> {
        TripPlanner {
            geocoder,
            routes,
            stop_planner,
        }
    }

    pub fn resolve(&self, field: &str, address: &str) -> Result<Coordinate, EldTripAppError> {
        let coordinate =
            self.geocoder
                .resolve(address)
                .map_err(|source| EldTripAppError::Geocode {
                    field: field.to_string(),
                    source,
                })?;
        log::debug!("{field} '{address}' resolved to {coordinate}");
        Ok(coordinate)
    }

    pub fn plan_trip(
        &self,
        request: &ValidatedTripRequest,
    ) -> Result<RouteSummary, EldTripAppError> {
        let start = self.resolve("current_location", &request.current_location)?;
        let pickup = self.resolve("pickup_location", &request.pickup_location)?;
        let dropoff = self.resolve("dropoff_location", &request.dropoff_location)?;

        let to_pickup = fetch_leg(&self.routes, &start, &pickup, TripLeg::ToPickup)?;
        let to_dropoff = fetch_leg(&self.routes, &pickup, &dropoff, TripLeg::ToDropoff)?;
        let summary = self
            .stop_planner
            .plan(&to_pickup, &to_dropoff, request.current_cycle_hours)?;

        Ok(RouteSummary {
            start: summary.start.with_label(&request.current_location),
            pickup: summary.pickup.with_label(&request.pickup_location),
            dropoff: summary.dropoff.with_label(&request.dropoff_location),
            ..summary
        })
    }
}

/// a failed leg ends the trip before the next leg is requested
fn fetch_leg<S: RouteService, Z: Sleeper>(
    routes: &RoadRouteProvider<S, Z>,
    origin: &Coordinate,
    destination: &Coordinate,
    leg: TripLeg,
) -> Result<RouteLegResult, PlanningError> {
    let result = routes.fetch_route(origin, destination);
    if !result.ok {
        return Err(PlanningError::LegRoutingFailed {
            leg,
            message: result.error_description().to_string(),
        });
    }
    Ok(result)
}
