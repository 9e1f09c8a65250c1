use eldtrip_core::model::Coordinate;
use geo::LineString;
use serde::{Deserialize, Serialize};
use uom::si::f64::{Length, Time};
use uom::si::length::{meter, mile};
use uom::si::time::{hour, second};

use super::{RoadRoute, RouteServiceError};

/// body of an OSRM `route` service response. only the fields the planner
/// consumes are modeled.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OsrmResponse {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OsrmRoute {
    /// meters
    pub distance: f64,
    /// seconds
    pub duration: f64,
    pub geometry: OsrmGeometry,
}

/// GeoJSON LineString geometry, positions ordered [longitude, latitude]
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OsrmGeometry {
    pub coordinates: Vec<[f64; 2]>,
}

pub const OSRM_OK: &str = "Ok";

impl OsrmResponse {
    /// takes the first (best) route of a successful response
    pub fn into_road_route(self) -> Result<RoadRoute, RouteServiceError> {
        if self.code != OSRM_OK {
            return Err(RouteServiceError::Service {
                message: self
                    .message
                    .unwrap_or_else(|| String::from("no message provided")),
                code: self.code,
            });
        }
        let route = self.routes.into_iter().next().ok_or_else(|| {
            RouteServiceError::Service {
                code: String::from("NoRoute"),
                message: String::from("response contained no routes"),
            }
        })?;
        route.try_into()
    }
}

impl TryFrom<OsrmRoute> for RoadRoute {
    type Error = RouteServiceError;

    fn try_from(route: OsrmRoute) -> Result<Self, Self::Error> {
        let line: LineString<f64> = LineString::from(route.geometry.coordinates);
        let points = line
            .coords()
            .map(|c| {
                let coordinate = Coordinate::from(*c);
                coordinate
                    .validate()
                    .map(|_| coordinate)
                    .map_err(|e| RouteServiceError::Decode(format!("route geometry: {e}")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if points.is_empty() {
            return Err(RouteServiceError::Decode(String::from(
                "route geometry has no coordinates",
            )));
        }
        if !(route.distance.is_finite() && route.distance >= 0.0) {
            return Err(RouteServiceError::Decode(format!(
                "invalid route distance {}",
                route.distance
            )));
        }
        if !(route.duration.is_finite() && route.duration >= 0.0) {
            return Err(RouteServiceError::Decode(format!(
                "invalid route duration {}",
                route.duration
            )));
        }
        let distance = Length::new::<meter>(route.distance);
        let duration = Time::new::<second>(route.duration);
        Ok(RoadRoute {
            points,
            distance_miles: distance.get::<mile>(),
            duration_hours: duration.get::<hour>(),
        })
    }
}
