use eldtrip_core::model::RoutePoint;

/// a successfully retrieved drivable path
#[derive(Clone, Debug, PartialEq)]
pub struct RoadRoute {
    pub points: Vec<RoutePoint>,
    pub distance_miles: f64,
    pub duration_hours: f64,
}
