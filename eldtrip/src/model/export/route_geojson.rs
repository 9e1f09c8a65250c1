use eldtrip_core::model::{Coordinate, RouteSummary, TripEndpoint};
use geo::{Geometry, LineString, Point};
use geojson::{Feature, FeatureCollection, JsonObject};
use serde_json::json;

/// the planned route as GeoJSON: the combined polyline, the three trip
/// endpoints, then every rest stop and fuel stop as point features.
/// every feature carries a `kind` property.
pub fn route_feature_collection(summary: &RouteSummary) -> FeatureCollection {
    let mut features: Vec<Feature> = vec![];

    if summary.route_coordinates.len() > 1 {
        let line: LineString<f64> = summary
            .route_coordinates
            .iter()
            .map(|c| Point::from(*c).0)
            .collect();
        let mut props = JsonObject::new();
        props.insert(String::from("kind"), json!["route"]);
        props.insert(
            String::from("total_distance_miles"),
            json![summary.total_distance_miles],
        );
        props.insert(
            String::from("total_driving_hours"),
            json![summary.total_driving_hours],
        );
        props.insert(
            String::from("total_trip_hours"),
            json![summary.total_trip_hours],
        );
        features.push(feature(Geometry::LineString(line), props));
    }

    let endpoints = [
        ("start", &summary.start),
        ("pickup", &summary.pickup),
        ("dropoff", &summary.dropoff),
    ];
    for (kind, endpoint) in endpoints {
        features.push(endpoint_feature(kind, endpoint));
    }

    for stop in summary.rest_stops.iter() {
        let mut props = JsonObject::new();
        props.insert(String::from("kind"), json!["rest_stop"]);
        props.insert(String::from("reason"), json![stop.reason]);
        props.insert(String::from("description"), json![stop.reason.to_string()]);
        props.insert(String::from("duration_hours"), json![stop.duration_hours]);
        props.insert(String::from("distance_at_stop"), json![stop.distance_at_stop]);
        props.insert(String::from("leg"), json![stop.leg]);
        features.push(point_feature(stop.coordinates, props));
    }

    for stop in summary.fuel_stops.iter() {
        let mut props = JsonObject::new();
        props.insert(String::from("kind"), json!["fuel_stop"]);
        props.insert(String::from("distance_at_stop"), json![stop.distance_at_stop]);
        props.insert(String::from("leg"), json![stop.leg]);
        features.push(point_feature(stop.coordinates, props));
    }

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

fn endpoint_feature(kind: &str, endpoint: &TripEndpoint) -> Feature {
    let mut props = JsonObject::new();
    props.insert(String::from("kind"), json![kind]);
    props.insert(String::from("name"), json![endpoint.display_name()]);
    point_feature(endpoint.coordinates, props)
}

fn point_feature(coordinates: Coordinate, props: JsonObject) -> Feature {
    feature(Geometry::Point(Point::from(coordinates)), props)
}

fn feature(geometry: Geometry<f64>, props: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::from(&geometry)),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}
