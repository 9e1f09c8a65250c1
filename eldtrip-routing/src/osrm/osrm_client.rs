use std::time::Duration;

use eldtrip_core::model::Coordinate;
use reqwest::StatusCode;

use super::{OsrmResponse, RoadRoute, RouteService, RouteServiceError};

/// blocking client for the OSRM `route` service.
pub struct OsrmClient {
    client: reqwest::blocking::Client,
    base_url: String,
    profile: String,
}

impl OsrmClient {
    pub fn new(client: reqwest::blocking::Client, base_url: &str, profile: &str) -> OsrmClient {
        OsrmClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            profile: profile.to_string(),
        }
    }

    /// OSRM expects `lng,lat` pairs separated by semicolons
    pub fn route_url(&self, origin: &Coordinate, destination: &Coordinate) -> String {
        format!(
            "{}/route/v1/{}/{},{};{},{}",
            self.base_url,
            self.profile,
            origin.longitude,
            origin.latitude,
            destination.longitude,
            destination.latitude
        )
    }
}

impl RouteService for OsrmClient {
    fn request_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        timeout: Duration,
    ) -> Result<RoadRoute, RouteServiceError> {
        let url = self.route_url(origin, destination);
        log::debug!("requesting route {url} with timeout {timeout:?}");
        let response = self
            .client
            .get(&url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .timeout(timeout)
            .send()
            .map_err(|e| RouteServiceError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| RouteServiceError::Transport(e.to_string()))?;
        interpret_response(status, &body)
    }
}

/// classifies an HTTP exchange with the routing service.
///
/// gateway errors, rate limiting and other 5xx responses are transport
/// failures. any response carrying an OSRM `code` other than "Ok" is an
/// application-level failure, even when sent with a 4xx status.
pub fn interpret_response(status: StatusCode, body: &str) -> Result<RoadRoute, RouteServiceError> {
    if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
        return Err(RouteServiceError::Transport(format!(
            "routing service responded with HTTP {status}"
        )));
    }
    match serde_json::from_str::<OsrmResponse>(body) {
        Ok(parsed) => parsed.into_road_route(),
        Err(e) if status.is_success() => Err(RouteServiceError::Decode(e.to_string())),
        Err(_) => Err(RouteServiceError::Service {
            code: status.as_u16().to_string(),
            message: body.chars().take(200).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const OK_BODY: &str = r#"{
        "code": "Ok",
        "routes": [{
            "distance": 160934.4,
            "duration": 6545.45,
            "geometry": {
                "type": "LineString",
                "coordinates": [[-104.99, 39.74], [-104.5, 39.9], [-104.0, 40.1]]
            }
        }]
    }"#;

    #[test]
    fn test_success_converts_units_and_orientation() {
        let route = interpret_response(StatusCode::OK, OK_BODY).expect("route should decode");
        assert_relative_eq!(route.distance_miles, 100.0, epsilon = 1e-6);
        assert_relative_eq!(route.duration_hours, 6545.45 / 3600.0, epsilon = 1e-9);
        assert_eq!(route.points.len(), 3);
        assert_eq!(route.points[0], Coordinate::new(39.74, -104.99));
        assert_eq!(route.points[2], Coordinate::new(40.1, -104.0));
    }

    #[test]
    fn test_no_route_is_application_error() {
        let body = r#"{"code": "NoRoute", "message": "Impossible route between points"}"#;
        let result = interpret_response(StatusCode::BAD_REQUEST, body);
        match result {
            Err(e @ RouteServiceError::Service { .. }) => {
                assert!(!e.is_retryable());
                assert!(e.to_string().contains("Impossible route"));
            }
            other => panic!("expected service error, found {other:?}"),
        }
    }

    #[test]
    fn test_ok_code_without_routes_is_application_error() {
        let body = r#"{"code": "Ok", "routes": []}"#;
        let result = interpret_response(StatusCode::OK, body);
        assert!(matches!(result, Err(RouteServiceError::Service { .. })));
    }

    #[test]
    fn test_gateway_errors_are_transport_failures() {
        for status in [
            StatusCode::BAD_GATEWAY,
            StatusCode::SERVICE_UNAVAILABLE,
            StatusCode::TOO_MANY_REQUESTS,
        ] {
            let result = interpret_response(status, "<html>busy</html>");
            match result {
                Err(e) => assert!(e.is_retryable(), "{status} should be retryable"),
                Ok(_) => panic!("{status} should fail"),
            }
        }
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        let result = interpret_response(StatusCode::OK, "not json");
        assert!(matches!(result, Err(RouteServiceError::Decode(_))));
    }

    #[test]
    fn test_route_url_uses_lng_lat_order() {
        let client = OsrmClient::new(
            reqwest::blocking::Client::new(),
            "http://localhost:5000/",
            "driving",
        );
        let url = client.route_url(&Coordinate::new(40.0, -105.0), &Coordinate::new(41.5, -87.5));
        assert_eq!(url, "http://localhost:5000/route/v1/driving/-105,40;-87.5,41.5");
    }
}
