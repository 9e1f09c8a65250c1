use std::time::Duration;

use eldtrip_core::model::Coordinate;

use super::{RoadRoute, RouteServiceError};

/// a single request/response exchange with a road routing service.
/// implementations make exactly one attempt; retrying is the caller's job.
pub trait RouteService {
    fn request_route(
        &self,
        origin: &Coordinate,
        destination: &Coordinate,
        timeout: Duration,
    ) -> Result<RoadRoute, RouteServiceError>;
}
