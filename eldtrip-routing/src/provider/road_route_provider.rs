use eldtrip_core::model::{Coordinate, RouteLegResult};

use crate::osrm::RouteService;

use super::{RetryPolicy, Sleeper, ThreadSleeper};

/// resilient adapter over a [`RouteService`]. transport failures are
/// retried on the [`RetryPolicy`] schedule; application-level failures
/// are returned immediately.
pub struct RoadRouteProvider<S: RouteService, Z: Sleeper = ThreadSleeper> {
    service: S,
    policy: RetryPolicy,
    sleeper: Z,
}

impl<S: RouteService> RoadRouteProvider<S, ThreadSleeper> {
    pub fn new(service: S, policy: RetryPolicy) -> Self {
        Self::with_sleeper(service, policy, ThreadSleeper)
    }
}

impl<S: RouteService, Z: Sleeper> RoadRouteProvider<S, Z> {
    pub fn with_sleeper(service: S, policy: RetryPolicy, sleeper: Z) -> Self {
        Self {
            service,
            policy,
            sleeper,
        }
    }

    /// retrieves the drivable path from `origin` to `destination`.
    ///
    /// # Returns
    ///
    /// * a leg result with `ok == true` on success, otherwise `ok == false`
    ///   and a message describing the application error or every failed
    ///   transport attempt
    pub fn fetch_route(&self, origin: &Coordinate, destination: &Coordinate) -> RouteLegResult {
        for c in [origin, destination] {
            if let Err(e) = c.validate() {
                return RouteLegResult::failure(format!("invalid route endpoint: {e}"));
            }
        }

        let max_attempts = self.policy.max_attempts.max(1);
        let mut failures: Vec<String> = Vec::with_capacity(max_attempts as usize);
        for attempt in 0..max_attempts {
            let timeout = self.policy.timeout_for(attempt);
            match self.service.request_route(origin, destination, timeout) {
                Ok(route) => {
                    log::debug!(
                        "route {origin} -> {destination}: {:.1} miles, {:.2} hours, {} points (attempt {})",
                        route.distance_miles,
                        route.duration_hours,
                        route.points.len(),
                        attempt + 1
                    );
                    return RouteLegResult::success(
                        route.points,
                        route.distance_miles,
                        route.duration_hours,
                    );
                }
                Err(e) if e.is_retryable() => {
                    log::warn!(
                        "routing attempt {}/{max_attempts} for {origin} -> {destination} failed: {e}",
                        attempt + 1
                    );
                    failures.push(format!("attempt {}: {e}", attempt + 1));
                    if attempt + 1 < max_attempts {
                        self.sleeper.sleep(self.policy.backoff_after(attempt));
                    }
                }
                Err(e) => {
                    log::debug!("routing service rejected {origin} -> {destination}: {e}");
                    return RouteLegResult::failure(e.to_string());
                }
            }
        }
        RouteLegResult::failure(format!(
            "routing service unreachable after {max_attempts} attempts: {}",
            failures.join("; ")
        ))
    }
}
