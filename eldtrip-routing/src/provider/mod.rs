mod retry_policy;
mod road_route_provider;
mod sleeper;

pub use retry_policy::RetryPolicy;
pub use road_route_provider::RoadRouteProvider;
pub use sleeper::{Sleeper, ThreadSleeper};
