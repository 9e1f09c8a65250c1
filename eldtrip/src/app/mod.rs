mod eldtrip_app;
mod eldtrip_app_error;
mod eldtrip_configuration;
mod output_format;
mod trip_planner;
mod trip_request;

pub use eldtrip_app::{EldTripApp, EldTripOperation, TripArgs};
pub use eldtrip_app_error::EldTripAppError;
pub use eldtrip_configuration::{EldTripConfiguration, RoutingConfiguration};
pub use output_format::OutputFormat;
pub use trip_planner::TripPlanner;
pub use trip_request::{TripRequest, ValidatedTripRequest};
