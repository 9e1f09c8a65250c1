mod coordinate;
mod day_log;
mod duty_status;
mod fuel_stop;
mod log_event;
mod model_error;
mod rest_reason;
mod rest_stop;
mod route_leg_result;
mod route_summary;
mod status_block;
mod trip_endpoint;
mod trip_leg;
mod trip_log;

pub use coordinate::{Coordinate, RoutePoint};
pub use day_log::DayLog;
pub use duty_status::DutyStatus;
pub use fuel_stop::FuelStop;
pub use log_event::LogEvent;
pub use model_error::ModelError;
pub use rest_reason::RestReason;
pub use rest_stop::RestStop;
pub use route_leg_result::RouteLegResult;
pub use route_summary::RouteSummary;
pub use status_block::StatusBlock;
pub use trip_endpoint::TripEndpoint;
pub use trip_leg::TripLeg;
pub use trip_log::TripLog;

/// hours in a calendar day of a duty-status log
pub const HOURS_PER_DAY: f64 = 24.0;
