//! Hours-of-Service stop planning: walks a two-leg route and decides where
//! the driver must take breaks, 10-hour resets and fuel stops.
mod hos_configuration;
mod hos_state;
mod planning_error;
mod stop_accumulator;
mod stop_planner;

pub use hos_configuration::HosConfiguration;
pub use hos_state::HosState;
pub use planning_error::PlanningError;
pub use stop_planner::{sample_stride, HosStopPlanner};
