//! day-by-day duty-status log generation from a planned route summary.
mod day_state;
mod duty_log_configuration;
mod duty_log_error;
mod duty_log_generator;
mod trip_log_state;

pub use duty_log_configuration::DutyLogConfiguration;
pub use duty_log_error::DutyLogError;
pub use duty_log_generator::DutyLogGenerator;
