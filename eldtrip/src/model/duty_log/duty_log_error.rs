use chrono::NaiveDate;
use eldtrip_core::model::ModelError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DutyLogError {
    #[error("route summary cannot be logged: {0}")]
    InvalidSummary(String),
    #[error("invalid duty log configuration: {0}")]
    InvalidConfiguration(String),
    #[error("log day {offset} after {start} is outside of the supported calendar")]
    DateOutOfRange { start: NaiveDate, offset: usize },
    #[error(transparent)]
    Model(#[from] ModelError),
}
