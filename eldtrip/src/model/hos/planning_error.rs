use eldtrip_core::model::{ModelError, TripLeg};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanningError {
    #[error("could not route leg {leg}: {message}")]
    LegRoutingFailed { leg: TripLeg, message: String },
    #[error("invalid planning input: {0}")]
    InvalidInput(String),
    #[error("invalid Hours-of-Service configuration: {0}")]
    InvalidConfiguration(String),
    #[error(transparent)]
    Model(#[from] ModelError),
}
