use eldtrip_routing::{geocode::GeocodeError, osrm::RouteServiceError};

use crate::model::{duty_log::DutyLogError, export::ExportError, hos::PlanningError};

#[derive(thiserror::Error, Debug)]
pub enum EldTripAppError {
    #[error("missing required field '{0}'")]
    MissingField(String),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("{msg}: {source}")]
    ConfigReadError {
        msg: String,
        source: config::ConfigError,
    },
    #[error("invalid configuration: {0}")]
    Configuration(String),
    #[error("failure resolving {field}: {source}")]
    Geocode { field: String, source: GeocodeError },
    #[error(transparent)]
    Routing(#[from] RouteServiceError),
    #[error(transparent)]
    Planning(#[from] PlanningError),
    #[error(transparent)]
    DutyLog(#[from] DutyLogError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("failed reading '{filepath}': {source}")]
    ReadError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failed writing '{filepath}': {source}")]
    WriteError {
        filepath: String,
        source: std::io::Error,
    },
    #[error("failure decoding '{filepath}': {source}")]
    DecodeError {
        filepath: String,
        source: serde_json::Error,
    },
    #[error("failure encoding output: {0}")]
    EncodeError(#[from] serde_json::Error),
}
