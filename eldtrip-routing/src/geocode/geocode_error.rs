use eldtrip_core::model::ModelError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeocodeError {
    #[error("address is empty")]
    EmptyAddress,
    #[error("no location found for address '{0}'")]
    NotFound(String),
    #[error("address '{0}' resolved to an invalid coordinate: {1}")]
    InvalidCoordinate(String, ModelError),
    #[error("geocoding service request failed: {0}")]
    Transport(String),
    #[error("failure decoding geocoding service response: {0}")]
    Decode(String),
    #[error("failure building geocoding client: {0}")]
    Build(String),
}
