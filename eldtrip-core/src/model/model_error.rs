use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("coordinate ({0}, {1}) is not a finite latitude/longitude pair")]
    NonFiniteCoordinate(f64, f64),
    #[error("latitude {0} is outside of [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside of [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("{0} must be a non-negative finite number, found {1}")]
    InvalidQuantity(String, f64),
    #[error("status block [{0}, {1}] must satisfy 0 <= start < end <= 24")]
    InvalidBlockSpan(f64, f64),
}
