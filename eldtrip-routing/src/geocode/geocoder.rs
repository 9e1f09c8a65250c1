use eldtrip_core::model::Coordinate;

use super::GeocodeError;

/// turns a free-text location into a coordinate
pub trait Geocoder {
    fn resolve(&self, address: &str) -> Result<Coordinate, GeocodeError>;
}

impl<G: Geocoder + ?Sized> Geocoder for Box<G> {
    fn resolve(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        (**self).resolve(address)
    }
}
