use eldtrip_core::model::Coordinate;

use super::{GeocodeError, Geocoder};

/// asks each geocoder in turn. a `NotFound` moves on to the next one, any
/// other error stops the search. there is no fallback location.
#[derive(Default)]
pub struct ChainGeocoder {
    geocoders: Vec<Box<dyn Geocoder>>,
}

impl ChainGeocoder {
    pub fn new(geocoders: Vec<Box<dyn Geocoder>>) -> ChainGeocoder {
        ChainGeocoder { geocoders }
    }

    pub fn push(mut self, geocoder: Box<dyn Geocoder>) -> ChainGeocoder {
        self.geocoders.push(geocoder);
        self
    }
}

impl Geocoder for ChainGeocoder {
    fn resolve(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        if address.trim().is_empty() {
            return Err(GeocodeError::EmptyAddress);
        }
        for geocoder in self.geocoders.iter() {
            match geocoder.resolve(address) {
                Ok(coordinate) => return Ok(coordinate),
                Err(GeocodeError::NotFound(_)) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(GeocodeError::NotFound(address.trim().to_string()))
    }
}
