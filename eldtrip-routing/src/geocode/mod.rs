mod chain_geocoder;
mod coordinate_geocoder;
mod geocode_error;
mod geocoder;
mod nominatim_config;
mod nominatim_geocoder;

pub use chain_geocoder::ChainGeocoder;
pub use coordinate_geocoder::CoordinateGeocoder;
pub use geocode_error::GeocodeError;
pub use geocoder::Geocoder;
pub use nominatim_config::NominatimConfig;
pub use nominatim_geocoder::NominatimGeocoder;
