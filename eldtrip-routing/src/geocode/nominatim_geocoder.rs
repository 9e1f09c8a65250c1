use eldtrip_core::model::Coordinate;
use serde::Deserialize;

use super::{GeocodeError, Geocoder};

/// free-form address search against a Nominatim `/search` endpoint
pub struct NominatimGeocoder {
    client: reqwest::blocking::Client,
    base_url: String,
    country_codes: Option<String>,
}

/// Nominatim reports positions as decimal strings
#[derive(Deserialize, Debug)]
struct NominatimPlace {
    lat: String,
    lon: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl NominatimGeocoder {
    pub fn new(
        client: reqwest::blocking::Client,
        base_url: &str,
        country_codes: Option<String>,
    ) -> NominatimGeocoder {
        NominatimGeocoder {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            country_codes,
        }
    }
}

impl Geocoder for NominatimGeocoder {
    fn resolve(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        let query = address.trim();
        if query.is_empty() {
            return Err(GeocodeError::EmptyAddress);
        }
        let mut params = vec![("q", query), ("format", "jsonv2"), ("limit", "1")];
        if let Some(codes) = &self.country_codes {
            params.push(("countrycodes", codes.as_str()));
        }
        let url = format!("{}/search", self.base_url);
        log::debug!("geocoding '{query}' with {url}");
        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| GeocodeError::Transport(e.to_string()))?;
        let body = response
            .text()
            .map_err(|e| GeocodeError::Transport(e.to_string()))?;
        parse_search_response(query, &body)
    }
}

fn parse_search_response(query: &str, body: &str) -> Result<Coordinate, GeocodeError> {
    let places: Vec<NominatimPlace> =
        serde_json::from_str(body).map_err(|e| GeocodeError::Decode(e.to_string()))?;
    let place = places
        .into_iter()
        .next()
        .ok_or_else(|| GeocodeError::NotFound(query.to_string()))?;
    let lat = place
        .lat
        .parse::<f64>()
        .map_err(|e| GeocodeError::Decode(format!("latitude '{}': {e}", place.lat)))?;
    let lng = place
        .lon
        .parse::<f64>()
        .map_err(|e| GeocodeError::Decode(format!("longitude '{}': {e}", place.lon)))?;
    if let Some(name) = &place.display_name {
        log::debug!("'{query}' resolved to {name}");
    }
    Coordinate::try_new(lat, lng).map_err(|e| GeocodeError::InvalidCoordinate(query.to_string(), e))
}
