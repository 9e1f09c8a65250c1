use serde::{Deserialize, Serialize};

use super::{GeocodeError, NominatimGeocoder};

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// connection settings for a Nominatim-compatible search endpoint
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct NominatimConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: f64,
    /// optional ISO 3166-1 alpha-2 codes restricting the search, e.g. "us"
    pub country_codes: Option<String>,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_NOMINATIM_URL),
            user_agent: format!("eldtrip/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 10.0,
            country_codes: None,
        }
    }
}

impl NominatimConfig {
    pub fn build(&self) -> Result<NominatimGeocoder, GeocodeError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(&self.user_agent)
            .timeout(std::time::Duration::from_secs_f64(self.timeout_secs.max(0.0)))
            .build()
            .map_err(|e| GeocodeError::Build(e.to_string()))?;
        Ok(NominatimGeocoder::new(
            client,
            &self.base_url,
            self.country_codes.clone(),
        ))
    }
}
