use serde::{Deserialize, Serialize};

use super::{OsrmClient, RouteServiceError};

pub const DEFAULT_OSRM_URL: &str = "https://router.project-osrm.org";
pub const DEFAULT_OSRM_PROFILE: &str = "driving";

/// connection settings for an OSRM-compatible routing server
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct OsrmClientConfig {
    pub base_url: String,
    pub profile: String,
    pub user_agent: String,
}

impl Default for OsrmClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_OSRM_URL),
            profile: String::from(DEFAULT_OSRM_PROFILE),
            user_agent: format!("eldtrip/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl OsrmClientConfig {
    pub fn build(&self) -> Result<OsrmClient, RouteServiceError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(&self.user_agent)
            .build()
            .map_err(|e| RouteServiceError::Build(e.to_string()))?;
        Ok(OsrmClient::new(client, &self.base_url, &self.profile))
    }
}
