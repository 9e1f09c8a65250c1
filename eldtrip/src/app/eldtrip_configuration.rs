use config::{Config, Environment, FileFormat};
use eldtrip_routing::{
    geocode::NominatimConfig,
    osrm::OsrmClientConfig,
    provider::RetryPolicy,
};
use serde::{Deserialize, Serialize};

use super::EldTripAppError;
use crate::model::{duty_log::DutyLogConfiguration, hos::HosConfiguration};

/// prefix of environment variables overriding configuration values, e.g.
/// `ELDTRIP__HOS__AVERAGE_SPEED_MPH=60`
pub const ENV_PREFIX: &str = "ELDTRIP";
pub const ENV_SEPARATOR: &str = "__";

/// settings for every stage of the trip planner. all sections are optional.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct EldTripConfiguration {
    pub routing: RoutingConfiguration,
    pub geocoding: NominatimConfig,
    pub hos: HosConfiguration,
    pub log: DutyLogConfiguration,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RoutingConfiguration {
    pub base_url: String,
    pub profile: String,
    pub user_agent: String,
    pub retry: RetryPolicy,
}

impl Default for RoutingConfiguration {
    fn default() -> Self {
        let client = OsrmClientConfig::default();
        Self {
            base_url: client.base_url,
            profile: client.profile,
            user_agent: client.user_agent,
            retry: RetryPolicy::default(),
        }
    }
}

impl RoutingConfiguration {
    pub fn client_config(&self) -> OsrmClientConfig {
        OsrmClientConfig {
            base_url: self.base_url.clone(),
            profile: self.profile.clone(),
            user_agent: self.user_agent.clone(),
        }
    }
}

impl EldTripConfiguration {
    /// reads the optional configuration file, then applies `ELDTRIP__`
    /// environment overrides on top of it.
    pub fn load(filepath: Option<&str>) -> Result<EldTripConfiguration, EldTripAppError> {
        let mut builder = Config::builder();
        if let Some(f) = filepath {
            let format = if f.ends_with(".toml") {
                FileFormat::Toml
            } else if f.ends_with(".json") {
                FileFormat::Json
            } else {
                return Err(EldTripAppError::Configuration(format!(
                    "unsupported file type: {f}"
                )));
            };
            builder = builder.add_source(config::File::new(f, format));
        }
        let source = filepath.unwrap_or("environment");
        let conf = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| EldTripAppError::ConfigReadError {
                msg: format!("failed reading configuration from '{source}'"),
                source: e,
            })?;
        let result: EldTripConfiguration =
            conf.try_deserialize()
                .map_err(|e| EldTripAppError::ConfigReadError {
                    msg: format!("failed decoding configuration from '{source}'"),
                    source: e,
                })?;
        result.validate()?;
        log::debug!("loaded configuration from {source}");
        Ok(result)
    }

    pub fn validate(&self) -> Result<(), EldTripAppError> {
        self.hos
            .validate()
            .map_err(|e| EldTripAppError::Configuration(e.to_string()))?;
        self.log
            .validate()
            .map_err(|e| EldTripAppError::Configuration(e.to_string()))?;
        self.routing
            .retry
            .validate()
            .map_err(|e| EldTripAppError::Configuration(format!("routing.retry: {e}")))?;
        Ok(())
    }
}

impl TryFrom<&String> for EldTripConfiguration {
    type Error = EldTripAppError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        EldTripConfiguration::load(Some(f))
    }
}
