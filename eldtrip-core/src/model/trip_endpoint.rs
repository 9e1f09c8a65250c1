use serde::{Deserialize, Serialize};

use super::Coordinate;

/// one of the three trip locations, with the free-text label it was
/// resolved from when known.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TripEndpoint {
    pub label: Option<String>,
    pub coordinates: Coordinate,
}

impl TripEndpoint {
    pub fn new(label: Option<String>, coordinates: Coordinate) -> TripEndpoint {
        TripEndpoint { label, coordinates }
    }

    pub fn with_label(self, label: &str) -> TripEndpoint {
        TripEndpoint {
            label: Some(label.to_string()),
            ..self
        }
    }

    pub fn display_name(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => self.coordinates.to_string(),
        }
    }
}
