use serde::{Deserialize, Serialize};

use super::EldTripAppError;

/// trip fields as received from a caller; every location is required.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct TripRequest {
    pub current_location: Option<String>,
    pub pickup_location: Option<String>,
    pub dropoff_location: Option<String>,
    pub current_cycle_hours: Option<f64>,
}

/// a trip request with every required field present
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedTripRequest {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub current_cycle_hours: f64,
}

impl TripRequest {
    /// fields of `other` that are set replace the fields of `self`
    pub fn merge(self, other: TripRequest) -> TripRequest {
        TripRequest {
            current_location: other.current_location.or(self.current_location),
            pickup_location: other.pickup_location.or(self.pickup_location),
            dropoff_location: other.dropoff_location.or(self.dropoff_location),
            current_cycle_hours: other.current_cycle_hours.or(self.current_cycle_hours),
        }
    }

    /// rejects missing or blank locations and invalid cycle hours.
    /// cycle hours default to 0.
    pub fn validate(&self) -> Result<ValidatedTripRequest, EldTripAppError> {
        let current_cycle_hours = self.current_cycle_hours.unwrap_or(0.0);
        if !(current_cycle_hours.is_finite() && current_cycle_hours >= 0.0) {
            return Err(EldTripAppError::InvalidRequest(format!(
                "current_cycle_hours must be a non-negative number, found {current_cycle_hours}"
            )));
        }
        Ok(ValidatedTripRequest {
            current_location: required("current_location", &self.current_location)?,
            pickup_location: required("pickup_location", &self.pickup_location)?,
            dropoff_location: required("dropoff_location", &self.dropoff_location)?,
            current_cycle_hours,
        })
    }
}

fn required(name: &str, value: &Option<String>) -> Result<String, EldTripAppError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(EldTripAppError::MissingField(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> TripRequest {
        TripRequest {
            current_location: Some(String::from("Denver, CO")),
            pickup_location: Some(String::from("Omaha, NE")),
            dropoff_location: Some(String::from(" Chicago, IL ")),
            current_cycle_hours: None,
        }
    }

    #[test]
    fn test_validate_complete_request() {
        let valid = complete().validate().expect("request is complete");
        assert_eq!(valid.dropoff_location, "Chicago, IL");
        assert_eq!(valid.current_cycle_hours, 0.0);
    }

    #[test]
    fn test_missing_fields() {
        let request = TripRequest {
            pickup_location: None,
            ..complete()
        };
        match request.validate() {
            Err(EldTripAppError::MissingField(name)) => assert_eq!(name, "pickup_location"),
            other => panic!("expected missing field, found {other:?}"),
        }
        let request = TripRequest {
            current_location: Some(String::from("   ")),
            ..complete()
        };
        assert!(matches!(
            request.validate(),
            Err(EldTripAppError::MissingField(_))
        ));
    }

    #[test]
    fn test_invalid_cycle_hours() {
        let request = TripRequest {
            current_cycle_hours: Some(-2.0),
            ..complete()
        };
        assert!(matches!(
            request.validate(),
            Err(EldTripAppError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_merge_prefers_later_fields() {
        let from_file: TripRequest =
            serde_json::from_str(r#"{"current_location": "Denver, CO", "current_cycle_hours": 3.5}"#)
                .expect("valid json");
        let from_flags = TripRequest {
            current_location: Some(String::from("Boulder, CO")),
            pickup_location: Some(String::from("Omaha, NE")),
            ..Default::default()
        };
        let merged = from_file.merge(from_flags);
        assert_eq!(merged.current_location.as_deref(), Some("Boulder, CO"));
        assert_eq!(merged.pickup_location.as_deref(), Some("Omaha, NE"));
        assert_eq!(merged.dropoff_location, None);
        assert_eq!(merged.current_cycle_hours, Some(3.5));
    }
}
