use serde::{Deserialize, Serialize};

use super::PlanningError;

/// Hours-of-Service limits and planning constants. defaults follow the
/// US property-carrying driver rules.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct HosConfiguration {
    /// pace used to turn miles into driving hours
    pub average_speed_mph: f64,
    pub max_driving_hours: f64,
    pub max_on_duty_hours: f64,
    pub break_after_driving_hours: f64,
    pub break_duration_hours: f64,
    pub reset_duration_hours: f64,
    /// a reset is taken once this many hours or fewer remain on a cap
    pub reset_margin_hours: f64,
    pub min_miles_between_rest_stops: f64,
    pub fuel_interval_miles: f64,
    /// target route distance between two HOS checks
    pub sample_spacing_miles: f64,
    pub pickup_duration_hours: f64,
    pub dropoff_duration_hours: f64,
}

impl Default for HosConfiguration {
    fn default() -> Self {
        Self {
            average_speed_mph: 55.0,
            max_driving_hours: 11.0,
            max_on_duty_hours: 14.0,
            break_after_driving_hours: 8.0,
            break_duration_hours: 0.5,
            reset_duration_hours: 10.0,
            reset_margin_hours: 1.0,
            min_miles_between_rest_stops: 100.0,
            fuel_interval_miles: 550.0,
            sample_spacing_miles: 50.0,
            pickup_duration_hours: 1.0,
            dropoff_duration_hours: 1.0,
        }
    }
}

impl HosConfiguration {
    pub fn validate(&self) -> Result<(), PlanningError> {
        let positive = [
            ("average_speed_mph", self.average_speed_mph),
            ("max_driving_hours", self.max_driving_hours),
            ("max_on_duty_hours", self.max_on_duty_hours),
            ("break_after_driving_hours", self.break_after_driving_hours),
            ("break_duration_hours", self.break_duration_hours),
            ("reset_duration_hours", self.reset_duration_hours),
            ("fuel_interval_miles", self.fuel_interval_miles),
            ("sample_spacing_miles", self.sample_spacing_miles),
        ];
        let non_negative = [
            ("reset_margin_hours", self.reset_margin_hours),
            ("min_miles_between_rest_stops", self.min_miles_between_rest_stops),
            ("pickup_duration_hours", self.pickup_duration_hours),
            ("dropoff_duration_hours", self.dropoff_duration_hours),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(PlanningError::InvalidConfiguration(format!(
                    "{name} must be a positive number, found {value}"
                )));
            }
        }
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(PlanningError::InvalidConfiguration(format!(
                    "{name} must be a non-negative number, found {value}"
                )));
            }
        }
        Ok(())
    }

    /// fixed on-duty time for loading and unloading
    pub fn handling_hours(&self) -> f64 {
        self.pickup_duration_hours + self.dropoff_duration_hours
    }
}
