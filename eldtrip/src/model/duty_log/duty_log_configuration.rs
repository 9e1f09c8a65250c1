use eldtrip_core::model::HOURS_PER_DAY;
use serde::{Deserialize, Serialize};

use super::DutyLogError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct DutyLogConfiguration {
    /// clock hour at which the first day's log begins
    pub first_day_start_hour: f64,
    /// off-duty block that opens every day after the first
    pub overnight_rest_hours: f64,
    /// status blocks allowed per day, including the overnight rest
    pub max_blocks_per_day: usize,
    pub max_driving_block_hours: f64,
    /// end-of-day padding starting at or after this hour gets no remark
    pub padding_event_cutoff_hour: f64,
    /// rest stops at least this long are logged as sleeper berth
    pub sleeper_berth_min_hours: f64,
    pub pickup_duration_hours: f64,
    pub dropoff_duration_hours: f64,
    /// remaining driving at or below which the dropoff is logged
    pub dropoff_window_hours: f64,
    /// longest trip, in calendar days, that will be logged
    pub max_trip_days: usize,
}

impl Default for DutyLogConfiguration {
    fn default() -> Self {
        Self {
            first_day_start_hour: 8.0,
            overnight_rest_hours: 8.0,
            max_blocks_per_day: 4,
            max_driving_block_hours: 4.0,
            padding_event_cutoff_hour: 23.0,
            sleeper_berth_min_hours: 8.0,
            pickup_duration_hours: 1.0,
            dropoff_duration_hours: 1.0,
            dropoff_window_hours: 1.0,
            max_trip_days: 366,
        }
    }
}

impl DutyLogConfiguration {
    pub fn validate(&self) -> Result<(), DutyLogError> {
        let within_day = [
            ("first_day_start_hour", self.first_day_start_hour),
            ("overnight_rest_hours", self.overnight_rest_hours),
        ];
        for (name, value) in within_day {
            if !(value.is_finite() && (0.0..HOURS_PER_DAY).contains(&value)) {
                return Err(DutyLogError::InvalidConfiguration(format!(
                    "{name} must be within [0, 24), found {value}"
                )));
            }
        }
        let positive = [
            ("max_driving_block_hours", self.max_driving_block_hours),
            ("pickup_duration_hours", self.pickup_duration_hours),
            ("dropoff_duration_hours", self.dropoff_duration_hours),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(DutyLogError::InvalidConfiguration(format!(
                    "{name} must be a positive number, found {value}"
                )));
            }
        }
        let non_negative = [
            ("padding_event_cutoff_hour", self.padding_event_cutoff_hour),
            ("sleeper_berth_min_hours", self.sleeper_berth_min_hours),
            ("dropoff_window_hours", self.dropoff_window_hours),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(DutyLogError::InvalidConfiguration(format!(
                    "{name} must be a non-negative number, found {value}"
                )));
            }
        }
        if self.max_blocks_per_day == 0 {
            return Err(DutyLogError::InvalidConfiguration(String::from(
                "max_blocks_per_day must be at least 1",
            )));
        }
        if self.max_trip_days == 0 {
            return Err(DutyLogError::InvalidConfiguration(String::from(
                "max_trip_days must be at least 1",
            )));
        }
        Ok(())
    }
}
