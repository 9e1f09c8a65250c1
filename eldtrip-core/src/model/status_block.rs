use serde::{Deserialize, Serialize};

use super::{DutyStatus, ModelError, HOURS_PER_DAY};

/// a contiguous span of a single duty status within one day, in hours
/// since midnight.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct StatusBlock {
    pub status: DutyStatus,
    pub start_hour: f64,
    pub end_hour: f64,
}

impl StatusBlock {
    pub fn try_new(
        status: DutyStatus,
        start_hour: f64,
        end_hour: f64,
    ) -> Result<StatusBlock, ModelError> {
        let valid = start_hour.is_finite()
            && end_hour.is_finite()
            && start_hour >= 0.0
            && end_hour <= HOURS_PER_DAY
            && end_hour > start_hour;
        if !valid {
            return Err(ModelError::InvalidBlockSpan(start_hour, end_hour));
        }
        Ok(StatusBlock {
            status,
            start_hour,
            end_hour,
        })
    }

    pub fn duration_hours(&self) -> f64 {
        self.end_hour - self.start_hour
    }
}
