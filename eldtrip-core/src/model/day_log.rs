use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DutyStatus, LogEvent, StatusBlock};

/// one calendar day of a driver's duty-status log.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DayLog {
    pub date: NaiveDate,
    pub status_blocks: Vec<StatusBlock>,
    pub events: Vec<LogEvent>,
    pub driving_hours: f64,
    pub on_duty_hours: f64,
    pub off_duty_hours: f64,
    /// cumulative driving + on-duty hours for the whole trip at the end of this day
    pub cycle_hours_used: f64,
}

impl DayLog {
    pub fn new(date: NaiveDate) -> DayLog {
        DayLog {
            date,
            status_blocks: vec![],
            events: vec![],
            driving_hours: 0.0,
            on_duty_hours: 0.0,
            off_duty_hours: 0.0,
            cycle_hours_used: 0.0,
        }
    }

    /// date as printed on the log sheet header, e.g. "Mon, Jun 02"
    pub fn display_date(&self) -> String {
        self.date.format("%a, %b %d").to_string()
    }

    /// hours of this day covered by status blocks
    pub fn logged_hours(&self) -> f64 {
        self.status_blocks.iter().map(|b| b.duration_hours()).sum()
    }

    pub fn hours_in_status(&self, status: DutyStatus) -> f64 {
        self.status_blocks
            .iter()
            .filter(|b| b.status == status)
            .map(|b| b.duration_hours())
            .sum()
    }

    /// driving plus on-duty hours accrued during this day
    pub fn working_hours(&self) -> f64 {
        self.driving_hours + self.on_duty_hours
    }

    /// true when each block starts where the previous one ended
    pub fn is_contiguous(&self) -> bool {
        self.status_blocks
            .windows(2)
            .all(|w| w[0].end_hour == w[1].start_hour)
    }
}
