use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// the four rows of a driver's daily log sheet. serialized with the
/// abbreviations printed on paper logs.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DutyStatus {
    #[serde(rename = "OFF")]
    OffDuty,
    #[serde(rename = "SB")]
    SleeperBerth,
    #[serde(rename = "D")]
    Driving,
    #[serde(rename = "ON")]
    OnDuty,
}

impl DutyStatus {
    /// log sheet row order, top to bottom
    pub const ALL: [DutyStatus; 4] = [
        DutyStatus::OffDuty,
        DutyStatus::SleeperBerth,
        DutyStatus::Driving,
        DutyStatus::OnDuty,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            DutyStatus::OffDuty => "OFF",
            DutyStatus::SleeperBerth => "SB",
            DutyStatus::Driving => "D",
            DutyStatus::OnDuty => "ON",
        }
    }

    /// driving and on-duty time count against the driver's cycle
    pub fn counts_toward_cycle(&self) -> bool {
        matches!(self, DutyStatus::Driving | DutyStatus::OnDuty)
    }
}

impl Display for DutyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DutyStatus::OffDuty => "Off Duty",
            DutyStatus::SleeperBerth => "Sleeper Berth",
            DutyStatus::Driving => "Driving",
            DutyStatus::OnDuty => "On Duty (not driving)",
        };
        write!(f, "{s}")
    }
}
