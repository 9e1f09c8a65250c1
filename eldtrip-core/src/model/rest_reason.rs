use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// the Hours-of-Service rule that forced a rest stop.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RestReason {
    /// 30-minute break after 8 hours of driving
    BreakLimit,
    /// 10-hour reset after the 11-hour driving cap
    DrivingLimit,
    /// 10-hour reset after the 14-hour on-duty window
    OnDutyLimit,
}

impl RestReason {
    /// true for the 10-hour resets
    pub fn is_reset(&self) -> bool {
        matches!(self, RestReason::DrivingLimit | RestReason::OnDutyLimit)
    }
}

impl Display for RestReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RestReason::BreakLimit => "30-minute break (8-hour driving limit)",
            RestReason::DrivingLimit => "10-hour rest (11-hour driving limit)",
            RestReason::OnDutyLimit => "10-hour rest (14-hour on-duty limit)",
        };
        write!(f, "{s}")
    }
}
