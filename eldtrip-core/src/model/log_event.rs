use serde::{Deserialize, Serialize};

/// a remark printed on the log sheet. not used for any computation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LogEvent {
    pub hour: f64,
    pub description: String,
}

impl LogEvent {
    pub fn new(hour: f64, description: impl Into<String>) -> LogEvent {
        LogEvent {
            hour,
            description: description.into(),
        }
    }
}
