use std::time::Duration;

use serde::{Deserialize, Serialize};

/// retry schedule for transport-level routing failures. attempts are
/// zero-indexed: attempt `n` waits up to `base_timeout_secs + n * timeout_step_secs`
/// for a response, and a failed attempt `n` is followed by a pause of
/// `backoff_base_secs ^ n` seconds.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_timeout_secs: f64,
    pub timeout_step_secs: f64,
    pub backoff_base_secs: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_timeout_secs: 10.0,
            timeout_step_secs: 5.0,
            backoff_base_secs: 2.0,
        }
    }
}

impl RetryPolicy {
    /// checks that every timeout and backoff in the schedule is a
    /// representable [`Duration`].
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err(String::from("max_attempts must be at least 1"));
        }
        let fields = [
            ("base_timeout_secs", self.base_timeout_secs),
            ("timeout_step_secs", self.timeout_step_secs),
            ("backoff_base_secs", self.backoff_base_secs),
        ];
        for (name, value) in fields {
            if !(value.is_finite() && value >= 0.0) {
                return Err(format!("{name} must be a non-negative number, found {value}"));
            }
        }
        if self.base_timeout_secs <= 0.0 {
            return Err(String::from("base_timeout_secs must be positive"));
        }
        let last = self.max_attempts - 1;
        let schedule = [
            ("timeout", self.timeout_secs(last)),
            ("backoff", self.backoff_secs(last)),
        ];
        for (name, secs) in schedule {
            if let Err(e) = Duration::try_from_secs_f64(secs) {
                return Err(format!(
                    "{name} of {secs} seconds on attempt {} is not a valid duration: {e}",
                    last + 1
                ));
            }
        }
        Ok(())
    }

    /// response timeout for attempt `attempt`. values outside the range of
    /// [`Duration`] saturate instead of panicking.
    pub fn timeout_for(&self, attempt: u32) -> Duration {
        saturating_duration(self.timeout_secs(attempt))
    }

    pub fn backoff_after(&self, attempt: u32) -> Duration {
        saturating_duration(self.backoff_secs(attempt))
    }

    fn timeout_secs(&self, attempt: u32) -> f64 {
        self.base_timeout_secs + self.timeout_step_secs * attempt as f64
    }

    fn backoff_secs(&self, attempt: u32) -> f64 {
        self.backoff_base_secs.powi(attempt.min(i32::MAX as u32) as i32)
    }
}

/// NaN and negative values map to zero, overflow maps to [`Duration::MAX`]
fn saturating_duration(secs: f64) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.timeout_for(0), Duration::from_secs(10));
        assert_eq!(policy.timeout_for(1), Duration::from_secs(15));
        assert_eq!(policy.timeout_for(2), Duration::from_secs(20));
        assert_eq!(policy.backoff_after(0), Duration::from_secs(1));
        assert_eq!(policy.backoff_after(1), Duration::from_secs(2));
        assert_eq!(policy.backoff_after(2), Duration::from_secs(4));
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(RetryPolicy::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_unrepresentable_schedule() {
        let cases = [
            RetryPolicy {
                max_attempts: 0,
                ..Default::default()
            },
            RetryPolicy {
                base_timeout_secs: f64::INFINITY,
                ..Default::default()
            },
            RetryPolicy {
                base_timeout_secs: 0.0,
                ..Default::default()
            },
            RetryPolicy {
                timeout_step_secs: f64::NAN,
                ..Default::default()
            },
            RetryPolicy {
                backoff_base_secs: -2.0,
                ..Default::default()
            },
            RetryPolicy {
                timeout_step_secs: 1e300,
                ..Default::default()
            },
            RetryPolicy {
                max_attempts: 2000,
                backoff_base_secs: 10.0,
                ..Default::default()
            },
        ];
        for policy in cases {
            assert!(policy.validate().is_err(), "accepted {policy:?}");
        }
    }

    #[test]
    fn test_out_of_range_schedule_saturates() {
        let policy = RetryPolicy {
            max_attempts: u32::MAX,
            base_timeout_secs: f64::INFINITY,
            timeout_step_secs: 0.0,
            backoff_base_secs: 1e10,
        };
        assert_eq!(policy.timeout_for(0), Duration::MAX);
        assert_eq!(policy.backoff_after(0), Duration::from_secs(1));
        assert_eq!(policy.backoff_after(u32::MAX), Duration::MAX);

        let negative = RetryPolicy {
            base_timeout_secs: -5.0,
            backoff_base_secs: -3.0,
            ..Default::default()
        };
        assert_eq!(negative.timeout_for(0), Duration::ZERO);
        assert_eq!(negative.backoff_after(1), Duration::ZERO);

        let undefined = RetryPolicy {
            timeout_step_secs: f64::NAN,
            ..Default::default()
        };
        assert_eq!(undefined.timeout_for(3), Duration::ZERO);
    }
}
