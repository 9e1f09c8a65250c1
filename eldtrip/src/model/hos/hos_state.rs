use super::HosConfiguration;

/// the driver's Hours-of-Service counters at one point along the route.
/// transitions consume the state and return the next one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HosState {
    pub remaining_driving_hours: f64,
    pub remaining_on_duty_hours: f64,
    pub hours_since_last_break: f64,
    /// route miles at the most recent break or reset
    pub last_rest_stop_miles: f64,
    pub last_fuel_stop_miles: f64,
}

impl HosState {
    /// counters for a driver who has already used `current_cycle_hours`
    pub fn initial(current_cycle_hours: f64, conf: &HosConfiguration) -> HosState {
        let remaining = |cap: f64| {
            if current_cycle_hours < cap {
                (cap - current_cycle_hours).max(0.0)
            } else {
                0.0
            }
        };
        HosState {
            remaining_driving_hours: remaining(conf.max_driving_hours),
            remaining_on_duty_hours: remaining(conf.max_on_duty_hours),
            hours_since_last_break: current_cycle_hours.min(conf.break_after_driving_hours),
            last_rest_stop_miles: 0.0,
            last_fuel_stop_miles: 0.0,
        }
    }

    /// charges `hours` of driving against every counter
    pub fn drive(self, hours: f64) -> HosState {
        HosState {
            remaining_driving_hours: (self.remaining_driving_hours - hours).max(0.0),
            remaining_on_duty_hours: (self.remaining_on_duty_hours - hours).max(0.0),
            hours_since_last_break: self.hours_since_last_break + hours,
            ..self
        }
    }

    pub fn break_due(&self, at_miles: f64, conf: &HosConfiguration) -> bool {
        self.hours_since_last_break >= conf.break_after_driving_hours
            && at_miles - self.last_rest_stop_miles >= conf.min_miles_between_rest_stops
    }

    /// the break itself is on the 14-hour clock, not the driving clock
    pub fn take_break(self, at_miles: f64, conf: &HosConfiguration) -> HosState {
        HosState {
            remaining_on_duty_hours: (self.remaining_on_duty_hours - conf.break_duration_hours)
                .max(0.0),
            hours_since_last_break: 0.0,
            last_rest_stop_miles: at_miles,
            ..self
        }
    }

    pub fn driving_cap_reached(&self, conf: &HosConfiguration) -> bool {
        self.remaining_driving_hours <= conf.reset_margin_hours
    }

    pub fn on_duty_cap_reached(&self, conf: &HosConfiguration) -> bool {
        self.remaining_on_duty_hours <= conf.reset_margin_hours
    }

    pub fn take_reset(self, at_miles: f64, conf: &HosConfiguration) -> HosState {
        HosState {
            remaining_driving_hours: conf.max_driving_hours,
            remaining_on_duty_hours: conf.max_on_duty_hours,
            hours_since_last_break: 0.0,
            last_rest_stop_miles: at_miles,
            ..self
        }
    }

    pub fn fuel_due(&self, at_miles: f64, conf: &HosConfiguration) -> bool {
        at_miles - self.last_fuel_stop_miles >= conf.fuel_interval_miles
    }

    pub fn refuel(self, at_miles: f64) -> HosState {
        HosState {
            last_fuel_stop_miles: at_miles,
            ..self
        }
    }
}
