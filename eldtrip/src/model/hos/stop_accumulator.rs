use eldtrip_core::model::{Coordinate, FuelStop, RestReason, RestStop, TripLeg};

use super::{HosConfiguration, HosState};

/// stops emitted so far plus the counters needed to place the next ones.
/// folded over the sampled route points in traversal order.
#[derive(Clone, Debug)]
pub(super) struct StopAccumulator {
    pub state: HosState,
    pub last_sample_miles: f64,
    pub rest_stops: Vec<RestStop>,
    pub fuel_stops: Vec<FuelStop>,
}

/// a sampled route point
pub(super) struct RouteSample {
    pub coordinates: Coordinate,
    pub miles: f64,
    pub leg: TripLeg,
}

impl StopAccumulator {
    pub fn new(state: HosState) -> StopAccumulator {
        StopAccumulator {
            state,
            last_sample_miles: 0.0,
            rest_stops: vec![],
            fuel_stops: vec![],
        }
    }

    /// advances the HOS clocks to `sample` and applies, in order, the
    /// 30-minute break, 10-hour reset and fuel rules.
    pub fn visit(self, sample: RouteSample, conf: &HosConfiguration) -> StopAccumulator {
        let StopAccumulator {
            state,
            last_sample_miles,
            mut rest_stops,
            mut fuel_stops,
        } = self;
        let driven_hours = (sample.miles - last_sample_miles).max(0.0) / conf.average_speed_mph;
        let mut state = state.drive(driven_hours);

        if state.break_due(sample.miles, conf) {
            rest_stops.push(rest_stop(&sample, RestReason::BreakLimit, conf.break_duration_hours));
            state = state.take_break(sample.miles, conf);
        }

        let reset_reason = if state.driving_cap_reached(conf) {
            Some(RestReason::DrivingLimit)
        } else if state.on_duty_cap_reached(conf) {
            Some(RestReason::OnDutyLimit)
        } else {
            None
        };
        if let Some(reason) = reset_reason {
            rest_stops.push(rest_stop(&sample, reason, conf.reset_duration_hours));
            state = state.take_reset(sample.miles, conf);
        }

        if state.fuel_due(sample.miles, conf) {
            log::debug!(
                "fuel stop at {:.1} miles ({})",
                sample.miles,
                sample.coordinates
            );
            fuel_stops.push(FuelStop {
                coordinates: sample.coordinates,
                distance_at_stop: sample.miles,
                leg: sample.leg,
            });
            state = state.refuel(sample.miles);
        }

        StopAccumulator {
            state,
            last_sample_miles: sample.miles,
            rest_stops,
            fuel_stops,
        }
    }
}

fn rest_stop(sample: &RouteSample, reason: RestReason, duration_hours: f64) -> RestStop {
    log::debug!(
        "{reason} at {:.1} miles ({}, leg {})",
        sample.miles,
        sample.coordinates,
        sample.leg
    );
    RestStop {
        coordinates: sample.coordinates,
        duration_hours,
        reason,
        distance_at_stop: sample.miles,
        leg: sample.leg,
    }
}
