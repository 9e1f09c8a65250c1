use chrono::{Days, Local, NaiveDate};
use eldtrip_core::model::{DayLog, DutyStatus, RouteSummary, TripLog, HOURS_PER_DAY};

use super::day_state::DayState;
use super::trip_log_state::TripLogState;
use super::{DutyLogConfiguration, DutyLogError};

const REST_PERIOD_REMARK: &str = "Off duty (rest period)";
const PICKUP_REMARK: &str = "On duty - Pickup location";
const DROPOFF_REMARK: &str = "On duty - Dropoff location";
const OFF_DUTY_REMARK: &str = "Off duty";

/// turns a route summary into calendar-day duty-status logs.
///
/// the first day starts at `first_day_start_hour`, every later day opens
/// with an overnight off-duty block. within a day, each step logs the first
/// applicable of: a pending rest stop, the pickup, the dropoff, or a chunk
/// of driving. a day ends at midnight or once it holds `max_blocks_per_day`
/// blocks, and is padded off duty to midnight.
#[derive(Clone, Debug, Default)]
pub struct DutyLogGenerator {
    conf: DutyLogConfiguration,
}

impl DutyLogGenerator {
    pub fn new(conf: DutyLogConfiguration) -> Result<DutyLogGenerator, DutyLogError> {
        conf.validate()?;
        Ok(DutyLogGenerator { conf })
    }

    /// logs the trip starting on the current local date
    pub fn generate_from_today(&self, summary: &RouteSummary) -> Result<TripLog, DutyLogError> {
        self.generate(summary, Local::now().date_naive())
    }

    /// builds `ceil(total_trip_hours / 24)` day logs starting on `start_date`.
    ///
    /// # Arguments
    ///
    /// * `summary` - output of the stop planner
    /// * `start_date` - calendar date of the first log day
    ///
    /// # Returns
    ///
    /// * the trip log. driving time that did not fit into the day count is
    ///   reported as `undelivered_driving_hours` rather than as an error.
    pub fn generate(
        &self,
        summary: &RouteSummary,
        start_date: NaiveDate,
    ) -> Result<TripLog, DutyLogError> {
        validate_summary(summary)?;
        let max_trip_hours = self.conf.max_trip_days as f64 * HOURS_PER_DAY;
        if summary.total_trip_hours > max_trip_hours {
            return Err(DutyLogError::InvalidSummary(format!(
                "total_trip_hours {} exceeds the {} day limit",
                summary.total_trip_hours, self.conf.max_trip_days
            )));
        }
        let total_days = summary.trip_days();

        let (state, days) = (0..total_days).try_fold(
            (TripLogState::new(summary), vec![]),
            |(state, mut days), day_index| {
                let date = start_date
                    .checked_add_days(Days::new(day_index as u64))
                    .ok_or(DutyLogError::DateOutOfRange {
                        start: start_date,
                        offset: day_index,
                    })?;
                let (state, day) = self.log_day(state, day_index, date)?;
                days.push(day);
                Ok::<_, DutyLogError>((state, days))
            },
        )?;

        let undelivered_driving_hours = state.remaining_driving_hours;
        if undelivered_driving_hours > 0.0 {
            log::warn!(
                "trip log ends after {} days with {:.2} driving hours not logged",
                days.len(),
                undelivered_driving_hours
            );
        }
        log::info!(
            "generated {} day logs, {:.2} cycle hours used",
            days.len(),
            state.cycle_hours_used
        );
        Ok(TripLog {
            days,
            undelivered_driving_hours,
        })
    }

    fn log_day(
        &self,
        state: TripLogState,
        day_index: usize,
        date: NaiveDate,
    ) -> Result<(TripLogState, DayLog), DutyLogError> {
        let conf = &self.conf;
        let mut day = if day_index == 0 {
            DayState::open(date, conf.first_day_start_hour)
        } else if conf.overnight_rest_hours > 0.0 {
            let (day, _) = DayState::open(date, 0.0).log_block(
                DutyStatus::OffDuty,
                conf.overnight_rest_hours,
                Some(String::from(REST_PERIOD_REMARK)),
            )?;
            day
        } else {
            DayState::open(date, 0.0)
        };

        let mut state = state;
        while state.has_work() && !day.is_over() && day.block_count() < conf.max_blocks_per_day {
            (state, day) = self.step(state, day)?;
        }
        if state.remaining_driving_hours > 0.0 && !day.is_over() {
            log::warn!(
                "log day {} ({}) closed at {} status blocks with {:.2} driving hours left",
                day_index + 1,
                date,
                day.block_count(),
                state.remaining_driving_hours
            );
        }

        if !day.is_over() {
            let remark = (day.clock < conf.padding_event_cutoff_hour)
                .then(|| String::from(OFF_DUTY_REMARK));
            let padding = HOURS_PER_DAY - day.clock;
            (day, _) = day.log_block(DutyStatus::OffDuty, padding, remark)?;
        }

        let mut log = day.log;
        log.cycle_hours_used = state.cycle_hours_used;
        log::debug!(
            "log day {} ({}): {:.2}h driving, {:.2}h on duty, {:.2}h off duty",
            day_index + 1,
            log.display_date(),
            log.driving_hours,
            log.on_duty_hours,
            log.off_duty_hours
        );
        Ok((state, log))
    }

    /// logs one status block, picking the first rule that applies
    fn step(
        &self,
        state: TripLogState,
        day: DayState,
    ) -> Result<(TripLogState, DayState), DutyLogError> {
        let conf = &self.conf;
        let mut state = state;
        let worked = day.log.working_hours();

        let rest_due = state
            .pending_rests
            .front()
            .map(|rest| worked > 0.0 && worked >= rest.duration_hours)
            .unwrap_or(false);
        if rest_due {
            if let Some(rest) = state.pending_rests.pop_front() {
                let status = if rest.duration_hours >= conf.sleeper_berth_min_hours {
                    DutyStatus::SleeperBerth
                } else {
                    DutyStatus::OffDuty
                };
                let remark = format!("{} ({} hours)", rest.reason, rest.duration_hours);
                let (day, _) = day.log_block(status, rest.duration_hours, Some(remark))?;
                return Ok((state, day));
            }
        }

        if state.pickup_pending && worked <= 0.0 {
            let (day, logged) = day.log_block(
                DutyStatus::OnDuty,
                conf.pickup_duration_hours,
                Some(String::from(PICKUP_REMARK)),
            )?;
            state.pickup_pending = false;
            state.cycle_hours_used += logged;
            return Ok((state, day));
        }

        let dropoff_due = state.dropoff_pending
            && (state.remaining_driving_hours <= 0.0
                || (state.remaining_driving_hours <= conf.dropoff_window_hours
                    && day.log.driving_hours > 0.0));
        if dropoff_due {
            let (day, logged) = day.log_block(
                DutyStatus::OnDuty,
                conf.dropoff_duration_hours,
                Some(String::from(DROPOFF_REMARK)),
            )?;
            state.dropoff_pending = false;
            state.remaining_driving_hours = 0.0;
            state.cycle_hours_used += logged;
            return Ok((state, day));
        }

        let chunk = conf
            .max_driving_block_hours
            .min(state.remaining_driving_hours)
            .min(HOURS_PER_DAY - day.clock);
        let (day, logged) = day.log_block(
            DutyStatus::Driving,
            chunk,
            Some(format!("Driving ({chunk:.1} hours)")),
        )?;
        state.remaining_driving_hours = (state.remaining_driving_hours - logged).max(0.0);
        state.cycle_hours_used += logged;
        Ok((state, day))
    }
}

fn validate_summary(summary: &RouteSummary) -> Result<(), DutyLogError> {
    let totals = [
        ("total_driving_hours", summary.total_driving_hours),
        ("total_trip_hours", summary.total_trip_hours),
    ];
    for (name, value) in totals {
        if !(value.is_finite() && value >= 0.0) {
            return Err(DutyLogError::InvalidSummary(format!(
                "{name} must be a non-negative number, found {value}"
            )));
        }
    }
    if let Some(rest) = summary
        .rest_stops
        .iter()
        .find(|r| !(r.duration_hours.is_finite() && r.duration_hours > 0.0))
    {
        return Err(DutyLogError::InvalidSummary(format!(
            "rest stop at {:.1} miles has invalid duration {}",
            rest.distance_at_stop, rest.duration_hours
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use eldtrip_core::model::{
        Coordinate, LogEvent, RestReason, RestStop, StatusBlock, TripEndpoint, TripLeg,
    };

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
    }

    fn rest(reason: RestReason) -> RestStop {
        RestStop {
            coordinates: Coordinate::new(39.0, -100.0),
            duration_hours: if reason.is_reset() { 10.0 } else { 0.5 },
            reason,
            distance_at_stop: 0.0,
            leg: TripLeg::ToDropoff,
        }
    }

    fn summary(driving: f64, trip: f64, rest_stops: Vec<RestStop>) -> RouteSummary {
        let endpoint = TripEndpoint::new(None, Coordinate::new(39.0, -100.0));
        RouteSummary {
            start: endpoint.clone(),
            pickup: endpoint.clone(),
            dropoff: endpoint,
            total_distance_miles: driving * 55.0,
            total_driving_hours: driving,
            total_trip_hours: trip,
            rest_stops,
            fuel_stops: vec![],
            route_coordinates: vec![],
        }
    }

    fn spans(day: &DayLog) -> Vec<(DutyStatus, f64, f64)> {
        day.status_blocks
            .iter()
            .map(|b| (b.status, b.start_hour, b.end_hour))
            .collect()
    }

    fn assert_well_formed(log: &TripLog) {
        for (idx, day) in log.days.iter().enumerate() {
            assert!(day.is_contiguous(), "day {idx} is not contiguous");
            let expected = if idx == 0 { 16.0 } else { 24.0 };
            assert_relative_eq!(day.logged_hours(), expected, epsilon = 1e-9);
            assert_eq!(day.status_blocks.last().map(|b| b.end_hour), Some(24.0));
        }
        assert!(log
            .days
            .windows(2)
            .all(|w| w[0].cycle_hours_used <= w[1].cycle_hours_used));
    }

    #[test]
    fn test_single_day_trip() {
        let driving = 300.0 / 55.0;
        let log = DutyLogGenerator::default()
            .generate(&summary(driving, driving + 2.0, vec![]), date())
            .expect("log generation should succeed");
        assert_eq!(log.days.len(), 1);
        assert_well_formed(&log);

        let day = &log.days[0];
        let statuses: Vec<DutyStatus> = day.status_blocks.iter().map(|b| b.status).collect();
        assert_eq!(
            statuses,
            vec![
                DutyStatus::OnDuty,
                DutyStatus::Driving,
                DutyStatus::Driving,
                DutyStatus::OnDuty,
                DutyStatus::OffDuty
            ]
        );
        assert_eq!(day.status_blocks[0].start_hour, 8.0);
        let first_drive =
            StatusBlock::try_new(DutyStatus::Driving, 9.0, 13.0).expect("valid block");
        assert_eq!(day.status_blocks[1], first_drive);
        assert_relative_eq!(
            day.status_blocks[2].end_hour,
            13.0 + driving - 4.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(day.driving_hours, driving, epsilon = 1e-9);
        assert_eq!(day.on_duty_hours, 2.0);
        assert_relative_eq!(day.cycle_hours_used, driving + 2.0, epsilon = 1e-9);
        assert_eq!(day.date, date());

        let remarks: Vec<&str> = day.events.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(
            remarks,
            vec![
                "On duty - Pickup location",
                "Driving (4.0 hours)",
                "Driving (1.5 hours)",
                "On duty - Dropoff location",
                "Off duty"
            ]
        );
        assert!(log.is_complete());
    }

    #[test]
    fn test_multi_day_trip() {
        let rests = vec![rest(RestReason::BreakLimit), rest(RestReason::DrivingLimit)];
        let trip = summary(20.0, 32.5, rests);
        let log = DutyLogGenerator::default()
            .generate(&trip, date())
            .expect("log generation should succeed");
        assert_eq!(log.days.len(), trip.trip_days());
        assert_eq!(log.days.len(), 2);
        assert_well_formed(&log);

        assert_eq!(
            spans(&log.days[0]),
            vec![
                (DutyStatus::OnDuty, 8.0, 9.0),
                (DutyStatus::OffDuty, 9.0, 9.5),
                (DutyStatus::Driving, 9.5, 13.5),
                (DutyStatus::Driving, 13.5, 17.5),
                (DutyStatus::OffDuty, 17.5, 24.0),
            ]
        );
        assert_eq!(
            log.days[0].events[1],
            LogEvent::new(9.0, "30-minute break (8-hour driving limit) (0.5 hours)")
        );
        assert_eq!(
            spans(&log.days[1]),
            vec![
                (DutyStatus::OffDuty, 0.0, 8.0),
                (DutyStatus::Driving, 8.0, 12.0),
                (DutyStatus::Driving, 12.0, 16.0),
                (DutyStatus::Driving, 16.0, 20.0),
                (DutyStatus::OffDuty, 20.0, 24.0),
            ]
        );
        assert_eq!(log.days[1].events[0], LogEvent::new(0.0, "Off duty (rest period)"));
        assert_eq!(log.days[0].cycle_hours_used, 9.0);
        assert_eq!(log.days[1].cycle_hours_used, 21.0);
        assert_eq!(log.days[1].date, NaiveDate::from_ymd_opt(2024, 3, 2).expect("valid"));
        assert_eq!(log.total_driving_hours(), 20.0);
        assert_eq!(log.final_cycle_hours(), 21.0);
    }

    #[test]
    fn test_rest_crossing_midnight_is_truncated() {
        let generator = DutyLogGenerator::new(DutyLogConfiguration {
            max_blocks_per_day: 8,
            ..Default::default()
        })
        .expect("valid configuration");
        let trip = summary(12.0, 30.0, vec![rest(RestReason::DrivingLimit)]);
        let log = generator.generate(&trip, date()).expect("log generation should succeed");
        assert_eq!(log.days.len(), 2);
        assert_well_formed(&log);

        let day0 = &log.days[0];
        assert_eq!(
            day0.status_blocks.last().copied(),
            Some(StatusBlock::try_new(DutyStatus::SleeperBerth, 21.0, 24.0).expect("valid"))
        );
        // only the part before midnight is logged, the rest is not carried over
        assert_eq!(day0.off_duty_hours, 3.0);
        assert_eq!(
            day0.events.last(),
            Some(&LogEvent::new(21.0, "10-hour rest (11-hour driving limit) (10 hours)"))
        );

        assert_eq!(
            spans(&log.days[1]),
            vec![
                (DutyStatus::OffDuty, 0.0, 8.0),
                (DutyStatus::OnDuty, 8.0, 9.0),
                (DutyStatus::OffDuty, 9.0, 24.0),
            ]
        );
        assert_eq!(log.days[1].events[1].description, "On duty - Dropoff location");
    }

    #[test]
    fn test_block_cap_leaves_driving_undelivered() {
        let log = DutyLogGenerator::default()
            .generate(&summary(30.0, 24.0, vec![]), date())
            .expect("log generation should succeed");
        assert_eq!(log.days.len(), 1);
        assert_well_formed(&log);
        assert_eq!(log.days[0].driving_hours, 12.0);
        assert_eq!(log.undelivered_driving_hours, 18.0);
        assert!(!log.is_complete());
    }

    #[test]
    fn test_late_padding_has_no_remark() {
        let generator = DutyLogGenerator::new(DutyLogConfiguration {
            max_blocks_per_day: 5,
            ..Default::default()
        })
        .expect("valid configuration");
        let log = generator
            .generate(&summary(14.5, 16.5, vec![]), date())
            .expect("log generation should succeed");
        assert_well_formed(&log);
        let day = &log.days[0];
        assert_eq!(
            day.status_blocks.last().copied(),
            Some(StatusBlock::try_new(DutyStatus::OffDuty, 23.5, 24.0).expect("valid"))
        );
        assert_eq!(day.events.len(), 5);
        assert_eq!(day.events[4], LogEvent::new(21.0, "Driving (2.5 hours)"));
    }

    #[test]
    fn test_trip_without_driving() {
        let log = DutyLogGenerator::default()
            .generate(&summary(0.0, 2.0, vec![]), date())
            .expect("log generation should succeed");
        assert_well_formed(&log);
        assert_eq!(
            spans(&log.days[0]),
            vec![
                (DutyStatus::OnDuty, 8.0, 9.0),
                (DutyStatus::OnDuty, 9.0, 10.0),
                (DutyStatus::OffDuty, 10.0, 24.0),
            ]
        );
        assert_eq!(log.days[0].cycle_hours_used, 2.0);
    }

    #[test]
    fn test_empty_trip_has_no_days() {
        let log = DutyLogGenerator::default()
            .generate(&summary(0.0, 0.0, vec![]), date())
            .expect("log generation should succeed");
        assert!(log.days.is_empty());
        assert_eq!(log.final_cycle_hours(), 0.0);
    }

    #[test]
    fn test_rejects_invalid_summary() {
        let generator = DutyLogGenerator::default();
        assert!(matches!(
            generator.generate(&summary(-1.0, 2.0, vec![]), date()),
            Err(DutyLogError::InvalidSummary(_))
        ));
        let mut zero_rest = rest(RestReason::BreakLimit);
        zero_rest.duration_hours = 0.0;
        assert!(matches!(
            generator.generate(&summary(10.0, 12.0, vec![zero_rest]), date()),
            Err(DutyLogError::InvalidSummary(_))
        ));
    }

    #[test]
    fn test_rejects_trip_longer_than_day_limit() {
        let generator = DutyLogGenerator::default();
        assert!(matches!(
            generator.generate(&summary(1.0, 1e300, vec![]), date()),
            Err(DutyLogError::InvalidSummary(_))
        ));

        let generator = DutyLogGenerator::new(DutyLogConfiguration {
            max_trip_days: 2,
            ..Default::default()
        })
        .expect("valid configuration");
        assert!(generator.generate(&summary(20.0, 48.0, vec![]), date()).is_ok());
        assert!(matches!(
            generator.generate(&summary(20.0, 48.5, vec![]), date()),
            Err(DutyLogError::InvalidSummary(_))
        ));
    }

    #[test]
    fn test_generate_from_today() {
        let log = DutyLogGenerator::default()
            .generate_from_today(&summary(5.0, 7.0, vec![]))
            .expect("log generation should succeed");
        assert_eq!(log.days.len(), 1);
    }
}
