use chrono::NaiveDate;
use eldtrip_core::model::{DayLog, DutyStatus, LogEvent, ModelError, StatusBlock, HOURS_PER_DAY};

/// the log day being filled in and its clock position
#[derive(Clone, Debug)]
pub(super) struct DayState {
    pub clock: f64,
    pub log: DayLog,
}

impl DayState {
    pub fn open(date: NaiveDate, start_hour: f64) -> DayState {
        DayState {
            clock: start_hour,
            log: DayLog::new(date),
        }
    }

    pub fn block_count(&self) -> usize {
        self.log.status_blocks.len()
    }

    pub fn is_over(&self) -> bool {
        self.clock >= HOURS_PER_DAY
    }

    /// appends a block of `hours` starting at the clock, cut off at midnight.
    /// returns the hours actually logged.
    pub fn log_block(
        self,
        status: DutyStatus,
        hours: f64,
        remark: Option<String>,
    ) -> Result<(DayState, f64), ModelError> {
        let DayState { clock, mut log } = self;
        let end = (clock + hours).min(HOURS_PER_DAY);
        let block = StatusBlock::try_new(status, clock, end)?;
        let logged = block.duration_hours();
        match status {
            DutyStatus::Driving => log.driving_hours += logged,
            DutyStatus::OnDuty => log.on_duty_hours += logged,
            DutyStatus::OffDuty | DutyStatus::SleeperBerth => log.off_duty_hours += logged,
        }
        if let Some(description) = remark {
            log.events.push(LogEvent::new(clock, description));
        }
        log.status_blocks.push(block);
        Ok((DayState { clock: end, log }, logged))
    }
}
