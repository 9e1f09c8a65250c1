use std::io::Write;

use chrono::NaiveDate;
use eldtrip_core::model::TripLog;
use serde::{Deserialize, Serialize};

use super::ExportError;

/// one status block of a trip log as a flat CSV record
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatusBlockRow {
    /// 1-based day of the trip
    pub day: usize,
    pub date: NaiveDate,
    pub status: String,
    pub start_hour: f64,
    pub end_hour: f64,
    pub duration_hours: f64,
}

pub fn write_status_blocks<W: Write>(log: &TripLog, out: W) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_writer(out);
    let rows = log.days.iter().enumerate().flat_map(|(idx, day)| {
        day.status_blocks.iter().map(move |block| StatusBlockRow {
            day: idx + 1,
            date: day.date,
            status: block.status.code().to_string(),
            start_hour: block.start_hour,
            end_hour: block.end_hour,
            duration_hours: block.duration_hours(),
        })
    });
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn status_blocks_csv(log: &TripLog) -> Result<String, ExportError> {
    let mut buffer: Vec<u8> = vec![];
    write_status_blocks(log, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| ExportError::Encoding(e.to_string()))
}
