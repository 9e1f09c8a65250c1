use std::fmt::Write;

use eldtrip_core::model::{DayLog, DutyStatus, TripLog};

use super::{format_clock, format_duration};

/// grid cells per hour
const CELLS_PER_HOUR: usize = 4;
const FILLED: char = '#';
const EMPTY: char = '.';

/// renders one day as a paper-style log sheet: a 24-hour grid with one row
/// per duty status in quarter-hour cells, row totals and the day's remarks.
pub fn render_day_sheet(day: &DayLog, day_number: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Day {day_number} - {}", day.display_date());
    let _ = writeln!(out, "      {}", hour_ruler());
    for status in DutyStatus::ALL {
        let _ = writeln!(
            out,
            "{:<4} |{}| {:>5.2}",
            status.code(),
            grid_row(day, status),
            day.hours_in_status(status)
        );
    }
    let _ = writeln!(
        out,
        "driving {} | on duty {} | off duty {} | cycle used {}",
        format_duration(day.driving_hours),
        format_duration(day.on_duty_hours),
        format_duration(day.off_duty_hours),
        format_duration(day.cycle_hours_used)
    );
    if !day.events.is_empty() {
        let _ = writeln!(out, "Remarks:");
        for event in day.events.iter() {
            let _ = writeln!(out, "  {}  {}", format_clock(event.hour), event.description);
        }
    }
    out
}

/// every day sheet of the trip, separated by blank lines
pub fn render_trip_log(log: &TripLog) -> String {
    let mut sheets: Vec<String> = log
        .days
        .iter()
        .enumerate()
        .map(|(idx, day)| render_day_sheet(day, idx + 1))
        .collect();
    if !log.is_complete() {
        sheets.push(format!(
            "WARNING: {} of driving did not fit into the log\n",
            format_duration(log.undelivered_driving_hours)
        ));
    }
    sheets.join("\n")
}

/// hour labels over the grid, one every four hours
fn hour_ruler() -> String {
    let width = 24 * CELLS_PER_HOUR;
    let mut ruler = vec![' '; width];
    for hour in (0..24).step_by(4) {
        let label = match hour {
            0 => String::from("M"),
            12 => String::from("N"),
            h => h.to_string(),
        };
        for (offset, c) in label.chars().enumerate() {
            if let Some(cell) = ruler.get_mut(hour * CELLS_PER_HOUR + offset) {
                *cell = c;
            }
        }
    }
    ruler.into_iter().collect()
}

/// a cell is filled when the status holds at the middle of its quarter hour
fn grid_row(day: &DayLog, status: DutyStatus) -> String {
    (0..24 * CELLS_PER_HOUR)
        .map(|cell| {
            let hour = (cell as f64 + 0.5) / CELLS_PER_HOUR as f64;
            let covered = day
                .status_blocks
                .iter()
                .any(|b| b.status == status && b.start_hour <= hour && hour < b.end_hour);
            if covered {
                FILLED
            } else {
                EMPTY
            }
        })
        .collect()
}
