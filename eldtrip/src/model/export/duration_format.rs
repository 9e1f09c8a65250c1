/// hours as "{h}h {m}m", rounded to the nearest minute
pub fn format_duration(hours: f64) -> String {
    let minutes = whole_minutes(hours);
    format!("{}h {}m", minutes / 60, minutes % 60)
}

/// hour of day as a 24-hour "HH:MM" clock time
pub fn format_clock(hour: f64) -> String {
    let minutes = whole_minutes(hour);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn whole_minutes(hours: f64) -> u64 {
    if hours.is_finite() && hours > 0.0 {
        (hours * 60.0).round() as u64
    } else {
        0
    }
}
