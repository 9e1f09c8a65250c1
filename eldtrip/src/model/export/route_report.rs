use eldtrip_core::model::RouteSummary;
use itertools::Itertools;

use super::format_duration;

/// plain-text overview of a planned route and its stops
pub fn render_route_summary(summary: &RouteSummary) -> String {
    let header = [
        format!("From:     {}", summary.start.display_name()),
        format!("Pickup:   {}", summary.pickup.display_name()),
        format!("Dropoff:  {}", summary.dropoff.display_name()),
        format!("Distance: {:.1} miles", summary.total_distance_miles),
        format!("Driving:  {}", format_duration(summary.total_driving_hours)),
        format!(
            "Trip:     {} over {} day(s)",
            format_duration(summary.total_trip_hours),
            summary.trip_days()
        ),
    ];
    let rests = summary
        .rest_stops
        .iter()
        .map(|s| {
            format!(
                "  {:>7.1} mi  {}  {} [{}] at {}",
                s.distance_at_stop,
                format_duration(s.duration_hours),
                s.reason,
                s.leg,
                s.coordinates
            )
        })
        .join("\n");
    let fuel = summary
        .fuel_stops
        .iter()
        .map(|s| format!("  {:>7.1} mi  fuel [{}] at {}", s.distance_at_stop, s.leg, s.coordinates))
        .join("\n");

    let mut sections = vec![header.join("\n")];
    sections.push(format!("Rest stops ({}):", summary.rest_stops.len()));
    if !rests.is_empty() {
        sections.push(rests);
    }
    sections.push(format!("Fuel stops ({}):", summary.fuel_stops.len()));
    if !fuel.is_empty() {
        sections.push(fuel);
    }
    format!("{}\n", sections.join("\n"))
}
