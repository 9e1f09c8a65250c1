use geo::{Distance, HaversineMeasure, Length, LineString, Point};
use itertools::Itertools;

use crate::model::Coordinate;

/// radius of the sphere used for great-circle distances, in miles
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// haversine metric space scaled to miles
const EARTH: HaversineMeasure = HaversineMeasure::new(EARTH_RADIUS_MILES);

/// longest possible great-circle distance on [`EARTH`]
const HALF_CIRCUMFERENCE_MILES: f64 = std::f64::consts::PI * EARTH_RADIUS_MILES;

/// great-circle distance between two coordinates using the haversine formula.
///
/// the result is symmetric and exactly zero for coincident points. rounding
/// near antipodal points can push the haversine term past one, so the result
/// is capped at half the circumference (`f64::min` also discards the NaN).
///
/// # Arguments
///
/// * `a` - first coordinate
/// * `b` - second coordinate
///
/// # Returns
///
/// * distance in miles
pub fn haversine_miles(a: &Coordinate, b: &Coordinate) -> f64 {
    EARTH
        .distance(Point::from(*a), Point::from(*b))
        .min(HALF_CIRCUMFERENCE_MILES)
}

/// sums the great-circle length of every consecutive pair of a polyline.
pub fn polyline_miles(points: &[Coordinate]) -> f64 {
    let line: LineString<f64> = points.iter().map(|p| Point::from(*p)).collect();
    EARTH.length(&line)
}

/// distance walked from the first point to each point of a polyline.
/// the first entry is always zero; an empty polyline yields an empty vector.
pub fn cumulative_miles(points: &[Coordinate]) -> Vec<f64> {
    if points.is_empty() {
        return vec![];
    }
    let walked = points.iter().tuple_windows().scan(0.0, |acc, (a, b)| {
        *acc += haversine_miles(a, b);
        Some(*acc)
    });
    std::iter::once(0.0).chain(walked).collect()
}
