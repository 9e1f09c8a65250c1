use serde::{Deserialize, Serialize};

use super::RoutePoint;

/// the drivable path for one leg as reported by the routing collaborator.
///
/// a failed lookup is still a value (`ok == false`) so callers decide how
/// to surface it; the planner refuses to continue with one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RouteLegResult {
    pub points: Vec<RoutePoint>,
    pub distance_miles: f64,
    pub duration_hours: f64,
    pub ok: bool,
    pub error_message: Option<String>,
}

impl RouteLegResult {
    pub fn success(points: Vec<RoutePoint>, distance_miles: f64, duration_hours: f64) -> Self {
        Self {
            points,
            distance_miles,
            duration_hours,
            ok: true,
            error_message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            points: vec![],
            distance_miles: 0.0,
            duration_hours: 0.0,
            ok: false,
            error_message: Some(message.into()),
        }
    }

    pub fn error_description(&self) -> &str {
        self.error_message
            .as_deref()
            .unwrap_or("routing service returned no route")
    }
}
