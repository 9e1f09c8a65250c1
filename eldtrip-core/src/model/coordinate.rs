use std::fmt::Display;

use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

use super::ModelError;

/// a WGS84 position in decimal degrees.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// a vertex of a route polyline. its ordinal position along the route is
/// its index within the containing sequence.
pub type RoutePoint = Coordinate;

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// builds a coordinate, rejecting non-finite or out-of-range values.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Coordinate, ModelError> {
        let coordinate = Coordinate::new(latitude, longitude);
        coordinate.validate()?;
        Ok(coordinate)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(ModelError::NonFiniteCoordinate(
                self.latitude,
                self.longitude,
            ));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ModelError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ModelError::LongitudeOutOfRange(self.longitude));
        }
        Ok(())
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}

/// geo types are x/y ordered, so x is longitude.
impl From<Coordinate> for Point<f64> {
    fn from(value: Coordinate) -> Self {
        Point::new(value.longitude, value.latitude)
    }
}

impl From<Coord<f64>> for Coordinate {
    fn from(value: Coord<f64>) -> Self {
        Coordinate::new(value.y, value.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(Coordinate::try_new(39.7392, -104.9903).is_ok());
        assert_eq!(
            Coordinate::try_new(91.0, 0.0),
            Err(ModelError::LatitudeOutOfRange(91.0))
        );
        assert_eq!(
            Coordinate::try_new(0.0, -180.5),
            Err(ModelError::LongitudeOutOfRange(-180.5))
        );
        assert!(matches!(
            Coordinate::try_new(f64::NAN, 0.0),
            Err(ModelError::NonFiniteCoordinate(_, _))
        ));
    }

    #[test]
    fn test_geo_orientation() {
        let c = Coordinate::new(40.7128, -74.0060);
        let p: Point<f64> = c.into();
        assert_eq!(p.x(), -74.0060);
        assert_eq!(p.y(), 40.7128);
        let back = Coordinate::from(p.0);
        assert_eq!(back, c);
    }
}
