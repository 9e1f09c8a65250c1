use eldtrip_core::model::Coordinate;

use super::{GeocodeError, Geocoder};

/// resolves addresses that are already written as `"lat, lng"`, such as
/// a position reported by a device.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoordinateGeocoder;

impl Geocoder for CoordinateGeocoder {
    fn resolve(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(GeocodeError::EmptyAddress);
        }
        let parts: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        let (lat, lng) = match parts.as_slice() {
            [lat, lng] => match (lat.parse::<f64>(), lng.parse::<f64>()) {
                (Ok(lat), Ok(lng)) => (lat, lng),
                _ => return Err(GeocodeError::NotFound(trimmed.to_string())),
            },
            _ => return Err(GeocodeError::NotFound(trimmed.to_string())),
        };
        Coordinate::try_new(lat, lng)
            .map_err(|e| GeocodeError::InvalidCoordinate(trimmed.to_string(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_coordinate_strings() {
        let c = CoordinateGeocoder
            .resolve(" 40.7128, -74.0060 ")
            .expect("should parse");
        assert_eq!(c, Coordinate::new(40.7128, -74.006));
    }

    #[test]
    fn test_rejects_non_coordinates() {
        assert!(matches!(
            CoordinateGeocoder.resolve("Denver, CO"),
            Err(GeocodeError::NotFound(_))
        ));
        assert!(matches!(
            CoordinateGeocoder.resolve("1, 2, 3"),
            Err(GeocodeError::NotFound(_))
        ));
        assert_eq!(
            CoordinateGeocoder.resolve("   "),
            Err(GeocodeError::EmptyAddress)
        );
    }

    #[test]
    fn test_out_of_range_is_invalid_not_missing() {
        assert!(matches!(
            CoordinateGeocoder.resolve("140.0, 20.0"),
            Err(GeocodeError::InvalidCoordinate(_, _))
        ));
    }
}
