//! Coordinate and place models for geographic input

use serde::{Deserialize, Serialize};

use crate::error::WanderwiseError;

/// A latitude/longitude pair in decimal degrees
///
/// Plain value type with no identity beyond its components. Range checking
/// is explicit via [`Coordinate::validate`]; the distance math itself
/// accepts any finite input, so callers validate once at the boundary
/// where coordinates enter the system.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees, valid range [-90, 90]
    pub latitude: f64,
    /// Longitude in decimal degrees, valid range [-180, 180]
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that both components are finite and within range
    pub fn validate(&self) -> crate::Result<()> {
        if !self.latitude.is_finite() || !self.longitude.is_finite() {
            return Err(WanderwiseError::invalid_coordinate(format!(
                "components must be finite, got ({}, {})",
                self.latitude, self.longitude
            )));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(WanderwiseError::invalid_coordinate(format!(
                "latitude {} outside [-90, 90]",
                self.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(WanderwiseError::invalid_coordinate(format!(
                "longitude {} outside [-180, 180]",
                self.longitude
            )));
        }
        Ok(())
    }

    /// Format coordinate as a display string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A geocoded place: a name with its resolved coordinate
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Place {
    /// Place name (city, region, etc.)
    pub name: String,
    /// Country name, when the geocoder supplies one
    pub country: Option<String>,
    /// Resolved coordinate
    pub coordinate: Coordinate,
}

impl Place {
    /// Create a new place
    #[must_use]
    pub fn new(name: String, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            country: None,
            coordinate: Coordinate::new(latitude, longitude),
        }
    }

    /// Create place with country
    #[must_use]
    pub fn with_country(name: String, country: String, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            country: Some(country),
            coordinate: Coordinate::new(latitude, longitude),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinate() {
        assert!(Coordinate::new(48.8566, 2.3522).validate().is_ok());
        assert!(Coordinate::new(-90.0, 180.0).validate().is_ok());
        assert!(Coordinate::new(90.0, -180.0).validate().is_ok());
        assert!(Coordinate::new(0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_coordinate() {
        assert!(Coordinate::new(90.1, 0.0).validate().is_err());
        assert!(Coordinate::new(-90.1, 0.0).validate().is_err());
        assert!(Coordinate::new(0.0, 180.1).validate().is_err());
        assert!(Coordinate::new(0.0, -180.1).validate().is_err());
    }

    #[test]
    fn test_non_finite_coordinate() {
        assert!(Coordinate::new(f64::NAN, 0.0).validate().is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_format_coordinates() {
        let coordinate = Coordinate::new(46.818_234, 8.227_456);
        assert_eq!(coordinate.format_coordinates(), "46.8182, 8.2275");
    }

    #[test]
    fn test_place_constructors() {
        let place = Place::new("Interlaken".to_string(), 46.8182, 8.2275);
        assert_eq!(place.country, None);
        assert_eq!(place.coordinate, Coordinate::new(46.8182, 8.2275));

        let place =
            Place::with_country("Interlaken".to_string(), "CH".to_string(), 46.8182, 8.2275);
        assert_eq!(place.country.as_deref(), Some("CH"));
    }
}
