//! Point structure for representing geographic coordinates

use serde::{Deserialize, Serialize};

use crate::errors::{GeoError, GeoResult};

/// A WGS84 position in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Latitude, valid in [-90, 90]
    pub lat: f64,
    /// Longitude, valid in [-180, 180]
    pub lng: f64,
}

impl Point {
    /// Create a new point. No range checking is done.
    pub fn new(lat: f64, lng: f64) -> Self {
        Point { lat, lng }
    }

    /// Check that both coordinates are finite and inside their valid range
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }

    /// Parse a point from a string (format: "lat,lng")
    pub fn from_string(point_str: &str) -> GeoResult<Self> {
        let parts: Vec<&str> = point_str.split(',').collect();
        if parts.len() != 2 {
            return Err(GeoError::InvalidCoordinate(format!(
                "'{}' must be in format 'lat,lng'",
                point_str
            )));
        }

        let lat = parts[0].trim().parse::<f64>()
            .map_err(|_| GeoError::InvalidCoordinate(format!("invalid latitude '{}'", parts[0].trim())))?;
        let lng = parts[1].trim().parse::<f64>()
            .map_err(|_| GeoError::InvalidCoordinate(format!("invalid longitude '{}'", parts[1].trim())))?;

        Ok(Point::new(lat, lng))
    }

    /// Great-circle distance to another point in kilometers, rounded to 2 decimals
    pub fn distance_to(&self, other: &Point) -> f64 {
        super::distance::distance_km(self.lat, self.lng, other.lat, other.lng)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
