//! Bounds structure for a map viewport rectangle

use serde::{Deserialize, Serialize};

use super::point::Point;
use crate::errors::{GeoError, GeoResult};

/// An axis-aligned rectangle in latitude/longitude space
///
/// `north > south` is required. East/west ordering is not enforced by the
/// struct itself; a box with `west > east` (one crossing the 180th meridian)
/// matches no points in [`is_in_bounds`]. Use [`Bounds::validate`] to reject
/// such boxes up front.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl Bounds {
    /// Create bounds, checking `north > south`
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> GeoResult<Self> {
        // Negated so NaN edges fail as well
        if !(north > south) {
            return Err(GeoError::InvalidBounds { north, south });
        }
        Ok(Bounds { north, south, east, west })
    }

    /// Parse bounds from a string (format: "west,south,east,north")
    pub fn from_string(bbox_str: &str) -> GeoResult<Self> {
        let parts: Vec<&str> = bbox_str.split(',').collect();
        if parts.len() != 4 {
            return Err(GeoError::InvalidCoordinate(
                "Bounding box must have 4 comma-separated values (west,south,east,north)".to_string(),
            ));
        }

        let mut values = [0.0f64; 4];
        for (value, part) in values.iter_mut().zip(parts.iter()) {
            *value = part.trim().parse::<f64>()
                .map_err(|_| GeoError::InvalidCoordinate(format!("invalid bounding box value '{}'", part.trim())))?;
        }
        let [west, south, east, north] = values;

        Bounds::new(north, south, east, west)
    }

    /// Check the invariants this crate relies on for filtering
    ///
    /// Besides `north > south`, boxes crossing the antimeridian are rejected
    /// rather than silently matching nothing.
    pub fn validate(&self) -> GeoResult<()> {
        if !(self.north > self.south) {
            return Err(GeoError::InvalidBounds { north: self.north, south: self.south });
        }
        if self.crosses_antimeridian() {
            return Err(GeoError::AntimeridianBounds { west: self.west, east: self.east });
        }
        Ok(())
    }

    /// Whether this box wraps around the 180th meridian
    pub fn crosses_antimeridian(&self) -> bool {
        self.west > self.east
    }

    /// Longitude span in degrees
    pub fn width(&self) -> f64 {
        self.east - self.west
    }

    /// Latitude span in degrees
    pub fn height(&self) -> f64 {
        self.north - self.south
    }

    /// Centroid of the box
    pub fn center(&self) -> Point {
        Point::new(
            self.south + self.height() / 2.0,
            self.west + self.width() / 2.0,
        )
    }

    /// Check if this box contains a point, edges included
    pub fn contains(&self, point: &Point) -> bool {
        is_in_bounds(point.lat, point.lng, self)
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{},{}", self.west, self.south, self.east, self.north)
    }
}

/// Inclusive membership test: `south <= lat <= north` and `west <= lng <= east`
///
/// Not antimeridian aware. Any NaN input compares false and is excluded.
#[inline]
pub fn is_in_bounds(lat: f64, lng: f64, bounds: &Bounds) -> bool {
    lat >= bounds.south
        && lat <= bounds.north
        && lng >= bounds.west
        && lng <= bounds.east
}
