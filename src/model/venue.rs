//! Venue records as exported from the listing database

use std::fs;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::errors::GeoResult;
use crate::filter::Located;
use crate::geo::Point;

/// Kind of place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VenueKind {
    Bar,
    Store,
}

/// A bar or store listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    pub name: String,
    pub kind: VenueKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Missing for listings that were never geocoded
    #[serde(default)]
    pub location: Option<Point>,
    /// Whether the product was last verified as available here
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pisco_available: Option<bool>,
    /// Average user rating, 1 to 5
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
}

impl Located for Venue {
    fn location(&self) -> Option<Point> {
        self.location
    }
}

impl Venue {
    pub fn new(id: &str, name: &str, kind: VenueKind, location: Option<Point>) -> Self {
        Venue {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            address: None,
            location,
            pisco_available: None,
            rating: None,
        }
    }
}

/// Parse a JSON array of venues
pub fn venues_from_json(content: &str) -> GeoResult<Vec<Venue>> {
    let venues: Vec<Venue> = serde_json::from_str(content)?;

    let unlocated = venues.iter().filter(|v| v.location.is_none()).count();
    if unlocated > 0 {
        info!("{} of {} venues have no location and will be skipped", unlocated, venues.len());
    }
    for venue in venues.iter().filter(|v| v.location.map_or(false, |p| !p.is_valid())) {
        warn!("Venue '{}' has an out-of-range location {:?}", venue.id, venue.location);
    }

    Ok(venues)
}

/// Load venues from a JSON file
pub fn load_venues(path: &str) -> GeoResult<Vec<Venue>> {
    let content = fs::read_to_string(path)?;
    venues_from_json(&content)
}
