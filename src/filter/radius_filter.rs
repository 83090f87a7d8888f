//! Fixed-radius "near me" filtering

use super::filter_strategy::FilterStrategy;
use super::located::{Located, WithDistance};
use crate::geo::Point;

/// Keeps entities within a distance of the centre
#[derive(Debug, Clone, Copy)]
pub struct RadiusFilter {
    max_distance_km: f64,
}

impl RadiusFilter {
    pub fn new(max_distance_km: f64) -> Self {
        RadiusFilter { max_distance_km }
    }
}

impl FilterStrategy for RadiusFilter {
    // Compared against the rounded distance, so the boundary is inclusive
    // at the precision results are reported in.
    fn accepts_distance(&self, distance_km: f64) -> bool {
        distance_km <= self.max_distance_km
    }

    fn describe(&self) -> String {
        format!("radius filter [{} km]", self.max_distance_km)
    }
}

/// Entities within `max_distance_km` of `center`, nearest first
pub fn filter_by_radius<T>(entities: &[T], center: Point, max_distance_km: f64) -> Vec<WithDistance<T>>
where
    T: Located + Clone,
{
    RadiusFilter::new(max_distance_km).apply(entities, center)
}
