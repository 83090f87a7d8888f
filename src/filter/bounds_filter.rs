//! Rectangular "what's on screen" filtering

use super::filter_strategy::FilterStrategy;
use super::located::{Located, WithDistance};
use crate::geo::{is_in_bounds, Bounds, Point};

/// Keeps entities inside a bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundsFilter {
    bounds: Bounds,
}

impl BoundsFilter {
    pub fn new(bounds: Bounds) -> Self {
        BoundsFilter { bounds }
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }
}

impl FilterStrategy for BoundsFilter {
    fn contains(&self, location: &Point) -> bool {
        is_in_bounds(location.lat, location.lng, &self.bounds)
    }

    fn describe(&self) -> String {
        format!("bounds filter [{}]", self.bounds)
    }
}

/// Entities inside `bounds`, nearest to `center` first
///
/// `center` is usually the map centre and need not be the box centroid.
/// No result limit is applied.
pub fn filter_by_bounds<T>(entities: &[T], bounds: &Bounds, center: Point) -> Vec<WithDistance<T>>
where
    T: Located + Clone,
{
    BoundsFilter::new(*bounds).apply(entities, center)
}
