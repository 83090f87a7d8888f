//! Filter strategy definitions
//!
//! Bounds and radius queries share the same pipeline: drop entities with no
//! location, test membership, annotate with distance from a centre, sort
//! nearest first. A strategy only decides which entities survive.

use log::debug;

use super::bounds_filter::BoundsFilter;
use super::located::{Located, WithDistance};
use super::radius_filter::RadiusFilter;
use crate::errors::GeoResult;
use crate::geo::{Bounds, Point};

/// Strategy deciding which located entities are kept
pub trait FilterStrategy {
    /// Cheap positional test run before any distance is computed
    fn contains(&self, _location: &Point) -> bool {
        true
    }

    /// Test on the rounded distance from the centre
    fn accepts_distance(&self, _distance_km: f64) -> bool {
        true
    }

    /// Short description used in logs
    fn describe(&self) -> String;

    /// Run the strategy over `entities`
    ///
    /// Returns new values; the input is only borrowed. The sort is stable,
    /// so entities at equal distance keep their input order.
    fn apply<T>(&self, entities: &[T], center: Point) -> Vec<WithDistance<T>>
    where
        T: Located + Clone,
        Self: Sized,
    {
        apply_strategy(self, entities, center)
    }
}

pub(crate) fn apply_strategy<S, T>(strategy: &S, entities: &[T], center: Point) -> Vec<WithDistance<T>>
where
    S: FilterStrategy + ?Sized,
    T: Located + Clone,
{
    let mut results: Vec<WithDistance<T>> = entities
        .iter()
        .filter_map(|entity| {
            let location = entity.location()?;
            if !strategy.contains(&location) {
                return None;
            }
            let distance = center.distance_to(&location);
            if !strategy.accepts_distance(distance) {
                return None;
            }
            Some(WithDistance::new(entity.clone(), distance))
        })
        .collect();

    results.sort_by(|a, b| a.distance.total_cmp(&b.distance));

    debug!(
        "{} kept {} of {} entities around {}",
        strategy.describe(),
        results.len(),
        entities.len(),
        center
    );
    results
}

/// The area an entity list is narrowed to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AreaFilter {
    /// What is on screen
    Bounds(Bounds),
    /// A fixed radius around the centre, in kilometers
    Radius(f64),
}

impl AreaFilter {
    /// Build a bounds filter, rejecting boxes it cannot evaluate correctly
    pub fn bounds(bounds: Bounds) -> GeoResult<Self> {
        bounds.validate()?;
        Ok(AreaFilter::Bounds(bounds))
    }

    pub fn radius(max_distance_km: f64) -> Self {
        AreaFilter::Radius(max_distance_km)
    }

    /// Run the matching strategy
    pub fn apply<T: Located + Clone>(&self, entities: &[T], center: Point) -> Vec<WithDistance<T>> {
        match self {
            AreaFilter::Bounds(bounds) => BoundsFilter::new(*bounds).apply(entities, center),
            AreaFilter::Radius(max) => RadiusFilter::new(*max).apply(entities, center),
        }
    }
}
