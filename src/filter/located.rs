//! Entities that may carry a position

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::geo::Point;

/// Anything with an optional location
///
/// Entities reporting `None` are skipped by every distance or bounds
/// operation.
pub trait Located {
    fn location(&self) -> Option<Point>;
}

impl Located for Point {
    fn location(&self) -> Option<Point> {
        Some(*self)
    }
}

impl Located for Option<Point> {
    fn location(&self) -> Option<Point> {
        *self
    }
}

/// An entity annotated with its distance from a reference point
///
/// Serializes as the entity's own fields plus `distance`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithDistance<T> {
    #[serde(flatten)]
    pub entity: T,
    /// Kilometers, rounded to 2 decimals
    pub distance: f64,
}

impl<T> WithDistance<T> {
    pub fn new(entity: T, distance: f64) -> Self {
        WithDistance { entity, distance }
    }

    pub fn into_inner(self) -> T {
        self.entity
    }
}

impl<T> Deref for WithDistance<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.entity
    }
}

impl<T: Located> Located for WithDistance<T> {
    fn location(&self) -> Option<Point> {
        self.entity.location()
    }
}
