//! Bounds and radius filtering of located entities
//!
//! Both filters drop entities without a location, annotate survivors with
//! their distance from a centre and return them nearest first.

mod bounds_filter;
mod filter_strategy;
mod located;
mod radius_filter;
#[cfg(test)]
mod tests;

pub use bounds_filter::{filter_by_bounds, BoundsFilter};
pub use filter_strategy::{AreaFilter, FilterStrategy};
pub use located::{Located, WithDistance};
pub use radius_filter::{filter_by_radius, RadiusFilter};
