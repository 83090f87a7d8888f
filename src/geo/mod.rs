//! Geographic primitives
//!
//! Points, bounds, great-circle distance and viewport estimation. All of
//! it is pure, synchronous math with no shared state.

mod bounds;
mod distance;
mod point;
mod viewport;

// Re-export key types
pub use self::bounds::{is_in_bounds, Bounds};
pub use self::distance::{distance_km, haversine_km, round_km, EARTH_RADIUS_KM};
pub use self::point::Point;
pub use self::viewport::{
    degrees_per_pixel, estimate_bounds, ViewportEstimator, ViewportSize, WindowClass, DEFAULT_MAX_LATITUDE,
    TILE_SIZE,
};
