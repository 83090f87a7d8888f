//! Provisional versus map-reported bounds

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::GeoResult;
use crate::geo::{Bounds, Point, ViewportEstimator, ViewportSize};

/// What the map reports after each move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportEvent {
    pub center: Point,
    pub zoom: u8,
    /// The map engine's own rectangle, when it has one
    pub bounds: Option<Bounds>,
}

/// Where the current bounds came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsOrigin {
    /// Estimated from centre, zoom and viewport size
    Provisional,
    /// Reported by the map
    Authoritative,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackedBounds {
    pub bounds: Bounds,
    pub origin: BoundsOrigin,
    pub center: Point,
    pub zoom: u8,
}

/// Keeps the best-known bounds for a map view
///
/// Map-reported bounds always replace whatever is held. An estimate never
/// replaces map-reported bounds for the same centre and zoom; once the view
/// has moved, a fresh estimate is taken until the map reports again.
#[derive(Debug, Clone)]
pub struct ViewportTracker {
    estimator: ViewportEstimator,
    viewport: Option<ViewportSize>,
    current: Option<TrackedBounds>,
}

impl ViewportTracker {
    pub fn new(estimator: ViewportEstimator, viewport: Option<ViewportSize>) -> Self {
        ViewportTracker { estimator, viewport, current: None }
    }

    pub fn current(&self) -> Option<&TrackedBounds> {
        self.current.as_ref()
    }

    /// Bounds for first paint, before the map has reported anything
    pub fn provisional(&mut self, center: Point, zoom: u8) -> GeoResult<TrackedBounds> {
        if let Some(current) = self.current {
            if current.origin == BoundsOrigin::Authoritative && current.center == center && current.zoom == zoom {
                debug!("Keeping map-reported bounds {} over an estimate", current.bounds);
                return Ok(current);
            }
        }

        let bounds = self.estimator.estimate(center, zoom, self.viewport)?;
        let tracked = TrackedBounds { bounds, origin: BoundsOrigin::Provisional, center, zoom };
        self.current = Some(tracked);
        Ok(tracked)
    }

    /// Record a viewport change
    ///
    /// Reported bounds that are inverted or cross the antimeridian are
    /// rejected and the held bounds are left as they were.
    pub fn apply(&mut self, event: &ViewportEvent) -> GeoResult<TrackedBounds> {
        match event.bounds {
            Some(bounds) => {
                bounds.validate()?;
                let tracked = TrackedBounds {
                    bounds,
                    origin: BoundsOrigin::Authoritative,
                    center: event.center,
                    zoom: event.zoom,
                };
                self.current = Some(tracked);
                Ok(tracked)
            }
            None => self.provisional(event.center, event.zoom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeoConfig;
    use crate::errors::GeoError;

    fn tracker() -> ViewportTracker {
        let estimator = ViewportEstimator::new(GeoConfig::default().viewport);
        ViewportTracker::new(estimator, Some(ViewportSize::new(800, 600).unwrap()))
    }

    fn map_bounds() -> Bounds {
        Bounds { north: -33.40, south: -33.47, east: -70.60, west: -70.70 }
    }

    #[test]
    fn test_starts_provisional() {
        let mut t = tracker();
        let tracked = t.provisional(Point::new(-33.44, -70.65), 14).unwrap();
        assert_eq!(tracked.origin, BoundsOrigin::Provisional);
        assert!(tracked.bounds.contains(&Point::new(-33.44, -70.65)));
    }

    #[test]
    fn test_map_bounds_replace_estimate() {
        let mut t = tracker();
        let center = Point::new(-33.44, -70.65);
        t.provisional(center, 14).unwrap();

        let tracked = t.apply(&ViewportEvent { center, zoom: 14, bounds: Some(map_bounds()) }).unwrap();

        assert_eq!(tracked.origin, BoundsOrigin::Authoritative);
        assert_eq!(t.current().unwrap().bounds, map_bounds());
    }

    #[test]
    fn test_estimate_does_not_override_same_view() {
        let mut t = tracker();
        let center = Point::new(-33.44, -70.65);
        t.apply(&ViewportEvent { center, zoom: 14, bounds: Some(map_bounds()) }).unwrap();

        let tracked = t.apply(&ViewportEvent { center, zoom: 14, bounds: None }).unwrap();

        assert_eq!(tracked.origin, BoundsOrigin::Authoritative);
        assert_eq!(tracked.bounds, map_bounds());
    }

    #[test]
    fn test_moved_view_gets_new_estimate() {
        let mut t = tracker();
        t.apply(&ViewportEvent { center: Point::new(-33.44, -70.65), zoom: 14, bounds: Some(map_bounds()) })
            .unwrap();

        let tracked = t.apply(&ViewportEvent { center: Point::new(-33.0, -71.6), zoom: 14, bounds: None }).unwrap();

        assert_eq!(tracked.origin, BoundsOrigin::Provisional);
        assert!(tracked.bounds.contains(&Point::new(-33.0, -71.6)));
    }

    #[test]
    fn test_rejects_invalid_map_bounds() {
        let mut t = tracker();
        let center = Point::new(-33.44, -70.65);
        t.apply(&ViewportEvent { center, zoom: 14, bounds: Some(map_bounds()) }).unwrap();

        let inverted = Bounds { north: -1.0, south: 1.0, east: 1.0, west: -1.0 };
        let result = t.apply(&ViewportEvent { center, zoom: 15, bounds: Some(inverted) });
        assert!(matches!(result, Err(GeoError::InvalidBounds { .. })));

        let crossing = Bounds { north: 1.0, south: -1.0, east: -179.0, west: 179.0 };
        let result = t.apply(&ViewportEvent { center, zoom: 15, bounds: Some(crossing) });
        assert!(matches!(result, Err(GeoError::AntimeridianBounds { .. })));

        let held = t.current().unwrap();
        assert_eq!(held.bounds, map_bounds());
        assert_eq!(held.zoom, 14);
    }
}
