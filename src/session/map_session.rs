//! Viewport-driven result lists for a map view

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use log::{debug, info, warn};

use super::bus::{SearchBus, SearchEvent};
use super::debouncer::Debouncer;
use super::tracker::{TrackedBounds, ViewportEvent, ViewportTracker};
use crate::config::GeoConfig;
use crate::errors::GeoResult;
use crate::filter::{filter_by_radius, AreaFilter, WithDistance};
use crate::geo::{Point, ViewportEstimator, ViewportSize};
use crate::model::Venue;

/// Keeps a venue list in step with what the map shows
///
/// Viewport changes update the tracked bounds at once; the filtering itself
/// is debounced and its results are published on the [`SearchBus`].
pub struct MapSession {
    venues: Arc<Vec<Venue>>,
    tracker: Mutex<ViewportTracker>,
    debouncer: Debouncer,
    bus: SearchBus,
    result_limit: usize,
    nearest_limit: usize,
    default_radius_km: f64,
}

impl MapSession {
    pub fn new(venues: Vec<Venue>, config: &GeoConfig, viewport: Option<ViewportSize>, bus: SearchBus) -> Self {
        let estimator = ViewportEstimator::new(config.viewport.clone());
        MapSession {
            venues: Arc::new(venues),
            tracker: Mutex::new(ViewportTracker::new(estimator, viewport)),
            debouncer: Debouncer::new(Duration::from_millis(config.search.debounce_ms)),
            bus,
            result_limit: config.search.result_limit,
            nearest_limit: config.search.nearest_limit,
            default_radius_km: config.search.default_radius_km,
        }
    }

    pub fn bus(&self) -> &SearchBus {
        &self.bus
    }

    pub fn current_bounds(&self) -> Option<TrackedBounds> {
        self.lock_tracker().current().copied()
    }

    /// Results for first paint, from estimated bounds
    ///
    /// Computed immediately and also published on the bus.
    pub fn initial_results(&self, center: Point, zoom: u8) -> GeoResult<Vec<WithDistance<Venue>>> {
        let tracked = self.lock_tracker().provisional(center, zoom)?;
        let results = results_for(self.venues.as_slice(), &tracked, self.result_limit)?;
        info!("Initial view at {} (zoom {}): {} venues", center, zoom, results.len());

        self.bus.publish(SearchEvent::ResultsUpdated { bounds: tracked, results: results.clone() });
        Ok(results)
    }

    /// Handle a map move; recomputation happens after the debounce window
    pub fn on_viewport_change(&self, event: ViewportEvent) -> GeoResult<TrackedBounds> {
        let tracked = self.lock_tracker().apply(&event)?;
        debug!("Viewport changed to {} ({:?})", tracked.bounds, tracked.origin);

        let venues = Arc::clone(&self.venues);
        let bus = self.bus.clone();
        let limit = self.result_limit;
        self.debouncer.schedule(async move {
            match results_for(venues.as_slice(), &tracked, limit) {
                Ok(results) => {
                    debug!("Publishing {} venues for {}", results.len(), tracked.bounds);
                    bus.publish(SearchEvent::ResultsUpdated { bounds: tracked, results });
                }
                Err(e) => warn!("Skipping result update: {}", e),
            }
        });

        Ok(tracked)
    }

    /// Drop a pending recomputation, e.g. when the view is torn down
    pub fn cancel_pending(&self) -> bool {
        self.debouncer.cancel()
    }

    /// Nearest venues around a searched place, within the default radius
    pub fn nearest_to(&self, point: Point) -> Vec<WithDistance<Venue>> {
        let mut results = filter_by_radius(self.venues.as_slice(), point, self.default_radius_km);
        results.truncate(self.nearest_limit);
        results
    }

    /// Publish a location search and return the venues nearest to it
    pub fn search_location(&self, point: Point, label: Option<String>) -> Vec<WithDistance<Venue>> {
        self.bus.dispatch_location_search(point, label);
        self.nearest_to(point)
    }

    fn lock_tracker(&self) -> MutexGuard<'_, ViewportTracker> {
        self.tracker.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn results_for(venues: &[Venue], tracked: &TrackedBounds, limit: usize) -> GeoResult<Vec<WithDistance<Venue>>> {
    let filter = AreaFilter::bounds(tracked.bounds)?;
    let mut results = filter.apply(venues, tracked.center);
    results.truncate(limit);
    Ok(results)
}
