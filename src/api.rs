use log::info;

use crate::config::GeoConfig;
use crate::errors::GeoResult;
use crate::filter::{AreaFilter, Located, WithDistance};
use crate::geo::{Bounds, Point, ViewportEstimator, ViewportSize};
use crate::model::Venue;
use crate::session::{MapSession, SearchBus};
use crate::utils::maps_url_utils::{parse_maps_url, MapLocation};

/// Main interface to the piscola-geo library
#[derive(Debug, Clone)]
pub struct PiscolaGeo {
    config: GeoConfig,
    estimator: ViewportEstimator,
}

impl Default for PiscolaGeo {
    fn default() -> Self {
        PiscolaGeo::new(GeoConfig::default())
    }
}

impl PiscolaGeo {
    /// Create an instance from a configuration
    pub fn new(config: GeoConfig) -> Self {
        let estimator = ViewportEstimator::new(config.viewport.clone());
        PiscolaGeo { config, estimator }
    }

    /// Create an instance from a TOML configuration file
    ///
    /// # Arguments
    /// * `path` - Path to the file; keys it leaves out keep their defaults
    pub fn from_config_file(path: &str) -> GeoResult<Self> {
        let config = GeoConfig::from_file(path)?;
        info!("Loaded configuration from {}", path);
        Ok(PiscolaGeo::new(config))
    }

    pub fn config(&self) -> &GeoConfig {
        &self.config
    }

    /// Great-circle distance in kilometers, rounded to 2 decimals
    pub fn distance(&self, from: Point, to: Point) -> f64 {
        from.distance_to(&to)
    }

    /// Estimate the bounds a map would show
    ///
    /// # Arguments
    /// * `center` - Map centre
    /// * `zoom` - Zoom level, or the configured default
    /// * `viewport` - Viewport in pixels, or the configured default window
    pub fn estimate_bounds(&self, center: Point, zoom: Option<u8>, viewport: Option<ViewportSize>) -> GeoResult<Bounds> {
        let zoom = zoom.unwrap_or(self.config.viewport.default_zoom);
        self.estimator.estimate(center, zoom, viewport)
    }

    /// Estimate bounds for a caller-reported window size
    pub fn estimate_bounds_for_window(&self, center: Point, zoom: Option<u8>, window: ViewportSize) -> GeoResult<Bounds> {
        let zoom = zoom.unwrap_or(self.config.viewport.default_zoom);
        self.estimator.estimate_for_window(center, zoom, window.width, window.height)
    }

    /// Filter entities to an area, nearest to `center` first
    ///
    /// # Arguments
    /// * `entities` - Candidates; those without a location are skipped
    /// * `center` - Reference point for distances
    /// * `area` - Bounds or radius to keep
    /// * `limit` - Optional cap on the number of results
    pub fn nearby<T>(&self, entities: &[T], center: Point, area: &AreaFilter, limit: Option<usize>) -> Vec<WithDistance<T>>
    where
        T: Located + Clone,
    {
        let mut results = area.apply(entities, center);
        if let Some(limit) = limit {
            results.truncate(limit);
        }
        results
    }

    /// Extract a position from a map link or "lat,lng" string
    pub fn parse_location(&self, input: &str) -> GeoResult<MapLocation> {
        parse_maps_url(input)
    }

    /// Start a map view session over `venues`
    ///
    /// Must be driven from within a Tokio runtime.
    pub fn session(&self, venues: Vec<Venue>, viewport: Option<ViewportSize>, bus: SearchBus) -> MapSession {
        MapSession::new(venues, &self.config, viewport, bus)
    }
}
