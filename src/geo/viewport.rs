//! Approximate map bounds from a centre, zoom level and viewport size
//!
//! Uses the standard 256 px Web-Mercator tile scheme. The result is only a
//! first guess for filtering before the map reports its real bounds; see
//! [`crate::session::ViewportTracker`] for how the two are reconciled.

use log::debug;
use serde::{Deserialize, Serialize};

use super::bounds::Bounds;
use super::point::Point;
use crate::config::{Breakpoint, ViewportConfig};
use crate::errors::{GeoError, GeoResult};

/// Tile edge length in pixels
pub const TILE_SIZE: f64 = 256.0;

/// Latitude clamp used when the configured one is unusable
pub const DEFAULT_MAX_LATITUDE: f64 = 85.0;

/// Viewport dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

/// Which breakpoint a window width falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowClass {
    /// Mobile
    Narrow,
    /// Tablet
    Medium,
    /// Desktop
    Wide,
}

impl ViewportSize {
    /// Create a viewport size; both dimensions must be non-zero
    pub fn new(width: u32, height: u32) -> GeoResult<Self> {
        if width == 0 || height == 0 {
            return Err(GeoError::InvalidViewport { width, height });
        }
        Ok(ViewportSize { width, height })
    }

    /// Parse a size from a string (format: "WIDTHxHEIGHT")
    pub fn from_string(size_str: &str) -> GeoResult<Self> {
        let (w, h) = size_str
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| GeoError::GenericError(format!("Size '{}' must be in format 'WIDTHxHEIGHT'", size_str)))?;
        let width = w.trim().parse::<u32>()
            .map_err(|_| GeoError::GenericError(format!("Invalid width '{}'", w)))?;
        let height = h.trim().parse::<u32>()
            .map_err(|_| GeoError::GenericError(format!("Invalid height '{}'", h)))?;
        Self::new(width, height)
    }

    /// Derive a viewport from the caller's window, capped per breakpoint
    pub fn for_window(window_width: u32, window_height: u32, config: &ViewportConfig) -> GeoResult<Self> {
        let breakpoint = match WindowClass::classify(window_width, config) {
            WindowClass::Narrow => &config.narrow,
            WindowClass::Medium => &config.medium,
            WindowClass::Wide => &config.wide,
        };
        Self::capped(window_width, window_height, breakpoint)
    }

    fn capped(width: u32, height: u32, breakpoint: &Breakpoint) -> GeoResult<Self> {
        Self::new(width.min(breakpoint.cap_width), height.min(breakpoint.cap_height))
    }
}

impl WindowClass {
    pub fn classify(window_width: u32, config: &ViewportConfig) -> Self {
        let fits = |bp: &Breakpoint| bp.max_width.map_or(true, |max| window_width <= max);
        if fits(&config.narrow) {
            WindowClass::Narrow
        } else if fits(&config.medium) {
            WindowClass::Medium
        } else {
            WindowClass::Wide
        }
    }
}

/// Degrees of longitude covered by one pixel at the equator
#[inline]
pub fn degrees_per_pixel(zoom: u8) -> f64 {
    360.0 / (TILE_SIZE * 2f64.powi(zoom as i32))
}

/// Estimate the bounds a map would show
///
/// The east-west half span is divided by `cos(lat)` to undo Mercator
/// compression. Near the poles that divisor approaches zero and the span
/// diverges, so callers should clamp the latitude first;
/// [`ViewportEstimator`] does this for them.
pub fn estimate_bounds(center: Point, zoom: u8, viewport: ViewportSize) -> Bounds {
    let dpp = degrees_per_pixel(zoom);
    let half_width = viewport.width as f64 / 2.0 * dpp;
    let half_height = viewport.height as f64 / 2.0 * dpp;
    let adjusted_half_width = half_width / center.lat.to_radians().cos();

    Bounds {
        north: center.lat + half_height,
        south: center.lat - half_height,
        east: center.lng + adjusted_half_width,
        west: center.lng - adjusted_half_width,
    }
}

/// Viewport estimation with configured defaults and polar clamping
#[derive(Debug, Clone)]
pub struct ViewportEstimator {
    config: ViewportConfig,
}

impl ViewportEstimator {
    pub fn new(config: ViewportConfig) -> Self {
        ViewportEstimator { config }
    }

    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    /// Default viewport for a window of unknown size
    pub fn default_viewport(&self) -> GeoResult<ViewportSize> {
        let window = self.config.default_window;
        ViewportSize::for_window(window.width, window.height, &self.config)
    }

    /// Estimate bounds, falling back to the default viewport when none is given
    ///
    /// The centre latitude is clamped to `±max_latitude` so the result is
    /// always finite.
    pub fn estimate(&self, center: Point, zoom: u8, viewport: Option<ViewportSize>) -> GeoResult<Bounds> {
        let viewport = match viewport {
            Some(v) => v,
            None => self.default_viewport()?,
        };

        let max_lat = self.latitude_limit();
        let clamped = Point::new(center.lat.clamp(-max_lat, max_lat), center.lng);
        if clamped.lat != center.lat {
            debug!("Clamped centre latitude {} to {}", center.lat, clamped.lat);
        }

        let bounds = estimate_bounds(clamped, zoom, viewport);
        debug!(
            "Estimated bounds {} for centre {} at zoom {} ({}x{})",
            bounds, center, zoom, viewport.width, viewport.height
        );
        Ok(bounds)
    }

    /// Configured latitude clamp, or the default when it is not a usable
    /// latitude in (0, 90]
    fn latitude_limit(&self) -> f64 {
        let max_lat = self.config.max_latitude;
        if max_lat > 0.0 && max_lat <= 90.0 {
            max_lat
        } else {
            debug!("Ignoring max_latitude {}, using {}", max_lat, DEFAULT_MAX_LATITUDE);
            DEFAULT_MAX_LATITUDE
        }
    }

    /// Estimate bounds for a known window size
    pub fn estimate_for_window(&self, center: Point, zoom: u8, window_width: u32, window_height: u32) -> GeoResult<Bounds> {
        let viewport = ViewportSize::for_window(window_width, window_height, &self.config)?;
        self.estimate(center, zoom, Some(viewport))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeoConfig;

    fn estimator() -> ViewportEstimator {
        ViewportEstimator::new(GeoConfig::default().viewport)
    }

    #[test]
    fn test_equator_is_symmetric() {
        let b = estimate_bounds(Point::new(0.0, 0.0), 13, ViewportSize::new(800, 400).unwrap());
        assert_eq!(b.north, -b.south);
        assert_eq!(b.east, -b.west);
        let dpp = 360.0 / (256.0 * 8192.0);
        assert!((b.north - 200.0 * dpp).abs() < 1e-12);
        assert!((b.east - 400.0 * dpp).abs() < 1e-12);
    }

    #[test]
    fn test_mercator_widens_longitude_span() {
        let viewport = ViewportSize::new(800, 400).unwrap();
        let equator = estimate_bounds(Point::new(0.0, 0.0), 12, viewport);
        let santiago = estimate_bounds(Point::new(-33.45, -70.66), 12, viewport);
        assert!((santiago.height() - equator.height()).abs() < 1e-12);
        let expected = equator.width() / (-33.45f64).to_radians().cos();
        assert!((santiago.width() - expected).abs() < 1e-9);
        assert!(santiago.width() > equator.width());
    }

    #[test]
    fn test_unusable_latitude_clamp_falls_back() {
        let viewport = Some(ViewportSize::new(800, 600).unwrap());
        let expected = estimator().estimate(Point::new(89.0, 0.0), 10, viewport).unwrap();

        for bad in [-5.0, 0.0, f64::NAN, 120.0] {
            let mut config = GeoConfig::default().viewport;
            config.max_latitude = bad;
            let bounds = ViewportEstimator::new(config).estimate(Point::new(89.0, 0.0), 10, viewport).unwrap();
            assert_eq!(bounds, expected);
            assert!(bounds.east.is_finite());
        }
    }

    #[test]
    fn test_each_zoom_halves_span() {
        let viewport = ViewportSize::new(512, 512).unwrap();
        let z10 = estimate_bounds(Point::new(10.0, 10.0), 10, viewport);
        let z11 = estimate_bounds(Point::new(10.0, 10.0), 11, viewport);
        assert!((z10.height() / z11.height() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_zero_covers_world_width() {
        let b = estimate_bounds(Point::new(0.0, 0.0), 0, ViewportSize::new(256, 256).unwrap());
        assert!((b.width() - 360.0).abs() < 1e-9);
    }

    #[test]
    fn test_polar_centre_is_clamped() {
        let b = estimator()
            .estimate(Point::new(90.0, 0.0), 13, Some(ViewportSize::new(800, 400).unwrap()))
            .unwrap();
        assert!(b.east.is_finite());
        assert!(b.west.is_finite());
        assert!(b.center().lat <= 85.0 + 1e-9);
    }

    #[test]
    fn test_breakpoints() {
        let config = GeoConfig::default().viewport;
        assert_eq!(WindowClass::classify(375, &config), WindowClass::Narrow);
        assert_eq!(WindowClass::classify(640, &config), WindowClass::Narrow);
        assert_eq!(WindowClass::classify(800, &config), WindowClass::Medium);
        assert_eq!(WindowClass::classify(2560, &config), WindowClass::Wide);

        assert_eq!(ViewportSize::for_window(375, 812, &config).unwrap(), ViewportSize { width: 375, height: 800 });
        assert_eq!(ViewportSize::for_window(800, 1280, &config).unwrap(), ViewportSize { width: 800, height: 900 });
        assert_eq!(ViewportSize::for_window(2560, 1440, &config).unwrap(), ViewportSize { width: 1600, height: 1000 });
    }

    #[test]
    fn test_default_viewport_used_when_missing() {
        let est = estimator();
        let center = Point::new(-33.45, -70.66);
        let implicit = est.estimate(center, 14, None).unwrap();
        let explicit = est.estimate(center, 14, Some(ViewportSize::new(1280, 800).unwrap())).unwrap();
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn test_size_parsing() {
        assert_eq!(ViewportSize::from_string("800x400").unwrap(), ViewportSize { width: 800, height: 400 });
        assert_eq!(ViewportSize::from_string(" 1024 X 768 ").unwrap(), ViewportSize { width: 1024, height: 768 });
        assert!(ViewportSize::from_string("800").is_err());
        assert!(matches!(ViewportSize::from_string("0x400"), Err(GeoError::InvalidViewport { .. })));
    }
}
