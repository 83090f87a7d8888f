//! Configuration loading
//!
//! Defaults live in `piscola.toml`, embedded at build time. A user file is
//! merged over them key by key, so it only has to name what it changes.

use std::fs;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{GeoError, GeoResult};
use crate::geo::DEFAULT_MAX_LATITUDE;

const DEFAULT_CONFIG_TOML: &str = include_str!("../piscola.toml");

lazy_static! {
    static ref DEFAULT_TOML: toml::Value = DEFAULT_CONFIG_TOML.parse().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to parse built-in configuration: {}", e);
        toml::Value::Table(toml::map::Map::new())
    });
    static ref DEFAULT_CONFIG: GeoConfig = DEFAULT_TOML.clone().try_into().unwrap_or_else(|e| {
        eprintln!("Warning: Built-in configuration is incomplete: {}", e);
        GeoConfig::fallback()
    });
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoConfig {
    pub viewport: ViewportConfig,
    pub search: SearchConfig,
    pub logging: LoggingConfig,
}

/// Viewport estimation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    /// Latitude clamp applied before the cos(lat) correction
    pub max_latitude: f64,
    pub default_zoom: u8,
    /// Window size assumed when none is known
    pub default_window: WindowSize,
    pub narrow: Breakpoint,
    pub medium: Breakpoint,
    pub wide: Breakpoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

/// A window-width class and the viewport caps that apply to it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Widest window (inclusive) in this class; `None` means unbounded
    pub max_width: Option<u32>,
    pub cap_width: u32,
    pub cap_height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub default_radius_km: f64,
    /// Maximum number of results shown in a list
    pub result_limit: usize,
    /// Number of results in a "nearest" summary
    pub nearest_limit: usize,
    /// Debounce window for viewport-driven recomputation
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log file; when absent logs go to stderr
    pub log_file: Option<String>,
    pub level: String,
}

impl Default for GeoConfig {
    fn default() -> Self {
        DEFAULT_CONFIG.clone()
    }
}

impl FromStr for GeoConfig {
    type Err = GeoError;

    /// Parse a configuration from a TOML string, filling gaps from the defaults
    fn from_str(content: &str) -> GeoResult<Self> {
        let overlay: toml::Value = content.parse()?;
        let mut merged = DEFAULT_TOML.clone();
        merge_values(&mut merged, overlay);

        let config: GeoConfig = merged.try_into()?;
        config.validate()?;
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }
}

impl GeoConfig {
    /// Load a configuration from a TOML file
    pub fn from_file(path: &str) -> GeoResult<Self> {
        let contents = fs::read_to_string(path)?;
        contents.parse()
    }

    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> GeoResult<()> {
        let max_lat = self.viewport.max_latitude;
        if !(max_lat > 0.0 && max_lat < 90.0) {
            return Err(GeoError::ConfigError(format!(
                "viewport.max_latitude must be in (0, 90), got {}",
                max_lat
            )));
        }
        if self.viewport.default_zoom > 22 {
            warn!("viewport.default_zoom {} is beyond common tile servers", self.viewport.default_zoom);
        }
        let window = self.viewport.default_window;
        if window.width == 0 || window.height == 0 {
            return Err(GeoError::ConfigError("viewport.default_window must be non-zero".to_string()));
        }
        for (name, bp) in [
            ("narrow", &self.viewport.narrow),
            ("medium", &self.viewport.medium),
            ("wide", &self.viewport.wide),
        ] {
            if bp.cap_width == 0 || bp.cap_height == 0 {
                return Err(GeoError::ConfigError(format!("viewport.{} caps must be non-zero", name)));
            }
        }
        if let (Some(narrow), Some(medium)) = (self.viewport.narrow.max_width, self.viewport.medium.max_width) {
            if narrow >= medium {
                return Err(GeoError::ConfigError(
                    "viewport.narrow.max_width must be below viewport.medium.max_width".to_string(),
                ));
            }
        }
        if !(self.search.default_radius_km >= 0.0) {
            return Err(GeoError::ConfigError("search.default_radius_km must be non-negative".to_string()));
        }
        Ok(())
    }

    /// Values used when the embedded defaults cannot be read
    pub(crate) fn fallback() -> Self {
        GeoConfig {
            viewport: ViewportConfig {
                max_latitude: DEFAULT_MAX_LATITUDE,
                default_zoom: 13,
                default_window: WindowSize { width: 1280, height: 800 },
                narrow: Breakpoint { max_width: Some(640), cap_width: 480, cap_height: 800 },
                medium: Breakpoint { max_width: Some(1024), cap_width: 1024, cap_height: 900 },
                wide: Breakpoint { max_width: None, cap_width: 1600, cap_height: 1000 },
            },
            search: SearchConfig {
                default_radius_km: 5.0,
                result_limit: 20,
                nearest_limit: 3,
                debounce_ms: 500,
            },
            logging: LoggingConfig {
                log_file: None,
                level: "info".to_string(),
            },
        }
    }
}

/// Recursively overlay `overlay` onto `base`, table by table
fn merge_values(base: &mut toml::Value, overlay: toml::Value) {
    match (base, overlay) {
        (toml::Value::Table(base_table), toml::Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_values(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_match_fallback() {
        assert_eq!(GeoConfig::default(), GeoConfig::fallback());
    }

    #[test]
    fn test_partial_override() {
        let config = GeoConfig::from_str(
            r#"
            [search]
            debounce_ms = 250

            [viewport.narrow]
            cap_width = 360
            "#,
        )
        .unwrap();

        assert_eq!(config.search.debounce_ms, 250);
        assert_eq!(config.search.result_limit, 20);
        assert_eq!(config.viewport.narrow.cap_width, 360);
        assert_eq!(config.viewport.narrow.cap_height, 800);
        assert_eq!(config.viewport.narrow.max_width, Some(640));
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(GeoConfig::from_str("").unwrap(), GeoConfig::default());
    }

    #[test]
    fn test_rejects_polar_clamp() {
        let err = GeoConfig::from_str("[viewport]\nmax_latitude = 90.0\n").unwrap_err();
        assert!(matches!(err, GeoError::ConfigError(_)));
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(GeoConfig::from_str("[search]\nresult_limit = \"many\"\n").is_err());
        assert!(GeoConfig::from_str("not toml at all [").is_err());
    }

    #[test]
    fn test_parse_through_str() {
        let config: GeoConfig = "[search]\nresult_limit = 5\n".parse().unwrap();
        assert_eq!(config.search.result_limit, 5);
        assert!("[viewport]\nmax_latitude = -5.0\n".parse::<GeoConfig>().is_err());
    }

    #[test]
    fn test_log_file_override() {
        let config = GeoConfig::from_str("[logging]\nlog_file = \"geo.log\"\n").unwrap();
        assert_eq!(config.logging.log_file.as_deref(), Some("geo.log"));
        assert_eq!(config.logging.level, "info");
    }
}
