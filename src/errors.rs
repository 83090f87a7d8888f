//! Custom error types for geographic processing

use std::fmt;
use std::io;

/// Errors raised by constructors, parsers, configuration and commands.
///
/// The distance, bounds and viewport math itself never fails; invalid
/// numbers flow through it as NaN/inf instead.
#[derive(Debug)]
pub enum GeoError {
    /// I/O error
    IoError(io::Error),
    /// Bounds whose north edge is not strictly above the south edge
    InvalidBounds { north: f64, south: f64 },
    /// Bounds with west > east (box crossing the 180th meridian)
    AntimeridianBounds { west: f64, east: f64 },
    /// Viewport with a zero dimension
    InvalidViewport { width: u32, height: u32 },
    /// Coordinate string that could not be parsed
    InvalidCoordinate(String),
    /// Map link with no recognizable location in it
    UnrecognizedLocation(String),
    /// Short map link that needs an HTTP redirect to resolve
    ShortLinkUnsupported(String),
    /// Configuration file problem
    ConfigError(String),
    /// JSON (de)serialization problem
    SerializationError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoError::InvalidBounds { north, south } => {
                write!(f, "Invalid bounds: north ({}) must be greater than south ({})", north, south)
            }
            GeoError::AntimeridianBounds { west, east } => write!(
                f,
                "Bounds crossing the antimeridian are not supported (west {} > east {})",
                west, east
            ),
            GeoError::InvalidViewport { width, height } => {
                write!(f, "Invalid viewport size: {}x{}", width, height)
            }
            GeoError::InvalidCoordinate(s) => write!(f, "Invalid coordinate: {}", s),
            GeoError::UnrecognizedLocation(url) => write!(f, "No location found in '{}'", url),
            GeoError::ShortLinkUnsupported(url) => {
                write!(f, "Short map links must be expanded before parsing: {}", url)
            }
            GeoError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GeoError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            GeoError::GenericError(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for GeoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoError {
    fn from(error: io::Error) -> Self {
        GeoError::IoError(error)
    }
}

impl From<String> for GeoError {
    fn from(msg: String) -> Self {
        GeoError::GenericError(msg)
    }
}

impl From<serde_json::Error> for GeoError {
    fn from(error: serde_json::Error) -> Self {
        GeoError::SerializationError(error.to_string())
    }
}

impl From<toml::de::Error> for GeoError {
    fn from(error: toml::de::Error) -> Self {
        GeoError::ConfigError(error.to_string())
    }
}

/// Result type for geographic operations
pub type GeoResult<T> = Result<T, GeoError>;
