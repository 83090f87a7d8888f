//! Utility modules for common functionality

pub mod logger;
pub mod maps_url_utils;
pub(crate) mod write_utils;
