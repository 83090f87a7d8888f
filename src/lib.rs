pub mod api;
pub mod commands;
pub mod config;
pub mod errors;
pub mod filter;
pub mod geo;
pub mod model;
pub mod session;
pub mod utils;

pub use crate::api::PiscolaGeo;

pub use config::GeoConfig;
pub use errors::{GeoError, GeoResult};
pub use filter::{filter_by_bounds, filter_by_radius, AreaFilter, Located, WithDistance};
pub use geo::{distance_km, estimate_bounds, is_in_bounds, Bounds, Point, ViewportSize};
pub use model::{Venue, VenueKind};
pub use session::{MapSession, SearchBus, SearchEvent, ViewportEvent};
