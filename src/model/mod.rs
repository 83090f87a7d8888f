//! Domain records filtered by this crate

mod venue;

pub use venue::{load_venues, venues_from_json, Venue, VenueKind};
