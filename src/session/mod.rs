//! Map view session
//!
//! Wires viewport events to debounced filtering and publishes results on a
//! typed event bus instead of a shared global hook.

mod bus;
mod debouncer;
mod map_session;
mod tracker;

pub use bus::{SearchBus, SearchEvent};
pub use debouncer::Debouncer;
pub use map_session::MapSession;
pub use tracker::{BoundsOrigin, TrackedBounds, ViewportEvent, ViewportTracker};
