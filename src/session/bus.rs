//! Typed event channel between the map, the search box and result lists

use log::debug;
use tokio::sync::broadcast;

use super::tracker::TrackedBounds;
use crate::filter::WithDistance;
use crate::geo::Point;
use crate::model::Venue;

/// Events exchanged between map components
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// A searched place the map should move to
    LocationSearch { point: Point, label: Option<String> },
    /// Fresh nearest-first results for the given bounds
    ResultsUpdated {
        bounds: TrackedBounds,
        results: Vec<WithDistance<Venue>>,
    },
}

/// Broadcast channel handed to every component that needs it
#[derive(Debug, Clone)]
pub struct SearchBus {
    sender: broadcast::Sender<SearchEvent>,
}

impl SearchBus {
    /// `capacity` is how many events a slow subscriber may fall behind by
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        SearchBus { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SearchEvent> {
        self.sender.subscribe()
    }

    /// Send to all current subscribers; returns how many there were
    pub fn publish(&self, event: SearchEvent) -> usize {
        match self.sender.send(event) {
            Ok(count) => count,
            Err(_) => {
                debug!("Dropped search event with no subscribers");
                0
            }
        }
    }

    /// Ask the map to centre on a searched place
    pub fn dispatch_location_search(&self, point: Point, label: Option<String>) -> usize {
        self.publish(SearchEvent::LocationSearch { point, label })
    }
}

impl Default for SearchBus {
    fn default() -> Self {
        SearchBus::new(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_all_subscribers_receive() {
        let bus = SearchBus::default();
        let mut a = bus.subscribe();
        let mut b = bus.subscribe();

        let delivered = bus.dispatch_location_search(Point::new(-33.44, -70.65), Some("Bellavista".to_string()));

        assert_eq!(delivered, 2);
        let expected = SearchEvent::LocationSearch {
            point: Point::new(-33.44, -70.65),
            label: Some("Bellavista".to_string()),
        };
        assert_eq!(a.recv().await.unwrap(), expected);
        assert_eq!(b.recv().await.unwrap(), expected);
    }

    #[test]
    fn test_publish_without_subscribers() {
        let bus = SearchBus::new(4);
        assert_eq!(bus.dispatch_location_search(Point::new(0.0, 0.0), None), 0);
    }
}
