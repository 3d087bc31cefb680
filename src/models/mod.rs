//! Data models for Smart Tour

pub mod chat;
pub mod destination;
pub mod itinerary;
pub mod metric;
pub mod place;

// Re-export commonly used types
pub use chat::ChatTurn;
pub use destination::DestinationStats;
pub use itinerary::{Itinerary, ItineraryRequest, TravelStyle};
pub use metric::{Metric, MetricSeries, TimePoint, TimeRange};
pub use place::{Place, PlaceKind};
