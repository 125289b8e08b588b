//! HTTP handlers for the itinerary service.

pub mod app;
pub mod itinerary;
pub mod metrics;

pub use app::{health_check, index};
pub use itinerary::generate_itinerary;
