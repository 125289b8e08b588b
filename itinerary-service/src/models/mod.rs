pub mod itinerary;

pub use itinerary::{
    GeneratedItinerary, ItineraryRequest, ItineraryResponse, TripDetails, MISSING_FIELDS_MESSAGE,
};
