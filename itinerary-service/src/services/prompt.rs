//! Prompt construction for itinerary generation.

use crate::models::TripDetails;

/// Build the single user message sent to the generation service.
///
/// Output is fully determined by the trip details; each value is embedded
/// verbatim.
pub fn build_itinerary_prompt(trip: &TripDetails) -> String {
    format!(
        "Create a detailed travel itinerary for a trip from {departure} to {destination} \
         from {start_date} to {end_date}.\n\
         Include:\n\
         - Flight options (with airlines, timings, approximate duration)\n\
         - Hotel options (with images and ratings)\n\
         - Sightseeing & activities (with images)\n\
         - Optional dining recommendations\n\
         Format it using Markdown with headings (#, ##, ###), images (with real image URLs if possible), \
         bullet points, and short descriptive paragraphs.",
        departure = trip.departure,
        destination = trip.destination,
        start_date = trip.start_date,
        end_date = trip.end_date,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip() -> TripDetails {
        TripDetails {
            departure: "NYC".to_string(),
            destination: "Paris".to_string(),
            start_date: "2025-06-01".to_string(),
            end_date: "2025-06-07".to_string(),
        }
    }

    #[test]
    fn embeds_all_values_verbatim() {
        let prompt = build_itinerary_prompt(&trip());

        assert!(prompt.contains("from NYC to Paris"));
        assert!(prompt.contains("from 2025-06-01 to 2025-06-07"));
    }

    #[test]
    fn lists_required_sections_and_format() {
        let prompt = build_itinerary_prompt(&trip());

        assert!(prompt.contains("Flight options"));
        assert!(prompt.contains("Hotel options (with images and ratings)"));
        assert!(prompt.contains("Sightseeing & activities (with images)"));
        assert!(prompt.contains("Optional dining recommendations"));
        assert!(prompt.contains("Markdown"));
        assert!(prompt.contains("images"));
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(build_itinerary_prompt(&trip()), build_itinerary_prompt(&trip()));
    }

    #[test]
    fn unusual_values_are_not_altered() {
        let mut odd = trip();
        odd.destination = "São Paulo {centro}".to_string();
        odd.start_date = "next Friday".to_string();

        let prompt = build_itinerary_prompt(&odd);
        assert!(prompt.contains("to São Paulo {centro}"));
        assert!(prompt.contains("from next Friday to"));
    }
}
