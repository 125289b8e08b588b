pub mod markdown;
pub mod metrics;
pub mod prompt;
pub mod providers;

pub use markdown::render_html;
pub use prompt::build_itinerary_prompt;
