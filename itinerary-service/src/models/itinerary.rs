use crate::services::markdown::render_html;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::{Validate, ValidationError, ValidationErrors};

/// Fixed message returned when any trip field is missing or empty.
pub const MISSING_FIELDS_MESSAGE: &str =
    "Please provide departure, destination, start_date, and end_date";

/// Incoming trip parameters.
///
/// Fields accept any JSON value. A field is present when its value is
/// truthy: `null`, `""`, `0`, `false`, `[]` and `{}` all count as missing,
/// anything else is accepted and later embedded as text.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ItineraryRequest {
    #[validate(required, custom(function = "validate_truthy"))]
    pub departure: Option<Value>,
    #[validate(required, custom(function = "validate_truthy"))]
    pub destination: Option<Value>,
    #[validate(required, custom(function = "validate_truthy"))]
    pub start_date: Option<Value>,
    #[validate(required, custom(function = "validate_truthy"))]
    pub end_date: Option<Value>,
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn validate_truthy(value: &Value) -> Result<(), ValidationError> {
    if is_truthy(value) {
        Ok(())
    } else {
        Err(ValidationError::new("empty"))
    }
}

/// Strings are used as-is; other values by their JSON text (`5` -> `"5"`).
fn field_text(value: Option<Value>) -> String {
    match value {
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

impl ItineraryRequest {
    /// Names of fields that fail validation, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("departure", &self.departure),
            ("destination", &self.destination),
            ("start_date", &self.start_date),
            ("end_date", &self.end_date),
        ];

        fields
            .into_iter()
            .filter(|(_, value)| !value.as_ref().is_some_and(is_truthy))
            .map(|(name, _)| name)
            .collect()
    }
}

/// Validated trip parameters. Dates are opaque text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDetails {
    pub departure: String,
    pub destination: String,
    pub start_date: String,
    pub end_date: String,
}

impl TryFrom<ItineraryRequest> for TripDetails {
    type Error = ValidationErrors;

    /// Only a request that passes validation becomes a trip.
    fn try_from(request: ItineraryRequest) -> Result<Self, Self::Error> {
        request.validate()?;

        Ok(Self {
            departure: field_text(request.departure),
            destination: field_text(request.destination),
            start_date: field_text(request.start_date),
            end_date: field_text(request.end_date),
        })
    }
}

/// Generated itinerary in both source and rendered form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedItinerary {
    pub markdown: String,
    pub html: String,
}

impl GeneratedItinerary {
    pub fn from_markdown(raw: &str) -> Self {
        let markdown = raw.trim().to_string();
        let html = render_html(&markdown);
        Self { markdown, html }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ItineraryResponse {
    pub itinerary: String,
}

impl From<GeneratedItinerary> for ItineraryResponse {
    fn from(generated: GeneratedItinerary) -> Self {
        Self {
            itinerary: generated.html,
        }
    }
}
