//! `POST /generate_itinerary`.

use crate::models::{
    GeneratedItinerary, ItineraryRequest, ItineraryResponse, TripDetails, MISSING_FIELDS_MESSAGE,
};
use crate::services::build_itinerary_prompt;
use crate::services::metrics;
use crate::services::providers::{ProviderError, TextProvider};
use crate::startup::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use service_core::error::AppError;
use std::sync::Arc;
use std::time::Instant;

/// Validate the trip, ask the generation service for a Markdown itinerary
/// and return it rendered as HTML.
pub async fn generate_itinerary(
    State(state): State<AppState>,
    payload: Result<Json<ItineraryRequest>, JsonRejection>,
) -> Result<Json<ItineraryResponse>, AppError> {
    // A body that is not a JSON object is a 500, not a missing-field 400.
    let Json(request) = payload.map_err(|rejection| {
        let message = rejection.body_text();
        tracing::error!(error = %message, "Failed to read itinerary request body");
        metrics::record_generation("internal_error");
        AppError::InternalError(anyhow::anyhow!(message))
    })?;

    let missing = request.missing_fields();
    let trip = TripDetails::try_from(request).map_err(|_| {
        tracing::warn!(?missing, "Itinerary request is missing required fields");
        metrics::record_generation("validation_error");
        AppError::BadRequest(anyhow::anyhow!(MISSING_FIELDS_MESSAGE))
    })?;

    let prompt = build_itinerary_prompt(&trip);
    let provider = Arc::clone(&state.text_provider);

    tracing::info!(
        destination = %trip.destination,
        provider = provider.name(),
        model = provider.model(),
        "Generating itinerary"
    );

    // Runs detached: a client disconnect drops this handler future but not
    // the in-flight upstream call.
    let task = tokio::spawn(async move { generate(provider.as_ref(), &prompt).await });

    let generated = match task.await {
        Ok(Ok(generated)) => generated,
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Itinerary generation failed");
            metrics::record_generation("upstream_error");
            return Err(AppError::UpstreamError(e.to_string()));
        }
        Err(e) => {
            tracing::error!(error = %e, "Itinerary generation task did not complete");
            metrics::record_generation("internal_error");
            return Err(AppError::InternalError(anyhow::anyhow!(
                "Itinerary generation task failed: {}",
                e
            )));
        }
    };

    metrics::record_generation("success");
    tracing::info!(
        markdown_len = generated.markdown.len(),
        html_len = generated.html.len(),
        "Itinerary generated"
    );

    Ok(Json(generated.into()))
}

/// Call the provider once and convert its Markdown output.
async fn generate(
    provider: &dyn TextProvider,
    prompt: &str,
) -> Result<GeneratedItinerary, ProviderError> {
    let started = Instant::now();
    let result = provider.generate(prompt).await;
    metrics::record_provider_latency(
        provider.name(),
        provider.model(),
        started.elapsed().as_secs_f64(),
    );

    let response = result.map_err(|e| {
        metrics::record_provider_error(provider.name(), e.error_type());
        e
    })?;

    metrics::record_tokens(provider.model(), response.input_tokens, response.output_tokens);

    let markdown = response.text.ok_or_else(|| {
        let e = ProviderError::MalformedResponse(
            "Generation service returned no message content".to_string(),
        );
        metrics::record_provider_error(provider.name(), e.error_type());
        e
    })?;

    Ok(GeneratedItinerary::from_markdown(&markdown))
}
