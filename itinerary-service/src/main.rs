use itinerary_service::config::ItineraryConfig;
use itinerary_service::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The process must not start without a usable credential.
    let config = ItineraryConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::Error::new(e)
    })?;

    init_tracing(
        "itinerary-service",
        &config.common.log_level,
        config.otlp_endpoint.as_deref(),
    );

    tracing::info!(
        api_key = %config.masked_api_key(),
        model = %config.generation.model,
        "OPENAI_API_KEY loaded"
    );

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        anyhow::anyhow!("Startup error: {}", e)
    })?;

    app.run_until_stopped().await?;

    Ok(())
}
