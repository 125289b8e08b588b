//! Application startup and lifecycle management.

use crate::config::{ItineraryConfig, ProviderKind};
use crate::handlers::{generate_itinerary, health_check, index, metrics::metrics};
use crate::middleware::metrics::metrics_middleware;
use crate::services::metrics::init_metrics;
use crate::services::providers::mock::MockTextProvider;
use crate::services::providers::openai::{OpenAiConfig, OpenAiTextProvider};
use crate::services::providers::TextProvider;
use axum::{
    http::{header, Method},
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    security_headers::security_headers_middleware, tracing::request_id_middleware,
};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state, built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub text_provider: Arc<dyn TextProvider>,
}

/// Build the text provider selected by configuration.
pub fn build_text_provider(config: &ItineraryConfig) -> Result<Arc<dyn TextProvider>, AppError> {
    match config.generation.provider {
        ProviderKind::OpenAi => {
            let provider = OpenAiTextProvider::new(OpenAiConfig {
                api_key: config.openai.api_key.clone(),
                base_url: config.openai.base_url.clone(),
                model: config.generation.model.clone(),
                timeout: Duration::from_secs(config.openai.timeout_secs),
            })
            .map_err(|e| AppError::ConfigError(anyhow::anyhow!(e)))?;
            Ok(Arc::new(provider))
        }
        ProviderKind::Mock => {
            tracing::warn!("Using mock text provider; itineraries are canned");
            Ok(Arc::new(MockTextProvider::new()))
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    init_metrics();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics))
        .route("/generate_itinerary", post(generate_itinerary))
        .route_layer(from_fn(metrics_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the provider selected by configuration.
    pub async fn build(config: ItineraryConfig) -> Result<Self, AppError> {
        let text_provider = build_text_provider(&config)?;
        Self::build_with_provider(config, text_provider).await
    }

    /// Build the application around an already constructed provider.
    pub async fn build_with_provider(
        config: ItineraryConfig,
        text_provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        tracing::info!(
            provider = text_provider.name(),
            model = text_provider.model(),
            "Initialized text provider"
        );

        // Port 0 = random port for testing
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Itinerary service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state: AppState { text_provider },
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until a shutdown signal is received.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                e
            })
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
