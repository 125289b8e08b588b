use askama::Template;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {}

/// Landing page with the trip form.
pub async fn index() -> impl IntoResponse {
    IndexTemplate {}
}

/// Liveness check.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "itinerary-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
