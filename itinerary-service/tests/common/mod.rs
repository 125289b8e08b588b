#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use http_body_util::BodyExt;
use itinerary_service::config::ItineraryConfig;
use itinerary_service::services::providers::TextProvider;
use itinerary_service::startup::{build_router, AppState};
use serde_json::Value;
use service_core::config::Config;
use std::collections::HashMap;
use std::sync::Arc;

pub fn router_with(provider: Arc<dyn TextProvider>) -> Router {
    build_router(AppState {
        text_provider: provider,
    })
}

/// Test configuration built without touching the process environment.
pub fn test_config(vars: &[(&str, &str)]) -> ItineraryConfig {
    let mut map: HashMap<String, String> = HashMap::new();
    map.insert("OPENAI_API_KEY".to_string(), "sk-test-key-0000".to_string());
    for (k, v) in vars {
        map.insert(k.to_string(), v.to_string());
    }

    let common = Config {
        port: 0,
        log_level: "info".to_string(),
    };

    ItineraryConfig::from_lookup(common, |key| map.get(key).cloned())
        .expect("Failed to build test config")
}

pub fn paris_trip() -> Value {
    serde_json::json!({
        "departure": "NYC",
        "destination": "Paris",
        "start_date": "2025-06-01",
        "end_date": "2025-06-07"
    })
}

pub fn json_post(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_str(&body_string(response).await).expect("Body is not JSON")
}
