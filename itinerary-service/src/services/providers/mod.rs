//! Text generation provider abstractions and implementations.
//!
//! The handler only depends on [`TextProvider`], so the OpenAI backend can be
//! swapped for the mock in tests and local development.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ProviderError {
    /// Short label used for metrics.
    pub fn error_type(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::ApiError(_) => "api_error",
            ProviderError::RateLimited(_) => "rate_limited",
            ProviderError::NetworkError(_) => "network_error",
            ProviderError::MalformedResponse(_) => "malformed_response",
        }
    }
}

/// Result of a provider call.
#[derive(Debug, Clone, Default)]
pub struct ProviderResponse {
    /// Generated text; `None` when the service returned no content.
    pub text: Option<String>,

    /// Input tokens consumed.
    pub input_tokens: u32,

    /// Output tokens generated.
    pub output_tokens: u32,
}

/// Trait for text generation providers (e.g., OpenAI chat completions).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Send `prompt` as a single user message and return the completion.
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError>;

    /// Provider name for logs and metrics.
    fn name(&self) -> &'static str;

    /// Model identifier sent upstream.
    fn model(&self) -> &str;
}
