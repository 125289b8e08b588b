//! Mock provider implementation for tests and local development.

use super::{ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

const DEFAULT_ITINERARY: &str = "# Sample Itinerary\n\n\
## Flights\n\n\
- Mock Air MA100, departs 09:00, approx. 7h\n\n\
## Hotels\n\n\
- Hotel Example (4.5/5)\n\n\
## Activities\n\n\
- City walking tour\n";

/// Mock text provider that records every prompt it receives.
pub struct MockTextProvider {
    response: Option<String>,
    failure: Option<String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockTextProvider {
    /// Provider returning a fixed sample itinerary.
    pub fn new() -> Self {
        Self::with_response(DEFAULT_ITINERARY)
    }

    /// Provider returning `markdown` for every prompt.
    pub fn with_response(markdown: impl Into<String>) -> Self {
        Self {
            response: Some(markdown.into()),
            failure: None,
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Provider whose completions carry no message content.
    pub fn without_content() -> Self {
        Self {
            response: None,
            ..Self::new()
        }
    }

    /// Provider failing every call with an API error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new()
        }
    }

    /// Number of `generate` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

impl Default for MockTextProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(&self, prompt: &str) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        if let Some(message) = &self.failure {
            return Err(ProviderError::ApiError(message.clone()));
        }

        Ok(ProviderResponse {
            text: self.response.clone(),
            input_tokens: (prompt.len() / 4) as u32,
            output_tokens: self
                .response
                .as_ref()
                .map_or(0, |text| (text.len() / 4) as u32),
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }
}
