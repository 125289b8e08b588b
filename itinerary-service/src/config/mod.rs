use secrecy::{ExposeSecret, SecretString};
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::str::FromStr;

/// Default OpenAI-compatible API base URL.
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Model used for itinerary generation unless overridden.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default upstream request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct ItineraryConfig {
    pub common: core_config::Config,
    pub openai: OpenAiSettings,
    pub generation: GenerationSettings,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiSettings {
    pub api_key: SecretString,
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub provider: ProviderKind,
    pub model: String,
}

/// Which text provider backs the generation endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Mock,
}

impl FromStr for ProviderKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "mock" => Ok(ProviderKind::Mock),
            other => Err(AppError::ConfigError(anyhow::anyhow!(
                "Unknown GENERATION_PROVIDER '{}' (expected 'openai' or 'mock')",
                other
            ))),
        }
    }
}

impl ItineraryConfig {
    /// Load configuration from `.env`, the optional `configuration` file and
    /// the process environment.
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        Self::from_lookup(common_config, |key| env::var(key).ok())
    }

    /// Build the service configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(common: core_config::Config, lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = get_env(&lookup, "OPENAI_API_KEY", None)?;
        if api_key.trim().is_empty() {
            return Err(AppError::ConfigError(anyhow::anyhow!(
                "OPENAI_API_KEY is required but empty"
            )));
        }

        let timeout_secs = get_env(
            &lookup,
            "OPENAI_TIMEOUT_SECS",
            Some(&DEFAULT_TIMEOUT_SECS.to_string()),
        )?
        .parse::<u64>()
        .map_err(|e| AppError::ConfigError(anyhow::anyhow!("Invalid OPENAI_TIMEOUT_SECS: {}", e)))?;

        Ok(ItineraryConfig {
            common,
            openai: OpenAiSettings {
                api_key: SecretString::new(api_key),
                base_url: get_env(&lookup, "OPENAI_BASE_URL", Some(DEFAULT_OPENAI_BASE_URL))?
                    .trim_end_matches('/')
                    .to_string(),
                timeout_secs,
            },
            generation: GenerationSettings {
                provider: get_env(&lookup, "GENERATION_PROVIDER", Some("openai"))?
                    .parse::<ProviderKind>()?,
                model: get_env(&lookup, "ITINERARY_MODEL", Some(DEFAULT_MODEL))?,
            },
            otlp_endpoint: lookup("OTLP_ENDPOINT").filter(|v| !v.is_empty()),
        })
    }

    /// Credential prefix safe to print in startup logs.
    pub fn masked_api_key(&self) -> String {
        let key = self.openai.api_key.expose_secret();
        let prefix: String = key.chars().take(8).collect();
        format!("{}...", prefix)
    }
}

fn get_env<F>(lookup: &F, key: &str, default: Option<&str>) -> Result<String, AppError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(val) => Ok(val),
        None => match default {
            Some(def) => Ok(def.to_string()),
            None => Err(AppError::ConfigError(anyhow::anyhow!(
                "{} is required but not set",
                key
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn common() -> core_config::Config {
        core_config::Config {
            port: 0,
            log_level: "info".to_string(),
        }
    }

    fn load_with(vars: &[(&str, &str)]) -> Result<ItineraryConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ItineraryConfig::from_lookup(common(), |key| vars.get(key).cloned())
    }

    #[test]
    fn missing_api_key_is_a_config_error() {
        let err = load_with(&[]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn startup_error_names_the_config_failure_once() {
        let err = anyhow::Error::new(load_with(&[]).unwrap_err());
        let message = err.to_string();

        assert!(message.starts_with("Configuration error: "));
        assert_eq!(message.matches("Configuration error").count(), 1);
    }

    #[test]
    fn empty_api_key_is_a_config_error() {
        let err = load_with(&[("OPENAI_API_KEY", "  ")]).unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }

    #[test]
    fn defaults_are_applied() {
        let config = load_with(&[("OPENAI_API_KEY", "sk-test-1234567890")]).unwrap();

        assert_eq!(config.openai.base_url, DEFAULT_OPENAI_BASE_URL);
        assert_eq!(config.openai.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.generation.model, "gpt-4o-mini");
        assert_eq!(config.generation.provider, ProviderKind::OpenAi);
        assert!(config.otlp_endpoint.is_none());
    }

    #[test]
    fn overrides_are_honored() {
        let config = load_with(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:9999/v1/"),
            ("OPENAI_TIMEOUT_SECS", "5"),
            ("GENERATION_PROVIDER", "Mock"),
            ("ITINERARY_MODEL", "gpt-4o"),
        ])
        .unwrap();

        assert_eq!(config.openai.base_url, "http://localhost:9999/v1");
        assert_eq!(config.openai.timeout_secs, 5);
        assert_eq!(config.generation.provider, ProviderKind::Mock);
        assert_eq!(config.generation.model, "gpt-4o");
    }

    #[test]
    fn invalid_provider_is_rejected() {
        let err = load_with(&[("OPENAI_API_KEY", "sk"), ("GENERATION_PROVIDER", "gemini")])
            .unwrap_err();
        assert!(err.to_string().contains("gemini"));
    }

    #[test]
    fn masked_key_only_shows_prefix() {
        let config = load_with(&[("OPENAI_API_KEY", "sk-abcdefghijklmnop")]).unwrap();
        assert_eq!(config.masked_api_key(), "sk-abcde...");
    }
}
