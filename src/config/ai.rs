//! AI provider configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::ai::{ChatCompletionsConfig, DEFAULT_MODEL};
use crate::ports::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE, DEFAULT_TOP_P};

/// AI provider configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AiConfig {
    /// Bearer token for the completion endpoint
    pub api_key: Option<String>,

    /// Full URL of the chat completions endpoint
    pub base_url: Option<String>,

    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    pub model: String,

    /// Maximum output tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Nucleus sampling probability
    #[serde(default = "default_top_p")]
    pub top_p: f32,

    /// Request timeout in seconds; unset keeps the HTTP client default
    pub timeout_secs: Option<u64>,
}

impl AiConfig {
    /// Get timeout as Duration
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Check if an API key is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_ref().is_some_and(|k| !k.is_empty())
    }

    /// Builds the provider configuration.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingRequired` if the key or URL is unset.
    pub fn provider_config(&self) -> Result<ChatCompletionsConfig, ValidationError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ValidationError::MissingRequired("AI__API_KEY"))?;
        let base_url = self
            .base_url
            .as_deref()
            .ok_or(ValidationError::MissingRequired("AI__BASE_URL"))?;

        let mut config = ChatCompletionsConfig::new(api_key, base_url).with_model(&self.model);
        if let Some(timeout) = self.timeout() {
            config = config.with_timeout(timeout);
        }
        Ok(config)
    }

    /// Validate AI configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.has_api_key() {
            return Err(ValidationError::MissingRequired("AI__API_KEY"));
        }

        let base_url = self
            .base_url
            .as_deref()
            .ok_or(ValidationError::MissingRequired("AI__BASE_URL"))?;
        let url = reqwest::Url::parse(base_url).map_err(|_| ValidationError::InvalidBaseUrl)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ValidationError::InvalidBaseUrl);
        }

        if self.max_tokens == 0 {
            return Err(ValidationError::InvalidMaxTokens);
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ValidationError::InvalidTemperature);
        }
        if !(self.top_p > 0.0 && self.top_p <= 1.0) {
            return Err(ValidationError::InvalidTopP);
        }
        if self.timeout_secs == Some(0) {
            return Err(ValidationError::InvalidTimeout);
        }

        Ok(())
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            timeout_secs: None,
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_top_p() -> f32 {
    DEFAULT_TOP_P
}
