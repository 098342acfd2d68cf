//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TELEGRAM_AI_BOT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use telegram_ai_bot::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Using model {}", config.ai.model);
//! ```

mod ai;
mod error;
mod log;
mod pacing;
mod telegram;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use log::LogConfig;
pub use pacing::PacingConfig;
pub use telegram::TelegramConfig;

use serde::Deserialize;

use crate::application::AskAiConfig;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TELEGRAM_AI_BOT";

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Every section has defaults so that missing values surface as validation
/// errors naming the variable, not as deserialization failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Telegram configuration (bot token, /help links)
    #[serde(default)]
    pub telegram: TelegramConfig,

    /// Completion endpoint configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// Placeholder pacing
    #[serde(default)]
    pub pacing: PacingConfig,

    /// Logging
    #[serde(default)]
    pub log: LogConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TELEGRAM_AI_BOT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TELEGRAM_AI_BOT__TELEGRAM__BOT_TOKEN=...` -> `telegram.bot_token`
    /// - `TELEGRAM_AI_BOT__AI__API_KEY=...` -> `ai.api_key`
    /// - `TELEGRAM_AI_BOT__AI__BASE_URL=...` -> `ai.base_url`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.telegram.validate()?;
        self.ai.validate()?;
        self.log.validate()?;
        Ok(())
    }

    /// Settings for the `/ai` handler
    pub fn ask_ai(&self) -> AskAiConfig {
        AskAiConfig {
            max_tokens: self.ai.max_tokens,
            temperature: self.ai.temperature,
            top_p: self.ai.top_p,
            pacing: self.pacing.pacing(),
        }
    }
}
