//! Telegram configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::HelpLinks;

/// Telegram bot configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    /// Bot API token from @BotFather
    pub bot_token: Option<String>,

    /// Developer link shown under /help
    #[serde(default = "default_developer_url")]
    pub developer_url: String,

    /// Source repository link shown under /help
    #[serde(default = "default_repository_url")]
    pub repository_url: String,

    /// Completion provider link shown under /help
    #[serde(default = "default_provider_url")]
    pub provider_url: String,
}

impl TelegramConfig {
    /// Get the bot token
    pub fn bot_token(&self) -> Result<&str, ValidationError> {
        self.bot_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or(ValidationError::MissingRequired("TELEGRAM__BOT_TOKEN"))
    }

    /// Links for the /help keyboard
    pub fn help_links(&self) -> HelpLinks {
        HelpLinks {
            developer: self.developer_url.clone(),
            repository: self.repository_url.clone(),
            provider: self.provider_url.clone(),
        }
    }

    /// Validate Telegram configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.bot_token()?;

        for (name, url) in [
            ("TELEGRAM__DEVELOPER_URL", &self.developer_url),
            ("TELEGRAM__REPOSITORY_URL", &self.repository_url),
            ("TELEGRAM__PROVIDER_URL", &self.provider_url),
        ] {
            reqwest::Url::parse(url).map_err(|_| ValidationError::InvalidLinkUrl(name))?;
        }

        Ok(())
    }
}

impl Default for TelegramConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            developer_url: default_developer_url(),
            repository_url: default_repository_url(),
            provider_url: default_provider_url(),
        }
    }
}

fn default_developer_url() -> String {
    "https://t.me/unseen_crafts".to_string()
}

fn default_repository_url() -> String {
    "https://github.com/omsamurai/telegram-ai-bot".to_string()
}

fn default_provider_url() -> String {
    "https://hyperbolic.xyz".to_string()
}
