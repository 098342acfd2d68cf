//! Logging configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Rust log filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format: `pretty` or `json`
    #[serde(default = "default_format")]
    pub format: String,
}

impl LogConfig {
    /// Check if JSON output is requested
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }

    /// Validate logging configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.format.to_ascii_lowercase().as_str() {
            "pretty" | "json" => Ok(()),
            _ => Err(ValidationError::InvalidLogFormat(self.format.clone())),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_level() -> String {
    "info,telegram_ai_bot=debug,reqwest=warn".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert!(!config.is_json());
        assert!(config.level.contains("telegram_ai_bot=debug"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_json_format() {
        let config = LogConfig {
            format: "JSON".to_string(),
            ..Default::default()
        };
        assert!(config.is_json());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_format() {
        let config = LogConfig {
            format: "xml".to_string(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidLogFormat("xml".to_string()))
        );
    }
}
