//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid completion endpoint URL")]
    InvalidBaseUrl,

    #[error("Invalid link URL: {0}")]
    InvalidLinkUrl(&'static str),

    #[error("Max tokens must be greater than zero")]
    InvalidMaxTokens,

    #[error("Temperature must be between 0 and 2")]
    InvalidTemperature,

    #[error("Top-p must be in (0, 1]")]
    InvalidTopP,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid log format: {0}")]
    InvalidLogFormat(String),
}
