//! Placeholder pacing configuration

use serde::Deserialize;
use std::time::Duration;

use crate::application::Pacing;

/// Delays around the `/ai` placeholder, in milliseconds
#[derive(Debug, Clone, Deserialize)]
pub struct PacingConfig {
    /// Wait after the completion call returns
    #[serde(default = "default_result_delay")]
    pub result_delay_ms: u64,

    /// Wait between "found" and removing the placeholder
    #[serde(default = "default_found_delay")]
    pub found_delay_ms: u64,

    /// Wait between an error notice and removing the placeholder
    #[serde(default = "default_notice_delay")]
    pub notice_delay_ms: u64,
}

impl PacingConfig {
    /// Convert to handler pacing
    pub fn pacing(&self) -> Pacing {
        Pacing {
            result_delay: Duration::from_millis(self.result_delay_ms),
            found_delay: Duration::from_millis(self.found_delay_ms),
            notice_delay: Duration::from_millis(self.notice_delay_ms),
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            result_delay_ms: default_result_delay(),
            found_delay_ms: default_found_delay(),
            notice_delay_ms: default_notice_delay(),
        }
    }
}

fn default_result_delay() -> u64 {
    2000
}

fn default_found_delay() -> u64 {
    1000
}

fn default_notice_delay() -> u64 {
    2000
}
