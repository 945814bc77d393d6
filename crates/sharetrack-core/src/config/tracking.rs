//! Share tracking and rate limiting configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Settings for the share tracking endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TrackingConfig {
    /// Largest accepted request body for the write endpoint, in bytes.
    #[serde(default = "default_max_body_bytes")]
    #[validate(range(min = 256))]
    pub max_body_bytes: usize,
    /// Per-client rate limit applied to recorded shares.
    #[serde(default)]
    #[validate(nested)]
    pub rate_limit: RateLimitConfig,
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: default_max_body_bytes(),
            rate_limit: RateLimitConfig::default(),
        }
    }
}

/// Fixed-window rate limit settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RateLimitConfig {
    /// Requests allowed per client within one window.
    #[serde(default = "default_max_requests")]
    #[validate(range(min = 1))]
    pub max_requests: u32,
    /// Window length in seconds.
    #[serde(default = "default_window_seconds")]
    #[validate(range(min = 1))]
    pub window_seconds: u64,
    /// How often stale windows are dropped from memory, in seconds.
    #[serde(default = "default_prune_interval_seconds")]
    #[validate(range(min = 1))]
    pub prune_interval_seconds: u64,
}

impl RateLimitConfig {
    /// Window length as a `Duration`.
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_seconds)
    }

    /// Prune interval as a `Duration`.
    pub fn prune_interval(&self) -> Duration {
        Duration::from_secs(self.prune_interval_seconds)
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: default_max_requests(),
            window_seconds: default_window_seconds(),
            prune_interval_seconds: default_prune_interval_seconds(),
        }
    }
}

fn default_max_body_bytes() -> usize {
    16 * 1024
}

fn default_max_requests() -> u32 {
    20
}

fn default_window_seconds() -> u64 {
    60
}

fn default_prune_interval_seconds() -> u64 {
    300
}
