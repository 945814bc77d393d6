//! Fixed-window rate limiter keyed by client identity.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::{debug, warn};

use sharetrack_core::config::RateLimitConfig;
use sharetrack_core::result::AppResult;
use sharetrack_core::traits::{RateLimitDecision, RateLimiter};

/// Simple in-memory fixed-window rate limiter.
///
/// Each client key gets `max_requests` per `window`. A window opens on the
/// first request after the previous one closed.
#[derive(Debug, Clone)]
pub struct MemoryRateLimiter {
    /// Client key → window state.
    windows: Arc<Mutex<HashMap<String, RateLimitWindow>>>,
    /// Maximum requests per window.
    max_requests: u32,
    /// Window length.
    window: Duration,
}

#[derive(Debug, Clone)]
struct RateLimitWindow {
    count: u32,
    window_start: Instant,
}

impl MemoryRateLimiter {
    /// Creates a new rate limiter.
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: Arc::new(Mutex::new(HashMap::new())),
            max_requests,
            window,
        }
    }

    /// Creates a rate limiter from configuration.
    pub fn from_config(config: &RateLimitConfig) -> Self {
        Self::new(config.max_requests, config.window())
    }
}

#[async_trait]
impl RateLimiter for MemoryRateLimiter {
    async fn check(&self, key: &str) -> AppResult<RateLimitDecision> {
        let mut windows = self.windows.lock().await;
        let now = Instant::now();

        let state = windows.entry(key.to_string()).or_insert(RateLimitWindow {
            count: 0,
            window_start: now,
        });

        if now.duration_since(state.window_start) >= self.window {
            state.count = 0;
            state.window_start = now;
        }

        // Rejected requests still count.
        state.count = state.count.saturating_add(1);

        let allowed = state.count <= self.max_requests;
        let remaining = self.max_requests.saturating_sub(state.count);
        let reset_after = self
            .window
            .saturating_sub(now.duration_since(state.window_start));

        if allowed {
            debug!(client = %key, count = state.count, remaining, "Rate limit check passed");
        } else {
            warn!(client = %key, count = state.count, limit = self.max_requests, "Rate limit exceeded");
        }

        Ok(RateLimitDecision {
            allowed,
            remaining,
            reset_after,
        })
    }

    async fn prune_expired(&self) -> AppResult<usize> {
        let mut windows = self.windows.lock().await;
        let now = Instant::now();
        let before = windows.len();

        windows.retain(|_, state| now.duration_since(state.window_start) < self.window);

        let removed = before - windows.len();
        if removed > 0 {
            debug!(removed, remaining = windows.len(), "Pruned expired rate limit windows");
        }
        Ok(removed)
    }
}
