//! Per-client rate limiter trait.

use std::time::Duration;

use async_trait::async_trait;

use crate::result::AppResult;

/// Outcome of a rate limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitDecision {
    /// Whether the request may proceed.
    pub allowed: bool,
    /// Requests left in the current window after this one.
    pub remaining: u32,
    /// Time until the current window closes.
    pub reset_after: Duration,
}

/// Counts requests per client key and decides whether each one is allowed.
///
/// Every call to [`RateLimiter::check`] counts toward the window, whether
/// or not it is allowed.
#[async_trait]
pub trait RateLimiter: Send + Sync + std::fmt::Debug + 'static {
    /// Count one request for `key` and decide whether it is allowed.
    async fn check(&self, key: &str) -> AppResult<RateLimitDecision>;

    /// Drop state for windows that have already closed. Returns how many
    /// entries were removed.
    async fn prune_expired(&self) -> AppResult<usize>;
}
