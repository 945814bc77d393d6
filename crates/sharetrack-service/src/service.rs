//! Share tracking service.

use std::sync::Arc;

use tracing::{debug, info};

use sharetrack_core::error::AppError;
use sharetrack_core::result::AppResult;
use sharetrack_core::traits::{EventStore, RateLimiter};
use sharetrack_core::types::{ShareEvent, ShareStats};

use crate::validation::{parse_share_payload, parse_stats_query};

/// Returned to rate-limited callers. Carries no counters or window details.
pub const RATE_LIMIT_EXCEEDED: &str = "Rate limit exceeded. Please try again later.";

/// A share that was accepted and stored.
#[derive(Debug, Clone)]
pub struct RecordedShare {
    /// The stored event.
    pub event: ShareEvent,
    /// Writes the client has left in the current window.
    pub remaining: u32,
}

/// Validates, rate limits, records and aggregates share events.
#[derive(Debug, Clone)]
pub struct ShareTrackingService {
    /// Event storage backend.
    store: Arc<dyn EventStore>,
    /// Per-client limiter for the write path.
    limiter: Arc<dyn RateLimiter>,
}

impl ShareTrackingService {
    /// Creates a new share tracking service.
    pub fn new(store: Arc<dyn EventStore>, limiter: Arc<dyn RateLimiter>) -> Self {
        Self { store, limiter }
    }

    /// Records a share event from a raw request body.
    ///
    /// Order of checks:
    /// 1. Body syntax and field validation (no side effects on failure)
    /// 2. Rate limit for `client_key` (counted even when rejected)
    /// 3. Append to the store with a server-assigned timestamp
    ///
    /// A rejected request carries the time until the client's window reopens.
    pub async fn record_share(&self, body: &[u8], client_key: &str) -> AppResult<RecordedShare> {
        let share = parse_share_payload(body).inspect_err(|e| {
            debug!(client = %client_key, error = %e.message, "Rejected share payload");
        })?;

        let decision = self.limiter.check(client_key).await?;
        if !decision.allowed {
            return Err(AppError::rate_limited(
                RATE_LIMIT_EXCEEDED,
                decision.reset_after,
            ));
        }

        let event = ShareEvent::new(share.content_id, share.content_type, share.platform, share.url);
        self.store.append(event.clone()).await?;

        info!(
            event_id = %event.id,
            content = %event.key(),
            platform = %event.platform,
            client = %client_key,
            remaining = decision.remaining,
            "Share event tracked"
        );

        Ok(RecordedShare {
            event,
            remaining: decision.remaining,
        })
    }

    /// Aggregates recorded shares for the queried content. Not rate limited.
    pub async fn get_stats(
        &self,
        content_id: Option<&str>,
        content_type: Option<&str>,
    ) -> AppResult<ShareStats> {
        let key = parse_stats_query(content_id, content_type)?;
        self.store.stats(&key).await
    }
}
