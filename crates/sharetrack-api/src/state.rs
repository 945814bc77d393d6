//! Application state shared across all handlers.

use std::sync::Arc;
use std::time::Instant;

use sharetrack_core::config::AppConfig;
use sharetrack_core::traits::{EventStore, RateLimiter};
use sharetrack_service::ShareTrackingService;
use sharetrack_store::{MemoryEventStore, MemoryRateLimiter};

/// Shared application state, cloned into every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Share tracking service.
    pub tracking: Arc<ShareTrackingService>,
    /// Rate limiter used by the tracking service, kept for maintenance tasks.
    pub limiter: Arc<dyn RateLimiter>,
    /// When the state was created, for uptime reporting.
    pub started_at: Instant,
}

impl AppState {
    /// Builds state backed by the in-memory store and limiter.
    pub fn new(config: AppConfig) -> Self {
        let store: Arc<dyn EventStore> = Arc::new(MemoryEventStore::new());
        let limiter: Arc<dyn RateLimiter> =
            Arc::new(MemoryRateLimiter::from_config(&config.tracking.rate_limit));
        Self::with_backends(config, store, limiter)
    }

    /// Builds state around the given storage backends.
    pub fn with_backends(
        config: AppConfig,
        store: Arc<dyn EventStore>,
        limiter: Arc<dyn RateLimiter>,
    ) -> Self {
        let tracking = Arc::new(ShareTrackingService::new(store, Arc::clone(&limiter)));
        Self {
            config: Arc::new(config),
            tracking,
            limiter,
            started_at: Instant::now(),
        }
    }
}
