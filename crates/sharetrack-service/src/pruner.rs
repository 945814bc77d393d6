//! Background task that drops closed rate limit windows.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time;

use sharetrack_core::traits::RateLimiter;

/// Periodically prunes the rate limiter until shutdown is signalled.
#[derive(Debug)]
pub struct WindowPruner {
    /// Limiter to prune.
    limiter: Arc<dyn RateLimiter>,
    /// Time between prune passes.
    interval: Duration,
}

impl WindowPruner {
    /// Creates a new pruner.
    pub fn new(limiter: Arc<dyn RateLimiter>, interval: Duration) -> Self {
        Self { limiter, interval }
    }

    /// Runs until `cancel` flips to `true`.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        tracing::info!(interval_secs = self.interval.as_secs(), "Rate limit pruner started");

        let mut ticker = time::interval(self.interval);
        // The first tick completes immediately; nothing to prune yet.
        ticker.tick().await;

        loop {
            tokio::select! {
                changed = cancel.changed() => {
                    if changed.is_err() || *cancel.borrow() {
                        break;
                    }
                }
                _ = ticker.tick() => {
                    match self.limiter.prune_expired().await {
                        Ok(removed) => tracing::debug!(removed, "Rate limit prune pass complete"),
                        Err(e) => tracing::error!(error = %e, "Rate limit prune failed"),
                    }
                }
            }
        }

        tracing::info!("Rate limit pruner stopped");
    }

    /// Spawns [`WindowPruner::run`] on the current runtime.
    pub fn spawn(self, cancel: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(async move { self.run(cancel).await })
    }
}
