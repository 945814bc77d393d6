//! Share event store trait.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::{ContentKey, ShareEvent, ShareStats};

/// Append-only store of share events, aggregated per content key.
///
/// Implementations must be safe to call from concurrent requests: an
/// append and a stats read for the same key never observe a partial write.
#[async_trait]
pub trait EventStore: Send + Sync + std::fmt::Debug + 'static {
    /// Record an event under its content key.
    async fn append(&self, event: ShareEvent) -> AppResult<()>;

    /// Aggregate all events recorded for the key. Keys never seen return
    /// zeroed statistics.
    async fn stats(&self, key: &ContentKey) -> AppResult<ShareStats>;
}
