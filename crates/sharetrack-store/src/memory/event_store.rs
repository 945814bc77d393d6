//! In-memory share event store using dashmap.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use sharetrack_core::result::AppResult;
use sharetrack_core::traits::EventStore;
use sharetrack_core::types::{ContentKey, PlatformCounts, ShareEvent, ShareStats};

/// Process-local event store. Events are grouped per content key, so a
/// stats read only walks the events of that key.
#[derive(Debug, Clone, Default)]
pub struct MemoryEventStore {
    /// Content key → events in record order.
    events: Arc<DashMap<ContentKey, Vec<ShareEvent>>>,
}

impl MemoryEventStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for MemoryEventStore {
    async fn append(&self, event: ShareEvent) -> AppResult<()> {
        let key = event.key();
        let mut bucket = self.events.entry(key).or_default();
        bucket.push(event);
        debug!(bucket_size = bucket.len(), "Share event appended");
        Ok(())
    }

    async fn stats(&self, key: &ContentKey) -> AppResult<ShareStats> {
        let Some(bucket) = self.events.get(key) else {
            return Ok(ShareStats::empty(key.content_id.clone(), key.content_type));
        };

        let mut by_platform = PlatformCounts::default();
        for event in bucket.iter() {
            by_platform.increment(event.platform);
        }

        Ok(ShareStats {
            content_id: key.content_id.clone(),
            content_type: key.content_type,
            total_shares: bucket.len() as u64,
            shares_by_platform: by_platform,
        })
    }
}
