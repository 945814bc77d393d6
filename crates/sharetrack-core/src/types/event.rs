//! Recorded share events.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::content::{ContentKey, ContentType};
use super::platform::Platform;

/// A single recorded share. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareEvent {
    /// Server-assigned identifier.
    pub id: Uuid,
    /// Shared content identifier.
    pub content_id: String,
    /// Shared content type.
    pub content_type: ContentType,
    /// Target platform.
    pub platform: Platform,
    /// The URL that was shared.
    pub url: String,
    /// Server-assigned record time.
    pub timestamp: DateTime<Utc>,
}

impl ShareEvent {
    /// Creates an event stamped with the current time.
    pub fn new(
        content_id: impl Into<String>,
        content_type: ContentType,
        platform: Platform,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            content_id: content_id.into(),
            content_type,
            platform,
            url: url.into(),
            timestamp: Utc::now(),
        }
    }

    /// Aggregation key for this event.
    pub fn key(&self) -> ContentKey {
        ContentKey::new(self.content_id.clone(), self.content_type)
    }

    /// ISO-8601 timestamp with millisecond precision and a `Z` suffix.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
