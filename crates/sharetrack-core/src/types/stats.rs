//! Aggregate share statistics.

use serde::{Deserialize, Serialize};

use super::content::ContentType;
use super::platform::Platform;

/// Per-platform share counts. Every platform is always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformCounts {
    pub linkedin: u64,
    pub twitter: u64,
    pub facebook: u64,
    pub whatsapp: u64,
    pub email: u64,
    pub copy: u64,
    pub native: u64,
}

impl PlatformCounts {
    fn slot(&mut self, platform: Platform) -> &mut u64 {
        match platform {
            Platform::Linkedin => &mut self.linkedin,
            Platform::Twitter => &mut self.twitter,
            Platform::Facebook => &mut self.facebook,
            Platform::Whatsapp => &mut self.whatsapp,
            Platform::Email => &mut self.email,
            Platform::Copy => &mut self.copy,
            Platform::Native => &mut self.native,
        }
    }

    /// Adds one share for the platform.
    pub fn increment(&mut self, platform: Platform) {
        *self.slot(platform) += 1;
    }

    /// Count for the platform.
    pub fn get(&self, platform: Platform) -> u64 {
        match platform {
            Platform::Linkedin => self.linkedin,
            Platform::Twitter => self.twitter,
            Platform::Facebook => self.facebook,
            Platform::Whatsapp => self.whatsapp,
            Platform::Email => self.email,
            Platform::Copy => self.copy,
            Platform::Native => self.native,
        }
    }

    /// Sum over all platforms.
    pub fn total(&self) -> u64 {
        Platform::ALL.iter().map(|p| self.get(*p)).sum()
    }
}

/// Aggregate statistics for one content item, computed on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareStats {
    /// Content identifier.
    pub content_id: String,
    /// Content type.
    pub content_type: ContentType,
    /// Number of recorded shares.
    pub total_shares: u64,
    /// Shares per platform.
    pub shares_by_platform: PlatformCounts,
}

impl ShareStats {
    /// Empty statistics for a key with no recorded events.
    pub fn empty(content_id: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            content_id: content_id.into(),
            content_type,
            total_shares: 0,
            shares_by_platform: PlatformCounts::default(),
        }
    }
}
