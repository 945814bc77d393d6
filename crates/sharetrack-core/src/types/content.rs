//! Shareable content identification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of content a share refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// A blog post.
    Blog,
    /// A podcast episode.
    Podcast,
}

impl ContentType {
    /// Every accepted content type.
    pub const ALL: [ContentType; 2] = [ContentType::Blog, ContentType::Podcast];

    /// Wire name of the content type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Podcast => "podcast",
        }
    }

    /// Membership test against the closed set of names. Exact, case-sensitive.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregation key: events are grouped by content id and type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentKey {
    /// Opaque content identifier.
    pub content_id: String,
    /// Content type.
    pub content_type: ContentType,
}

impl ContentKey {
    /// Creates a new content key.
    pub fn new(content_id: impl Into<String>, content_type: ContentType) -> Self {
        Self {
            content_id: content_id.into(),
            content_type,
        }
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.content_type, self.content_id)
    }
}
