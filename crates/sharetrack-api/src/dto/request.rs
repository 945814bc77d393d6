//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /api/social/track-share`.
///
/// Both fields are optional at the extractor level so that missing values
/// reach the service and produce the usual validation error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    /// Content identifier.
    pub content_id: Option<String>,
    /// Content type (`blog` or `podcast`).
    pub content_type: Option<String>,
}
