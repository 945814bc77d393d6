//! Request validation rules.
//!
//! Validation is a pure function of the input. It never touches the rate
//! limiter or the event store.

use serde_json::{Map, Value};

use sharetrack_core::error::AppError;
use sharetrack_core::result::AppResult;
use sharetrack_core::types::{ContentKey, ContentType, Platform};

/// Body is not parseable JSON.
pub const INVALID_JSON: &str = "Invalid JSON";
/// Any required share field is missing or out of range.
pub const INVALID_FIELDS: &str = "Missing or invalid required fields";
/// Stats query parameters are missing or out of range.
pub const INVALID_STATS_QUERY: &str = "Missing or invalid contentId or contentType";

/// A share payload that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidShare {
    pub content_id: String,
    pub content_type: ContentType,
    pub platform: Platform,
    pub url: String,
}

/// Parses and validates a raw share request body.
///
/// Checks run in order: JSON syntax, `contentId`, `contentType`,
/// `platform`, `url`. The first failure wins. All field failures share a
/// single message.
pub fn parse_share_payload(body: &[u8]) -> AppResult<ValidShare> {
    let value: Value =
        serde_json::from_slice(body).map_err(|_| AppError::validation(INVALID_JSON))?;

    let fields = value.as_object().ok_or_else(invalid_fields)?;

    let content_id = required_str(fields, "contentId")?;
    let content_type = required_str(fields, "contentType")
        .ok()
        .and_then(ContentType::parse)
        .ok_or_else(invalid_fields)?;
    let platform = required_str(fields, "platform")
        .ok()
        .and_then(Platform::parse)
        .ok_or_else(invalid_fields)?;
    let url = required_str(fields, "url")?;

    Ok(ValidShare {
        content_id: content_id.to_string(),
        content_type,
        platform,
        url: url.to_string(),
    })
}

/// Validates stats query parameters into a content key.
pub fn parse_stats_query(
    content_id: Option<&str>,
    content_type: Option<&str>,
) -> AppResult<ContentKey> {
    let invalid = || AppError::validation(INVALID_STATS_QUERY);

    let content_id = content_id.filter(|id| !id.is_empty()).ok_or_else(invalid)?;
    let content_type = content_type.and_then(ContentType::parse).ok_or_else(invalid)?;

    Ok(ContentKey::new(content_id, content_type))
}

/// A present, non-empty string field.
fn required_str<'a>(fields: &'a Map<String, Value>, name: &str) -> AppResult<&'a str> {
    fields
        .get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or_else(invalid_fields)
}

fn invalid_fields() -> AppError {
    AppError::validation(INVALID_FIELDS)
}
