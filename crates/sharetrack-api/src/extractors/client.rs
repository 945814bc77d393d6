//! `ClientKey` extractor: derives the rate limit identity from proxy headers.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;

/// Bucket used when no forwarding header identifies the caller.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Client identity used as the rate limit key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientKey(pub String);

impl ClientKey {
    /// Derives the key from request headers.
    ///
    /// Prefers the first `X-Forwarded-For` entry, then `X-Real-IP`, then
    /// [`UNKNOWN_CLIENT`]. Blank values are skipped.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let forwarded = headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        let real_ip = || {
            headers
                .get("x-real-ip")
                .and_then(|v| v.to_str().ok())
                .map(str::trim)
                .filter(|v| !v.is_empty())
        };

        let key = forwarded.or_else(real_ip).unwrap_or(UNKNOWN_CLIENT);
        Self(key.to_string())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for ClientKey
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}
