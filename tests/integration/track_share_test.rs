//! Recording share events over HTTP.

use chrono::{DateTime, Utc};
use http::StatusCode;
use serde_json::json;

use crate::helpers::{TRACK_SHARE, TestApp, share};

#[tokio::test]
async fn test_track_share_then_stats() {
    let app = TestApp::new();

    let resp = app.track(share("blog-1", "blog", "twitter"), None).await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["success"], true);
    assert_eq!(resp.body["message"], "Share event tracked successfully");
    assert_eq!(resp.body["data"]["contentId"], "blog-1");
    assert_eq!(resp.body["data"]["contentType"], "blog");
    assert_eq!(resp.body["data"]["platform"], "twitter");

    let stats = app.stats("blog-1", "blog").await;
    assert_eq!(stats.status, StatusCode::OK);
    assert_eq!(stats.body["data"]["totalShares"], 1);
    assert_eq!(stats.body["data"]["sharesByPlatform"]["twitter"], 1);
    for other in ["linkedin", "facebook", "whatsapp", "email", "copy", "native"] {
        assert_eq!(stats.body["data"]["sharesByPlatform"][other], 0, "{other}");
    }
}

#[tokio::test]
async fn test_timestamp_is_iso8601_and_url_not_echoed() {
    let app = TestApp::new();

    let before = Utc::now();
    let resp = app.track(share("ep-9", "podcast", "linkedin"), None).await;
    assert_eq!(resp.status, StatusCode::OK);

    let raw = resp.body["data"]["timestamp"].as_str().unwrap();
    assert!(raw.ends_with('Z'), "timestamp should be UTC: {raw}");
    let ts: DateTime<Utc> = raw.parse().unwrap();
    assert!(ts >= before - chrono::Duration::seconds(1));

    assert!(resp.body["data"].get("url").is_none());
}

#[tokio::test]
async fn test_invalid_content_type_rejected() {
    let app = TestApp::new();

    let resp = app.track(share("blog-1", "video", "twitter"), None).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.body["success"], false);
    assert_eq!(resp.error(), "Missing or invalid required fields");
}

#[tokio::test]
async fn test_invalid_platform_rejected() {
    let app = TestApp::new();

    let resp = app.track(share("blog-1", "blog", "myspace"), None).await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.error(), "Missing or invalid required fields");
}

#[tokio::test]
async fn test_missing_field_leaves_store_unchanged() {
    let app = TestApp::new();

    let resp = app
        .track(
            json!({ "contentId": "blog-1", "contentType": "blog", "platform": "email" }),
            None,
        )
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);

    let stats = app.stats("blog-1", "blog").await;
    assert_eq!(stats.body["data"]["totalShares"], 0);
}

#[tokio::test]
async fn test_malformed_json_rejected() {
    let app = TestApp::new();

    let resp = app
        .raw_request(
            "POST",
            TRACK_SHARE,
            "{\"contentId\": ".to_string(),
            &[("content-type", "application/json".to_string())],
        )
        .await;
    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert_eq!(resp.error(), "Invalid JSON");
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let app = TestApp::new();

    let huge = format!(
        "{{\"contentId\":\"blog-1\",\"contentType\":\"blog\",\"platform\":\"copy\",\"url\":\"{}\"}}",
        "a".repeat(64 * 1024)
    );
    let resp = app
        .raw_request(
            "POST",
            TRACK_SHARE,
            huge,
            &[("content-type", "application/json".to_string())],
        )
        .await;
    assert_eq!(resp.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(resp.body["success"], false);
    assert_eq!(resp.error(), "Request body too large");

    // Nothing was recorded or counted against the caller.
    let stats = app.stats("blog-1", "blog").await;
    assert_eq!(stats.body["data"]["totalShares"], 0);
}

#[tokio::test]
async fn test_rate_limit_per_client() {
    let app = TestApp::new();
    let client = Some("192.168.1.100");

    for i in 0..20 {
        let resp = app.track(share("blog-1", "blog", "facebook"), client).await;
        assert_eq!(resp.status, StatusCode::OK, "Request {} should succeed", i + 1);
        assert_eq!(resp.header("x-ratelimit-remaining"), (19 - i).to_string());
    }

    let resp = app.track(share("blog-1", "blog", "facebook"), client).await;
    assert_eq!(resp.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(resp.body["success"], false);
    assert!(resp.error().contains("Rate limit exceeded"));

    let retry_after: u64 = resp.header("retry-after").parse().unwrap();
    assert!((1..=60).contains(&retry_after), "retry-after {retry_after}");

    // Another client still has its full quota.
    let resp = app
        .track(share("blog-1", "blog", "facebook"), Some("10.1.1.1"))
        .await;
    assert_eq!(resp.status, StatusCode::OK);

    // Only the accepted requests were recorded.
    let stats = app.stats("blog-1", "blog").await;
    assert_eq!(stats.body["data"]["totalShares"], 21);
    assert_eq!(stats.body["data"]["sharesByPlatform"]["facebook"], 21);
}

#[tokio::test]
async fn test_forwarded_chain_uses_first_hop() {
    let app = TestApp::new();

    for _ in 0..20 {
        let resp = app
            .track(share("blog-2", "blog", "native"), Some("203.0.113.5, 10.0.0.1"))
            .await;
        assert_eq!(resp.status, StatusCode::OK);
    }

    // Same first hop behind a different proxy shares the bucket.
    let resp = app
        .track(share("blog-2", "blog", "native"), Some("203.0.113.5, 10.0.0.2"))
        .await;
    assert_eq!(resp.status, StatusCode::TOO_MANY_REQUESTS);
}

#[tokio::test]
async fn test_configured_limit_applies() {
    let mut config = sharetrack_core::config::AppConfig::default();
    config.tracking.rate_limit.max_requests = 2;
    let app = TestApp::with_config(config);

    assert_eq!(app.track(share("blog-3", "blog", "copy"), None).await.status, StatusCode::OK);
    assert_eq!(app.track(share("blog-3", "blog", "copy"), None).await.status, StatusCode::OK);

    // Callers without forwarding headers share the "unknown" bucket.
    let resp = app.track(share("blog-3", "blog", "copy"), None).await;
    assert_eq!(resp.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(resp.error(), "Rate limit exceeded. Please try again later.");
}
