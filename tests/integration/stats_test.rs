//! Reading aggregated share statistics over HTTP.

use http::StatusCode;

use crate::helpers::{TRACK_SHARE, TestApp, share};

const PLATFORMS: [&str; 7] = [
    "linkedin", "twitter", "facebook", "whatsapp", "email", "copy", "native",
];

#[tokio::test]
async fn test_unknown_content_reports_all_platforms_zero() {
    let app = TestApp::new();

    let resp = app.stats("never-shared", "podcast").await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["success"], true);

    let data = &resp.body["data"];
    assert_eq!(data["contentId"], "never-shared");
    assert_eq!(data["contentType"], "podcast");
    assert_eq!(data["totalShares"], 0);

    let by_platform = data["sharesByPlatform"].as_object().unwrap();
    assert_eq!(by_platform.len(), PLATFORMS.len());
    for platform in PLATFORMS {
        assert_eq!(by_platform[platform], 0, "{platform} should be zero");
    }
}

#[tokio::test]
async fn test_counts_split_by_platform_and_key() {
    let app = TestApp::new();

    for platform in ["twitter", "twitter", "email", "copy"] {
        let resp = app.track(share("ep-1", "podcast", platform), None).await;
        assert_eq!(resp.status, StatusCode::OK);
    }
    // Same id, different content type.
    app.track(share("ep-1", "blog", "twitter"), None).await;

    let data = app.stats("ep-1", "podcast").await.body["data"].clone();
    assert_eq!(data["totalShares"], 4);
    assert_eq!(data["sharesByPlatform"]["twitter"], 2);
    assert_eq!(data["sharesByPlatform"]["email"], 1);
    assert_eq!(data["sharesByPlatform"]["copy"], 1);
    assert_eq!(data["sharesByPlatform"]["native"], 0);

    let sum: u64 = PLATFORMS
        .iter()
        .map(|p| data["sharesByPlatform"][*p].as_u64().unwrap())
        .sum();
    assert_eq!(sum, 4);

    let blog = app.stats("ep-1", "blog").await;
    assert_eq!(blog.body["data"]["totalShares"], 1);
}

#[tokio::test]
async fn test_stats_are_idempotent() {
    let app = TestApp::new();
    app.track(share("blog-1", "blog", "linkedin"), None).await;

    let first = app.stats("blog-1", "blog").await;
    let second = app.stats("blog-1", "blog").await;
    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(first.body, second.body);
}

#[tokio::test]
async fn test_stats_not_rate_limited() {
    let app = TestApp::new();

    for _ in 0..30 {
        let resp = app
            .raw_request(
                "GET",
                &format!("{TRACK_SHARE}?contentId=blog-1&contentType=blog"),
                String::new(),
                &[("x-forwarded-for", "192.168.1.100".to_string())],
            )
            .await;
        assert_eq!(resp.status, StatusCode::OK);
    }
}

#[tokio::test]
async fn test_stats_query_validation() {
    let app = TestApp::new();

    for query in [
        "",
        "?contentType=blog",
        "?contentId=blog-1",
        "?contentId=&contentType=blog",
        "?contentId=blog-1&contentType=video",
    ] {
        let resp = app
            .raw_request("GET", &format!("{TRACK_SHARE}{query}"), String::new(), &[])
            .await;
        assert_eq!(resp.status, StatusCode::BAD_REQUEST, "query {query:?}");
        assert_eq!(resp.body["success"], false);
        assert_eq!(resp.error(), "Missing or invalid contentId or contentType");
    }
}
