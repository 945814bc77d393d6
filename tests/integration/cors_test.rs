//! CORS preflight handling.

use http::StatusCode;

use crate::helpers::{TRACK_SHARE, TestApp};

#[tokio::test]
async fn test_preflight_allows_any_origin() {
    let app = TestApp::new();

    let resp = app
        .raw_request(
            "OPTIONS",
            TRACK_SHARE,
            String::new(),
            &[
                ("origin", "https://blog.example.org".to_string()),
                ("access-control-request-method", "POST".to_string()),
                ("access-control-request-headers", "content-type".to_string()),
            ],
        )
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header("access-control-allow-origin"), "*");

    let methods = resp.header("access-control-allow-methods");
    for method in ["GET", "POST", "OPTIONS"] {
        assert!(methods.contains(method), "{method} missing from {methods}");
    }

    let headers = resp.header("access-control-allow-headers").to_lowercase();
    assert!(headers.contains("content-type"));
}

#[tokio::test]
async fn test_preflight_does_not_consume_quota() {
    let app = TestApp::new();

    for _ in 0..25 {
        let resp = app
            .raw_request(
                "OPTIONS",
                TRACK_SHARE,
                String::new(),
                &[
                    ("origin", "https://blog.example.org".to_string()),
                    ("access-control-request-method", "POST".to_string()),
                    ("x-forwarded-for", "192.168.1.100".to_string()),
                ],
            )
            .await;
        assert_eq!(resp.status, StatusCode::OK);
    }

    let resp = app
        .track(crate::helpers::share("blog-1", "blog", "copy"), Some("192.168.1.100"))
        .await;
    assert_eq!(resp.status, StatusCode::OK);
}

#[tokio::test]
async fn test_simple_request_gets_allow_origin() {
    let app = TestApp::new();

    let resp = app
        .raw_request(
            "GET",
            &format!("{TRACK_SHARE}?contentId=blog-1&contentType=blog"),
            String::new(),
            &[("origin", "https://blog.example.org".to_string())],
        )
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.header("access-control-allow-origin"), "*");
}
