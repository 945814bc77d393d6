//! Health endpoint.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let resp = app
        .raw_request("GET", "/api/health", String::new(), &[])
        .await;
    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body["success"], true);
    assert_eq!(resp.body["data"]["status"], "ok");
    assert!(resp.body["data"]["version"].is_string());
}
