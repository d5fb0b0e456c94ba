//! Integration tests for share-code mint, info, and public resolution.

mod common;

use axum::http::StatusCode;

#[tokio::test]
async fn test_mint_returns_six_digit_code() {
    let app = common::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/share-codes",
            Some(serde_json::json!({ "token": "tok-123" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let code = response.body["data"]["code"].as_str().unwrap();
    assert_eq!(code.len(), 6);
    assert!(code.chars().all(|c| c.is_ascii_digit()));
    assert!(response.body["data"]["expires_in_seconds"].as_i64().unwrap() > 0);
}

#[tokio::test]
async fn test_mint_then_resolve_roundtrip() {
    let app = common::TestApp::new();
    let code = app.mint("tok-roundtrip").await;

    let response = app.request("GET", &format!("/s/{code}"), None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["token"], "tok-roundtrip");
}

#[tokio::test]
async fn test_mint_rejects_empty_token() {
    let app = common::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/share-codes",
            Some(serde_json::json!({ "token": "" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_resolve_unknown_code_is_not_found() {
    let app = common::TestApp::new();

    let response = app.request("GET", "/s/000000", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_info_reports_remaining_ttl_without_token() {
    let app = common::TestApp::with_ttl(60);
    let code = app.mint("tok-secret").await;

    let response = app
        .request("GET", &format!("/api/share-codes/{code}"), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);

    let data = &response.body["data"];
    assert_eq!(data["code"], code);
    let remaining = data["remaining_seconds"].as_i64().unwrap();
    assert!(remaining > 0 && remaining <= 60);
    assert!(data.get("token").is_none(), "info must not reveal the token");
}

#[tokio::test]
async fn test_expired_code_is_not_found() {
    let app = common::TestApp::with_ttl(1);
    let code = app.mint("tok-expiring").await;

    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;

    let resolve = app.request("GET", &format!("/s/{code}"), None).await;
    assert_eq!(resolve.status, StatusCode::NOT_FOUND);

    let info = app
        .request("GET", &format!("/api/share-codes/{code}"), None)
        .await;
    assert_eq!(info.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_codes_resolve_to_their_own_tokens() {
    let app = common::TestApp::new();

    let code_a = app.mint("tok-a").await;
    let code_b = app.mint("tok-b").await;

    if code_a != code_b {
        let a = app.request("GET", &format!("/s/{code_a}"), None).await;
        let b = app.request("GET", &format!("/s/{code_b}"), None).await;
        assert_eq!(a.body["data"]["token"], "tok-a");
        assert_eq!(b.body["data"]["token"], "tok-b");
    }
}
