//! Integration tests for token issuance and the refresh flow.

mod helpers;

use http::StatusCode;
use serde_json::json;

use crewhub_core::types::UserId;
use crewhub_entity::user::UserStatus;
use helpers::TestApp;

#[tokio::test]
async fn test_refresh_mints_a_fresh_pair() {
    let app = TestApp::new();
    let subject = UserId::new("64a51d2f8c1b2a0012345678");
    let refresh = app.issuer.issue_refresh(&subject).unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(json!({ "refresh_token": refresh.token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);

    let data = &response.body["data"];
    assert!(data["access_token"].is_string());
    assert!(data["refresh_token"].is_string());

    let access_expires = data["access_expires_at"].as_str().unwrap();
    let refresh_expires = data["refresh_expires_at"].as_str().unwrap();
    assert!(refresh_expires > access_expires);
}

#[tokio::test]
async fn test_refresh_with_garbage_is_rejected() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(json!({ "refresh_token": "not-a-token" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["message"], "Invalid or expired token.");
}

#[tokio::test]
async fn test_refreshed_access_token_passes_the_gate() {
    let app = TestApp::new();
    app.seed_identity("64a51d2f8c1b2a0012345678", UserStatus::Active);

    let refresh = app
        .issuer
        .issue_refresh(&UserId::new("64a51d2f8c1b2a0012345678"))
        .unwrap();

    let response = app
        .request(
            "POST",
            "/api/auth/refresh",
            Some(json!({ "refresh_token": refresh.token })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let access = response.body["data"]["access_token"].as_str().unwrap();

    let me = app
        .request(
            "GET",
            "/api/auth/me",
            None,
            Some(&format!("Bearer {access}")),
        )
        .await;

    assert_eq!(me.status, StatusCode::OK);
    assert_eq!(me.body["data"]["id"], "64a51d2f8c1b2a0012345678");
}
