//! User profile integration tests

use axum::http::{Method, StatusCode};
use serde_json::json;
use uuid::Uuid;

use crate::common::TestApp;

use scricplay_auth::{issue, Role};

#[tokio::test]
async fn test_profile_requires_authorization() {
    let app = TestApp::new();

    let (status, body) = app
        .request(Method::GET, "/api/user/profile", None, None)
        .await
        .unwrap();

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "MISSING_AUTHORIZATION");
}

#[tokio::test]
async fn test_profile_rejects_garbage_token() {
    let app = TestApp::new();

    let (status, body) = app
        .request(Method::GET, "/api/user/profile", None, Some("not.a.token"))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_profile_roundtrip_after_login() {
    let app = TestApp::new();
    let session = app.login_fixture_user().await.unwrap();
    let token = session["token"].as_str().unwrap().to_string();

    let (status, body) = app
        .request(Method::GET, "/api/user/profile", None, Some(&token))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["email"], "user@example.com");
    assert_eq!(body["user"]["name"], "SCricPlayUser");
    assert_eq!(body["user"]["role"], "player");
    assert_eq!(body["user"]["phone"], "+91 98765 43210");
}

#[tokio::test]
async fn test_profile_unknown_user_is_not_found() {
    let app = TestApp::new();

    // A well-formed token whose subject is absent from the repository
    let token = issue(
        Uuid::new_v4(),
        "ghost@example.com",
        Role::Player,
        chrono::Duration::days(7),
    )
    .unwrap();

    let (status, body) = app
        .request(Method::GET, "/api/user/profile", None, Some(&token))
        .await
        .unwrap();

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_profile() {
    let app = TestApp::new();
    let session = app.login_fixture_user().await.unwrap();
    let token = session["token"].as_str().unwrap().to_string();

    let (status, body) = app
        .request(
            Method::PUT,
            "/api/user/profile",
            Some(json!({
                "name": "Opening Batter",
                "phone": "+91 90000 00000"
            })),
            Some(&token),
        )
        .await
        .unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "Opening Batter");
    assert_eq!(body["user"]["phone"], "+91 90000 00000");
    // The role never moves through profile updates
    assert_eq!(body["user"]["role"], "player");

    // The change persists
    let (status, body) = app
        .request(Method::GET, "/api/user/profile", None, Some(&token))
        .await
        .unwrap();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "Opening Batter");
}

#[tokio::test]
async fn test_update_profile_validates_avatar_url() {
    let app = TestApp::new();
    let session = app.login_fixture_user().await.unwrap();
    let token = session["token"].as_str().unwrap().to_string();

    let (status, body) = app
        .request(
            Method::PUT,
            "/api/user/profile",
            Some(json!({ "avatar": "not-a-url" })),
            Some(&token),
        )
        .await
        .unwrap();

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
