//! Authentication flow integration tests
//!
//! Exercises the login, refresh, and logout endpoints end to end
//! against the composed router.

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::TestApp;

mod login {
    use super::*;

    #[tokio::test]
    async fn test_email_login_success() {
        let app = TestApp::new();

        let (status, body) = app
            .post(
                "/api/auth/login",
                json!({
                    "method": "email",
                    "credentials": {
                        "email": "user@example.com",
                        "password": "secret1"
                    }
                }),
            )
            .await
            .unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["session"]["user"]["role"], "player");
        assert_eq!(body["session"]["user"]["email"], "user@example.com");
        assert!(body["session"]["token"].is_string());
        assert!(body["session"]["refreshToken"].is_string());
        assert!(body["session"]["expiresAt"].is_string());
    }

    #[tokio::test]
    async fn test_email_login_unknown_email() {
        let app = TestApp::new();

        let (status, body) = app
            .post(
                "/api/auth/login",
                json!({
                    "method": "email",
                    "credentials": {
                        "email": "unknown@x.com",
                        "password": "secret1"
                    }
                }),
            )
            .await
            .unwrap();

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
    }

    #[tokio::test]
    async fn test_email_login_short_password() {
        let app = TestApp::new();

        let (status, body) = app
            .post(
                "/api/auth/login",
                json!({
                    "method": "email",
                    "credentials": {
                        "email": "user@example.com",
                        "password": "short"
                    }
                }),
            )
            .await
            .unwrap();

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "WEAK_PASSWORD");
    }

    #[tokio::test]
    async fn test_email_login_missing_credentials() {
        let app = TestApp::new();

        let (status, body) = app
            .post("/api/auth/login", json!({ "method": "email" }))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "MISSING_CREDENTIALS");
    }

    #[tokio::test]
    async fn test_google_login_without_token() {
        let app = TestApp::new();

        let (status, body) = app
            .post("/api/auth/login", json!({ "method": "google" }))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "MISSING_OAUTH_TOKEN");
    }

    #[tokio::test]
    async fn test_google_login_fabricates_player() {
        let app = TestApp::new();

        let (status, body) = app
            .post(
                "/api/auth/login",
                json!({ "method": "google", "oauthToken": "opaque" }),
            )
            .await
            .unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["session"]["user"]["email"], "google.user@example.com");
        assert_eq!(body["session"]["user"]["role"], "player");
    }

    #[tokio::test]
    async fn test_unknown_method_rejected() {
        let app = TestApp::new();

        let (status, body) = app
            .post("/api/auth/login", json!({ "method": "carrier-pigeon" }))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_AUTH_METHOD");
    }
}

mod refresh {
    use super::*;

    #[tokio::test]
    async fn test_refresh_without_stored_session() {
        let app = TestApp::new();

        let (status, body) = app
            .post("/api/auth/refresh", json!({ "refreshToken": "anything" }))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_OR_EXPIRED_TOKEN");
    }

    #[tokio::test]
    async fn test_refresh_missing_field() {
        let app = TestApp::new();

        let (status, body) = app.post("/api/auth/refresh", json!({})).await.unwrap();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "MISSING_REFRESH_TOKEN");
    }

    #[tokio::test]
    async fn test_refresh_after_login_mints_fresh_pair() {
        let app = TestApp::new();
        let session = app.login_fixture_user().await.unwrap();

        let (status, body) = app
            .post(
                "/api/auth/refresh",
                json!({ "refreshToken": session["refreshToken"] }),
            )
            .await
            .unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["session"]["user"]["email"], "user@example.com");
        assert!(body["session"]["token"].is_string());
    }
}

mod logout {
    use super::*;

    #[tokio::test]
    async fn test_logout_clears_session() {
        let app = TestApp::new();
        app.login_fixture_user().await.unwrap();

        let (status, body) = app
            .request(Method::POST, "/api/auth/logout", None, None)
            .await
            .unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Logged out successfully");

        // Refresh now fails: the stored pair is gone
        let (status, body) = app
            .post("/api/auth/refresh", json!({ "refreshToken": "stale" }))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "INVALID_OR_EXPIRED_TOKEN");
    }

    #[tokio::test]
    async fn test_logout_is_idempotent() {
        let app = TestApp::new();

        for _ in 0..2 {
            let (status, body) = app
                .request(Method::POST, "/api/auth/logout", None, None)
                .await
                .unwrap();
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["success"], true);
        }
    }
}
