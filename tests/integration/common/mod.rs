//! Common test utilities and fixtures for integration tests
//!
//! Builds the real application router over fresh in-memory state and
//! drives it request-by-request.

use anyhow::Result;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use scricplay_common::Config;

/// Test application wrapping the composed router.
///
/// State (repositories, session storage, app store) lives behind the
/// router and is shared across requests to the same `TestApp`.
pub struct TestApp {
    app: Router,
}

impl TestApp {
    /// Create a new test application with fresh in-memory state
    pub fn new() -> Self {
        let config = Config {
            log_level: "info".to_string(),
            rust_log: "scricplay=debug".to_string(),
            port: 0,
            token_ttl_days: 7,
        };
        Self {
            app: scricplay_app::create_app(&config),
        }
    }

    /// Send a request and return (status, parsed JSON body)
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
        bearer: Option<&str>,
    ) -> Result<(StatusCode, Value)> {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = bearer {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&json)?))?,
            None => builder.body(Body::empty())?,
        };

        let response = self.app.clone().oneshot(request).await?;
        let status = response.status();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        Ok((status, value))
    }

    /// POST helper
    pub async fn post(&self, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
        self.request(Method::POST, uri, Some(body), None).await
    }

    /// Log in as the fixture user and return the session JSON
    pub async fn login_fixture_user(&self) -> Result<Value> {
        let (status, body) = self
            .post(
                "/api/auth/login",
                serde_json::json!({
                    "method": "email",
                    "credentials": {
                        "email": "user@example.com",
                        "password": "secret1"
                    }
                }),
            )
            .await?;

        assert_eq!(status, StatusCode::OK, "fixture login failed: {}", body);
        Ok(body["session"].clone())
    }
}
