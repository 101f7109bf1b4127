//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    MissingAuthorization,
    InvalidAuthorizationFormat,
    InvalidToken,
    InvalidCredentials,
    WeakPassword,
    MissingCredentials,
    MissingOAuthToken,
    MissingRefreshToken,
    InvalidAuthMethod,
    InvalidOrExpiredToken,
    UserNotFound,
    AuthenticationFailed,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AuthError::MissingAuthorization => (
                StatusCode::UNAUTHORIZED,
                "MISSING_AUTHORIZATION",
                "Authorization header required",
            ),
            AuthError::InvalidAuthorizationFormat => (
                StatusCode::UNAUTHORIZED,
                "INVALID_AUTHORIZATION",
                "Invalid authorization header format",
            ),
            AuthError::InvalidToken => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "Invalid or expired token",
            ),
            AuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid email or password",
            ),
            AuthError::WeakPassword => (
                StatusCode::UNAUTHORIZED,
                "WEAK_PASSWORD",
                "Password must be at least 6 characters",
            ),
            AuthError::MissingCredentials => (
                StatusCode::BAD_REQUEST,
                "MISSING_CREDENTIALS",
                "Email and password are required",
            ),
            AuthError::MissingOAuthToken => (
                StatusCode::BAD_REQUEST,
                "MISSING_OAUTH_TOKEN",
                "OAuth token is required",
            ),
            AuthError::MissingRefreshToken => (
                StatusCode::BAD_REQUEST,
                "MISSING_REFRESH_TOKEN",
                "Refresh token is required",
            ),
            AuthError::InvalidAuthMethod => (
                StatusCode::BAD_REQUEST,
                "INVALID_AUTH_METHOD",
                "Invalid authentication method",
            ),
            AuthError::InvalidOrExpiredToken => (
                StatusCode::UNAUTHORIZED,
                "INVALID_OR_EXPIRED_TOKEN",
                "Invalid or expired token",
            ),
            AuthError::UserNotFound => {
                (StatusCode::NOT_FOUND, "USER_NOT_FOUND", "User not found")
            }
            AuthError::AuthenticationFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "AUTH_ERROR",
                "Authentication failed",
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
