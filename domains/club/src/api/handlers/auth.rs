//! Authentication API handlers
//!
//! Implements:
//! - POST /api/auth/login — email or OAuth login
//! - POST /api/auth/refresh — mint a fresh token pair
//! - POST /api/auth/logout — clear the persisted session

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::api::middleware::ClubState;
use crate::domain::auth::LoginCredentials;
use scricplay_auth::{AuthError, Session};

/// Request body for `POST /api/auth/login`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub method: String,
    pub credentials: Option<LoginCredentials>,
    pub oauth_token: Option<String>,
}

/// Request body for `POST /api/auth/refresh`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: Option<String>,
}

/// Response shape for successful login/refresh
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub session: Session,
}

/// Response shape for logout
#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub success: bool,
    pub message: &'static str,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<ClubState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AuthError> {
    let session = match request.method.as_str() {
        "email" => {
            let credentials = request
                .credentials
                .filter(|c| !c.email.is_empty() && !c.password.is_empty())
                .ok_or(AuthError::MissingCredentials)?;
            state.auth.login_with_email(&credentials).await?
        }
        "google" => {
            let oauth_token = request
                .oauth_token
                .filter(|t| !t.is_empty())
                .ok_or(AuthError::MissingOAuthToken)?;
            state.auth.login_with_google(&oauth_token).await?
        }
        "apple" => {
            let oauth_token = request
                .oauth_token
                .filter(|t| !t.is_empty())
                .ok_or(AuthError::MissingOAuthToken)?;
            state.auth.login_with_apple(&oauth_token).await?
        }
        _ => return Err(AuthError::InvalidAuthMethod),
    };

    Ok(Json(SessionResponse {
        success: true,
        session,
    }))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<ClubState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<SessionResponse>, AuthError> {
    let refresh_token = request
        .refresh_token
        .filter(|t| !t.is_empty())
        .ok_or(AuthError::MissingRefreshToken)?;

    let session = state.auth.refresh(&refresh_token).await?;

    Ok(Json(SessionResponse {
        success: true,
        session,
    }))
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<ClubState>) -> Json<LogoutResponse> {
    state.auth.logout();
    Json(LogoutResponse {
        success: true,
        message: "Logged out successfully",
    })
}
