//! User profile API handlers
//!
//! Implements:
//! - GET /api/user/profile — Get current user profile
//! - PUT /api/user/profile — Update current user profile

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::ClubState;
use crate::domain::entities::User;
use crate::repository::ProfileUpdate;
use scricplay_auth::AuthUser;

/// Response for profile operations
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: User,
}

/// Request for updating the profile. The role is not updatable here —
/// role changes are an explicit admin action on the repository.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 30))]
    pub phone: Option<String>,

    #[validate(url)]
    pub avatar: Option<String>,
}

/// Error response for API operations
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Standard API error type
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    NotFound(String),
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, code, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            ApiError::Internal(e) => {
                tracing::error!(error = %e, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_SERVER_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message,
            },
        };

        (status, Json(error_response)).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::Internal(error)
    }
}

/// GET /api/user/profile
pub async fn get_profile(
    AuthUser(claims): AuthUser,
    State(state): State<ClubState>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let user = state
        .repos
        .users
        .find_by_id(claims.sub)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(ProfileResponse { user }))
}

/// PUT /api/user/profile
pub async fn update_profile(
    AuthUser(claims): AuthUser,
    State(state): State<ClubState>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(format!("Validation failed: {}", e)))?;

    let update = ProfileUpdate {
        name: request.name,
        phone: request.phone,
        avatar: request.avatar,
    };

    let user = state
        .repos
        .users
        .update_profile(claims.sub, update)
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(ProfileResponse { user }))
}
