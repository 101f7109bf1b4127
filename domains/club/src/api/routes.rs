//! Route definitions for the club domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{auth, users};
use super::middleware::ClubState;

/// Create authentication routes
fn auth_routes() -> Router<ClubState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/refresh", post(auth::refresh))
        .route("/api/auth/logout", post(auth::logout))
}

/// Create user profile routes
fn user_routes() -> Router<ClubState> {
    Router::new().route(
        "/api/user/profile",
        get(users::get_profile).put(users::update_profile),
    )
}

/// Create all club domain API routes
pub fn routes() -> Router<ClubState> {
    Router::new().merge(auth_routes()).merge(user_routes())
}
