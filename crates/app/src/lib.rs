//! SCricPlay application composition root
//!
//! Composes the domain routers into a single application over shared
//! in-memory state.

use std::sync::Arc;

use axum::Router;
use scricplay_auth::{AuthConfig, MemoryStorage, RbacPolicy, SessionStore};
use scricplay_club::{AppStore, AuthService, ClubRepositories, ClubState};
use scricplay_common::Config;

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config) -> Router {
    // Session storage capability shared by the auth service and store
    let sessions = SessionStore::new(Arc::new(MemoryStorage::new()));

    // Seeded in-memory repositories and app store
    let repos = ClubRepositories::in_memory();
    let store = AppStore::new(sessions.clone());

    let auth_config = AuthConfig {
        token_ttl_days: config.token_ttl_days,
    };

    let auth = AuthService::new(
        repos.users.clone(),
        sessions,
        store.clone(),
        auth_config,
    );

    let club_state = ClubState {
        repos,
        auth,
        store,
        policy: RbacPolicy::new(),
    };

    // Build router — compose domain routers with shared infrastructure routes
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "SCricPlay API v0.1.0" }),
        )
        .merge(scricplay_club::routes().with_state(club_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
