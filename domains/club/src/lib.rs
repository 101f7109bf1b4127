//! Club domain: users, teams, matches, sessions

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::auth::{AuthService, LoginCredentials};
pub use domain::entities::*;
pub use domain::guard::{GuardDecision, RouteGuard};
pub use domain::state::{
    GuardContext, GuardEvent, GuardState, GuardStateMachine, MatchEvent, MatchState,
    MatchStateMachine, StateError,
};
pub use domain::store::AppStore;
// Re-export repository types
pub use repository::{ClubRepositories, InMemoryUserRepository, ProfileUpdate, UserStore};

// Re-export API types
pub use api::routes;
pub use api::ClubState;

// Re-export auth types from scricplay-auth for backward compatibility
pub use scricplay_auth::{
    AuthConfig, AuthError, AuthIdentity, AuthUser, RbacPolicy, Role, Session, SessionStore,
};
