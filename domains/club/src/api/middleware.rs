//! Club domain state shared across handlers

use crate::domain::auth::AuthService;
use crate::domain::store::AppStore;
use crate::repository::ClubRepositories;
use scricplay_auth::RbacPolicy;

/// Application state for the club domain
#[derive(Clone)]
pub struct ClubState {
    pub repos: ClubRepositories,
    pub auth: AuthService,
    pub store: AppStore,
    pub policy: RbacPolicy,
}
