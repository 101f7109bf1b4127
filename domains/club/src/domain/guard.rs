//! Route guard
//!
//! Wraps protected navigation: rehydrates the session, then runs the
//! access checks in order — authenticated, route permitted, required
//! role held. The first failing check redirects and nothing further is
//! evaluated this cycle.

use crate::domain::state::{GuardContext, GuardEvent, GuardState, GuardStateMachine};
use crate::domain::store::AppStore;
use scricplay_auth::{RbacPolicy, Role};

/// Default redirect target for unauthenticated navigations
pub const DEFAULT_FALLBACK_PATH: &str = "/login";
/// Redirect target for authenticated but unauthorized navigations
pub const HOME_PATH: &str = "/";

/// Outcome of one guard evaluation cycle
#[derive(Debug, Clone, PartialEq)]
pub struct GuardDecision {
    pub state: GuardState,
    /// Navigation target when redirecting
    pub redirect: Option<String>,
}

impl GuardDecision {
    fn authorized() -> Self {
        Self {
            state: GuardState::Authorized,
            redirect: None,
        }
    }

    fn redirecting(to: &str) -> Self {
        Self {
            state: GuardState::Redirecting,
            redirect: Some(to.to_string()),
        }
    }

    /// True when the guarded content may render
    pub fn is_authorized(&self) -> bool {
        self.state == GuardState::Authorized
    }
}

/// Route guard over the RBAC policy and app store
#[derive(Clone)]
pub struct RouteGuard {
    policy: RbacPolicy,
    fallback_path: String,
}

impl RouteGuard {
    pub fn new(policy: RbacPolicy) -> Self {
        Self {
            policy,
            fallback_path: DEFAULT_FALLBACK_PATH.to_string(),
        }
    }

    /// Override the unauthenticated redirect target
    pub fn with_fallback(mut self, path: impl Into<String>) -> Self {
        self.fallback_path = path.into();
        self
    }

    /// Evaluate access to `path`, optionally constrained to roles.
    ///
    /// Runs `check_auth` first so the decision reflects the persisted
    /// session, not stale in-memory state.
    pub fn evaluate(
        &self,
        store: &AppStore,
        path: &str,
        required_roles: Option<&[Role]>,
    ) -> GuardDecision {
        store.check_auth();
        let user = store.current_user();

        let is_authenticated = store.is_authenticated() && user.is_some();
        let route_permitted = self.policy.can_access_route(user.as_ref(), path);
        let role_permitted = match required_roles {
            Some(roles) => RbacPolicy::require_role(user.as_ref(), roles),
            None => true,
        };

        let context = GuardContext {
            is_authenticated,
            route_permitted,
            role_permitted,
        };

        if context.passes() {
            // The machine enforces that authorization only follows a full pass
            match GuardStateMachine::transition(
                GuardState::Checking,
                GuardEvent::Authorize,
                Some(&context),
            ) {
                Ok(GuardState::Authorized) => GuardDecision::authorized(),
                _ => GuardDecision::redirecting(&self.fallback_path),
            }
        } else if !is_authenticated {
            tracing::debug!(path, "Guard redirect: no authenticated session");
            GuardDecision::redirecting(&self.fallback_path)
        } else {
            tracing::debug!(path, "Guard redirect: access denied");
            GuardDecision::redirecting(HOME_PATH)
        }
    }
}
