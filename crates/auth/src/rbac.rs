//! Role-Based Access Control policy
//!
//! A fixed role-to-permission table and route-to-resource mapping,
//! defined at process start and never mutated at runtime. Admin
//! implicitly satisfies every check regardless of the table.

use std::collections::HashMap;
use std::sync::Arc;

use crate::permission::{PermissionSet, WILDCARD};
use crate::types::{AuthIdentity, Role};

/// What to do with a navigation to a path absent from the route table.
///
/// The observed product behavior is fail-open; `Deny` is available for
/// deployments that confirm default-deny instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnmappedRoutePolicy {
    #[default]
    Allow,
    Deny,
}

/// Routes a role may navigate to. Admin is the `All` wildcard sentinel.
#[derive(Debug, Clone, PartialEq)]
pub enum AllowedRoutes {
    All,
    Paths(&'static [&'static str]),
}

impl AllowedRoutes {
    pub fn permits(&self, path: &str) -> bool {
        match self {
            AllowedRoutes::All => true,
            AllowedRoutes::Paths(paths) => paths.contains(&path),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, AllowedRoutes::All)
    }
}

/// RBAC policy: role permissions plus the route table.
///
/// Created once at startup and shared across all requests.
#[derive(Debug, Clone)]
pub struct RbacPolicy {
    role_permissions: Arc<HashMap<Role, PermissionSet>>,
    route_map: Arc<HashMap<&'static str, (&'static str, &'static str)>>,
    unmapped_routes: UnmappedRoutePolicy,
}

impl RbacPolicy {
    /// Build the policy with the fixed per-role permission table
    pub fn new() -> Self {
        let mut role_permissions = HashMap::new();

        role_permissions.insert(
            Role::Player,
            PermissionSet::from_pairs(&[
                ("profile", "read"),
                ("profile", "update"),
                ("matches", "read"),
                ("matches", "view"),
                ("stats", "read"),
                ("teams", "read"),
                ("teams", "join"),
            ]),
        );

        role_permissions.insert(
            Role::Coach,
            PermissionSet::from_pairs(&[
                ("profile", "read"),
                ("profile", "update"),
                ("matches", "read"),
                ("matches", "view"),
                ("matches", "create"),
                ("stats", "read"),
                ("stats", "update"),
                ("teams", "read"),
                ("teams", "manage"),
                ("players", "read"),
                ("players", "manage"),
            ]),
        );

        // Full access; kept in the table so introspection sees it, but
        // admin short-circuits every check anyway
        role_permissions.insert(
            Role::Admin,
            PermissionSet::from_pairs(&[(WILDCARD, WILDCARD)]),
        );

        role_permissions.insert(
            Role::Academy,
            PermissionSet::from_pairs(&[
                ("profile", "read"),
                ("profile", "update"),
                ("academy", "read"),
                ("academy", "manage"),
                ("training", "read"),
                ("training", "create"),
                ("training", "update"),
                ("players", "read"),
                ("attendance", "read"),
                ("attendance", "update"),
            ]),
        );

        role_permissions.insert(
            Role::Tournament,
            PermissionSet::from_pairs(&[
                ("profile", "read"),
                ("profile", "update"),
                ("tournament", "read"),
                ("tournament", "manage"),
                ("matches", "read"),
                ("matches", "create"),
                ("matches", "update"),
                ("fixtures", "read"),
                ("fixtures", "create"),
                ("fixtures", "update"),
                ("players", "read"),
            ]),
        );

        let route_map: HashMap<&'static str, (&'static str, &'static str)> = HashMap::from([
            ("/profile", ("profile", "read")),
            ("/matches", ("matches", "read")),
            ("/teams", ("teams", "read")),
            ("/players", ("players", "read")),
            ("/admin", (WILDCARD, WILDCARD)),
            ("/coach", ("teams", "manage")),
            ("/academy", ("academy", "read")),
            ("/tournament", ("tournament", "read")),
        ]);

        Self {
            role_permissions: Arc::new(role_permissions),
            route_map: Arc::new(route_map),
            unmapped_routes: UnmappedRoutePolicy::default(),
        }
    }

    /// Override the unmapped-route policy
    pub fn with_unmapped_routes(mut self, policy: UnmappedRoutePolicy) -> Self {
        self.unmapped_routes = policy;
        self
    }

    /// Permission set for a role
    pub fn permissions(&self, role: Role) -> Option<&PermissionSet> {
        self.role_permissions.get(&role)
    }

    /// Check if a user has permission for a resource and action.
    ///
    /// No user means no permission; admin always passes.
    pub fn has_permission(
        &self,
        user: Option<&AuthIdentity>,
        resource: &str,
        action: &str,
    ) -> bool {
        let Some(user) = user else { return false };

        if user.role.is_admin() {
            return true;
        }

        self.role_permissions
            .get(&user.role)
            .map(|set| set.allows(resource, action))
            .unwrap_or(false)
    }

    /// Check if a user can access a route.
    ///
    /// No user → denied; admin → allowed; unmapped path → governed by the
    /// unmapped-route policy; mapped path → delegates to `has_permission`.
    pub fn can_access_route(&self, user: Option<&AuthIdentity>, path: &str) -> bool {
        let Some(user) = user else { return false };

        if user.role.is_admin() {
            return true;
        }

        match self.route_map.get(path) {
            Some((resource, action)) => self.has_permission(Some(user), resource, action),
            None => self.unmapped_routes == UnmappedRoutePolicy::Allow,
        }
    }

    /// Static per-role route allowlist
    pub fn allowed_routes(&self, role: Role) -> AllowedRoutes {
        match role {
            Role::Player => AllowedRoutes::Paths(&[
                "/profile", "/matches", "/teams", "/players", "/shop", "/grounds",
            ]),
            Role::Coach => AllowedRoutes::Paths(&[
                "/profile", "/matches", "/teams", "/players", "/coach", "/shop", "/grounds",
            ]),
            Role::Admin => AllowedRoutes::All,
            Role::Academy => AllowedRoutes::Paths(&[
                "/profile", "/academy", "/players", "/matches", "/shop", "/grounds",
            ]),
            Role::Tournament => AllowedRoutes::Paths(&[
                "/profile", "/tournament", "/matches", "/players", "/shop", "/grounds",
            ]),
        }
    }

    /// Check if the user holds one of the required roles
    pub fn require_role(user: Option<&AuthIdentity>, roles: &[Role]) -> bool {
        user.map(|u| roles.contains(&u.role)).unwrap_or(false)
    }
}

impl Default for RbacPolicy {
    fn default() -> Self {
        Self::new()
    }
}
