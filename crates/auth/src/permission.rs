//! Permissions: (resource, action) pairs with wildcard matching

use serde::{Deserialize, Serialize};

/// Wildcard matching any resource or action
pub const WILDCARD: &str = "*";

/// A (resource, action) pair. Either side may be the wildcard `*`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    pub resource: String,
    pub action: String,
}

impl Permission {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    /// True if this permission grants the given resource/action.
    ///
    /// Unknown resource or action strings never match anything except
    /// the wildcard.
    pub fn grants(&self, resource: &str, action: &str) -> bool {
        (self.resource == resource || self.resource == WILDCARD)
            && (self.action == action || self.action == WILDCARD)
    }

    /// True if this is the full `(*, *)` wildcard permission
    pub fn is_full_wildcard(&self) -> bool {
        self.resource == WILDCARD && self.action == WILDCARD
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.resource, self.action)
    }
}

/// A set of permissions assigned to a role
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PermissionSet {
    permissions: Vec<Permission>,
}

impl PermissionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from static (resource, action) pairs
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            permissions: pairs
                .iter()
                .map(|(resource, action)| Permission::new(*resource, *action))
                .collect(),
        }
    }

    /// True if any permission in the set grants the resource/action
    pub fn allows(&self, resource: &str, action: &str) -> bool {
        self.permissions.iter().any(|p| p.grants(resource, action))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Permission> {
        self.permissions.iter()
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}
