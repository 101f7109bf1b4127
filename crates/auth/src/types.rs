//! Auth read-model types
//!
//! Lightweight views of the user owned by the club domain. These types
//! carry only the fields needed for authentication and authorization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use scricplay_common::{Error, Result};

/// User role determining the permission set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Player,
    Coach,
    Admin,
    Academy,
    Tournament,
}

impl Role {
    /// Returns the role name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Player => "player",
            Role::Coach => "coach",
            Role::Admin => "admin",
            Role::Academy => "academy",
            Role::Tournament => "tournament",
        }
    }

    /// Parses a role from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "player" => Some(Role::Player),
            "coach" => Some(Role::Coach),
            "admin" => Some(Role::Admin),
            "academy" => Some(Role::Academy),
            "tournament" => Some(Role::Tournament),
            _ => None,
        }
    }

    /// Check if this role bypasses permission checks entirely
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lightweight identity for authenticated users.
///
/// This is the user snapshot embedded in a `Session` and consulted by
/// the RBAC policy. Handlers needing the full `User` entity should load
/// it from the club domain's repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthIdentity {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An authenticated session: token pair, embedded user snapshot, and
/// absolute expiry. Superseded wholesale on refresh — old tokens are
/// invalidated by replacement, not by a revocation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub token: String,
    pub refresh_token: String,
    pub user: AuthIdentity,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Validate invariants: the embedded user's role must match the role
    /// encoded in the access token's claims.
    pub fn validate(&self) -> Result<()> {
        let claims = crate::token::decode(&self.token)
            .ok_or_else(|| Error::Validation("Session token is not decodable".to_string()))?;

        if claims.role != self.user.role {
            return Err(Error::Validation(
                "Session user role does not match token claims".to_string(),
            ));
        }

        if claims.sub != self.user.id {
            return Err(Error::Validation(
                "Session user ID does not match token claims".to_string(),
            ));
        }

        Ok(())
    }

    /// Check if the session's access token has expired
    pub fn is_expired(&self) -> bool {
        crate::token::is_expired(&self.token)
    }
}
