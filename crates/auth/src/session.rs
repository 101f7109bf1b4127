//! Typed session persistence over the storage capability
//!
//! Persists the current access+refresh token pair and the cached user
//! snapshot under fixed keys; clearing removes all of them atomically.

use std::sync::Arc;

use crate::storage::SessionStorage;
use crate::types::AuthIdentity;

/// Storage key for the access token
pub const TOKEN_KEY: &str = "auth_token";
/// Storage key for the refresh token
pub const REFRESH_TOKEN_KEY: &str = "auth_refresh_token";
/// Storage key for the cached user snapshot
pub const USER_KEY: &str = "auth_user";

/// Session persistence facade
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Persist the current token pair, replacing any previous pair
    pub fn store_tokens(&self, token: &str, refresh_token: &str) {
        self.storage.set(TOKEN_KEY, token);
        self.storage.set(REFRESH_TOKEN_KEY, refresh_token);
    }

    /// Currently stored access token
    pub fn access_token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// Currently stored refresh token
    pub fn refresh_token(&self) -> Option<String> {
        self.storage.get(REFRESH_TOKEN_KEY)
    }

    /// Persist the user snapshot for session rehydration
    pub fn store_user(&self, user: &AuthIdentity) {
        match serde_json::to_string(user) {
            Ok(json) => self.storage.set(USER_KEY, &json),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to serialize cached user snapshot");
            }
        }
    }

    /// Cached user snapshot, if present and parseable
    pub fn cached_user(&self) -> Option<AuthIdentity> {
        let json = self.storage.get(USER_KEY)?;
        serde_json::from_str(&json)
            .map_err(|e| {
                tracing::debug!(error = %e, "Cached user snapshot is not parseable");
            })
            .ok()
    }

    /// True if an access token is stored and not expired
    pub fn has_valid_token(&self) -> bool {
        match self.access_token() {
            Some(token) => !crate::token::is_expired(&token),
            None => false,
        }
    }

    /// Remove the token pair and cached user
    pub fn clear(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::types::Role;
    use chrono::Utc;
    use uuid::Uuid;

    fn store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryStorage::new()))
    }

    fn identity() -> AuthIdentity {
        AuthIdentity {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            name: "Test User".to_string(),
            role: Role::Player,
            phone: None,
            avatar: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_token_pair_roundtrip() {
        let sessions = store();
        assert!(sessions.access_token().is_none());
        assert!(sessions.refresh_token().is_none());

        sessions.store_tokens("tok", "refresh");
        assert_eq!(sessions.access_token().as_deref(), Some("tok"));
        assert_eq!(sessions.refresh_token().as_deref(), Some("refresh"));
    }

    #[test]
    fn test_user_snapshot_roundtrip() {
        let sessions = store();
        let user = identity();

        sessions.store_user(&user);
        assert_eq!(sessions.cached_user(), Some(user));
    }

    #[test]
    fn test_clear_removes_everything() {
        let sessions = store();
        sessions.store_tokens("tok", "refresh");
        sessions.store_user(&identity());

        sessions.clear();
        assert!(sessions.access_token().is_none());
        assert!(sessions.refresh_token().is_none());
        assert!(sessions.cached_user().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let sessions = store();
        sessions.clear();
        sessions.clear();
        assert!(sessions.access_token().is_none());
    }

    #[test]
    fn test_has_valid_token() {
        let sessions = store();
        assert!(!sessions.has_valid_token());

        // Garbage counts as expired
        sessions.store_tokens("garbage", "garbage");
        assert!(!sessions.has_valid_token());

        let token = crate::token::issue(
            Uuid::new_v4(),
            "test@example.com",
            Role::Player,
            chrono::Duration::days(7),
        )
        .unwrap();
        sessions.store_tokens(&token, &token);
        assert!(sessions.has_valid_token());
    }

    #[test]
    fn test_corrupt_cached_user_returns_none() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(USER_KEY, "{not json");
        let sessions = SessionStore::new(storage);
        assert!(sessions.cached_user().is_none());
    }
}
