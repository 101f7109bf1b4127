//! Authentication service for the club domain
//!
//! Owns the login/refresh/logout lifecycle over the injected user
//! repository, the session store, and the app store.

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;

use crate::domain::entities::User;
use crate::domain::store::AppStore;
use crate::repository::UserStore;
use scricplay_auth::{
    decode, is_expired, issue, AuthConfig, AuthError, AuthIdentity, Role, Session, SessionStore,
};

/// Email/password login credentials
#[derive(Debug, Clone, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    sessions: SessionStore,
    store: AppStore,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        sessions: SessionStore,
        store: AppStore,
        config: AuthConfig,
    ) -> Self {
        Self {
            users,
            sessions,
            store,
            config,
        }
    }

    /// Email/password login.
    ///
    /// No real password verification exists — unknown emails fail with
    /// `InvalidCredentials` and passwords under 6 characters with
    /// `WeakPassword`; anything else is accepted.
    pub async fn login_with_email(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Session, AuthError> {
        let user = self
            .users
            .find_by_email(&credentials.email)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to look up user by email");
                AuthError::AuthenticationFailed
            })?
            .ok_or(AuthError::InvalidCredentials)?;

        if credentials.password.len() < 6 {
            return Err(AuthError::WeakPassword);
        }

        self.establish_session(user)
    }

    /// Google OAuth login. The token is not verified against any
    /// identity provider — this is a stub, not a security boundary.
    pub async fn login_with_google(&self, oauth_token: &str) -> Result<Session, AuthError> {
        self.oauth_login("google", "Google User", oauth_token).await
    }

    /// Apple OAuth login. Same stub semantics as Google.
    pub async fn login_with_apple(&self, oauth_token: &str) -> Result<Session, AuthError> {
        self.oauth_login("apple", "Apple User", oauth_token).await
    }

    async fn oauth_login(
        &self,
        provider: &str,
        display_name: &str,
        _oauth_token: &str,
    ) -> Result<Session, AuthError> {
        let email = format!("{}.user@example.com", provider);

        let existing = self.users.find_by_email(&email).await.map_err(|e| {
            tracing::error!(error = %e, provider, "Failed to look up OAuth user");
            AuthError::AuthenticationFailed
        })?;

        let user = match existing {
            Some(user) => user,
            None => {
                let user = User::new(email, display_name.to_string(), Role::Player)
                    .map_err(|e| {
                        tracing::error!(error = %e, provider, "Failed to build OAuth user");
                        AuthError::AuthenticationFailed
                    })?;
                self.users.create(user).await.map_err(|e| {
                    tracing::error!(error = %e, provider, "Failed to create OAuth user");
                    AuthError::AuthenticationFailed
                })?
            }
        };

        tracing::info!(provider, user_id = %user.id, "OAuth login");
        self.establish_session(user)
    }

    /// Refresh the session.
    ///
    /// The supplied refresh token carries no signature to validate; the
    /// check is that the *stored* access token exists and has not
    /// expired. A fresh pair supersedes the old one wholesale.
    pub async fn refresh(&self, _refresh_token: &str) -> Result<Session, AuthError> {
        let stored = self
            .sessions
            .access_token()
            .ok_or(AuthError::InvalidOrExpiredToken)?;

        if is_expired(&stored) {
            return Err(AuthError::InvalidOrExpiredToken);
        }

        let claims = decode(&stored).ok_or(AuthError::InvalidOrExpiredToken)?;

        let user = self
            .users
            .find_by_id(claims.sub)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to look up user for refresh");
                AuthError::AuthenticationFailed
            })?
            .ok_or(AuthError::InvalidOrExpiredToken)?;

        self.establish_session(user)
    }

    /// Clear the persisted tokens and cached profile. Idempotent.
    pub fn logout(&self) {
        self.store.clear_auth();
        tracing::info!("Session cleared");
    }

    /// Current user for the stored session, if any.
    ///
    /// Falls back to the cached snapshot when the repository no longer
    /// has the user.
    pub async fn current_user(&self) -> Option<AuthIdentity> {
        let token = self.sessions.access_token()?;
        if is_expired(&token) {
            return None;
        }
        let claims = decode(&token)?;

        match self.users.find_by_id(claims.sub).await {
            Ok(Some(user)) => Some(user.identity()),
            _ => self.sessions.cached_user(),
        }
    }

    /// True if an unexpired access token is stored
    pub fn is_authenticated(&self) -> bool {
        self.sessions.has_valid_token()
    }

    /// Check user role
    pub fn has_role(user: Option<&AuthIdentity>, role: Role) -> bool {
        user.map(|u| u.role == role).unwrap_or(false)
    }

    /// Check if user has any of the specified roles
    pub fn has_any_role(user: Option<&AuthIdentity>, roles: &[Role]) -> bool {
        user.map(|u| roles.contains(&u.role)).unwrap_or(false)
    }

    fn establish_session(&self, user: User) -> Result<Session, AuthError> {
        let ttl = self.config.token_ttl();
        let token = issue(user.id, &user.email, user.role, ttl)?;
        let refresh_token = issue(user.id, &user.email, user.role, ttl)?;

        let session = Session {
            token: token.clone(),
            refresh_token: refresh_token.clone(),
            user: user.identity(),
            expires_at: Utc::now() + ttl,
        };

        self.sessions.store_tokens(&token, &refresh_token);
        self.store.set_auth(&session);

        tracing::info!(user_id = %user.id, role = %user.role, "Session established");
        Ok(session)
    }
}
