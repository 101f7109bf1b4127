//! User repository

use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::entities::User;
use scricplay_auth::Role;
use scricplay_common::Result;

/// Partial profile update. The role is deliberately absent: role changes
/// go through `update_role` only.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub avatar: Option<String>,
}

/// User repository interface
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    /// Find user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Create a new user
    async fn create(&self, user: User) -> Result<User>;

    /// Update user profile (name, phone, avatar)
    async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> Result<Option<User>>;

    /// Update user role. Explicit admin action; the only path that
    /// mutates a role.
    async fn update_role(&self, id: Uuid, role: Role) -> Result<Option<User>>;

    /// Delete a user; returns whether a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// List all users
    async fn list(&self) -> Result<Vec<User>>;
}

/// In-memory user repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository seeded with the fixture user
    pub fn seeded() -> Self {
        let repo = Self::new();
        if let Ok(user) = User::new(
            "user@example.com".to_string(),
            "SCricPlayUser".to_string(),
            Role::Player,
        ) {
            repo.users
                .write()
                .unwrap()
                .push(user.with_phone("+91 98765 43210"));
        }
        repo
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User> {
        user.validate()?;
        self.users.write().unwrap().push(user.clone());
        Ok(user)
    }

    async fn update_profile(&self, id: Uuid, update: ProfileUpdate) -> Result<Option<User>> {
        let mut users = self.users.write().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        let mut updated = user.clone();
        if let Some(name) = update.name {
            updated.name = name;
        }
        if let Some(phone) = update.phone {
            updated.phone = Some(phone);
        }
        if let Some(avatar) = update.avatar {
            updated.avatar = Some(avatar);
        }
        updated.updated_at = Utc::now();

        // Stored state only moves on a valid update
        updated.validate()?;
        *user = updated.clone();
        Ok(Some(updated))
    }

    async fn update_role(&self, id: Uuid, role: Role) -> Result<Option<User>> {
        let mut users = self.users.write().unwrap();
        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        user.role = role;
        user.updated_at = Utc::now();
        tracing::info!(user_id = %id, role = %role, "User role updated");

        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut users = self.users.write().unwrap();
        let before = users.len();
        users.retain(|u| u.id != id);
        Ok(users.len() < before)
    }

    async fn list(&self) -> Result<Vec<User>> {
        Ok(self.users.read().unwrap().clone())
    }
}
