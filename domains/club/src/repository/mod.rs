//! Injected repositories for the club domain
//!
//! The in-memory implementation stands in for a persistent store; a
//! real system replaces it behind the same interface.

pub mod users;

pub use users::{InMemoryUserRepository, ProfileUpdate, UserStore};

use std::sync::Arc;

/// All repositories for the club domain
#[derive(Clone)]
pub struct ClubRepositories {
    pub users: Arc<dyn UserStore>,
}

impl ClubRepositories {
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// In-memory repositories seeded with the fixture data
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::seeded()),
        }
    }
}
