//! Authentication configuration

/// Authentication configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session token lifetime in days
    pub token_ttl_days: i64,
}

impl AuthConfig {
    /// Token lifetime as a chrono duration
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::days(self.token_ttl_days)
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self { token_ttl_days: 7 }
    }
}
