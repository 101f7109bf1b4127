//! Domain entities for the club domain
//!
//! Users, teams, matches, and the shop collections held by the app
//! store. Each entity includes validation and serialization; wire
//! fields are camelCase to match the public JSON surface.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use scricplay_auth::{AuthIdentity, Role};
use scricplay_common::{Error, Result};
use validator::ValidateEmail;

pub use crate::domain::state::MatchState;

/// Default team logo asset
pub const DEFAULT_TEAM_LOGO: &str = "/team-logo.png";

/// User entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
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

impl User {
    /// Create a new user with validation
    pub fn new(email: String, name: String, role: Role) -> Result<Self> {
        if !email.validate_email() {
            return Err(Error::Validation("Invalid email format".to_string()));
        }

        if name.is_empty() || name.len() > 100 {
            return Err(Error::Validation(
                "Name must be 1-100 characters".to_string(),
            ));
        }

        let now = Utc::now();
        Ok(User {
            id: Uuid::new_v4(),
            email,
            name,
            role,
            phone: None,
            avatar: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Attach a phone number
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Lightweight identity snapshot for sessions and RBAC
    pub fn identity(&self) -> AuthIdentity {
        AuthIdentity {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
            phone: self.phone.clone(),
            avatar: self.avatar.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Validate invariants
    pub fn validate(&self) -> Result<()> {
        if !self.email.validate_email() {
            return Err(Error::Validation("Invalid email format".to_string()));
        }

        if self.name.is_empty() || self.name.len() > 100 {
            return Err(Error::Validation(
                "Name must be 1-100 characters".to_string(),
            ));
        }

        if self.created_at > self.updated_at {
            return Err(Error::Validation(
                "Update timestamp precedes creation".to_string(),
            ));
        }

        Ok(())
    }
}

/// Team entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    pub logo: String,
    pub players: u32,
}

impl Team {
    /// Create a new team with validation. Starts with a single player
    /// (the creator) and the default logo.
    pub fn new(name: String, city: String) -> Result<Self> {
        if name.is_empty() || name.len() > 100 {
            return Err(Error::Validation(
                "Team name must be 1-100 characters".to_string(),
            ));
        }

        if city.is_empty() || city.len() > 100 {
            return Err(Error::Validation(
                "City must be 1-100 characters".to_string(),
            ));
        }

        Ok(Team {
            id: Uuid::new_v4(),
            name,
            city,
            logo: DEFAULT_TEAM_LOGO.to_string(),
            players: 1,
        })
    }

    /// Seed constructor with an explicit squad size
    pub fn seeded(name: &str, city: &str, players: u32) -> Self {
        Team {
            id: Uuid::new_v4(),
            name: name.to_string(),
            city: city.to_string(),
            logo: DEFAULT_TEAM_LOGO.to_string(),
            players,
        }
    }
}

/// Match entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: Uuid,
    pub opponent: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub format: String,
    pub status: MatchState,
}

impl Match {
    /// Create a new match. New matches start upcoming.
    pub fn new(opponent: String, date: NaiveDate, format: String) -> Result<Self> {
        if opponent.is_empty() || opponent.len() > 100 {
            return Err(Error::Validation(
                "Opponent must be 1-100 characters".to_string(),
            ));
        }

        Ok(Match {
            id: Uuid::new_v4(),
            opponent,
            date,
            format,
            status: MatchState::Upcoming,
        })
    }

    /// Seed constructor with an explicit status
    pub fn seeded(opponent: &str, date: NaiveDate, format: &str, status: MatchState) -> Self {
        Match {
            id: Uuid::new_v4(),
            opponent: opponent.to_string(),
            date,
            format: format.to_string(),
            status,
        }
    }
}

/// Shop cart line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: i64,
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub category: String,
}

/// Second-hand gear listed for sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SellItem {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: String,
    pub condition: String,
    pub quantity: u32,
    pub category: String,
}
