//! App state store
//!
//! In-memory client state: the current auth state plus the team, match,
//! cart, and sell-item collections with their CRUD mutators. Clones
//! share state; each logical thread of control mutates through the lock.

use std::sync::{Arc, RwLock};

use chrono::NaiveDate;

use crate::domain::entities::{CartItem, Match, SellItem, Team};
use crate::domain::state::{MatchEvent, MatchStateMachine, StateError};
use scricplay_auth::{AuthIdentity, Session, SessionStore};
use scricplay_common::{Error, Result};

#[derive(Debug, Default)]
struct AppStateInner {
    user: Option<AuthIdentity>,
    is_authenticated: bool,
    teams: Vec<Team>,
    matches: Vec<Match>,
    cart: Vec<CartItem>,
    sell_items: Vec<SellItem>,
}

/// Shared application state store
#[derive(Clone)]
pub struct AppStore {
    inner: Arc<RwLock<AppStateInner>>,
    sessions: SessionStore,
}

impl AppStore {
    /// Create a store seeded with the fixture teams and matches
    pub fn new(sessions: SessionStore) -> Self {
        use crate::domain::state::MatchState;

        let inner = AppStateInner {
            teams: vec![
                Team::seeded("Royal Strikers", "Mumbai", 11),
                Team::seeded("Kings XI", "Delhi", 12),
            ],
            matches: vec![
                Match::seeded(
                    "Kings XI",
                    NaiveDate::from_ymd_opt(2024, 2, 15).unwrap_or_default(),
                    "T20",
                    MatchState::Completed,
                ),
                Match::seeded(
                    "Super Giants",
                    NaiveDate::from_ymd_opt(2024, 2, 20).unwrap_or_default(),
                    "ODI",
                    MatchState::Upcoming,
                ),
            ],
            ..Default::default()
        };

        Self {
            inner: Arc::new(RwLock::new(inner)),
            sessions,
        }
    }

    /// Create an empty, unseeded store
    pub fn empty(sessions: SessionStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(AppStateInner::default())),
            sessions,
        }
    }

    // ------------------------------------------------------------------
    // Auth state
    // ------------------------------------------------------------------

    /// Record a newly established session
    pub fn set_auth(&self, session: &Session) {
        self.sessions.store_user(&session.user);
        let mut inner = self.inner.write().unwrap();
        inner.user = Some(session.user.clone());
        inner.is_authenticated = true;
    }

    /// Drop the current auth state and the cached snapshot
    pub fn clear_auth(&self) {
        self.sessions.clear();
        let mut inner = self.inner.write().unwrap();
        inner.user = None;
        inner.is_authenticated = false;
    }

    /// Rehydrate auth state from the session storage.
    ///
    /// A cached user with an expired token stays visible but
    /// unauthenticated; no cached user means no session at all.
    pub fn check_auth(&self) {
        let authenticated = self.sessions.has_valid_token();
        let cached = self.sessions.cached_user();

        let mut inner = self.inner.write().unwrap();
        match cached {
            Some(user) => {
                inner.user = Some(user);
                inner.is_authenticated = authenticated;
            }
            None => {
                inner.user = None;
                inner.is_authenticated = false;
            }
        }
    }

    pub fn current_user(&self) -> Option<AuthIdentity> {
        self.inner.read().unwrap().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.read().unwrap().is_authenticated
    }

    // ------------------------------------------------------------------
    // Teams
    // ------------------------------------------------------------------

    pub fn teams(&self) -> Vec<Team> {
        self.inner.read().unwrap().teams.clone()
    }

    /// Add a team; starts with a single player and the default logo
    pub fn add_team(&self, name: String, city: String) -> Result<Team> {
        let team = Team::new(name, city)?;
        self.inner.write().unwrap().teams.push(team.clone());
        Ok(team)
    }

    // ------------------------------------------------------------------
    // Matches
    // ------------------------------------------------------------------

    pub fn matches(&self) -> Vec<Match> {
        self.inner.read().unwrap().matches.clone()
    }

    /// Schedule a match; new matches are prepended and start upcoming
    pub fn add_match(&self, opponent: String, date: NaiveDate, format: String) -> Result<Match> {
        let m = Match::new(opponent, date, format)?;
        self.inner.write().unwrap().matches.insert(0, m.clone());
        Ok(m)
    }

    /// Begin play for an upcoming match
    pub fn start_match(&self, id: uuid::Uuid) -> Result<Match> {
        self.advance_match(id, MatchEvent::Start)
    }

    /// End play for a live match
    pub fn complete_match(&self, id: uuid::Uuid) -> Result<Match> {
        self.advance_match(id, MatchEvent::Complete)
    }

    fn advance_match(&self, id: uuid::Uuid, event: MatchEvent) -> Result<Match> {
        let mut inner = self.inner.write().unwrap();
        let Some(m) = inner.matches.iter_mut().find(|m| m.id == id) else {
            return Err(Error::NotFound(format!("Match {} not found", id)));
        };

        m.status = MatchStateMachine::transition(m.status, event).map_err(|e| match e {
            StateError::TerminalState(state) => Error::Validation(format!(
                "Match is in terminal state '{}' and cannot transition",
                state
            )),
            other => Error::Validation(other.to_string()),
        })?;

        Ok(m.clone())
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    pub fn cart(&self) -> Vec<CartItem> {
        self.inner.read().unwrap().cart.clone()
    }

    /// Add an item to the cart; an existing line gains quantity instead
    /// of duplicating
    pub fn add_to_cart(&self, id: i64, name: String, price: String, category: String) {
        let mut inner = self.inner.write().unwrap();
        if let Some(existing) = inner.cart.iter_mut().find(|item| item.id == id) {
            existing.quantity += 1;
            return;
        }
        inner.cart.push(CartItem {
            id,
            name,
            price,
            quantity: 1,
            category,
        });
    }

    pub fn remove_from_cart(&self, id: i64) {
        self.inner.write().unwrap().cart.retain(|item| item.id != id);
    }

    /// Set a line's quantity; zero removes the line
    pub fn update_cart_quantity(&self, id: i64, quantity: u32) {
        let mut inner = self.inner.write().unwrap();
        for item in inner.cart.iter_mut() {
            if item.id == id {
                item.quantity = quantity;
            }
        }
        inner.cart.retain(|item| item.quantity > 0);
    }

    pub fn clear_cart(&self) {
        self.inner.write().unwrap().cart.clear();
    }

    // ------------------------------------------------------------------
    // Sell items
    // ------------------------------------------------------------------

    pub fn sell_items(&self) -> Vec<SellItem> {
        self.inner.read().unwrap().sell_items.clone()
    }

    pub fn add_sell_item(
        &self,
        name: String,
        description: String,
        price: String,
        condition: String,
        quantity: u32,
        category: String,
    ) -> SellItem {
        let item = SellItem {
            id: uuid::Uuid::new_v4(),
            name,
            description,
            price,
            condition,
            quantity,
            category,
        };
        self.inner.write().unwrap().sell_items.push(item.clone());
        item
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::state::MatchState;
    use scricplay_auth::{MemoryStorage, Role};
    use chrono::Utc;
    use uuid::Uuid;

    fn store() -> AppStore {
        AppStore::new(SessionStore::new(Arc::new(MemoryStorage::new())))
    }

    fn session_for(role: Role) -> Session {
        let user = AuthIdentity {
            id: Uuid::new_v4(),
            email: "test@example.com".to_string(),
            name: "Test User".to_string(),
            role,
            phone: None,
            avatar: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let ttl = chrono::Duration::days(7);
        let token = scricplay_auth::issue(user.id, &user.email, user.role, ttl).unwrap();
        Session {
            token: token.clone(),
            refresh_token: token,
            user,
            expires_at: Utc::now() + ttl,
        }
    }

    #[test]
    fn test_seeded_collections() {
        let store = store();
        let teams = store.teams();
        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].name, "Royal Strikers");
        assert_eq!(teams[1].players, 12);

        let matches = store.matches();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].status, MatchState::Completed);
        assert_eq!(matches[1].opponent, "Super Giants");
    }

    #[test]
    fn test_set_and_clear_auth() {
        let store = store();
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());

        let session = session_for(Role::Player);
        store.set_auth(&session);
        assert!(store.is_authenticated());
        assert_eq!(store.current_user(), Some(session.user.clone()));

        store.clear_auth();
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_check_auth_rehydrates_from_storage() {
        let sessions = SessionStore::new(Arc::new(MemoryStorage::new()));
        let session = session_for(Role::Coach);
        sessions.store_tokens(&session.token, &session.refresh_token);
        sessions.store_user(&session.user);

        // A fresh store sharing the same storage picks the session up
        let store = AppStore::new(sessions);
        assert!(!store.is_authenticated());
        store.check_auth();
        assert!(store.is_authenticated());
        assert_eq!(store.current_user(), Some(session.user));
    }

    #[test]
    fn test_check_auth_without_session_clears_state() {
        let store = store();
        store.set_auth(&session_for(Role::Player));

        // Wipe the backing storage out from under the store
        store.sessions.clear();
        store.check_auth();
        assert!(!store.is_authenticated());
        assert!(store.current_user().is_none());
    }

    #[test]
    fn test_add_team_and_match() {
        let store = store();
        let team = store
            .add_team("Super Giants".to_string(), "Lucknow".to_string())
            .unwrap();
        assert_eq!(team.players, 1);
        assert_eq!(store.teams().len(), 3);

        let m = store
            .add_match(
                "Royal Strikers".to_string(),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                "T20".to_string(),
            )
            .unwrap();
        assert_eq!(m.status, MatchState::Upcoming);
        // New matches are prepended
        assert_eq!(store.matches()[0].id, m.id);
    }

    #[test]
    fn test_match_lifecycle_through_store() {
        let store = store();
        let m = store
            .add_match(
                "Kings XI".to_string(),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                "T20".to_string(),
            )
            .unwrap();

        let live = store.start_match(m.id).unwrap();
        assert_eq!(live.status, MatchState::Live);

        let done = store.complete_match(m.id).unwrap();
        assert_eq!(done.status, MatchState::Completed);

        // Completed matches reject further transitions
        assert!(store.start_match(m.id).is_err());
    }

    #[test]
    fn test_match_cannot_complete_before_start() {
        let store = store();
        let m = store
            .add_match(
                "Kings XI".to_string(),
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                "T20".to_string(),
            )
            .unwrap();
        assert!(store.complete_match(m.id).is_err());
    }

    #[test]
    fn test_cart_add_merges_duplicates() {
        let store = store();
        store.add_to_cart(1, "Bat".to_string(), "₹2,499".to_string(), "Gear".to_string());
        store.add_to_cart(1, "Bat".to_string(), "₹2,499".to_string(), "Gear".to_string());
        store.add_to_cart(2, "Ball".to_string(), "₹399".to_string(), "Gear".to_string());

        let cart = store.cart();
        assert_eq!(cart.len(), 2);
        assert_eq!(cart[0].quantity, 2);
        assert_eq!(cart[1].quantity, 1);
    }

    #[test]
    fn test_cart_quantity_zero_drops_line() {
        let store = store();
        store.add_to_cart(1, "Bat".to_string(), "₹2,499".to_string(), "Gear".to_string());

        store.update_cart_quantity(1, 5);
        assert_eq!(store.cart()[0].quantity, 5);

        store.update_cart_quantity(1, 0);
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_cart_remove_and_clear() {
        let store = store();
        store.add_to_cart(1, "Bat".to_string(), "₹2,499".to_string(), "Gear".to_string());
        store.add_to_cart(2, "Ball".to_string(), "₹399".to_string(), "Gear".to_string());

        store.remove_from_cart(1);
        assert_eq!(store.cart().len(), 1);

        store.clear_cart();
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_add_sell_item() {
        let store = store();
        let item = store.add_sell_item(
            "Used Bat".to_string(),
            "Lightly used".to_string(),
            "₹1,200".to_string(),
            "Good".to_string(),
            1,
            "Gear".to_string(),
        );
        assert_eq!(store.sell_items(), vec![item]);
    }

    #[test]
    fn test_clones_share_state() {
        let store = store();
        let clone = store.clone();
        clone.add_to_cart(1, "Bat".to_string(), "₹2,499".to_string(), "Gear".to_string());
        assert_eq!(store.cart().len(), 1);
    }
}
