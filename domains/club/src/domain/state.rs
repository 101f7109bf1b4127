//! State machines for club domain entities
//!
//! Each state machine defines valid states, the events that trigger
//! transitions, guard conditions, and terminal states.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during state transitions
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StateError {
    #[error("Invalid transition: cannot transition from {from} to {to} via {event}")]
    InvalidTransition {
        from: String,
        to: String,
        event: String,
    },

    #[error("Guard condition failed: {0}")]
    GuardFailed(String),

    #[error("Terminal state: {0} is a terminal state and cannot transition")]
    TerminalState(String),
}

// ============================================================================
// Route Guard State Machine
// ============================================================================

/// Route guard evaluation states.
///
/// Every evaluation cycle starts at `Checking`; the first failing check
/// moves to `Redirecting` (navigation side effect, nothing rendered),
/// and a full pass moves to `Authorized`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GuardState {
    Checking,
    Authorized,
    Redirecting,
}

impl GuardState {
    /// Check if this is a terminal state for the evaluation cycle
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Authorized | Self::Redirecting)
    }

    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [GuardState] {
        match self {
            Self::Checking => &[Self::Authorized, Self::Redirecting],
            Self::Authorized => &[],
            Self::Redirecting => &[],
        }
    }
}

impl std::fmt::Display for GuardState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Checking => write!(f, "checking"),
            Self::Authorized => write!(f, "authorized"),
            Self::Redirecting => write!(f, "redirecting"),
        }
    }
}

/// Events that trigger guard state transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GuardEvent {
    /// Every access check passed
    Authorize,
    /// An access check failed; navigate away
    Redirect,
}

impl std::fmt::Display for GuardEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authorize => write!(f, "authorize"),
            Self::Redirect => write!(f, "redirect"),
        }
    }
}

/// Guard context for route guard transitions
#[derive(Debug, Clone)]
pub struct GuardContext {
    /// Whether a valid session is present
    pub is_authenticated: bool,
    /// Whether the RBAC policy permits the route
    pub route_permitted: bool,
    /// Whether the required-role constraint (if any) is satisfied
    pub role_permitted: bool,
}

impl GuardContext {
    /// All checks pass
    pub fn passes(&self) -> bool {
        self.is_authenticated && self.route_permitted && self.role_permitted
    }
}

/// Route guard state machine
pub struct GuardStateMachine;

impl GuardStateMachine {
    /// Attempt a state transition with guard conditions
    pub fn transition(
        current: GuardState,
        event: GuardEvent,
        context: Option<&GuardContext>,
    ) -> Result<GuardState, StateError> {
        if current.is_terminal() {
            return Err(StateError::TerminalState(current.to_string()));
        }

        let next = match (&current, &event) {
            (GuardState::Checking, GuardEvent::Authorize) => {
                // Guard: authorization requires every check to have passed
                if let Some(ctx) = context {
                    if !ctx.passes() {
                        return Err(StateError::GuardFailed(
                            "Cannot authorize with failing access checks".to_string(),
                        ));
                    }
                }
                GuardState::Authorized
            }
            (GuardState::Checking, GuardEvent::Redirect) => GuardState::Redirecting,

            // Invalid transitions
            _ => {
                return Err(StateError::InvalidTransition {
                    from: current.to_string(),
                    to: "unknown".to_string(),
                    event: event.to_string(),
                });
            }
        };

        Ok(next)
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition(
        current: GuardState,
        event: &GuardEvent,
        context: Option<&GuardContext>,
    ) -> bool {
        Self::transition(current, *event, context).is_ok()
    }
}

// ============================================================================
// Match State Machine
// ============================================================================

/// Match lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchState {
    Upcoming,
    Live,
    Completed,
}

impl MatchState {
    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Get all valid next states from current state
    pub fn valid_transitions(&self) -> &'static [MatchState] {
        match self {
            Self::Upcoming => &[Self::Live],
            Self::Live => &[Self::Completed],
            Self::Completed => &[],
        }
    }
}

impl std::fmt::Display for MatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upcoming => write!(f, "upcoming"),
            Self::Live => write!(f, "live"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Events that trigger match state transitions
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchEvent {
    /// Play begins
    Start,
    /// Play ends
    Complete,
}

impl std::fmt::Display for MatchEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Complete => write!(f, "complete"),
        }
    }
}

/// Match state machine
pub struct MatchStateMachine;

impl MatchStateMachine {
    /// Attempt a state transition
    pub fn transition(current: MatchState, event: MatchEvent) -> Result<MatchState, StateError> {
        if current.is_terminal() {
            return Err(StateError::TerminalState(current.to_string()));
        }

        match (&current, &event) {
            (MatchState::Upcoming, MatchEvent::Start) => Ok(MatchState::Live),
            (MatchState::Live, MatchEvent::Complete) => Ok(MatchState::Completed),
            _ => Err(StateError::InvalidTransition {
                from: current.to_string(),
                to: "unknown".to_string(),
                event: event.to_string(),
            }),
        }
    }

    /// Check if a transition is valid without performing it
    pub fn can_transition(current: MatchState, event: &MatchEvent) -> bool {
        Self::transition(current, *event).is_ok()
    }
}

// ============================================================================
// Tests
// ============================================================================
