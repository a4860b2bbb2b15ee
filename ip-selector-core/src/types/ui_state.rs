//! Banner state machine
//!
//! `Idle → Loading → {Success, Error} → Idle`. `Success` reverts on its own
//! after the linger period; `Error` stays until the next transition replaces it.

use std::time::Duration;

use tokio::time::Instant;

use super::CandidateRow;

/// Banner text for successful requests.
pub const SUCCESS_MESSAGE: &str = "Request succeeded!";

/// Exactly one banner is visible at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UiState {
    #[default]
    Idle,
    Loading,
    Success { message: String, since: Instant },
    Error { message: String },
}

/// State change emitted by a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiTransition {
    Loading,
    Succeeded(String),
    Failed(String),
    /// New candidate table. The banner ignores it.
    CandidatesReplaced(Vec<CandidateRow>),
    Reset,
}

impl UiState {
    /// Apply a transition. The new banner always replaces the old one.
    pub fn apply(&mut self, transition: &UiTransition, now: Instant) {
        match transition {
            UiTransition::Loading => *self = Self::Loading,
            UiTransition::Succeeded(message) => {
                *self = Self::Success {
                    message: message.clone(),
                    since: now,
                };
            }
            UiTransition::Failed(message) => {
                *self = Self::Error {
                    message: message.clone(),
                };
            }
            UiTransition::Reset => *self = Self::Idle,
            UiTransition::CandidatesReplaced(_) => {}
        }
    }

    /// Revert an expired success banner. Returns `true` if the state changed.
    pub fn tick(&mut self, now: Instant, linger: Duration) -> bool {
        if let Self::Success { since, .. } = self
            && now.saturating_duration_since(*since) >= linger
        {
            *self = Self::Idle;
            return true;
        }
        false
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Banner text, if a message banner is showing.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message, .. } | Self::Error { message } => Some(message),
            Self::Idle | Self::Loading => None,
        }
    }
}
