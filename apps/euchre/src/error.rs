use thiserror::Error;

use crate::decision::DecisionError;
use crate::domain::DomainError;

/// Top-level error for engine entry points.
///
/// Any of these ends the current game run; rejected player choices never
/// surface here.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Rule invariant violated: {0}")]
    Domain(#[from] DomainError),
    #[error("Decision provider failed: {0}")]
    Decision(#[from] DecisionError),
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Game is already over")]
    GameOver,
}

impl EngineError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    /// Stable code for hosts that log or forward errors.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::Domain(DomainError::EmptyDeck) => "EMPTY_DECK",
            EngineError::Domain(DomainError::InsufficientCards { .. }) => "INSUFFICIENT_CARDS",
            EngineError::Domain(DomainError::CardNotInHand(_)) => "CARD_NOT_IN_HAND",
            EngineError::Domain(DomainError::ParseCard(_)) => "PARSE_CARD",
            EngineError::Domain(DomainError::Invariant(_)) => "INVARIANT",
            EngineError::Decision(_) => "DECISION_FAILED",
            EngineError::Config { .. } => "CONFIG_ERROR",
            EngineError::GameOver => "GAME_OVER",
        }
    }
}
