use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::cards_types::Card;

/// Rule-layer failures.
///
/// `EmptyDeck`, `InsufficientCards`, `CardNotInHand` and `Invariant` mean the
/// 24-card or hand-count invariant was broken; callers abort the round on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    EmptyDeck,
    InsufficientCards { requested: usize, available: usize },
    CardNotInHand(Card),
    ParseCard(String),
    Invariant(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::EmptyDeck => write!(f, "no cards left in deck"),
            DomainError::InsufficientCards {
                requested,
                available,
            } => write!(
                f,
                "not enough cards in deck: requested {requested}, only {available} available"
            ),
            DomainError::CardNotInHand(card) => write!(f, "card not in hand: {card}"),
            DomainError::ParseCard(s) => write!(f, "parse card: {s}"),
            DomainError::Invariant(s) => write!(f, "invariant violated: {s}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    pub fn parse(detail: impl Into<String>) -> Self {
        Self::ParseCard(detail.into())
    }
}
