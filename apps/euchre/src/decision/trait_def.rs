//! Player decision provider trait definition.

use std::fmt;

use crate::domain::{Card, Player, Suit};

/// Errors a provider may report instead of a decision.
///
/// An illegal card is not an error; the engine re-prompts for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecisionError {
    /// Provider failed internally
    Internal(String),
    /// Backing player or connection went away
    Disconnected(String),
    /// Provider was offered nothing it could choose from
    NoOptions(&'static str),
}

impl fmt::Display for DecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecisionError::Internal(msg) => write!(f, "decision provider internal error: {msg}"),
            DecisionError::Disconnected(msg) => write!(f, "decision provider disconnected: {msg}"),
            DecisionError::NoOptions(what) => write!(f, "no options offered for {what}"),
        }
    }
}

impl std::error::Error for DecisionError {}

/// Source of every player choice the engine needs.
///
/// Calls block until a decision is available. Whether an implementation
/// prompts a terminal, waits on the network or consults a bot is invisible
/// to the engine, which applies no timeout or retry of its own. Each method
/// must answer from the option set it is given.
pub trait DecisionProvider {
    /// Trump round one: order the turned card's suit up (`true`) or pass.
    fn choose_order_up(&mut self, player: &Player, turned_card: Card) -> Result<bool, DecisionError>;

    /// Trump round two, non-dealer seats: name a suit not in `excluded`, or pass.
    fn choose_trump_or_pass(
        &mut self,
        player: &Player,
        excluded: &[Suit],
    ) -> Result<Option<Suit>, DecisionError>;

    /// Trump round two, dealer after three passes: must name a suit not in `excluded`.
    fn choose_trump_forced(
        &mut self,
        player: &Player,
        excluded: &[Suit],
    ) -> Result<Suit, DecisionError>;

    /// Dealer holding six cards after picking up: pick one to discard.
    fn choose_discard(&mut self, player: &Player) -> Result<Card, DecisionError>;

    /// Pick a card to play; `legal_plays` is never empty.
    fn choose_play(&mut self, player: &Player, legal_plays: &[Card]) -> Result<Card, DecisionError>;
}

impl<T: DecisionProvider + ?Sized> DecisionProvider for Box<T> {
    fn choose_order_up(&mut self, player: &Player, turned_card: Card) -> Result<bool, DecisionError> {
        (**self).choose_order_up(player, turned_card)
    }

    fn choose_trump_or_pass(
        &mut self,
        player: &Player,
        excluded: &[Suit],
    ) -> Result<Option<Suit>, DecisionError> {
        (**self).choose_trump_or_pass(player, excluded)
    }

    fn choose_trump_forced(
        &mut self,
        player: &Player,
        excluded: &[Suit],
    ) -> Result<Suit, DecisionError> {
        (**self).choose_trump_forced(player, excluded)
    }

    fn choose_discard(&mut self, player: &Player) -> Result<Card, DecisionError> {
        (**self).choose_discard(player)
    }

    fn choose_play(&mut self, player: &Player, legal_plays: &[Card]) -> Result<Card, DecisionError> {
        (**self).choose_play(player, legal_plays)
    }
}
