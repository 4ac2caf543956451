//! Player aggregate: hand, trick count and cumulative points.

use super::cards_types::Card;
use super::errors::DomainError;
use super::state::{team_of, Seat, Team};

/// One seat at the table.
///
/// Only guarantees hand integrity; play legality belongs to the trick rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub seat: Seat,
    pub hand: Vec<Card>,
    /// Card this player put into the current trick, if any.
    pub played_card: Option<Card>,
    pub tricks_taken: u8,
    pub points: u16,
}

impl Player {
    pub fn new(name: impl Into<String>, seat: Seat) -> Self {
        Self {
            name: name.into(),
            seat,
            hand: Vec::with_capacity(6),
            played_card: None,
            tricks_taken: 0,
            points: 0,
        }
    }

    pub fn team(&self) -> Team {
        team_of(self.seat)
    }

    pub fn give_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    pub fn give_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.hand.extend(cards);
    }

    pub fn has_card(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Remove exactly one copy of `card` from the hand.
    pub fn return_card(&mut self, card: Card) -> Result<Card, DomainError> {
        let pos = self
            .hand
            .iter()
            .position(|&c| c == card)
            .ok_or(DomainError::CardNotInHand(card))?;
        Ok(self.hand.remove(pos))
    }

    /// Empty the hand, handing back everything it held.
    pub fn return_all_cards(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.hand)
    }
}
