//! The 24-card Euchre deck with deterministic seeded shuffling.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::cards_types::{euchre_cards, Card};
use super::errors::DomainError;

/// Ordered pile of cards; the last element is the top of the deck.
///
/// Cards only move in and out through `draw*` and `return_*`, so a card is
/// never duplicated or lost. Returned cards are appended, which leaves the
/// order unspecified until the next `shuffle`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A full, unshuffled 24-card deck.
    pub fn new() -> Self {
        Self {
            cards: euchre_cards(),
        }
    }

    pub fn empty() -> Self {
        Self { cards: Vec::new() }
    }

    /// Fisher-Yates shuffle; the same seed always yields the same order.
    pub fn shuffle(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for i in (1..self.cards.len()).rev() {
            let j = rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn draw(&mut self) -> Result<Card, DomainError> {
        self.cards.pop().ok_or(DomainError::EmptyDeck)
    }

    /// Draw `n` cards from the top, or none at all.
    pub fn draw_many(&mut self, n: usize) -> Result<Vec<Card>, DomainError> {
        let available = self.cards.len();
        if n > available {
            return Err(DomainError::InsufficientCards {
                requested: n,
                available,
            });
        }
        let mut drawn = self.cards.split_off(available - n);
        // Top card first, matching repeated `draw` calls.
        drawn.reverse();
        Ok(drawn)
    }

    pub fn return_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn return_cards<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }
}
