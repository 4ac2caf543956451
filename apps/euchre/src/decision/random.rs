//! Random decision provider: picks uniformly from whatever it is offered.
//!
//! Useful as a stand-in seat when a host has fewer than four players and as
//! a baseline for tests. With a seed, the same game seed and provider seed
//! always replay the same game.

use rand::prelude::*;
use rand::rngs::StdRng;

use super::trait_def::{DecisionError, DecisionProvider};
use crate::domain::{Card, Player, Suit};

/// Provider that makes random legal choices for every seat.
pub struct RandomDecider {
    rng: StdRng,
    /// Chance of ordering up or naming a suit instead of passing.
    bid_probability: f64,
}

impl RandomDecider {
    pub const NAME: &'static str = "RandomDecider";

    /// `Some(seed)` for reproducible play, `None` for OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self {
            rng,
            bid_probability: 0.25,
        }
    }

    /// Clamped to `0.0..=1.0`; NaN means never bid.
    pub fn with_bid_probability(mut self, probability: f64) -> Self {
        self.bid_probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    fn pick<T: Copy>(&mut self, options: &[T], what: &'static str) -> Result<T, DecisionError> {
        options
            .choose(&mut self.rng)
            .copied()
            .ok_or(DecisionError::NoOptions(what))
    }
}

fn open_suits(excluded: &[Suit]) -> Vec<Suit> {
    Suit::ALL
        .into_iter()
        .filter(|s| !excluded.contains(s))
        .collect()
}

impl DecisionProvider for RandomDecider {
    fn choose_order_up(&mut self, _player: &Player, _turned_card: Card) -> Result<bool, DecisionError> {
        Ok(self.rng.random_bool(self.bid_probability))
    }

    fn choose_trump_or_pass(
        &mut self,
        _player: &Player,
        excluded: &[Suit],
    ) -> Result<Option<Suit>, DecisionError> {
        if !self.rng.random_bool(self.bid_probability) {
            return Ok(None);
        }
        self.pick(&open_suits(excluded), "trump suit").map(Some)
    }

    fn choose_trump_forced(
        &mut self,
        _player: &Player,
        excluded: &[Suit],
    ) -> Result<Suit, DecisionError> {
        self.pick(&open_suits(excluded), "forced trump suit")
    }

    fn choose_discard(&mut self, player: &Player) -> Result<Card, DecisionError> {
        self.pick(&player.hand, "discard")
    }

    fn choose_play(&mut self, _player: &Player, legal_plays: &[Card]) -> Result<Card, DecisionError> {
        self.pick(legal_plays, "card play")
    }
}
