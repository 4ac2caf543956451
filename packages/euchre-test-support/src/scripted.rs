//! Decision provider driven by queued answers.

use std::collections::VecDeque;

use euchre::{Card, DecisionError, DecisionProvider, Player, Suit};
use tracing::debug;

/// Replays queued answers; falls back to a fixed policy once a queue is empty.
///
/// Fallbacks: pass in both trump rounds, first non-excluded suit when forced,
/// first card in hand for the discard, first legal card for play. Answers are
/// returned as queued, legal or not, so tests can exercise re-prompting.
#[derive(Debug, Default, Clone)]
pub struct ScriptedDecider {
    order_up: VecDeque<bool>,
    trump: VecDeque<Option<Suit>>,
    forced: VecDeque<Suit>,
    discards: VecDeque<Card>,
    plays: VecDeque<Card>,
    /// Every prompt received, as `(seat, kind)`.
    pub prompts: Vec<(u8, &'static str)>,
}

impl ScriptedDecider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn order_up<I: IntoIterator<Item = bool>>(mut self, answers: I) -> Self {
        self.order_up.extend(answers);
        self
    }

    pub fn trump<I: IntoIterator<Item = Option<Suit>>>(mut self, answers: I) -> Self {
        self.trump.extend(answers);
        self
    }

    pub fn forced<I: IntoIterator<Item = Suit>>(mut self, answers: I) -> Self {
        self.forced.extend(answers);
        self
    }

    pub fn discards<I: IntoIterator<Item = Card>>(mut self, answers: I) -> Self {
        self.discards.extend(answers);
        self
    }

    pub fn plays<I: IntoIterator<Item = Card>>(mut self, answers: I) -> Self {
        self.plays.extend(answers);
        self
    }

    /// Number of prompts of the given kind.
    pub fn count(&self, kind: &str) -> usize {
        self.prompts.iter().filter(|(_, k)| *k == kind).count()
    }

    fn record(&mut self, player: &Player, kind: &'static str) {
        debug!(seat = player.seat, kind, "Scripted prompt");
        self.prompts.push((player.seat, kind));
    }
}

impl DecisionProvider for ScriptedDecider {
    fn choose_order_up(&mut self, player: &Player, _turned_card: Card) -> Result<bool, DecisionError> {
        self.record(player, "order_up");
        Ok(self.order_up.pop_front().unwrap_or(false))
    }

    fn choose_trump_or_pass(
        &mut self,
        player: &Player,
        _excluded: &[Suit],
    ) -> Result<Option<Suit>, DecisionError> {
        self.record(player, "trump_or_pass");
        Ok(self.trump.pop_front().flatten())
    }

    fn choose_trump_forced(
        &mut self,
        player: &Player,
        excluded: &[Suit],
    ) -> Result<Suit, DecisionError> {
        self.record(player, "trump_forced");
        if let Some(suit) = self.forced.pop_front() {
            return Ok(suit);
        }
        Suit::ALL
            .into_iter()
            .find(|s| !excluded.contains(s))
            .ok_or(DecisionError::NoOptions("forced trump suit"))
    }

    fn choose_discard(&mut self, player: &Player) -> Result<Card, DecisionError> {
        self.record(player, "discard");
        if let Some(card) = self.discards.pop_front() {
            return Ok(card);
        }
        player
            .hand
            .first()
            .copied()
            .ok_or(DecisionError::NoOptions("discard"))
    }

    fn choose_play(&mut self, player: &Player, legal_plays: &[Card]) -> Result<Card, DecisionError> {
        self.record(player, "play");
        if let Some(card) = self.plays.pop_front() {
            return Ok(card);
        }
        legal_plays
            .first()
            .copied()
            .ok_or(DecisionError::NoOptions("card play"))
    }
}
