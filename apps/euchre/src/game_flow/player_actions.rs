use tracing::{debug, info, warn};

use super::GameFlow;
use crate::decision::{DecisionError, DecisionProvider};
use crate::domain::rules::PLAYERS;
use crate::domain::state::{
    require_pending_card, require_trump, round_start_seat, CompletedTrick, GameState, StateId,
};
use crate::domain::{legal_plays, trick_winner, Card, DomainError};
use crate::error::EngineError;

impl GameFlow {
    /// First trick of the round: the seat left of the dealer leads.
    pub(super) fn start_trick_play(&self, state: &mut GameState) -> Result<StateId, EngineError> {
        if !state.played_cards.is_empty() {
            return Err(DomainError::invariant(format!(
                "{} cards left on the table at trick start",
                state.played_cards.len()
            ))
            .into());
        }
        for player in state.players.iter_mut() {
            player.played_card = None;
        }
        state.current_player = round_start_seat(state.dealer);
        Ok(StateId::GetPlayerCard)
    }

    /// Ask the current player for a card from their legal plays.
    pub(super) fn get_player_card(
        &self,
        state: &mut GameState,
        decider: &mut dyn DecisionProvider,
    ) -> Result<StateId, EngineError> {
        let legal = current_legal_plays(state)?;
        if legal.is_empty() {
            return Err(DecisionError::NoOptions("card play").into());
        }
        let card = decider.choose_play(state.current(), &legal)?;
        state.pending_card = Some(card);
        Ok(StateId::CheckValidCard)
    }

    /// Accept the pending card or send the same player back to choose again.
    pub(super) fn check_valid_card(&self, state: &mut GameState) -> Result<StateId, EngineError> {
        let card = require_pending_card(state, "check_valid_card")?;
        if current_legal_plays(state)?.contains(&card) {
            return Ok(StateId::PlayCard);
        }
        warn!(seat = state.current_player, %card, "Illegal card chosen; asking again");
        state.pending_card = None;
        Ok(StateId::GetPlayerCard)
    }

    pub(super) fn play_card(&self, state: &mut GameState) -> Result<StateId, EngineError> {
        let card = require_pending_card(state, "play_card")?;
        let seat = state.current_player;

        let player = state.player_mut(seat);
        let card = player.return_card(card)?;
        player.played_card = Some(card);
        state.pending_card = None;
        state.played_cards.push((seat, card));
        debug!(seat, %card, "Card played");

        state.advance_current_player();
        if state.played_cards.len() == PLAYERS {
            Ok(StateId::GetTrickWinner)
        } else {
            Ok(StateId::GetPlayerCard)
        }
    }

    /// Resolve the trick; the winner leads next or the round goes to scoring.
    pub(super) fn get_trick_winner(&self, state: &mut GameState) -> Result<StateId, EngineError> {
        let trump = require_trump(state, "get_trick_winner")?;
        let cards: [Card; PLAYERS] = state
            .played_cards
            .iter()
            .map(|&(_, c)| c)
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|v: Vec<Card>| {
                DomainError::invariant(format!("trick resolved with {} cards", v.len()))
            })?;

        let lead = cards[0].suit;
        let idx = trick_winner(&cards, trump, lead);
        let winner = state.played_cards[idx].0;
        state.player_mut(winner).tricks_taken += 1;

        let plays: Vec<_> = state.played_cards.drain(..).collect();
        state.deck.return_cards(cards);
        for player in state.players.iter_mut() {
            player.played_card = None;
        }
        info!(
            winner,
            card = %cards[idx],
            tricks = state.player(winner).tricks_taken,
            "Trick won"
        );
        state.last_trick = Some(CompletedTrick { plays, winner });
        state.current_player = winner;

        if state.player(winner).hand.is_empty() {
            Ok(StateId::GivePoints)
        } else {
            Ok(StateId::GetPlayerCard)
        }
    }
}

fn current_legal_plays(state: &GameState) -> Result<Vec<Card>, EngineError> {
    let trump = require_trump(state, "legal_plays")?;
    Ok(legal_plays(&state.current().hand, trump, state.lead_card()))
}
