use tracing::{debug, info};

use super::GameFlow;
use crate::domain::deck::Deck;
use crate::domain::rules::{DEAL_PASSES, DECK_SIZE, HAND_SIZE};
use crate::domain::scoring::{apply_round_scoring, winning_team};
use crate::domain::state::{next_seat, round_start_seat, GameState, StateId};
use crate::domain::{DomainError, Rank};
use crate::error::EngineError;

impl GameFlow {
    /// Fresh shuffled deck and cleared table at the start of a game.
    pub(super) fn init_round(&self, state: &mut GameState) -> Result<StateId, EngineError> {
        let mut deck = Deck::new();
        deck.shuffle(state.next_shuffle_seed());
        state.deck = deck;

        for player in state.players.iter_mut() {
            player.hand.clear();
            player.played_card = None;
            player.tricks_taken = 0;
            player.points = 0;
        }
        state.played_cards.clear();
        state.pending_card = None;
        state.turned_card = None;
        state.trump = None;
        state.ordering_player = None;
        state.round_no = 0;
        state.last_trick = None;
        state.last_round = None;
        state.winner = None;
        // Seat 0 draws first for the deal.
        state.current_player = 0;

        info!(seed = state.game_seed, "Game initialised");
        Ok(StateId::DetermineDealer)
    }

    /// One seat draws a card; the first Jack makes that seat the dealer.
    pub(super) fn determine_dealer(&self, state: &mut GameState) -> Result<StateId, EngineError> {
        let seat = state.current_player;
        let card = state.deck.draw()?;
        state.played_cards.push((seat, card));
        debug!(seat, %card, "Drew for deal");

        if card.rank != Rank::Jack {
            state.advance_current_player();
            return Ok(StateId::DetermineDealer);
        }

        state.dealer = seat;
        let drawn: Vec<_> = state.played_cards.drain(..).map(|(_, c)| c).collect();
        state.deck.return_cards(drawn);
        info!(dealer = seat, %card, "First dealer chosen");
        Ok(StateId::ResetAndShuffle)
    }

    /// Collect every card, reshuffle, and start the next round left of the dealer.
    pub(super) fn reset_and_shuffle(&self, state: &mut GameState) -> Result<StateId, EngineError> {
        state.gather_cards();
        if state.deck.len() != DECK_SIZE {
            return Err(DomainError::invariant(format!(
                "deck holds {} cards after gathering, expected {DECK_SIZE}",
                state.deck.len()
            ))
            .into());
        }

        for player in state.players.iter_mut() {
            player.tricks_taken = 0;
        }
        state.trump = None;
        state.ordering_player = None;
        state.last_trick = None;
        state.round_no += 1;

        let seed = state.next_shuffle_seed();
        state.deck.shuffle(seed);
        state.current_player = round_start_seat(state.dealer);

        debug!(round = state.round_no, dealer = state.dealer, "Deck reshuffled");
        Ok(StateId::DealCards)
    }

    /// Five cards to each seat in 2/3 then 3/2 batches, starting left of the dealer.
    pub(super) fn deal_cards(&self, state: &mut GameState) -> Result<StateId, EngineError> {
        let start = round_start_seat(state.dealer);
        for pass in DEAL_PASSES {
            let mut seat = start;
            for batch in pass {
                let cards = state.deck.draw_many(batch)?;
                state.player_mut(seat).give_cards(cards);
                seat = next_seat(seat);
            }
        }

        if let Some(short) = state.players.iter().find(|p| p.hand.len() != HAND_SIZE) {
            return Err(DomainError::invariant(format!(
                "seat {} holds {} cards after the deal",
                short.seat,
                short.hand.len()
            ))
            .into());
        }

        info!(
            round = state.round_no,
            dealer = state.dealer,
            kitty = state.deck.len(),
            "Round dealt"
        );
        Ok(StateId::RevealTopCard)
    }

    /// Turn the top kitty card face up.
    pub(super) fn reveal_top_card(&self, state: &mut GameState) -> Result<StateId, EngineError> {
        let card = state.deck.draw()?;
        state.turned_card = Some(card);
        state.current_player = round_start_seat(state.dealer);
        info!(round = state.round_no, turned = %card, "Top card turned");
        Ok(StateId::TrumpSelectionOne)
    }

    pub(super) fn give_points(&self, state: &mut GameState) -> Result<StateId, EngineError> {
        let summary = apply_round_scoring(state)?;
        info!(
            round = summary.round_no,
            trump = ?summary.trump,
            ordering_seat = summary.ordering_seat,
            outcome = ?summary.outcome,
            scoring_team = ?summary.scoring_team,
            points = summary.points_awarded,
            "Round scored"
        );
        Ok(StateId::CheckForWinner)
    }

    /// End the game at the threshold, otherwise pass the deal to the left.
    pub(super) fn check_for_winner(&self, state: &mut GameState) -> Result<StateId, EngineError> {
        if let Some(team) = winning_team(state, self.rules.win_threshold) {
            state.winner = Some(team);
            info!(
                winner = ?team,
                points = state.team_points(team),
                rounds = state.round_no,
                "Game over"
            );
            return Ok(StateId::EndGame);
        }

        state.dealer = next_seat(state.dealer);
        state.ordering_player = None;
        debug!(dealer = state.dealer, "Deal passes left");
        Ok(StateId::ResetAndShuffle)
    }
}
