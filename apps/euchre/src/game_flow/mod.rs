//! Game flow: the Euchre state machine.
//!
//! Each named state is one method on [`GameFlow`] that mutates the game state,
//! optionally asks the decision provider for a choice, and returns the next
//! state. [`GameFlow::step`] is the single dispatch point; [`Engine`] drives it
//! to the end of the game and feeds the presenter.

mod orchestration;
mod player_actions;
mod round_lifecycle;
mod trump_selection;

use tracing::debug;

use crate::decision::DecisionProvider;
use crate::domain::rules::GameRules;
use crate::domain::state::{GameState, StateId};
use crate::error::EngineError;

pub use orchestration::{Engine, GameOutcome};

/// Transition functions for every state, parameterised by the game rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameFlow {
    rules: GameRules,
}

impl GameFlow {
    pub fn new(rules: GameRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    /// Run the current state to completion and record the next one.
    ///
    /// The game is only re-entrant between calls, never inside one.
    pub fn step(
        &self,
        state: &mut GameState,
        decider: &mut dyn DecisionProvider,
    ) -> Result<StateId, EngineError> {
        let current = state.current_state;
        let next = match current {
            StateId::InitRound => self.init_round(state)?,
            StateId::DetermineDealer => self.determine_dealer(state)?,
            StateId::ResetAndShuffle => self.reset_and_shuffle(state)?,
            StateId::DealCards => self.deal_cards(state)?,
            StateId::RevealTopCard => self.reveal_top_card(state)?,
            StateId::TrumpSelectionOne => self.trump_selection_one(state, decider)?,
            StateId::DealerPickupTrump => self.dealer_pickup_trump(state, decider)?,
            StateId::TrumpSelectionTwo => self.trump_selection_two(state, decider)?,
            StateId::StartTrickPlay => self.start_trick_play(state)?,
            StateId::GetPlayerCard => self.get_player_card(state, decider)?,
            StateId::CheckValidCard => self.check_valid_card(state)?,
            StateId::PlayCard => self.play_card(state)?,
            StateId::GetTrickWinner => self.get_trick_winner(state)?,
            StateId::GivePoints => self.give_points(state)?,
            StateId::CheckForWinner => self.check_for_winner(state)?,
            StateId::EndGame => return Err(EngineError::GameOver),
        };
        debug!(from = %current, to = %next, "Transition");
        state.current_state = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests_flow;
