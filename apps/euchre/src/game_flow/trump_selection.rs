use tracing::{info, warn};

use super::GameFlow;
use crate::decision::DecisionProvider;
use crate::domain::state::{require_turned_card, round_start_seat, GameState, Seat, StateId};
use crate::domain::Suit;
use crate::error::EngineError;

impl GameFlow {
    /// Round one: each seat from the dealer's left may order up the turned card.
    pub(super) fn trump_selection_one(
        &self,
        state: &mut GameState,
        decider: &mut dyn DecisionProvider,
    ) -> Result<StateId, EngineError> {
        let turned = require_turned_card(state, "trump_selection_one")?;
        let seat = state.current_player;

        if decider.choose_order_up(state.player(seat), turned)? {
            state.trump = Some(turned.suit);
            state.ordering_player = Some(seat);
            info!(seat, trump = ?turned.suit, "Ordered up");
            return Ok(StateId::DealerPickupTrump);
        }

        if seat == state.dealer {
            state.current_player = round_start_seat(state.dealer);
            info!(turned = %turned, "Everyone passed; turned card is dead");
            return Ok(StateId::TrumpSelectionTwo);
        }

        state.advance_current_player();
        Ok(StateId::TrumpSelectionOne)
    }

    /// Dealer takes the turned card into hand and discards one card.
    pub(super) fn dealer_pickup_trump(
        &self,
        state: &mut GameState,
        decider: &mut dyn DecisionProvider,
    ) -> Result<StateId, EngineError> {
        let dealer = state.dealer;
        // Absent when re-prompting after a bad discard.
        if let Some(card) = state.turned_card.take() {
            state.player_mut(dealer).give_card(card);
        }
        state.current_player = dealer;

        let discard = decider.choose_discard(state.player(dealer))?;
        if !state.player(dealer).has_card(discard) {
            warn!(seat = dealer, %discard, "Discard not in hand; asking again");
            return Ok(StateId::DealerPickupTrump);
        }

        let card = state.player_mut(dealer).return_card(discard)?;
        state.deck.return_card(card);
        state.current_player = round_start_seat(dealer);
        Ok(StateId::StartTrickPlay)
    }

    /// Round two: name any suit but the turned one. The dealer may not pass.
    pub(super) fn trump_selection_two(
        &self,
        state: &mut GameState,
        decider: &mut dyn DecisionProvider,
    ) -> Result<StateId, EngineError> {
        let turned = require_turned_card(state, "trump_selection_two")?;
        let excluded = [turned.suit];
        let seat = state.current_player;

        if seat == state.dealer {
            let suit = decider.choose_trump_forced(state.player(seat), &excluded)?;
            if excluded.contains(&suit) {
                warn!(seat, ?suit, "Dealer named the turned-down suit; asking again");
                return Ok(StateId::TrumpSelectionTwo);
            }
            info!(seat, trump = ?suit, "Dealer stuck with naming trump");
            return Ok(declare_trump(state, seat, suit));
        }

        match decider.choose_trump_or_pass(state.player(seat), &excluded)? {
            Some(suit) if excluded.contains(&suit) => {
                warn!(seat, ?suit, "Turned-down suit named; asking again");
                Ok(StateId::TrumpSelectionTwo)
            }
            Some(suit) => {
                info!(seat, trump = ?suit, "Trump named");
                Ok(declare_trump(state, seat, suit))
            }
            None => {
                state.advance_current_player();
                Ok(StateId::TrumpSelectionTwo)
            }
        }
    }
}

fn declare_trump(state: &mut GameState, seat: Seat, suit: Suit) -> StateId {
    state.trump = Some(suit);
    state.ordering_player = Some(seat);
    if let Some(card) = state.turned_card.take() {
        state.deck.return_card(card);
    }
    state.current_player = round_start_seat(state.dealer);
    StateId::StartTrickPlay
}
