use serde::{Deserialize, Serialize};

use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::{RoundSummary, Seat, StateId, Team};
use crate::domain::Suit;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameTransition {
    /// Edge-triggered: a decision is now expected from this seat.
    TurnBecame { seat: Seat },

    /// Edge-triggered: a dealer was drawn or the deal rotated.
    DealerBecame { seat: Seat },

    /// Edge-triggered: trump was fixed for the round.
    TrumpDeclared { suit: Suit, by: Seat },

    /// Edge-triggered: a trick was resolved.
    TrickWon { seat: Seat },

    /// Edge-triggered: round points were awarded.
    RoundScored { summary: RoundSummary },

    /// Edge-triggered: a team reached the win threshold.
    GameEnded { winner: Team },
}

fn awaits_decision(state: StateId) -> bool {
    matches!(
        state,
        StateId::TrumpSelectionOne
            | StateId::TrumpSelectionTwo
            | StateId::DealerPickupTrump
            | StateId::GetPlayerCard
    )
}

/// Derive domain transitions from before/after snapshots of one step.
pub fn derive_game_transitions(
    before: &GameSnapshot,
    after: &GameSnapshot,
) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Dealer chosen or rotated
    let left_dealer_draw = before.state == StateId::DetermineDealer
        && after.state != StateId::DetermineDealer;
    if before.dealer != after.dealer || left_dealer_draw {
        transitions.push(GameTransition::DealerBecame { seat: after.dealer });
    }

    // 2. Trump declared
    if let (None, Some(suit)) = (before.trump, after.trump) {
        if let Some(by) = after.ordering_player {
            transitions.push(GameTransition::TrumpDeclared { suit, by });
        }
    }

    // 3. Trick won
    if before.last_trick != after.last_trick {
        if let Some(trick) = &after.last_trick {
            transitions.push(GameTransition::TrickWon { seat: trick.winner });
        }
    }

    // 4. Round scored
    if before.last_round != after.last_round {
        if let Some(summary) = &after.last_round {
            transitions.push(GameTransition::RoundScored {
                summary: summary.clone(),
            });
        }
    }

    // 5. Game over
    if let (None, Some(winner)) = (before.winner, after.winner) {
        transitions.push(GameTransition::GameEnded { winner });
    }

    // 6. Turn change
    if awaits_decision(after.state)
        && (before.current_player != after.current_player || !awaits_decision(before.state))
    {
        transitions.push(GameTransition::TurnBecame {
            seat: after.current_player,
        });
    }

    transitions
}
