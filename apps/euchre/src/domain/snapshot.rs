//! Owned, read-only copies of the game state handed to presenters.

use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::domain::state::{CompletedTrick, GameState, RoundSummary, Seat, StateId, Team};
use crate::domain::{Card, Suit};

/// Public and private facts about a single seat.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeatSnapshot {
    pub seat: Seat,
    pub name: String,
    pub hand: Vec<Card>,
    pub played_card: Option<Card>,
    pub tricks_taken: u8,
    pub points: u16,
}

/// Everything a presenter needs to draw the table after a step.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub state: StateId,
    pub round_no: u16,
    pub dealer: Seat,
    pub current_player: Seat,
    pub trump: Option<Suit>,
    pub turned_card: Option<Card>,
    pub ordering_player: Option<Seat>,
    pub played_cards: Vec<(Seat, Card)>,
    pub deck_size: usize,
    pub seats: [SeatSnapshot; PLAYERS],
    /// Indexed by `Team::index`.
    pub team_points: [u16; 2],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_trick: Option<CompletedTrick>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_round: Option<RoundSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Team>,
}

impl From<&GameState> for GameSnapshot {
    fn from(state: &GameState) -> Self {
        let seats = std::array::from_fn(|i| {
            let p = &state.players[i];
            SeatSnapshot {
                seat: p.seat,
                name: p.name.clone(),
                hand: p.hand.clone(),
                played_card: p.played_card,
                tricks_taken: p.tricks_taken,
                points: p.points,
            }
        });
        Self {
            state: state.current_state,
            round_no: state.round_no,
            dealer: state.dealer,
            current_player: state.current_player,
            trump: state.trump,
            turned_card: state.turned_card,
            ordering_player: state.ordering_player,
            played_cards: state.played_cards.clone(),
            deck_size: state.deck.len(),
            seats,
            team_points: [
                state.team_points(Team::One),
                state.team_points(Team::Two),
            ],
            last_trick: state.last_trick.clone(),
            last_round: state.last_round.clone(),
            winner: state.winner,
        }
    }
}

impl GameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self::from(state)
    }

    /// 24-card accounting as seen from the snapshot.
    pub fn card_count(&self) -> usize {
        self.deck_size
            + self.seats.iter().map(|s| s.hand.len()).sum::<usize>()
            + self.played_cards.len()
            + usize::from(self.turned_card.is_some())
    }
}
