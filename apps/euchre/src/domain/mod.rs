//! Domain layer: pure Euchre rules, types and helpers.

pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod deck;
pub mod errors;
pub mod game_transition;
pub mod player;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;

#[cfg(test)]
pub(crate) mod test_state_helpers;
#[cfg(test)]
mod tests_props_conservation;

// Re-exports for ergonomics
pub use cards_logic::{card_value, is_legal_play, legal_plays, trick_winner, trump_was_led};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{euchre_cards, left_bower_suit_of, Card, Color, Rank, Suit};
pub use deck::Deck;
pub use errors::DomainError;
pub use game_transition::{derive_game_transitions, GameTransition};
pub use player::Player;
pub use rules::GameRules;
pub use scoring::{apply_round_scoring, score_round, winning_team};
pub use seed_derivation::derive_shuffle_seed;
pub use snapshot::{GameSnapshot, SeatSnapshot};
pub use state::{
    next_seat, partner_of, round_start_seat, team_of, CompletedTrick, GameState, RoundOutcome,
    RoundSummary, Seat, StateId, Team,
};
