//! Test-only game state helpers for domain unit tests.

use crate::domain::rules::PLAYERS;
use crate::domain::state::{GameState, Seat, StateId};
use crate::domain::{try_parse_cards, Card, Suit};

pub fn default_names() -> [String; PLAYERS] {
    std::array::from_fn(|i| format!("Player {}", i + 1))
}

pub fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).expect("hardcoded valid card tokens")
}

/// Move the named cards out of the deck into `seat`'s hand.
pub fn deal_exact(state: &mut GameState, seat: Seat, tokens: &[&str]) {
    for card in cards(tokens) {
        take_from_deck(state, card);
        state.player_mut(seat).give_card(card);
    }
}

/// Remove one specific card from the deck.
pub fn take_from_deck(state: &mut GameState, card: Card) {
    let mut rest = state.deck.draw_many(state.deck.len()).expect("whole deck");
    let pos = rest
        .iter()
        .position(|&c| c == card)
        .expect("card should still be in the deck");
    rest.remove(pos);
    state.deck.return_cards(rest);
}

/// State in trick play with trump fixed and the given hands dealt.
///
/// The hands must hold five cards each; the four undealt cards stay in the deck.
pub fn trick_play_state(
    hands: [&[&str]; PLAYERS],
    dealer: Seat,
    trump: Suit,
    ordering_player: Seat,
) -> GameState {
    let mut state = GameState::new(default_names(), 7);
    for (seat, tokens) in hands.iter().enumerate() {
        deal_exact(&mut state, seat as Seat, tokens);
    }
    state.dealer = dealer;
    state.current_player = (dealer + 1) % PLAYERS as Seat;
    state.trump = Some(trump);
    state.ordering_player = Some(ordering_player);
    state.round_no = 1;
    state.current_state = StateId::StartTrickPlay;
    state
}
