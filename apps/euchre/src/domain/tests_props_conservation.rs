//! Property tests for the 24-card invariant.

use proptest::prelude::*;

use crate::decision::RandomDecider;
use crate::domain::rules::{DECK_SIZE, GameRules};
use crate::domain::state::{GameState, StateId};
use crate::domain::test_state_helpers::default_names;
use crate::domain::{test_gens, test_prelude, Deck};
use crate::game_flow::GameFlow;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Drawing then returning any number of cards restores the deck size.
    #[test]
    fn prop_draw_many_round_trip(seed in test_gens::seed(), n in 0usize..=DECK_SIZE) {
        let mut deck = Deck::new();
        deck.shuffle(seed);
        let drawn = deck.draw_many(n).unwrap();
        prop_assert_eq!(drawn.len(), n);
        prop_assert_eq!(deck.len(), DECK_SIZE - n);
        deck.return_cards(drawn);
        prop_assert_eq!(deck.len(), DECK_SIZE);

        let mut all = deck.cards().to_vec();
        all.sort();
        all.dedup();
        prop_assert_eq!(all.len(), DECK_SIZE);
    }

    /// Over-asking leaves the deck untouched.
    #[test]
    fn prop_draw_many_fails_without_mutation(seed in test_gens::seed(), extra in 1usize..10) {
        let mut deck = Deck::new();
        deck.shuffle(seed);
        let _ = deck.draw_many(5).unwrap();
        let before = deck.clone();
        prop_assert!(deck.draw_many(deck.len() + extra).is_err());
        prop_assert_eq!(deck, before);
    }

    /// Every reachable state of a short game accounts for all 24 cards.
    #[test]
    fn prop_cards_conserved_through_a_game(game_seed in test_gens::seed(), choice_seed in any::<u64>()) {
        let flow = GameFlow::new(GameRules { win_threshold: 3 });
        let mut state = GameState::new(default_names(), game_seed);
        let mut decider = RandomDecider::new(Some(choice_seed));

        let mut steps = 0usize;
        while state.current_state != StateId::EndGame {
            flow.step(&mut state, &mut decider).unwrap();
            prop_assert_eq!(state.card_count(), DECK_SIZE, "after {}", state.current_state);
            for player in &state.players {
                prop_assert!(player.hand.len() <= 6);
            }
            steps += 1;
            prop_assert!(steps < 5_000, "game did not finish");
        }
        prop_assert!(state.winner.is_some());
    }
}
