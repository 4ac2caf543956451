//! State machine tests driven by a scripted in-crate decision provider.

use std::collections::VecDeque;

use super::GameFlow;
use crate::decision::{DecisionError, DecisionProvider};
use crate::domain::rules::GameRules;
use crate::domain::state::{round_start_seat, GameState, StateId, Team};
use crate::domain::test_state_helpers::{cards, default_names, trick_play_state};
use crate::domain::{derive_shuffle_seed, Card, Deck, Player, Rank, RoundOutcome, Suit};
use crate::error::EngineError;

/// Answers from queues, falling back to pass / first option when a queue runs dry.
#[derive(Default)]
struct Script {
    order_up: VecDeque<bool>,
    trump: VecDeque<Option<Suit>>,
    forced: VecDeque<Suit>,
    discards: VecDeque<Card>,
    plays: VecDeque<Card>,
    order_up_calls: usize,
    or_pass_calls: usize,
    forced_calls: usize,
    forced_excluded: Vec<Suit>,
    discard_calls: usize,
    play_calls: usize,
}

impl DecisionProvider for Script {
    fn choose_order_up(&mut self, _player: &Player, _turned: Card) -> Result<bool, DecisionError> {
        self.order_up_calls += 1;
        Ok(self.order_up.pop_front().unwrap_or(false))
    }

    fn choose_trump_or_pass(
        &mut self,
        _player: &Player,
        _excluded: &[Suit],
    ) -> Result<Option<Suit>, DecisionError> {
        self.or_pass_calls += 1;
        Ok(self.trump.pop_front().flatten())
    }

    fn choose_trump_forced(
        &mut self,
        _player: &Player,
        excluded: &[Suit],
    ) -> Result<Suit, DecisionError> {
        self.forced_calls += 1;
        self.forced_excluded = excluded.to_vec();
        if let Some(suit) = self.forced.pop_front() {
            return Ok(suit);
        }
        Suit::ALL
            .into_iter()
            .find(|s| !excluded.contains(s))
            .ok_or(DecisionError::NoOptions("forced trump"))
    }

    fn choose_discard(&mut self, player: &Player) -> Result<Card, DecisionError> {
        self.discard_calls += 1;
        if let Some(card) = self.discards.pop_front() {
            return Ok(card);
        }
        player
            .hand
            .first()
            .copied()
            .ok_or(DecisionError::NoOptions("discard"))
    }

    fn choose_play(&mut self, _player: &Player, legal: &[Card]) -> Result<Card, DecisionError> {
        self.play_calls += 1;
        if let Some(card) = self.plays.pop_front() {
            return Ok(card);
        }
        legal.first().copied().ok_or(DecisionError::NoOptions("play"))
    }
}

fn card(token: &str) -> Card {
    token.parse().unwrap()
}

fn step_until(flow: &GameFlow, state: &mut GameState, decider: &mut Script, target: StateId) {
    for _ in 0..10_000 {
        if state.current_state == target {
            return;
        }
        flow.step(state, decider).unwrap();
        state.check_card_conservation().unwrap();
    }
    panic!("never reached {target}");
}

/// Hands for trick tests; 9H TH JH QC stay in the deck.
const HANDS: [&[&str]; 4] = [
    &["AH", "KH", "9C", "TC", "QS"],
    &["QH", "9S", "TS", "AC", "KC"],
    &["JD", "9D", "TD", "QD", "KD"],
    &["JS", "AS", "KS", "JC", "AD"],
];

#[test]
fn first_jack_drawn_picks_the_dealer() {
    let seed = 2024;
    let flow = GameFlow::default();
    let mut state = GameState::new(default_names(), seed);
    let mut script = Script::default();

    step_until(&flow, &mut state, &mut script, StateId::ResetAndShuffle);

    let mut deck = Deck::new();
    deck.shuffle(derive_shuffle_seed(seed, 0));
    let mut expected = 0u8;
    loop {
        if deck.draw().unwrap().rank == Rank::Jack {
            break;
        }
        expected = (expected + 1) % 4;
    }
    assert_eq!(state.dealer, expected);
    assert!(state.played_cards.is_empty());
    assert_eq!(state.deck.len(), 24);
}

#[test]
fn deal_gives_five_each_and_turns_one() {
    let flow = GameFlow::default();
    let mut state = GameState::new(default_names(), 99);
    let mut script = Script::default();

    step_until(&flow, &mut state, &mut script, StateId::TrumpSelectionOne);

    assert_eq!(state.round_no, 1);
    for player in &state.players {
        assert_eq!(player.hand.len(), 5);
    }
    assert_eq!(state.deck.len(), 3);
    assert!(state.turned_card.is_some());
    assert_eq!(state.current_player, round_start_seat(state.dealer));
}

#[test]
fn all_pass_forces_dealer_without_a_pass_option() {
    let flow = GameFlow::default();
    let mut state = GameState::new(default_names(), 5);
    let mut script = Script::default();

    step_until(&flow, &mut state, &mut script, StateId::TrumpSelectionOne);
    let turned = state.turned_card.unwrap();
    step_until(&flow, &mut state, &mut script, StateId::StartTrickPlay);

    assert_eq!(script.order_up_calls, 4);
    assert_eq!(script.or_pass_calls, 3);
    assert_eq!(script.forced_calls, 1);
    assert_eq!(script.forced_excluded, vec![turned.suit]);
    assert_eq!(state.ordering_player, Some(state.dealer));
    assert_ne!(state.trump, Some(turned.suit));
    // Turned card went back under the kitty.
    assert!(state.turned_card.is_none());
    assert_eq!(state.deck.len(), 4);
}

#[test]
fn naming_the_turned_down_suit_is_asked_again() {
    let flow = GameFlow::default();
    let mut state = GameState::new(default_names(), 5);
    let mut script = Script::default();

    step_until(&flow, &mut state, &mut script, StateId::TrumpSelectionOne);
    let turned = state.turned_card.unwrap();
    step_until(&flow, &mut state, &mut script, StateId::TrumpSelectionTwo);
    let first = state.current_player;

    script.trump.push_back(Some(turned.suit));
    assert_eq!(
        flow.step(&mut state, &mut script).unwrap(),
        StateId::TrumpSelectionTwo
    );
    assert_eq!(state.current_player, first);
    assert_eq!(state.trump, None);

    let other = Suit::ALL.into_iter().find(|&s| s != turned.suit).unwrap();
    script.trump.push_back(Some(other));
    assert_eq!(
        flow.step(&mut state, &mut script).unwrap(),
        StateId::StartTrickPlay
    );
    assert_eq!(state.trump, Some(other));
    assert_eq!(state.ordering_player, Some(first));
}

#[test]
fn order_up_sends_turned_card_to_dealer() {
    let flow = GameFlow::default();
    let mut state = GameState::new(default_names(), 11);
    let mut script = Script::default();

    step_until(&flow, &mut state, &mut script, StateId::TrumpSelectionOne);
    let turned = state.turned_card.unwrap();
    let dealer = state.dealer;
    let orderer = state.current_player;

    // A card still in the kitty cannot be discarded.
    let outsider = state.deck.cards()[0];
    script.order_up.push_back(true);
    script.discards.push_back(outsider);

    assert_eq!(
        flow.step(&mut state, &mut script).unwrap(),
        StateId::DealerPickupTrump
    );
    assert_eq!(state.trump, Some(turned.suit));
    assert_eq!(state.ordering_player, Some(orderer));

    assert_eq!(
        flow.step(&mut state, &mut script).unwrap(),
        StateId::DealerPickupTrump
    );
    assert_eq!(state.player(dealer).hand.len(), 6);
    assert!(state.player(dealer).has_card(turned));
    state.check_card_conservation().unwrap();

    script.discards.push_back(turned);
    assert_eq!(
        flow.step(&mut state, &mut script).unwrap(),
        StateId::StartTrickPlay
    );
    assert_eq!(script.discard_calls, 2);
    assert_eq!(state.player(dealer).hand.len(), 5);
    assert!(!state.player(dealer).has_card(turned));
    assert_eq!(state.deck.len(), 4);
}

#[test]
fn illegal_card_is_rejected_without_mutation() {
    let flow = GameFlow::default();
    let mut state = trick_play_state(HANDS, 3, Suit::Spades, 3);
    let mut script = Script::default();
    script.plays.extend([card("AH"), card("9S"), card("QH"), card("JD"), card("JS")]);

    assert_eq!(flow.step(&mut state, &mut script).unwrap(), StateId::GetPlayerCard);
    assert_eq!(state.current_player, 0);
    step_until(&flow, &mut state, &mut script, StateId::GetPlayerCard);

    // Seat 0 leads the ace of hearts.
    flow.step(&mut state, &mut script).unwrap();
    assert_eq!(flow.step(&mut state, &mut script).unwrap(), StateId::PlayCard);
    assert_eq!(flow.step(&mut state, &mut script).unwrap(), StateId::GetPlayerCard);
    assert_eq!(state.lead_card(), Some(card("AH")));

    // Seat 1 holds the queen of hearts but tries to trump in.
    let hand_before = state.player(1).hand.clone();
    assert_eq!(flow.step(&mut state, &mut script).unwrap(), StateId::CheckValidCard);
    assert_eq!(flow.step(&mut state, &mut script).unwrap(), StateId::GetPlayerCard);
    assert_eq!(state.current_player, 1);
    assert_eq!(state.pending_card, None);
    assert_eq!(state.player(1).hand, hand_before);
    assert_eq!(state.played_cards.len(), 1);

    step_until(&flow, &mut state, &mut script, StateId::GetTrickWinner);
    let plays: Vec<Card> = state.played_cards.iter().map(|&(_, c)| c).collect();
    assert_eq!(plays, cards(&["AH", "QH", "JD", "JS"]));

    // Right bower takes it and leads next.
    assert_eq!(flow.step(&mut state, &mut script).unwrap(), StateId::GetPlayerCard);
    assert_eq!(state.player(3).tricks_taken, 1);
    assert_eq!(state.current_player, 3);
    assert_eq!(state.last_trick.as_ref().map(|t| t.winner), Some(3));
    assert!(state.played_cards.is_empty());
    assert_eq!(state.deck.len(), 8);
    assert_eq!(script.play_calls, 5);
}

#[test]
fn left_bower_must_answer_a_trump_lead() {
    let flow = GameFlow::default();
    let mut state = trick_play_state(HANDS, 2, Suit::Spades, 3);
    let mut script = Script::default();
    // Seat 3 leads; seat 0 then seat 1 must play trump, seat 2 has none.
    script.plays.extend([card("AS"), card("QS"), card("TS"), card("9D")]);

    step_until(&flow, &mut state, &mut script, StateId::GetTrickWinner);
    flow.step(&mut state, &mut script).unwrap();
    assert_eq!(state.player(3).tricks_taken, 1);
    assert_eq!(state.current_player, 3);

    // Seat 3 holds JS and JC: both answer a spade lead, nothing else does.
    let legal = crate::domain::legal_plays(&state.player(3).hand, Suit::Spades, Some(card("9S")));
    assert_eq!(legal, cards(&["JS", "KS", "JC"]));
}

#[test]
fn full_round_scores_and_rotates_the_deal() {
    let flow = GameFlow::default();
    let mut state = trick_play_state(HANDS, 3, Suit::Spades, 3);
    let mut script = Script::default();

    step_until(&flow, &mut state, &mut script, StateId::CheckForWinner);

    let summary = state.last_round.clone().unwrap();
    assert_eq!(summary.ordering_team, Team::Two);
    assert_eq!(summary.team_tricks[0] + summary.team_tricks[1], 5);
    let awarded = state.team_points(summary.scoring_team);
    assert_eq!(awarded, summary.points_awarded);
    assert!(state.players.iter().all(|p| p.tricks_taken == 0));
    assert!(state.players.iter().all(|p| p.hand.is_empty()));

    assert_eq!(
        flow.step(&mut state, &mut script).unwrap(),
        StateId::ResetAndShuffle
    );
    assert_eq!(state.dealer, 0);
    assert_eq!(state.winner, None);
}

#[test]
fn reaching_the_threshold_ends_the_game() {
    let flow = GameFlow::new(GameRules { win_threshold: 2 });
    let mut state = trick_play_state(HANDS, 3, Suit::Spades, 3);
    state.player_mut(1).points = 1;
    state.player_mut(3).points = 1;
    let mut script = Script::default();

    step_until(&flow, &mut state, &mut script, StateId::CheckForWinner);
    let scoring = state.last_round.clone().unwrap().scoring_team;
    if state.team_points(scoring) >= 2 {
        assert_eq!(flow.step(&mut state, &mut script).unwrap(), StateId::EndGame);
        assert_eq!(state.winner, Some(scoring));
        assert!(matches!(
            flow.step(&mut state, &mut script),
            Err(EngineError::GameOver)
        ));
    } else {
        assert_eq!(
            flow.step(&mut state, &mut script).unwrap(),
            StateId::ResetAndShuffle
        );
    }
}

#[test]
fn ordering_team_sweeping_every_trick_marches() {
    let flow = GameFlow::default();
    // Seat 1 orders spades and holds every top trump; partner seat 3 has the rest.
    let hands: [&[&str]; 4] = [
        &["9H", "TH", "QH", "KH", "AH"],
        &["JS", "JC", "AS", "KS", "QS"],
        &["9D", "TD", "QD", "KD", "AD"],
        &["TS", "9S", "AC", "KC", "QC"],
    ];
    let mut state = trick_play_state(hands, 0, Suit::Spades, 1);
    let mut script = Script::default();

    step_until(&flow, &mut state, &mut script, StateId::CheckForWinner);

    let summary = state.last_round.clone().unwrap();
    assert_eq!(summary.outcome, RoundOutcome::March);
    assert_eq!(summary.scoring_team, Team::Two);
    assert_eq!(state.team_points(Team::Two), 2);
    assert_eq!(state.team_points(Team::One), 0);
}

#[test]
fn seeded_games_replay_identically() {
    fn play(seed: u64) -> (Vec<StateId>, GameState) {
        let flow = GameFlow::default();
        let mut state = GameState::new(default_names(), seed);
        let mut script = Script::default();
        let mut seen = Vec::new();
        while state.current_state != StateId::EndGame {
            seen.push(state.current_state);
            flow.step(&mut state, &mut script).unwrap();
            state.check_card_conservation().unwrap();
            assert!(seen.len() < 50_000, "game did not end");
        }
        (seen, state)
    }

    let (a_states, a) = play(77);
    let (b_states, b) = play(77);
    assert_eq!(a_states, b_states);
    assert_eq!(a.winner, b.winner);
    assert_eq!(a.round_no, b.round_no);

    let winner = a.winner.unwrap();
    assert!(a.team_points(winner) >= 10);
    assert!(a.team_points(winner.other()) < 10);
    assert_eq!(a_states[0], StateId::InitRound);
}
