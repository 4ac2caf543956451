use serde::{Deserialize, Serialize};

use crate::domain::deck::Deck;
use crate::domain::errors::DomainError;
use crate::domain::player::Player;
use crate::domain::rules::{DECK_SIZE, PLAYERS};
use crate::domain::seed_derivation::derive_shuffle_seed;
use crate::domain::{Card, Suit};

pub type Seat = u8; // 0..=3

/// Partnerships: seats 0 & 2 against seats 1 & 3.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::One, Team::Two];

    pub fn seats(self) -> [Seat; 2] {
        match self {
            Team::One => [0, 2],
            Team::Two => [1, 3],
        }
    }

    pub fn other(self) -> Team {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Team::One => 0,
            Team::Two => 1,
        }
    }
}

#[inline]
pub fn team_of(seat: Seat) -> Team {
    if seat % 2 == 0 {
        Team::One
    } else {
        Team::Two
    }
}

/// Returns the next seat clockwise (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    (seat + 1) % PLAYERS as Seat
}

#[inline]
pub fn partner_of(seat: Seat) -> Seat {
    (seat + 2) % PLAYERS as Seat
}

/// Seat to the left of the dealer: first to deal to, bid and lead.
#[inline]
pub fn round_start_seat(dealer: Seat) -> Seat {
    next_seat(dealer)
}

/// Named states of the game machine.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StateId {
    InitRound,
    DetermineDealer,
    ResetAndShuffle,
    DealCards,
    RevealTopCard,
    TrumpSelectionOne,
    DealerPickupTrump,
    TrumpSelectionTwo,
    StartTrickPlay,
    GetPlayerCard,
    CheckValidCard,
    PlayCard,
    GetTrickWinner,
    GivePoints,
    CheckForWinner,
    EndGame,
}

impl StateId {
    pub fn name(self) -> &'static str {
        match self {
            StateId::InitRound => "INIT_ROUND",
            StateId::DetermineDealer => "DETERMINE_DEALER",
            StateId::ResetAndShuffle => "RESET_AND_SHUFFLE",
            StateId::DealCards => "DEAL_CARDS",
            StateId::RevealTopCard => "REVEAL_TOP_CARD",
            StateId::TrumpSelectionOne => "TRUMP_SELECTION_ONE",
            StateId::DealerPickupTrump => "DEALER_PICKUP_TRUMP",
            StateId::TrumpSelectionTwo => "TRUMP_SELECTION_TWO",
            StateId::StartTrickPlay => "START_TRICK_PLAY",
            StateId::GetPlayerCard => "GET_PLAYER_CARD",
            StateId::CheckValidCard => "CHECK_VALID_CARD",
            StateId::PlayCard => "PLAY_CARD",
            StateId::GetTrickWinner => "GET_TRICK_WINNER",
            StateId::GivePoints => "GIVE_POINTS",
            StateId::CheckForWinner => "CHECK_FOR_WINNER",
            StateId::EndGame => "END_GAME",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == StateId::EndGame
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundOutcome {
    /// Ordering team took all five tricks.
    March,
    /// Ordering team took three or four.
    Made,
    /// Ordering team took fewer than three.
    Euchred,
}

/// A finished trick, kept for display until the next one completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTrick {
    pub plays: Vec<(Seat, Card)>,
    pub winner: Seat,
}

/// Result of the most recently scored round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round_no: u16,
    pub trump: Suit,
    pub ordering_seat: Seat,
    pub ordering_team: Team,
    /// Tricks per team, indexed by `Team::index`.
    pub team_tricks: [u8; 2],
    pub outcome: RoundOutcome,
    pub scoring_team: Team,
    pub points_awarded: u16,
}

/// Entire game container owned by the state machine.
#[derive(Debug, Clone)]
pub struct GameState {
    pub deck: Deck,
    pub players: [Player; PLAYERS],
    pub dealer: Seat,
    /// Seat expected to act next.
    pub current_player: Seat,
    pub trump: Option<Suit>,
    /// Kitty card turned face up for the first round of trump selection.
    pub turned_card: Option<Card>,
    /// Seat that ordered up or named trump this round.
    pub ordering_player: Option<Seat>,
    /// Ordered plays of the current trick (who, card). During dealer
    /// determination it holds the cards drawn so far.
    pub played_cards: Vec<(Seat, Card)>,
    /// Card chosen by the current player, awaiting legality check. Still in hand.
    pub pending_card: Option<Card>,
    pub current_state: StateId,
    /// 1-based once the first deal happens.
    pub round_no: u16,
    /// Base seed every shuffle seed is derived from.
    pub game_seed: u64,
    /// Shuffles performed so far.
    pub shuffle_count: u32,
    pub last_trick: Option<CompletedTrick>,
    pub last_round: Option<RoundSummary>,
    pub winner: Option<Team>,
}

impl GameState {
    /// Fresh game: all 24 cards in the deck, nobody dealt yet.
    pub fn new(names: [String; PLAYERS], game_seed: u64) -> Self {
        let [n0, n1, n2, n3] = names;
        Self {
            deck: Deck::new(),
            players: [
                Player::new(n0, 0),
                Player::new(n1, 1),
                Player::new(n2, 2),
                Player::new(n3, 3),
            ],
            dealer: 0,
            current_player: 0,
            trump: None,
            turned_card: None,
            ordering_player: None,
            played_cards: Vec::with_capacity(PLAYERS),
            pending_card: None,
            current_state: StateId::InitRound,
            round_no: 0,
            game_seed,
            shuffle_count: 0,
            last_trick: None,
            last_round: None,
            winner: None,
        }
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat as usize]
    }

    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat as usize]
    }

    pub fn current(&self) -> &Player {
        self.player(self.current_player)
    }

    pub fn advance_current_player(&mut self) {
        self.current_player = next_seat(self.current_player);
    }

    /// First card of the current trick.
    pub fn lead_card(&self) -> Option<Card> {
        self.played_cards.first().map(|&(_, card)| card)
    }

    /// Cumulative points of a partnership (both members always hold the same total).
    pub fn team_points(&self, team: Team) -> u16 {
        self.player(team.seats()[0]).points
    }

    pub fn team_tricks(&self, team: Team) -> u8 {
        team.seats()
            .iter()
            .map(|&s| self.player(s).tricks_taken)
            .sum()
    }

    /// Seed for the next shuffle; bumps the shuffle counter.
    pub fn next_shuffle_seed(&mut self) -> u64 {
        let seed = derive_shuffle_seed(self.game_seed, self.shuffle_count);
        self.shuffle_count += 1;
        seed
    }

    /// Move every hand, played and turned card back into the deck.
    pub fn gather_cards(&mut self) {
        for player in self.players.iter_mut() {
            let cards = player.return_all_cards();
            self.deck.return_cards(cards);
            player.played_card = None;
        }
        let played: Vec<Card> = self.played_cards.drain(..).map(|(_, c)| c).collect();
        self.deck.return_cards(played);
        if let Some(card) = self.turned_card.take() {
            self.deck.return_card(card);
        }
        self.pending_card = None;
    }

    /// Cards currently accounted for: deck, hands, current trick, turned card.
    pub fn card_count(&self) -> usize {
        self.deck.len()
            + self.players.iter().map(|p| p.hand.len()).sum::<usize>()
            + self.played_cards.len()
            + usize::from(self.turned_card.is_some())
    }

    pub fn check_card_conservation(&self) -> Result<(), DomainError> {
        let count = self.card_count();
        if count != DECK_SIZE {
            return Err(DomainError::invariant(format!(
                "card count is {count}, expected {DECK_SIZE} ({})",
                self.current_state
            )));
        }
        Ok(())
    }
}

pub fn require_trump(state: &GameState, ctx: &'static str) -> Result<Suit, DomainError> {
    state
        .trump
        .ok_or_else(|| DomainError::invariant(format!("trump must be set ({ctx})")))
}

pub fn require_turned_card(state: &GameState, ctx: &'static str) -> Result<Card, DomainError> {
    state
        .turned_card
        .ok_or_else(|| DomainError::invariant(format!("turned card must be set ({ctx})")))
}

pub fn require_ordering_player(state: &GameState, ctx: &'static str) -> Result<Seat, DomainError> {
    state
        .ordering_player
        .ok_or_else(|| DomainError::invariant(format!("ordering player must be set ({ctx})")))
}

pub fn require_pending_card(state: &GameState, ctx: &'static str) -> Result<Card, DomainError> {
    state
        .pending_card
        .ok_or_else(|| DomainError::invariant(format!("pending card must be set ({ctx})")))
}
