pub const PLAYERS: usize = 4;
pub const HAND_SIZE: usize = 5;
pub const DECK_SIZE: usize = 24;
/// Cards left undealt after every hand has five.
pub const KITTY_SIZE: usize = DECK_SIZE - PLAYERS * HAND_SIZE;
pub const TRICKS_PER_ROUND: u8 = HAND_SIZE as u8;
pub const DEFAULT_WIN_THRESHOLD: u16 = 10;

/// Cards handed out per seat on each pass of the deal, in seat order starting
/// left of the dealer. Every seat ends with 2 + 3 = 5.
pub const DEAL_PASSES: [[usize; PLAYERS]; 2] = [[2, 3, 2, 3], [3, 2, 3, 2]];

/// Tunable rules for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    /// Team points needed to win the game.
    pub win_threshold: u16,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            win_threshold: DEFAULT_WIN_THRESHOLD,
        }
    }
}
