//! Engine configuration.
//!
//! Defaults are playable as-is; hosts may load a JSON document or layer
//! environment overrides on top.

use std::env;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{GameRules, DEFAULT_WIN_THRESHOLD, PLAYERS};
use crate::error::EngineError;

pub const ENV_WIN_THRESHOLD: &str = "EUCHRE_WIN_THRESHOLD";
pub const ENV_SEED: &str = "EUCHRE_SEED";

/// Settings for a single game.
///
/// # Example JSON Config
///
/// ```json
/// {"win_threshold": 10, "seed": 12345}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Team points needed to win. Standard play goes to 10.
    pub win_threshold: u16,

    /// Base seed for every shuffle. `None` draws one from OS entropy at
    /// engine start; the chosen seed is logged so the game can be replayed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Display names by seat.
    pub player_names: [String; PLAYERS],
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            win_threshold: DEFAULT_WIN_THRESHOLD,
            seed: None,
            player_names: std::array::from_fn(|i| format!("Player {}", i + 1)),
        }
    }
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_win_threshold(mut self, win_threshold: u16) -> Self {
        self.win_threshold = win_threshold;
        self
    }

    /// Parse a JSON document; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EngineError::config(format!("invalid engine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults overridden by `EUCHRE_WIN_THRESHOLD` and `EUCHRE_SEED`.
    pub fn from_env() -> Result<Self, EngineError> {
        let mut config = Self::default();
        if let Some(threshold) = parse_var::<u16>(ENV_WIN_THRESHOLD)? {
            config.win_threshold = threshold;
        }
        if let Some(seed) = parse_var::<u64>(ENV_SEED)? {
            config.seed = Some(seed);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.win_threshold == 0 {
            return Err(EngineError::config("win_threshold must be at least 1"));
        }
        if let Some(seat) = self.player_names.iter().position(|n| n.trim().is_empty()) {
            return Err(EngineError::config(format!(
                "player name for seat {seat} must not be empty"
            )));
        }
        Ok(())
    }

    pub fn rules(&self) -> GameRules {
        GameRules {
            win_threshold: self.win_threshold,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>, EngineError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| EngineError::config(format!("{name} has invalid value '{raw}'"))),
        Err(_) => Ok(None),
    }
}
