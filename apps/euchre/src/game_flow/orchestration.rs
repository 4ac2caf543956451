use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::GameFlow;
use crate::config::EngineConfig;
use crate::decision::DecisionProvider;
use crate::domain::snapshot::GameSnapshot;
use crate::domain::state::{GameState, StateId, Team};
use crate::domain::{derive_game_transitions, DomainError};
use crate::error::EngineError;
use crate::presenter::Presenter;

/// Upper bound on steps for a single round, re-prompts included.
const MAX_STEPS_PER_ROUND: usize = 256;

/// Final result of a completed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub winning_team: Team,
    /// Indexed by `Team::index`.
    pub team_points: [u16; 2],
    pub rounds_played: u16,
    pub seed: u64,
}

/// Drives one game from `InitRound` to `EndGame`.
///
/// Owns the game state, the decision provider and the presenter. After every
/// step the card total is re-checked and the presenter receives a fresh
/// snapshot together with the transitions that step produced.
pub struct Engine<D, P> {
    flow: GameFlow,
    state: GameState,
    decider: D,
    presenter: P,
    history: Vec<StateId>,
    last_snapshot: GameSnapshot,
}

impl<D, P> Engine<D, P>
where
    D: DecisionProvider,
    P: Presenter,
{
    pub fn new(config: EngineConfig, decider: D, presenter: P) -> Result<Self, EngineError> {
        config.validate()?;
        let seed = match config.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                info!(seed, "No seed configured; drew one from entropy");
                seed
            }
        };

        let state = GameState::new(config.player_names.clone(), seed);
        let last_snapshot = GameSnapshot::capture(&state);
        info!(
            seed,
            win_threshold = config.win_threshold,
            "Engine created"
        );

        Ok(Self {
            flow: GameFlow::new(config.rules()),
            state,
            decider,
            presenter,
            history: Vec::new(),
            last_snapshot,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Every state executed so far, in order.
    pub fn history(&self) -> &[StateId] {
        &self.history
    }

    pub fn seed(&self) -> u64 {
        self.state.game_seed
    }

    pub fn is_over(&self) -> bool {
        self.state.current_state.is_terminal()
    }

    pub fn decider(&self) -> &D {
        &self.decider
    }

    /// Hosts may feed a provider between steps; the engine never holds it across one.
    pub fn decider_mut(&mut self) -> &mut D {
        &mut self.decider
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Execute the current state once.
    pub fn step(&mut self) -> Result<StateId, EngineError> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }

        let current = self.state.current_state;
        self.history.push(current);
        let next = self.flow.step(&mut self.state, &mut self.decider)?;

        if let Err(err) = self.state.check_card_conservation() {
            warn!(state = %current, error = %err, "Card total broken after step");
            return Err(err.into());
        }

        let snapshot = GameSnapshot::capture(&self.state);
        let transitions = derive_game_transitions(&self.last_snapshot, &snapshot);
        self.presenter.present(&snapshot, &transitions);
        self.last_snapshot = snapshot;

        Ok(next)
    }

    /// Step until a team wins.
    pub fn run(&mut self) -> Result<GameOutcome, EngineError> {
        let max_rounds = 2 * usize::from(self.flow.rules().win_threshold) + 1;
        let max_steps = MAX_STEPS_PER_ROUND * max_rounds;

        for _ in 0..max_steps {
            if self.is_over() {
                return self.outcome();
            }
            self.step()?;
        }

        if self.is_over() {
            return self.outcome();
        }
        Err(DomainError::invariant(format!(
            "game did not finish within {max_steps} steps"
        ))
        .into())
    }

    /// Result of the game, available once it has ended.
    pub fn outcome(&self) -> Result<GameOutcome, EngineError> {
        let winning_team = self
            .state
            .winner
            .ok_or_else(|| DomainError::invariant("game has no winner yet"))?;
        let outcome = GameOutcome {
            winning_team,
            team_points: [
                self.state.team_points(Team::One),
                self.state.team_points(Team::Two),
            ],
            rounds_played: self.state.round_no,
            seed: self.state.game_seed,
        };
        debug!(?outcome, "Outcome");
        Ok(outcome)
    }

    pub fn into_parts(self) -> (GameState, D, P) {
        (self.state, self.decider, self.presenter)
    }
}

impl<D, P> std::fmt::Debug for Engine<D, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("state", &self.state.current_state)
            .field("round_no", &self.state.round_no)
            .field("seed", &self.state.game_seed)
            .field("steps", &self.history.len())
            .finish()
    }
}
