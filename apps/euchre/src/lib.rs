#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod decision;
pub mod domain;
pub mod error;
pub mod game_flow;
pub mod presenter;
pub mod telemetry;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use config::EngineConfig;
pub use decision::{DecisionError, DecisionProvider, RandomDecider};
pub use domain::{
    Card, DomainError, GameSnapshot, GameState, GameTransition, Player, Rank, Seat, StateId, Suit,
    Team,
};
pub use error::EngineError;
pub use game_flow::{Engine, GameFlow, GameOutcome};
pub use presenter::{NullPresenter, Presenter, TracingPresenter};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
