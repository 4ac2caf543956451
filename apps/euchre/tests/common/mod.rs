#![allow(dead_code)]

use euchre::{DecisionProvider, Engine, EngineConfig, Presenter, StateId};

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    euchre_test_support::logging::init();
}

pub fn seeded_config(seed: u64) -> EngineConfig {
    EngineConfig::default().with_seed(seed)
}

/// Step until `target` is the current state; panics if the game ends first.
pub fn step_until<D, P>(engine: &mut Engine<D, P>, target: StateId)
where
    D: DecisionProvider,
    P: Presenter,
{
    while engine.state().current_state != target {
        assert!(!engine.is_over(), "game ended before reaching {target}");
        engine.step().expect("step should succeed");
    }
}
