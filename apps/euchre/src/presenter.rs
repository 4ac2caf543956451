//! Presenters receive a snapshot after every state transition.

use tracing::{debug, info};

use crate::domain::{GameSnapshot, GameTransition};

/// Read-only observer of the game. Nothing it returns flows back into play.
pub trait Presenter {
    fn present(&mut self, snapshot: &GameSnapshot, transitions: &[GameTransition]);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn present(&mut self, _snapshot: &GameSnapshot, _transitions: &[GameTransition]) {}
}

/// Logs transitions at `info` and each snapshot state at `debug`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingPresenter;

impl Presenter for TracingPresenter {
    fn present(&mut self, snapshot: &GameSnapshot, transitions: &[GameTransition]) {
        debug!(
            state = %snapshot.state,
            round = snapshot.round_no,
            current = snapshot.current_player,
            deck = snapshot.deck_size,
            "snapshot"
        );
        for transition in transitions {
            info!(round = snapshot.round_no, ?transition, "game transition");
        }
    }
}

impl<T: Presenter + ?Sized> Presenter for Box<T> {
    fn present(&mut self, snapshot: &GameSnapshot, transitions: &[GameTransition]) {
        (**self).present(snapshot, transitions)
    }
}
