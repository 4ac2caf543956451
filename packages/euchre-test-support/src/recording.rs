use euchre::{GameSnapshot, GameTransition, Presenter, StateId};

/// Presenter that keeps every snapshot and transition it receives.
#[derive(Debug, Default, Clone)]
pub struct RecordingPresenter {
    pub snapshots: Vec<GameSnapshot>,
    pub transitions: Vec<GameTransition>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// State of every snapshot, in the order presented.
    pub fn states(&self) -> Vec<StateId> {
        self.snapshots.iter().map(|s| s.state).collect()
    }

    pub fn last(&self) -> Option<&GameSnapshot> {
        self.snapshots.last()
    }

    /// Transitions matching `pred`.
    pub fn transitions_where<F>(&self, pred: F) -> Vec<&GameTransition>
    where
        F: Fn(&GameTransition) -> bool,
    {
        self.transitions.iter().filter(|t| pred(t)).collect()
    }
}

impl Presenter for RecordingPresenter {
    fn present(&mut self, snapshot: &GameSnapshot, transitions: &[GameTransition]) {
        self.snapshots.push(snapshot.clone());
        self.transitions.extend_from_slice(transitions);
    }
}
