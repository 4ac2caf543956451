//! Euchre test support utilities
//!
//! Helpers shared by the engine's integration tests: unified logging
//! initialization, a decision provider that replays scripted answers, and a
//! presenter that records everything it is shown.

pub mod logging;
pub mod recording;
pub mod scripted;

pub use recording::RecordingPresenter;
pub use scripted::ScriptedDecider;
