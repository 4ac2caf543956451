//! Player decision providers: the only suspension point of the engine.

mod random;
mod trait_def;

pub use random::RandomDecider;
pub use trait_def::{DecisionError, DecisionProvider};
