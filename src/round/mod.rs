//! Round lifecycle
//!
//! The turn state machine: submit guesses until the round is won or the
//! attempts run out.

mod engine;
mod outcome;

pub use engine::{RoundEngine, STARTING_ATTEMPTS};
pub use outcome::{Phase, RoundResult, TurnOutcome};
