//! Turn and round results

use crate::core::{Feedback, Peg};

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundResult {
    Won,
    Lost,
}

/// Where the round is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingGuess,
    RoundOver(RoundResult),
}

/// What happened after one submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The hint was spent; this peg appears in the secret
    Hint(Peg),
    /// A miss with attempts left
    Feedback(Feedback),
    /// Terminal: the round is over
    Finished(RoundResult),
}

impl TurnOutcome {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Finished(_))
    }
}
