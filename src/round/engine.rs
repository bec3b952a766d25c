//! Round state machine
//!
//! One `RoundEngine` owns everything a round needs: the secret, the attempt
//! budget and the single hint. It performs no I/O; callers feed it parsed
//! guesses and render the outcomes.

use super::outcome::{Phase, RoundResult, TurnOutcome};
use crate::core::{CODE_LENGTH, Code, Feedback, Guess, Peg};
use log::{debug, info, trace};
use rand::Rng;

/// Attempts granted at the start of every round
pub const STARTING_ATTEMPTS: u8 = 3;

/// Drives a single round of CodeBreaker
///
/// # Examples
/// ```
/// use codebreaker::core::{Code, Guess};
/// use codebreaker::round::{RoundEngine, RoundResult, TurnOutcome};
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let secret = Code::from_values([1, 2, 3, 4]).unwrap();
/// let mut engine = RoundEngine::with_secret(StdRng::seed_from_u64(0), secret);
///
/// let outcome = engine.submit_guess(&Guess::parse("1234").unwrap());
/// assert_eq!(outcome, TurnOutcome::Finished(RoundResult::Won));
/// assert!(engine.is_over());
/// assert_eq!(engine.attempts_remaining(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RoundEngine<R> {
    rng: R,
    secret: Code,
    attempts_remaining: u8,
    hint: Option<Peg>,
    phase: Phase,
}

impl<R: Rng> RoundEngine<R> {
    /// Start a round with a freshly generated secret
    pub fn new(mut rng: R) -> Self {
        let secret = Self::generate_secret(&mut rng);
        Self::with_secret(rng, secret)
    }

    /// Start a round with a known secret
    ///
    /// The rng is still used for hint positions and later resets.
    pub fn with_secret(rng: R, secret: Code) -> Self {
        debug!("Round started with {STARTING_ATTEMPTS} attempts");
        Self {
            rng,
            secret,
            attempts_remaining: STARTING_ATTEMPTS,
            hint: None,
            phase: Phase::AwaitingGuess,
        }
    }

    /// Produce a secret of four independently uniform pegs
    pub fn generate_secret(rng: &mut R) -> Code {
        Code::random(rng)
    }

    /// Discard the current round and begin a new one
    pub fn reset(&mut self) {
        self.secret = Self::generate_secret(&mut self.rng);
        self.attempts_remaining = STARTING_ATTEMPTS;
        self.hint = None;
        self.phase = Phase::AwaitingGuess;
        debug!("Round reset with {STARTING_ATTEMPTS} attempts");
    }

    /// Score a guess against a secret
    #[must_use]
    pub fn evaluate(secret: &Code, guess: &Guess) -> Feedback {
        Feedback::calculate(secret, guess)
    }

    /// A guess is a hint request only while the hint is still unused
    #[must_use]
    pub fn is_hint_request(&self, guess: &Guess) -> bool {
        self.hint.is_none() && guess.spells_hint()
    }

    /// Reveal the peg at a uniformly random position
    ///
    /// Does not spend an attempt. The turn logic only reaches this once per
    /// round; a direct second call overwrites the recorded hint.
    pub fn apply_hint(&mut self) -> Peg {
        let position = self.rng.random_range(0..CODE_LENGTH);
        self.reveal_hint_at(position)
    }

    /// Reveal the peg at a chosen position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    pub fn reveal_hint_at(&mut self, position: usize) -> Peg {
        let peg = self.secret.peg_at(position);
        self.hint = Some(peg);
        debug!("Hint revealed at position {position}");
        peg
    }

    /// Play one turn
    ///
    /// A hint request reveals a peg and leaves the attempt budget alone. Any
    /// other guess spends one attempt, then either wins, loses (budget
    /// exhausted) or reports feedback. Once the round is over further guesses
    /// change nothing and repeat the final result.
    pub fn submit_guess(&mut self, guess: &Guess) -> TurnOutcome {
        if let Phase::RoundOver(result) = self.phase {
            return TurnOutcome::Finished(result);
        }

        if self.is_hint_request(guess) {
            return TurnOutcome::Hint(self.apply_hint());
        }

        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        let feedback = Self::evaluate(&self.secret, guess);
        trace!(
            "Guess {guess} scored '{feedback}', {} attempts left",
            self.attempts_remaining
        );

        if feedback.is_solved() {
            self.finish(RoundResult::Won)
        } else if self.attempts_remaining == 0 {
            self.finish(RoundResult::Lost)
        } else {
            TurnOutcome::Feedback(feedback)
        }
    }

    fn finish(&mut self, result: RoundResult) -> TurnOutcome {
        info!(
            "Round finished: {result:?} with {} attempts remaining",
            self.attempts_remaining
        );
        self.phase = Phase::RoundOver(result);
        TurnOutcome::Finished(result)
    }
}

impl<R> RoundEngine<R> {
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    #[inline]
    #[must_use]
    pub const fn attempts_remaining(&self) -> u8 {
        self.attempts_remaining
    }

    #[inline]
    #[must_use]
    pub const fn hint_used(&self) -> bool {
        self.hint.is_some()
    }

    /// The revealed hint peg, if the hint was spent
    #[inline]
    #[must_use]
    pub const fn hint_value(&self) -> Option<Peg> {
        self.hint
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        matches!(self.phase, Phase::RoundOver(_))
    }

    /// The final result once the round is over
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        match self.phase {
            Phase::RoundOver(result) => Some(result),
            Phase::AwaitingGuess => None,
        }
    }
}
