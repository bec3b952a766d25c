//! Core domain types for CodeBreaker
//!
//! Pegs, codes, guesses and feedback. Everything here is pure: no I/O and no
//! hidden state. Randomness is always passed in by the caller.

mod code;
mod feedback;
mod guess;
mod peg;

pub use code::{CODE_LENGTH, Code};
pub use feedback::{COLOR_SYMBOL, EXACT_SYMBOL, Feedback};
pub use guess::{Guess, GuessError, HINT_WORD, Token};
pub use peg::{Peg, PegError};
