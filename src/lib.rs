//! CodeBreaker
//!
//! A terminal code-guessing game: find the hidden four-digit code (digits 1-6)
//! within three attempts, with one optional hint per round.
//!
//! # Quick Start
//!
//! ```rust
//! use codebreaker::core::{Code, Feedback, Guess};
//!
//! let secret = Code::from_values([1, 2, 3, 4]).unwrap();
//! let guess = Guess::parse("3245").unwrap();
//!
//! let feedback = Feedback::calculate(&secret, &guess);
//! assert_eq!(feedback.to_string(), "+--");
//! ```

// Core domain types
pub mod core;

// Round state machine
pub mod round;

// Saved results
pub mod scorebook;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Console prompting
pub mod interactive;
