//! Guess feedback calculation and representation
//!
//! Feedback is a multiset over two symbols:
//! - `+` exact match (right peg, right position)
//! - `-` color match (peg appears somewhere else in the secret)
//!
//! Only the counts matter, so the feedback is stored as two counters and
//! rendered sorted: every `+` before every `-`.

use super::code::{CODE_LENGTH, Code};
use super::guess::Guess;
use std::fmt;

/// Symbol for a peg in the correct position
pub const EXACT_SYMBOL: char = '+';

/// Symbol for a peg present in the secret at another position
pub const COLOR_SYMBOL: char = '-';

/// Feedback for one guess against a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback {
    exact: u8,
    color: u8,
}

impl Feedback {
    /// Four exact matches
    pub const SOLVED: Self = Self {
        exact: CODE_LENGTH as u8,
        color: 0,
    };

    /// Calculate the feedback when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// For each position independently:
    /// 1. Same peg as the secret at that position: exact match
    /// 2. Otherwise, peg found anywhere in the secret: color match
    /// 3. Otherwise: nothing
    ///
    /// Color matches use plain containment and are not limited by how often a
    /// peg occurs in the secret. A guess repeating a peg that the secret holds
    /// once earns a color match at every non-exact repeat.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::{Code, Feedback, Guess};
    ///
    /// let secret = Code::from_values([1, 2, 3, 4]).unwrap();
    /// let guess = Guess::parse("3245").unwrap();
    /// let feedback = Feedback::calculate(&secret, &guess);
    ///
    /// assert_eq!(feedback.exact(), 1);
    /// assert_eq!(feedback.color(), 2);
    /// assert_eq!(feedback.to_string(), "+--");
    /// ```
    #[must_use]
    pub fn calculate(secret: &Code, guess: &Guess) -> Self {
        let mut feedback = Self::default();

        for (position, token) in guess.tokens().iter().enumerate() {
            let Some(peg) = token.peg() else {
                continue;
            };

            if secret.peg_at(position) == peg {
                feedback.exact += 1;
            } else if secret.contains(peg) {
                feedback.color += 1;
            }
        }

        feedback
    }

    /// Number of exact matches
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Number of color matches
    #[inline]
    #[must_use]
    pub const fn color(self) -> u8 {
        self.color
    }

    /// Total number of symbols
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        (self.exact + self.color) as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Check if every position is an exact match
    #[inline]
    #[must_use]
    pub const fn is_solved(self) -> bool {
        self.exact as usize == CODE_LENGTH
    }

    /// The individual symbols in display order
    #[must_use]
    pub fn symbols(self) -> Vec<char> {
        std::iter::repeat_n(EXACT_SYMBOL, usize::from(self.exact))
            .chain(std::iter::repeat_n(COLOR_SYMBOL, usize::from(self.color)))
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}
