//! Secret code representation

use super::peg::{Peg, PegError};
use rand::Rng;
use std::fmt;

/// Number of pegs in every code and guess
pub const CODE_LENGTH: usize = 4;

/// A four-peg code, the thing the player is trying to guess
///
/// Immutable once built; a new round builds a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code([Peg; CODE_LENGTH]);

impl Code {
    #[must_use]
    pub const fn new(pegs: [Peg; CODE_LENGTH]) -> Self {
        Self(pegs)
    }

    /// Build a code from raw digit values
    ///
    /// # Errors
    /// Returns the first `PegError` if any value is outside `1..=6`.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Code;
    ///
    /// let code = Code::from_values([1, 2, 3, 4]).unwrap();
    /// assert_eq!(code.to_string(), "1234");
    /// assert!(Code::from_values([1, 2, 3, 9]).is_err());
    /// ```
    pub fn from_values(values: [u8; CODE_LENGTH]) -> Result<Self, PegError> {
        let [a, b, c, d] = values;
        Ok(Self([Peg::new(a)?, Peg::new(b)?, Peg::new(c)?, Peg::new(d)?]))
    }

    /// Generate a code of independently uniform pegs
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(std::array::from_fn(|_| Peg::random(rng)))
    }

    #[inline]
    #[must_use]
    pub const fn pegs(&self) -> &[Peg; CODE_LENGTH] {
        &self.0
    }

    /// Get the peg at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn peg_at(&self, position: usize) -> Peg {
        self.0[position]
    }

    /// Check whether the peg appears anywhere in the code
    #[inline]
    #[must_use]
    pub fn contains(&self, peg: Peg) -> bool {
        self.0.contains(&peg)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in &self.0 {
            write!(f, "{peg}")?;
        }
        Ok(())
    }
}
