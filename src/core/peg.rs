//! A single code peg
//!
//! Pegs are the digits 1-6. Every secret and every numeric guess position holds one.

use rand::Rng;
use std::fmt;

/// One digit of a code, always within `Peg::MIN..=Peg::MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Peg(u8);

/// Error type for out-of-range peg values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PegError {
    OutOfRange(u8),
}

impl fmt::Display for PegError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(value) => write!(
                f,
                "Peg must be between {} and {}, got {value}",
                Peg::MIN,
                Peg::MAX
            ),
        }
    }
}

impl std::error::Error for PegError {}

impl Peg {
    /// Smallest peg value
    pub const MIN: u8 = 1;

    /// Largest peg value
    pub const MAX: u8 = 6;

    /// Create a peg from its digit value
    ///
    /// # Errors
    /// Returns `PegError::OutOfRange` unless `value` is in `1..=6`.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Peg;
    ///
    /// assert_eq!(Peg::new(3).unwrap().value(), 3);
    /// assert!(Peg::new(0).is_err());
    /// assert!(Peg::new(7).is_err());
    /// ```
    pub const fn new(value: u8) -> Result<Self, PegError> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(PegError::OutOfRange(value))
        }
    }

    /// Parse an ASCII digit character, accepting only '1' through '6'
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10)
            .and_then(|digit| Self::new(u8::try_from(digit).ok()?).ok())
    }

    /// Draw a uniformly random peg
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(Self::MIN..=Self::MAX))
    }

    /// Get the digit value (1-6)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Peg {
    type Error = PegError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn peg_accepts_full_range() {
        for value in 1..=6 {
            assert_eq!(Peg::new(value).unwrap().value(), value);
        }
    }

    #[test]
    fn peg_rejects_out_of_range() {
        assert_eq!(Peg::new(0), Err(PegError::OutOfRange(0)));
        assert_eq!(Peg::new(7), Err(PegError::OutOfRange(7)));
        assert!(Peg::try_from(255).is_err());
    }

    #[test]
    fn peg_from_char() {
        assert_eq!(Peg::from_char('1'), Some(Peg(1)));
        assert_eq!(Peg::from_char('6'), Some(Peg(6)));
        assert_eq!(Peg::from_char('0'), None);
        assert_eq!(Peg::from_char('7'), None);
        assert_eq!(Peg::from_char('h'), None);
    }

    #[test]
    fn random_pegs_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let peg = Peg::random(&mut rng);
            assert!((Peg::MIN..=Peg::MAX).contains(&peg.value()));
            seen[usize::from(peg.value())] = true;
        }
        // 500 draws cover every face
        assert!(seen[1..].iter().all(|&hit| hit));
    }

    #[test]
    fn peg_error_display() {
        assert_eq!(
            PegError::OutOfRange(9).to_string(),
            "Peg must be between 1 and 6, got 9"
        );
    }
}
