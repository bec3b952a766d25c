//! Player guess parsing
//!
//! A guess line is scanned for acceptable characters: the digits 1-6 and the
//! letters of the word "hint". Everything else is ignored. The line is accepted
//! only when exactly four acceptable characters were found.

use super::code::{CODE_LENGTH, Code};
use super::peg::Peg;
use std::fmt;
use std::str::FromStr;

/// The word that asks for a hint instead of spending an attempt
pub const HINT_WORD: &str = "hint";

/// One scanned position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Peg(Peg),
    /// A letter from the hint word; never matches a secret peg
    Letter(char),
}

impl Token {
    fn scan(ch: char) -> Option<Self> {
        if let Some(peg) = Peg::from_char(ch) {
            return Some(Self::Peg(peg));
        }
        HINT_WORD.contains(ch).then_some(Self::Letter(ch))
    }

    /// The peg at this position, if it is one
    #[inline]
    #[must_use]
    pub const fn peg(self) -> Option<Peg> {
        match self {
            Self::Peg(peg) => Some(peg),
            Self::Letter(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Peg(peg) => write!(f, "{peg}"),
            Self::Letter(ch) => write!(f, "{ch}"),
        }
    }
}

/// A validated four-token guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Guess([Token; CODE_LENGTH]);

/// Why a guess line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    /// The line held this many acceptable characters instead of four
    WrongTokenCount(usize),
}

impl fmt::Display for GuessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongTokenCount(count) => write!(
                f,
                "Guess must contain exactly {CODE_LENGTH} of the characters 1-6 or '{HINT_WORD}', got {count}"
            ),
        }
    }
}

impl std::error::Error for GuessError {}

impl Guess {
    #[must_use]
    pub const fn new(tokens: [Token; CODE_LENGTH]) -> Self {
        Self(tokens)
    }

    /// Scan a raw input line into a guess
    ///
    /// # Errors
    /// Returns `GuessError::WrongTokenCount` unless exactly four acceptable
    /// characters appear in the line.
    ///
    /// # Examples
    /// ```
    /// use codebreaker::core::Guess;
    ///
    /// let guess = Guess::parse("1 2, 3-4").unwrap();
    /// assert_eq!(guess.to_string(), "1234");
    ///
    /// assert!(Guess::parse("hint").unwrap().spells_hint());
    /// assert!(Guess::parse("12345").is_err());
    /// assert!(Guess::parse("129").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Self, GuessError> {
        let tokens: Vec<Token> = line.chars().filter_map(Token::scan).collect();
        let count = tokens.len();

        <[Token; CODE_LENGTH]>::try_from(tokens)
            .map(Self)
            .map_err(|_| GuessError::WrongTokenCount(count))
    }

    #[inline]
    #[must_use]
    pub const fn tokens(&self) -> &[Token; CODE_LENGTH] {
        &self.0
    }

    /// Get the token at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn token_at(&self, position: usize) -> Token {
        self.0[position]
    }

    /// Check whether the four tokens read "hint" in order
    #[must_use]
    pub fn spells_hint(&self) -> bool {
        self.0
            .iter()
            .map(|token| match token {
                Token::Letter(ch) => Some(*ch),
                Token::Peg(_) => None,
            })
            .eq(HINT_WORD.chars().map(Some))
    }
}

impl From<Code> for Guess {
    fn from(code: Code) -> Self {
        Self((*code.pegs()).map(Token::Peg))
    }
}

impl FromStr for Guess {
    type Err = GuessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.0 {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peg(value: u8) -> Token {
        Token::Peg(Peg::new(value).unwrap())
    }

    #[test]
    fn parse_plain_digits() {
        let guess = Guess::parse("1111").unwrap();
        assert_eq!(guess.tokens(), &[peg(1), peg(1), peg(1), peg(1)]);
    }

    #[test]
    fn parse_ignores_separators_and_noise() {
        let guess = Guess::parse("  6,5 x 4;3\n").unwrap();
        assert_eq!(guess.tokens(), &[peg(6), peg(5), peg(4), peg(3)]);
    }

    #[test]
    fn parse_ignores_digits_outside_range() {
        // 0, 7, 8, 9 are not pegs and are skipped like any other noise
        let guess = Guess::parse("10273849").unwrap();
        assert_eq!(guess.tokens(), &[peg(1), peg(2), peg(3), peg(4)]);
    }

    #[test]
    fn parse_wrong_count() {
        assert_eq!(Guess::parse("11111"), Err(GuessError::WrongTokenCount(5)));
        assert_eq!(Guess::parse("123"), Err(GuessError::WrongTokenCount(3)));
        assert_eq!(Guess::parse(""), Err(GuessError::WrongTokenCount(0)));
        assert_eq!(Guess::parse("abc"), Err(GuessError::WrongTokenCount(0)));
    }

    #[test]
    fn parse_hint_letters() {
        let guess = Guess::parse("hint").unwrap();
        assert_eq!(
            guess.tokens(),
            &[
                Token::Letter('h'),
                Token::Letter('i'),
                Token::Letter('n'),
                Token::Letter('t')
            ]
        );
        assert!(guess.spells_hint());
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!(Guess::parse("HINT").is_err());
    }

    #[test]
    fn mixed_letters_and_digits_are_a_guess_but_not_a_hint() {
        let guess = Guess::parse("h1nt").unwrap();
        assert_eq!(guess.token_at(1), peg(1));
        assert!(!guess.spells_hint());
    }

    #[test]
    fn scrambled_hint_letters_do_not_spell_hint() {
        assert!(!Guess::parse("iht n").unwrap().spells_hint());
        assert!(!Guess::parse("think").unwrap().spells_hint());
    }

    #[test]
    fn guess_from_code() {
        let code = Code::from_values([1, 2, 3, 4]).unwrap();
        let guess = Guess::from(code);
        assert_eq!(guess.to_string(), "1234");
        assert!(guess.tokens().iter().all(|t| t.peg().is_some()));
    }

    #[test]
    fn guess_from_str() {
        let guess: Guess = "5 5 5 5".parse().unwrap();
        assert_eq!(guess.to_string(), "5555");
    }

    #[test]
    fn guess_error_display() {
        assert_eq!(
            GuessError::WrongTokenCount(2).to_string(),
            "Guess must contain exactly 4 of the characters 1-6 or 'hint', got 2"
        );
    }
}
