//! One saved result line

use std::fmt;
use std::str::FromStr;

/// Separator between the player name and the attempt count
pub const SEPARATOR: &str = ": ";

/// A saved round result: who played and how many attempts were left
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    pub attempts: u8,
}

/// Why a score line could not be read back
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreParseError {
    MissingSeparator,
    InvalidAttempts(String),
}

impl fmt::Display for ScoreParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSeparator => write!(f, "Score line has no '{SEPARATOR}' separator"),
            Self::InvalidAttempts(raw) => write!(f, "Invalid attempt count '{raw}'"),
        }
    }
}

impl std::error::Error for ScoreParseError {}

impl ScoreEntry {
    #[must_use]
    pub fn new(name: impl Into<String>, attempts: u8) -> Self {
        Self {
            name: name.into(),
            attempts,
        }
    }
}

impl FromStr for ScoreEntry {
    type Err = ScoreParseError;

    /// Parse `<name>: <attempts>`
    ///
    /// Splits at the last separator so names may contain ": " themselves.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let (name, attempts) = line
            .rsplit_once(SEPARATOR)
            .ok_or(ScoreParseError::MissingSeparator)?;

        let attempts = attempts
            .trim()
            .parse()
            .map_err(|_| ScoreParseError::InvalidAttempts(attempts.to_string()))?;

        Ok(Self::new(name, attempts))
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.name, self.attempts)
    }
}
