//! Styled output for round results and the score listing

use super::formatters::{LOSS, NO_SCORES, WIN};
use crate::round::RoundResult;
use crate::scorebook::ScoreEntry;
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

/// The closing line of a round, colored by result
#[must_use]
pub fn round_result_line(result: RoundResult) -> ColoredString {
    match result {
        RoundResult::Won => WIN.bright_green().bold(),
        RoundResult::Lost => LOSS.red().bold(),
    }
}

/// Print the ranked score book
///
/// # Errors
///
/// Returns an I/O error if writing to `out` fails.
pub fn write_scores<W: Write>(out: &mut W, entries: &[ScoreEntry]) -> io::Result<()> {
    if entries.is_empty() {
        writeln!(out, "{NO_SCORES}")?;
        return Ok(());
    }

    writeln!(out, "{}", "═".repeat(40).cyan())?;
    writeln!(out, " {}", "SAVED SCORES".bright_cyan().bold())?;
    writeln!(out, "{}", "═".repeat(40).cyan())?;

    let width = entries
        .iter()
        .map(|entry| entry.name.chars().count())
        .max()
        .unwrap_or(0);

    for (i, entry) in entries.iter().enumerate() {
        let attempts = entry.attempts.to_string();
        let attempts = if entry.attempts > 0 {
            attempts.bright_yellow().bold()
        } else {
            attempts.bright_black()
        };
        let label = if entry.attempts == 1 {
            "attempt left"
        } else {
            "attempts left"
        };
        writeln!(
            out,
            " {} {:<width$}  {attempts} {label}",
            format!("{:>3}.", i + 1).bright_black(),
            entry.name
        )?;
    }

    Ok(())
}
