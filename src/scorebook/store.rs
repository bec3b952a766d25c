//! Score file access
//!
//! The score book is a plain text file with one `<name>: <attempts>` line per
//! saved round. It is only ever appended to.

use super::entry::ScoreEntry;
use log::{info, warn};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Default score file, relative to the working directory
pub const DEFAULT_SCORES_FILE: &str = "scores";

/// Append one entry to the score file, creating it if needed
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or written.
///
/// # Examples
/// ```no_run
/// use codebreaker::scorebook::{ScoreEntry, append_score};
///
/// append_score("scores", &ScoreEntry::new("Lesha", 2)).unwrap();
/// ```
pub fn append_score<P: AsRef<Path>>(path: P, entry: &ScoreEntry) -> io::Result<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{entry}")?;
    info!("Saved score '{entry}' to {}", path.display());
    Ok(())
}

/// Load every readable entry from the score file
///
/// Returns entries in file order, skipping malformed lines. A missing file is
/// an empty score book.
///
/// # Errors
///
/// Returns an I/O error if the file exists but cannot be read.
pub fn load_scores<P: AsRef<Path>>(path: P) -> io::Result<Vec<ScoreEntry>> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let entries = content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .filter_map(|(index, line)| match line.parse() {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping {} line {}: {e}", path.display(), index + 1);
                None
            }
        })
        .collect();

    Ok(entries)
}

/// Order entries best first: most attempts left, ties kept in file order
#[must_use]
pub fn rank_scores(mut entries: Vec<ScoreEntry>) -> Vec<ScoreEntry> {
    entries.sort_by(|a, b| b.attempts.cmp(&a.attempts));
    entries
}
