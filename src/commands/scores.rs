//! Scores command
//!
//! Lists the saved results, best first.

use crate::output::write_scores;
use crate::scorebook::{load_scores, rank_scores};
use std::io::{self, Write};
use std::path::Path;

/// Print the score book at `path`
///
/// Returns the number of entries listed.
///
/// # Errors
///
/// Returns an I/O error if the score file exists but cannot be read, or if
/// writing to `out` fails.
pub fn run_scores<P: AsRef<Path>, W: Write>(path: P, out: &mut W) -> io::Result<usize> {
    let entries = rank_scores(load_scores(path)?);
    write_scores(out, &entries)?;
    Ok(entries.len())
}
