//! Saved round results
//!
//! Plain text, append-only. See [`store`] for the file handling.

mod entry;
pub mod store;

pub use entry::{SEPARATOR, ScoreEntry, ScoreParseError};
pub use store::{DEFAULT_SCORES_FILE, append_score, load_scores, rank_scores};
