//! Command implementations

pub mod play;
pub mod scores;

pub use play::{PlayConfig, SessionSummary, play_round, run_play, save_result};
pub use scores::run_scores;
