//! Terminal output formatting
//!
//! Message text and styled display helpers.

pub mod display;
pub mod formatters;

pub use display::{round_result_line, write_scores};
