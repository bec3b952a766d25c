//! Interactive console interface

mod console;

pub use console::{Console, parse_answer};
