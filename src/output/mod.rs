//! Terminal output formatting
//!
//! Display utilities for line mode and replay results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_keyboard, print_replay_result};
