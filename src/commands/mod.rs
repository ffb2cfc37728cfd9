//! Command implementations

pub mod replay;
pub mod simple;

pub use replay::{ReplayResult, ReplayRow, replay};
pub use simple::{LineAction, feed_line, run_simple};
