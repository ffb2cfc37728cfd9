//! Core domain types for the guessing game
//!
//! This module contains the fundamental domain types. All types here are pure
//! values with no I/O.

mod feedback;
mod key;
mod word;

pub use feedback::Feedback;
pub use key::{Key, KeyError};
pub use word::{Word, WordError};
