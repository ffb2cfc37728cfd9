//! Wordle Grid
//!
//! A single-screen word-guessing game: a fixed target word, a bounded number of
//! guess rows, an on-screen keyboard and per-letter feedback colors.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_grid::config::GameConfig;
//! use wordle_grid::core::{Feedback, Key};
//! use wordle_grid::engine::Phase;
//!
//! let mut engine = GameConfig::default().build().unwrap();
//! for ch in "world".chars() {
//!     engine.handle_key(Key::letter(ch).unwrap());
//! }
//! engine.handle_key(Key::Submit);
//!
//! let state = engine.state();
//! assert_eq!(state.cell_color(0, 0), Feedback::Absent);
//! assert_eq!(state.phase(), Phase::Playing);
//! ```

// Core domain types
pub mod core;

// Guess grid engine
pub mod engine;

// Game settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
