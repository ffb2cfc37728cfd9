//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{App, map_key, run_tui};
