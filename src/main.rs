//! Wordle - CLI
//!
//! Word-guessing game with TUI and line modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_grid::{
    commands::{replay, run_simple},
    config::{DEFAULT_ATTEMPTS, DEFAULT_WORD, GameConfig},
    engine::Engine,
    output::print_replay_result,
};

#[derive(Parser)]
#[command(
    name = "wordle",
    about = "Guess the word in a limited number of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Target word; its length sets the number of columns
    #[arg(short, long, global = true, default_value = DEFAULT_WORD)]
    word: String,

    /// Number of guess rows
    #[arg(short, long, global = true, default_value_t = DEFAULT_ATTEMPTS)]
    attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode without TUI
    Simple,

    /// Play a list of guesses and print the resulting board
    Replay {
        /// Guesses, in order
        #[arg(required = true)]
        guesses: Vec<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let engine = GameConfig::new(cli.word, cli.attempts)
        .build()
        .context("invalid game configuration")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(engine),
        Commands::Simple => run_simple(engine),
        Commands::Replay { guesses } => {
            run_replay_command(engine, &guesses);
            Ok(())
        }
    }
}

fn run_replay_command(mut engine: Engine, guesses: &[String]) {
    let result = replay(&mut engine, guesses);
    print_replay_result(&result);
}

fn run_play_command(engine: Engine) -> Result<()> {
    use wordle_grid::interactive::{App, run_tui};

    let app = App::new(engine);
    run_tui(app)
}
