//! Command-line interface for timeline_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Timeline Tic-Tac-Toe - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "timeline_tictactoe")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show the move list newest first
    #[arg(long, global = true)]
    pub descending: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply a sequence of moves and print the resulting game
    Replay {
        /// Cells to click in order: index 0-8 or label such as "center"
        moves: Vec<String>,

        /// History step to jump to after the moves
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
