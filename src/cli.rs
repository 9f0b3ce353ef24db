//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::Player;

/// Strictly Tic-Tac-Toe - optimal play by exhaustive minimax
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Tic-tac-toe engine with exhaustive minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Let the engine play both sides from the empty board
    Selfplay,

    /// Print the optimal move for a board
    Suggest {
        /// Board as nine cells in row-major order, e.g. "XX.OO...."
        #[arg(short, long)]
        board: String,
    },

    /// Play against the engine on the terminal
    Play {
        /// Mark to play as (overrides the config file)
        #[arg(short, long)]
        mark: Option<Player>,
    },
}
