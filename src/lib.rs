//! Strictly Tic-Tac-Toe - exhaustive minimax for 3x3 tic-tac-toe
//!
//! The engine is a set of pure functions over an immutable [`Board`]
//! value: derive the player to move, list legal actions, apply one, detect
//! wins and draws, and search the full game tree for the optimal action.
//!
//! # Architecture
//!
//! - **Engine**: [`initial_state`], [`current_player`], [`legal_actions`],
//!   [`apply_action`], [`winner`], [`is_terminal`], [`utility`], [`minimax`]
//! - **Game**: match record that refuses moves after the game ends
//! - **Players**: minimax and line-input human players
//! - **Orchestrator**: alternates two players until the game is over
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{apply_action, initial_state, is_terminal, minimax, utility};
//!
//! let mut board = initial_state();
//! while let Some(action) = minimax(&board) {
//!     board = apply_action(&board, action).unwrap();
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(utility(&board), 0);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod orchestrator;
mod players;

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, PlayConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    apply_action, current_player, initial_state, is_terminal, legal_actions, minimax, outcome,
    utility, winner, Action, Board, Cell, Game, InvalidActionError, InvalidActionKind, Move,
    MoveError, Outcome, ParseError, Player, SearchConfig, SearchResult, Searcher,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules;

// Crate-level exports - Players and orchestration
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{Agent, HumanPlayer, MinimaxPlayer};
