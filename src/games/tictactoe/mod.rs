//! Tic-tac-toe: board model, rules, move application and minimax search.

mod action;
mod engine;
mod game;
mod parse;
pub mod rules;
mod search;
mod types;

pub use action::{Action, InvalidActionError, InvalidActionKind, Move, MoveError};
pub use engine::{apply_action, current_player, initial_state, legal_actions};
pub use game::Game;
pub use parse::ParseError;
pub use rules::{is_terminal, outcome, utility, winner};
pub use search::{minimax, SearchConfig, SearchResult, Searcher};
pub use types::{Board, Cell, Outcome, Player};

/// Plays `(row, col)` moves from the empty board, panicking on an illegal one.
#[cfg(test)]
pub(crate) fn apply_moves(moves: &[(usize, usize)]) -> Board {
    moves.iter().fold(initial_state(), |board, &(row, col)| {
        apply_action(&board, Action::new(row, col)).expect("test move must be legal")
    })
}
