//! Draw and terminal-state detection for tic-tac-toe.

use super::super::{Board, Cell, Outcome, Player};
use super::win::winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
pub fn is_full(board: &Board) -> bool {
    board.iter().all(|(_, _, cell)| cell != Cell::Empty)
}

/// Checks if the board is full with no winner.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}

/// Returns true if the game on this board has ended.
#[instrument(level = "trace", skip(board), ret)]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Score of the board from X's perspective: 1, -1 or 0.
///
/// Meant for terminal boards. A non-terminal board without a winner
/// scores 0.
pub fn utility(board: &Board) -> i8 {
    winner(board).map_or(0, Player::win_value)
}

/// Classifies the board.
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => player.into(),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}
