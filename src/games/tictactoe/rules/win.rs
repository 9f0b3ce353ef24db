//! Win detection logic for tic-tac-toe.

use super::super::{Action, Board, Cell, Player};
use tracing::instrument;

/// The eight winning lines, scanned in this order: rows, then columns,
/// then the main diagonal, then the anti-diagonal.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first fully-marked line in [`LINES`] order.
/// Boards reachable through legal play have at most one winning mark;
/// which line is reported on other boards is not part of the contract.
#[instrument(level = "trace", skip(board), ret)]
pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

/// Returns the winner together with the cells of the winning line.
pub fn winning_line(board: &Board) -> Option<(Player, [Action; 3])> {
    let rows = board.rows();
    for line in LINES {
        let [a, b, c] = line.map(|(row, col)| rows[row][col]);
        if let Cell::Occupied(player) = a
            && a == b
            && b == c
        {
            return Some((player, line.map(|(row, col)| Action::new(row, col))));
        }
    }

    None
}
