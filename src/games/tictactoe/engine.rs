//! Turn derivation, move generation and move application.
//!
//! Together with [`rules`](super::rules) and [`search`](super::search)
//! these free functions make up the game engine. None of them keeps state;
//! the player to move is always derived from the board itself.

use super::action::{Action, InvalidActionError, InvalidActionKind};
use super::types::{Board, Cell, Player};
use tracing::{debug, instrument};

/// Returns the starting board: every cell empty.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who moves next on this board.
///
/// X moves when the number of marks is even, O when it is odd.
pub fn current_player(board: &Board) -> Player {
    if board.occupied() % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

/// Returns every empty cell, in row-major order.
///
/// Each action appears once. The list is empty on a full board.
pub fn legal_actions(board: &Board) -> Vec<Action> {
    board
        .iter()
        .filter(|&(_, _, cell)| cell == Cell::Empty)
        .map(|(row, col, _)| Action::new(row, col))
        .collect()
}

/// Returns the board that results from the current player marking `action`.
///
/// The input board is left untouched.
///
/// # Errors
///
/// Returns [`InvalidActionError`] when the coordinates are off the board
/// or the cell is already occupied.
#[instrument(level = "trace", skip(board))]
pub fn apply_action(board: &Board, action: Action) -> Result<Board, InvalidActionError> {
    let Action { row, col } = action;
    let cell = board
        .get(row, col)
        .ok_or_else(|| InvalidActionError::new(InvalidActionKind::OutOfRange { row, col }))?;

    if let Cell::Occupied(by) = cell {
        debug!(%by, row, col, "Rejected move on occupied cell");
        return Err(InvalidActionError::new(InvalidActionKind::Occupied { row, col, by }));
    }

    let player = current_player(board);
    Ok(board.with_cell(row, col, Cell::Occupied(player)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_empty() {
        let board = initial_state();
        assert_eq!(board.occupied(), 0);
        assert_eq!(legal_actions(&board).len(), 9);
        assert_eq!(current_player(&board), Player::X);
    }

    #[test]
    fn test_apply_places_current_mark() {
        let board = initial_state();
        let next = apply_action(&board, Action::new(1, 1)).unwrap();
        assert_eq!(next.get(1, 1), Some(Cell::Occupied(Player::X)));
        assert_eq!(current_player(&next), Player::O);

        let next = apply_action(&next, Action::new(0, 0)).unwrap();
        assert_eq!(next.get(0, 0), Some(Cell::Occupied(Player::O)));
        assert_eq!(current_player(&next), Player::X);
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let board = initial_state();
        let _ = apply_action(&board, Action::new(2, 1)).unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_apply_out_of_range() {
        let err = apply_action(&initial_state(), Action::new(0, 3)).unwrap_err();
        assert_eq!(err.kind, InvalidActionKind::OutOfRange { row: 0, col: 3 });

        let err = apply_action(&initial_state(), Action::new(7, 0)).unwrap_err();
        assert_eq!(err.kind, InvalidActionKind::OutOfRange { row: 7, col: 0 });
    }

    #[test]
    fn test_apply_occupied() {
        let board = apply_action(&initial_state(), Action::new(0, 0)).unwrap();
        let err = apply_action(&board, Action::new(0, 0)).unwrap_err();
        assert_eq!(
            err.kind,
            InvalidActionKind::Occupied {
                row: 0,
                col: 0,
                by: Player::X
            }
        );
    }

    #[test]
    fn test_legal_actions_skip_filled_cell() {
        let board = apply_action(&initial_state(), Action::new(1, 2)).unwrap();
        let actions = legal_actions(&board);
        assert_eq!(actions.len(), 8);
        assert!(!actions.contains(&Action::new(1, 2)));
    }
}
