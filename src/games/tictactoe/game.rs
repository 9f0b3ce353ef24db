//! A single match: the current board plus the moves that produced it.

use super::action::{Action, Move, MoveError};
use super::engine::{apply_action, current_player, legal_actions};
use super::rules::outcome;
use super::{Board, Outcome, Player};
use tracing::{debug, info, instrument};

/// Tic-tac-toe match record.
///
/// Unlike [`apply_action`], which only checks the targeted cell, a game
/// refuses further moves once it has been won or drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game on the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Continues a game from an arbitrary position with no recorded history.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// Rebuilds a game by playing `actions` from the empty board.
    ///
    /// # Errors
    ///
    /// Fails on the first action that cannot be played.
    #[instrument]
    pub fn replay(actions: &[Action]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &action in actions {
            game.make_move(action)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        (!self.is_over()).then(|| current_player(&self.board))
    }

    /// Returns the game outcome.
    pub fn outcome(&self) -> Outcome {
        outcome(&self.board)
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome().is_over()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.outcome().winner()
    }

    /// Returns the actions still available, empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Action> {
        if self.is_over() {
            Vec::new()
        } else {
            legal_actions(&self.board)
        }
    }

    /// Plays `action` for the player to move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] after a win or draw, and
    /// [`MoveError::Invalid`] when the cell cannot be marked.
    #[instrument(skip(self), fields(ply = self.history.len()))]
    pub fn make_move(&mut self, action: Action) -> Result<Outcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = current_player(&self.board);
        self.board = apply_action(&self.board, action)?;
        self.history.push(Move::new(player, action));
        debug!(%player, %action, "Move applied");

        let outcome = self.outcome();
        if outcome.is_over() {
            info!(%outcome, moves = self.history.len(), "Game finished");
        }
        Ok(outcome)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_records_players() {
        let game = Game::replay(&[Action::new(1, 1), Action::new(0, 0)]).unwrap();
        assert_eq!(
            game.history(),
            &[
                Move::new(Player::X, Action::new(1, 1)),
                Move::new(Player::O, Action::new(0, 0)),
            ]
        );
        assert_eq!(game.to_move(), Some(Player::X));
    }

    #[test]
    fn test_rejects_move_after_win() {
        let mut game = Game::replay(&[
            Action::new(0, 0),
            Action::new(1, 0),
            Action::new(0, 1),
            Action::new(1, 1),
            Action::new(0, 2),
        ])
        .unwrap();
        assert_eq!(game.winner(), Some(Player::X));
        assert_eq!(game.to_move(), None);
        assert!(game.valid_moves().is_empty());
        assert!(matches!(game.make_move(Action::new(2, 2)), Err(MoveError::GameOver)));
        assert_eq!(game.history().len(), 5);
    }

    #[test]
    fn test_invalid_move_leaves_game_unchanged() {
        let mut game = Game::replay(&[Action::new(1, 1)]).unwrap();
        let before = game.clone();
        assert!(matches!(game.make_move(Action::new(1, 1)), Err(MoveError::Invalid(_))));
        assert!(matches!(game.make_move(Action::new(4, 4)), Err(MoveError::Invalid(_))));
        assert_eq!(game, before);
    }
}
