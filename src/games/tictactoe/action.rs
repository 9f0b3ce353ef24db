//! First-class action types for tic-tac-toe.
//!
//! An [`Action`] names a cell; a [`Move`] records which player put a mark
//! there. Actions can be built from any coordinates so that out-of-range
//! requests reach validation instead of being silently clamped.

use super::Player;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell coordinate `(row, col)` targeted by a move.
///
/// Ordering is row-major, which is also the order in which legal actions
/// are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    /// Row index (0-2 when valid).
    pub row: usize,
    /// Column index (0-2 when valid).
    pub col: usize,
}

impl Action {
    /// Creates an action. Coordinates are not checked here.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates an action from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self::new(index / 3, index % 3))
    }

    /// Row-major index (0-8), or `None` when out of range.
    pub fn index(self) -> Option<usize> {
        self.in_range().then(|| self.row * 3 + self.col)
    }

    /// Checks that both coordinates lie on the board.
    pub fn in_range(self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// All nine actions in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..9).map(|i| Self::new(i / 3, i % 3))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A move in tic-tac-toe: a player placing their mark on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The targeted cell.
    pub action: Action,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, action: Action) -> Self {
        Self { player, action }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.action)
    }
}

/// Why an action was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum InvalidActionKind {
    /// Coordinates outside the 3x3 grid.
    #[display("({}, {}) is outside the board", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The cell already holds a mark.
    #[display("({}, {}) is already occupied by {}", row, col, by)]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Mark found in the cell.
        by: Player,
    },
}

/// Error raised when applying an action to a cell that cannot take it.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid action: {} at {}:{}", kind, file, line)]
pub struct InvalidActionError {
    /// What was wrong with the action.
    pub kind: InvalidActionKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InvalidActionError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: InvalidActionKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Error that can occur when making a move in a [`Game`](super::Game).
#[derive(Debug, Clone, Display, Error)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The engine rejected the action.
    #[display("{}", _0)]
    Invalid(InvalidActionError),
}

impl From<InvalidActionError> for MoveError {
    fn from(err: InvalidActionError) -> Self {
        MoveError::Invalid(err)
    }
}
