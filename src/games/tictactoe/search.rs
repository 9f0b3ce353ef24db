//! Exhaustive minimax search.
//!
//! X maximizes [`utility`] and O minimizes it. Every line is searched to
//! a terminal board; there is no heuristic evaluation. Because utility only
//! takes the values -1, 0 and 1, a maximizing node can stop as soon as one
//! child is worth 1 and a minimizing node as soon as one child is worth -1.
//! That cutoff never changes the returned value or action.
//!
//! Actions are tried in row-major order and only a strictly better value
//! replaces the current best, so ties go to the first optimal action in
//! row-major order.

use super::engine::{apply_action, current_player, legal_actions};
use super::rules::{is_terminal, outcome, utility};
use super::{Action, Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Stop scanning a node's children once the best possible value is found.
    early_exit: bool,
}

impl SearchConfig {
    /// Creates a search configuration.
    pub fn new(early_exit: bool) -> Self {
        Self { early_exit }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { early_exit: true }
    }
}

/// Result of searching a non-terminal board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct SearchResult {
    /// Optimal action for the player to move.
    action: Action,
    /// Minimax value of the board, from X's perspective.
    value: i8,
    /// Number of boards visited, the root included.
    nodes: u64,
}

/// Minimax searcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Creates a searcher with the given settings.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the settings.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches `board` for the optimal action of the player to move.
    ///
    /// Returns `None` when the board is terminal.
    #[instrument(skip(self, board), fields(early_exit = self.config.early_exit))]
    pub fn search(&self, board: &Board) -> Option<SearchResult> {
        if is_terminal(board) {
            debug!("Terminal board, nothing to search");
            return None;
        }

        let mut nodes = 0;
        let player = current_player(board);
        let (value, action) = self.value(board, player, &mut nodes);
        let action = action?;

        debug!(%player, %action, value, nodes, "Search complete");
        Some(SearchResult {
            action,
            value,
            nodes,
        })
    }

    /// Formats the search result for `board` as human-readable text.
    ///
    /// A terminal board reports its outcome instead. The node count is
    /// included only when `show_stats` is set.
    pub fn suggest(&self, board: &Board, show_stats: bool) -> String {
        let Some(result) = self.search(board) else {
            return format!("Game over: {}", outcome(board));
        };

        let mut text = format!(
            "To move: {}\nBest move: {}\nValue: {}",
            current_player(board),
            result.action,
            result.value
        );
        if show_stats {
            text.push_str(&format!("\nNodes searched: {}", result.nodes));
        }
        text
    }

    /// Evaluates `board` with `player` to move, returning the value and
    /// the first action achieving it.
    fn value(&self, board: &Board, player: Player, nodes: &mut u64) -> (i8, Option<Action>) {
        *nodes += 1;
        if is_terminal(board) {
            return (utility(board), None);
        }

        let maximizing = player == Player::X;
        let bound = player.win_value();
        let mut best: Option<(i8, Action)> = None;

        for action in legal_actions(board) {
            let child = apply_action(board, action).expect("legal action targets an empty cell");
            let (child_value, _) = self.value(&child, player.opponent(), nodes);

            let improves = match best {
                None => true,
                Some((current, _)) if maximizing => child_value > current,
                Some((current, _)) => child_value < current,
            };
            if improves {
                best = Some((child_value, action));
                if self.config.early_exit && child_value == bound {
                    break;
                }
            }
        }

        match best {
            Some((value, action)) => (value, Some(action)),
            None => (utility(board), None),
        }
    }
}

/// Returns the optimal action for the player to move, or `None` on a
/// terminal board.
pub fn minimax(board: &Board) -> Option<Action> {
    Searcher::default().search(board).map(|result| result.action)
}
