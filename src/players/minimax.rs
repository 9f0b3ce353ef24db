//! Engine player backed by minimax search.

use super::Agent;
use crate::games::tictactoe::{Action, Game, Searcher};
use anyhow::Result;
use tracing::debug;

/// Player that always picks the minimax-optimal action.
#[derive(Debug, Clone)]
pub struct MinimaxPlayer {
    name: String,
    searcher: Searcher,
}

impl MinimaxPlayer {
    /// Creates a new minimax player.
    pub fn new(name: impl Into<String>, searcher: Searcher) -> Self {
        Self {
            name: name.into(),
            searcher,
        }
    }
}

impl Agent for MinimaxPlayer {
    fn choose(&mut self, game: &Game) -> Result<Action> {
        let Some(result) = self.searcher.search(game.board()) else {
            anyhow::bail!("No valid moves available");
        };
        debug!(
            ai = %self.name,
            action = %result.action(),
            value = result.value(),
            nodes = result.nodes(),
            "AI chose action"
        );
        Ok(*result.action())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
