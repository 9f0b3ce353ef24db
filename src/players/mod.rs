//! Agent trait and player implementations.

mod human;
mod minimax;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use crate::games::tictactoe::{Action, Game};
use anyhow::Result;

/// Trait for anything that can choose moves: engines and humans alike.
pub trait Agent {
    /// Chooses the next action for the player to move in `game`.
    fn choose(&mut self, game: &Game) -> Result<Action>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
