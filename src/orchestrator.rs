//! Game orchestration between players.

use crate::games::tictactoe::{Action, Game, Outcome, Player};
use crate::players::Agent;
use anyhow::Result;
use tracing::{debug, info, instrument};

/// Events reported to the observer while a game runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was made.
    MoveMade {
        /// Name of the player who moved.
        player: String,
        /// Mark placed.
        mark: Player,
        /// Cell marked.
        action: Action,
    },
    /// The game ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Name of the winning player, if any.
        winner: Option<String>,
    },
}

/// Orchestrates a game between two players.
pub struct Orchestrator {
    game: Game,
    player_x: Box<dyn Agent>,
    player_o: Box<dyn Agent>,
}

impl Orchestrator {
    /// Creates a new orchestrator on the empty board.
    pub fn new(player_x: Box<dyn Agent>, player_o: Box<dyn Agent>) -> Self {
        Self::with_game(Game::new(), player_x, player_o)
    }

    /// Creates an orchestrator continuing an existing game.
    pub fn with_game(game: Game, player_x: Box<dyn Agent>, player_o: Box<dyn Agent>) -> Self {
        Self {
            game,
            player_x,
            player_o,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until the game is over, reporting each event.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move or produces an illegal one.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self, mut observer: impl FnMut(&GameEvent, &Game)) -> Result<Outcome> {
        info!("Starting game orchestration");

        while let Some(mark) = self.game.to_move() {
            let player = match mark {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };

            debug!(player = %player.name(), %mark, "Waiting for move");
            let action = player.choose(&self.game)?;
            let name = player.name().to_string();
            self.game.make_move(action)?;

            observer(
                &GameEvent::MoveMade {
                    player: name,
                    mark,
                    action,
                },
                &self.game,
            );
        }

        let outcome = self.game.outcome();
        let winner = outcome.winner().map(|mark| match mark {
            Player::X => self.player_x.name().to_string(),
            Player::O => self.player_o.name().to_string(),
        });
        info!(%outcome, winner = ?winner, "Game over");
        observer(&GameEvent::GameOver { outcome, winner }, &self.game);

        Ok(outcome)
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        self.game = Game::new();
    }
}
