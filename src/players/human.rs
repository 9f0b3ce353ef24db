//! Human player reading moves as lines of text.

use super::Agent;
use crate::games::tictactoe::{Action, Game};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// Human player that prompts on a writer and reads from a line source.
///
/// Accepts `row,col`, `row col` or a keypad digit 1-9. Unparsable or
/// illegal input is reported and asked for again.
pub struct HumanPlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Agent for HumanPlayer<R, W> {
    fn choose(&mut self, game: &Game) -> Result<Action> {
        let valid = game.valid_moves();
        loop {
            write!(self.output, "{}, your move (row,col or 1-9): ", self.name)?;
            self.output.flush()?;

            let mut line = String::new();
            let read = self.input.read_line(&mut line).context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed");
            }

            match line.parse::<Action>() {
                Ok(action) if valid.contains(&action) => return Ok(action),
                Ok(action) => {
                    debug!(%action, "Rejected unavailable cell");
                    writeln!(self.output, "{action} is not available.")?;
                }
                Err(e) => writeln!(self.output, "{}", e.message)?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reprompts_until_legal() {
        let game = Game::replay(&[Action::new(1, 1)]).unwrap();
        let input = "hello\n2,2\n1 1\n1\n".as_bytes();
        let mut output = Vec::new();
        let mut human = HumanPlayer::new("Ada", input, &mut output);

        assert_eq!(human.choose(&game).unwrap(), Action::new(2, 2));
        let action = human.choose(&game).unwrap();
        assert_eq!(action, Action::new(0, 0));
        drop(human);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("(1, 1) is not available."), "{text}");
    }

    #[test]
    fn test_fails_on_end_of_input() {
        let game = Game::new();
        let mut human = HumanPlayer::new("Ada", "".as_bytes(), std::io::sink());
        assert!(human.choose(&game).is_err());
    }
}
