//! Text formats for boards and actions.
//!
//! Boards are written as nine cell characters in row-major order, for
//! example `"XX.OO...."` or `"XX_/OO_/___"`. Actions are `"r,c"`, `"r c"`
//! (0-based) or a keypad digit `1`-`9` matching [`Board::display`].

use super::action::Action;
use super::types::{Board, Cell, Player};
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::instrument;

/// Error parsing a board or action from text.
#[derive(Debug, Clone, Display, Error)]
#[display("Parse error: {} at {}:{}", message, file, line)]
pub struct ParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

fn parse_cell(c: char) -> Option<Cell> {
    match c {
        'X' | 'x' => Some(Cell::Occupied(Player::X)),
        'O' | 'o' => Some(Cell::Occupied(Player::O)),
        '.' | '_' | '-' => Some(Cell::Empty),
        _ => None,
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parses a board and checks that X leads O by zero or one mark.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for c in s.chars().filter(|c| !c.is_whitespace() && *c != '|' && *c != '/') {
            let cell = parse_cell(c)
                .ok_or_else(|| ParseError::new(format!("Unknown cell character {c:?}")))?;
            cells.push(cell);
        }

        let cells: [Cell; 9] = cells
            .try_into()
            .map_err(|v: Vec<Cell>| ParseError::new(format!("Expected 9 cells, found {}", v.len())))?;

        let mut grid = [[Cell::Empty; 3]; 3];
        for (i, cell) in cells.into_iter().enumerate() {
            grid[i / 3][i % 3] = cell;
        }
        let board = Board::from_cells(grid);

        let (xs, os) = (board.count(Player::X), board.count(Player::O));
        if xs != os && xs != os + 1 {
            return Err(ParseError::new(format!(
                "Unreachable board: {xs} X marks and {os} O marks"
            )));
        }

        Ok(board)
    }
}

impl FromStr for Action {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        let number = |p: &str| {
            p.parse::<usize>()
                .map_err(|_| ParseError::new(format!("Not a number: {p:?}")))
        };

        match parts.as_slice() {
            [digit] => {
                let n = number(*digit)?;
                (1..=9)
                    .contains(&n)
                    .then(|| Action::new((n - 1) / 3, (n - 1) % 3))
                    .ok_or_else(|| ParseError::new(format!("Keypad cell must be 1-9, got {n}")))
            }
            [row, col] => Ok(Action::new(number(*row)?, number(*col)?)),
            _ => Err(ParseError::new(format!(
                "Expected \"row,col\" or a digit 1-9, got {s:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board_with_separators() {
        let board: Board = "XX_/OO_/___".parse().unwrap();
        assert_eq!(board.get(0, 1), Some(Cell::Occupied(Player::X)));
        assert_eq!(board.get(1, 0), Some(Cell::Occupied(Player::O)));
        assert_eq!(board.get(2, 2), Some(Cell::Empty));
        assert_eq!(board, "xx. oo. ...".parse().unwrap());
    }

    #[test]
    fn test_parse_board_rejects_bad_length() {
        let err = "XX.OO".parse::<Board>().unwrap_err();
        assert!(err.message.contains("Expected 9 cells"), "{err}");
    }

    #[test]
    fn test_parse_board_rejects_unknown_char() {
        assert!("XX.OO...Z".parse::<Board>().is_err());
    }

    #[test]
    fn test_parse_board_rejects_unbalanced_marks() {
        assert!("XXX......".parse::<Board>().is_err());
        assert!("OO.X.....".parse::<Board>().is_err());
    }

    #[test]
    fn test_parse_action_forms() {
        assert_eq!("0,2".parse::<Action>().unwrap(), Action::new(0, 2));
        assert_eq!(" 2 1 ".parse::<Action>().unwrap(), Action::new(2, 1));
        assert_eq!("3".parse::<Action>().unwrap(), Action::new(0, 2));
        assert_eq!("9".parse::<Action>().unwrap(), Action::new(2, 2));
        assert_eq!("5,5".parse::<Action>().unwrap(), Action::new(5, 5));
    }

    #[test]
    fn test_parse_action_rejects_garbage() {
        assert!("0".parse::<Action>().is_err());
        assert!("a,b".parse::<Action>().is_err());
        assert!("1,2,3".parse::<Action>().is_err());
        assert!("".parse::<Action>().is_err());
    }
}
