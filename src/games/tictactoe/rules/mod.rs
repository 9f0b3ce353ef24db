//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board by line inspection. They know
//! nothing about whose turn it is or how the board was reached.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full, is_terminal, outcome, utility};
pub use win::{winner, winning_line, LINES};
