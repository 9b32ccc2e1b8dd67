//! Core Connect Four game logic: board representation, disc identity, and the
//! turn/outcome state machine for a single round.

pub mod board;
mod player;
mod state;

pub use board::{Board, BoardError, Cell, DEFAULT_COLS, DEFAULT_ROWS, MIN_COLS, MIN_ROWS};
pub use player::Disc;
pub use state::{MoveError, RoundOutcome, RoundState};
