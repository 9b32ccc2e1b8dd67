//! Turn sequencing and move acquisition: the [`GameEngine`] round loop and
//! the [`MoveSource`] abstraction over human and automated players.

mod game;
pub mod source;

pub use game::GameEngine;
pub use source::{ComputerPlayer, HumanPlayer, MoveChoice, MoveSource};
