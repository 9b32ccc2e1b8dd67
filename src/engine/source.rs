use std::io;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Board, Disc};
use crate::ui::UserIo;

/// What a move source came back with: a column to drop into, or a request to
/// end the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveChoice {
    Drop(usize),
    Quit,
}

/// Something that can produce the next column choice: a person at the
/// console, or the trivial random policy.
///
/// Sources hold no reference to the board; the engine lends the current one
/// for each choice, so a restart automatically rebinds them. A compliant
/// implementation only ever returns droppable columns.
pub trait MoveSource {
    /// Display name
    fn name(&self) -> &str;

    /// The disc this source plays
    fn disc(&self) -> Disc;

    /// Produce the next move. Only I/O failures propagate; bad input is
    /// retried internally.
    fn choose(&mut self, board: &Board, io: &mut dyn UserIo) -> io::Result<MoveChoice>;
}

/// Interactive source: prompts until it gets an in-range, droppable column.
/// `q`/`quit` or end of input is a cancellation, not an error.
pub struct HumanPlayer {
    name: String,
    disc: Disc,
}

impl HumanPlayer {
    pub fn new(name: impl Into<String>, disc: Disc) -> Self {
        HumanPlayer {
            name: name.into(),
            disc,
        }
    }
}

impl MoveSource for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn disc(&self) -> Disc {
        self.disc
    }

    fn choose(&mut self, board: &Board, io: &mut dyn UserIo) -> io::Result<MoveChoice> {
        io.say(&format!("{}'s Turn", self.name))?;
        loop {
            let prompt = format!(
                "Please enter a number between 1 and {} (or 'q' to quit): ",
                board.cols()
            );
            let line = match io.ask(&prompt)? {
                Some(line) => line,
                None => return Ok(MoveChoice::Quit), // end of input counts as quitting
            };

            let entry = line.trim();
            if entry.eq_ignore_ascii_case("q") || entry.eq_ignore_ascii_case("quit") {
                return Ok(MoveChoice::Quit);
            }

            // Columns are 1-based at the prompt
            let col = match entry.parse::<usize>() {
                Ok(n) if n >= 1 && n <= board.cols() => n - 1,
                _ => {
                    io.say("Invalid column #, please try again.")?;
                    continue;
                }
            };

            if !board.is_valid_drop(col) {
                io.say("Column is full, please try again.")?;
                continue;
            }

            return Ok(MoveChoice::Drop(col));
        }
    }
}

/// Automated source: samples uniformly random columns until one is
/// droppable. No intelligence beyond legality.
pub struct ComputerPlayer {
    name: String,
    disc: Disc,
    rng: StdRng,
}

impl ComputerPlayer {
    pub fn new(name: impl Into<String>, disc: Disc) -> Self {
        Self::with_rng(name, disc, StdRng::from_os_rng())
    }

    /// Construct with an explicit rng, for deterministic tests.
    pub fn with_rng(name: impl Into<String>, disc: Disc, rng: StdRng) -> Self {
        ComputerPlayer {
            name: name.into(),
            disc,
            rng,
        }
    }
}

impl MoveSource for ComputerPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn disc(&self) -> Disc {
        self.disc
    }

    fn choose(&mut self, board: &Board, io: &mut dyn UserIo) -> io::Result<MoveChoice> {
        io.say(&format!("{}'s Turn", self.name))?;
        assert!(!board.is_full(), "no droppable column available");
        loop {
            let col = self.rng.random_range(0..board.cols());
            if board.is_valid_drop(col) {
                io.say(&format!("Dropping disc in column {}", col + 1))?;
                return Ok(MoveChoice::Drop(col));
            }
        }
    }
}
