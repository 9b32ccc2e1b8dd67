use std::io::{self, BufRead, Write};

use crate::config::GameConfig;
use crate::game::{BoardError, Disc, RoundOutcome, RoundState};
use crate::ui::{Console, UserIo};

use super::source::{MoveChoice, MoveSource};

/// Why a round loop returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Finished(RoundOutcome),
    Quit,
}

/// Drives rounds of Connect Four: asks the active move source for a column,
/// applies it, resolves win/draw, and handles the restart transition.
///
/// The engine exclusively owns the board (inside [`RoundState`]); move
/// sources only ever see it as a borrow for the duration of one choice.
pub struct GameEngine {
    state: RoundState,
    sources: [Box<dyn MoveSource>; 2],
}

impl GameEngine {
    /// Build an engine for the configured board size. The first source plays
    /// Red and moves first; the second plays Yellow.
    pub fn new(
        config: &GameConfig,
        first: Box<dyn MoveSource>,
        second: Box<dyn MoveSource>,
    ) -> Result<Self, BoardError> {
        debug_assert_eq!(first.disc(), Disc::Red);
        debug_assert_eq!(second.disc(), Disc::Yellow);
        Ok(GameEngine {
            state: RoundState::new(config.rows, config.cols)?,
            sources: [first, second],
        })
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Play rounds until a player quits mid-move or declines a restart.
    pub fn run<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> io::Result<()> {
        loop {
            match self.play_round(console)? {
                RoundEnd::Quit => {
                    log::info!("session cancelled by player");
                    return Ok(());
                }
                RoundEnd::Finished(outcome) => {
                    self.announce(outcome, console)?;
                    if self.prompt_restart(console)? {
                        self.state.restart();
                    } else {
                        console.say("Goodbye!")?;
                        return Ok(());
                    }
                }
            }
        }
    }

    /// One round: alternate moves until win, draw, or quit.
    fn play_round<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> io::Result<RoundEnd> {
        loop {
            console.render_board(self.state.board())?;

            let active = match self.state.to_move() {
                Disc::Red => 0,
                Disc::Yellow => 1,
            };
            let choice = self.sources[active].choose(self.state.board(), console)?;

            let col = match choice {
                MoveChoice::Quit => return Ok(RoundEnd::Quit),
                MoveChoice::Drop(col) => col,
            };

            match self.state.apply_move(col) {
                Ok(()) => {
                    if let Some(outcome) = self.state.outcome() {
                        console.render_board(self.state.board())?;
                        return Ok(RoundEnd::Finished(outcome));
                    }
                }
                Err(err) => {
                    // A compliant source only returns droppable columns, but
                    // don't trust that blindly: re-request instead of applying.
                    log::warn!(
                        "{} chose illegal column {}: {err:?}, requesting again",
                        self.sources[active].name(),
                        col + 1
                    );
                }
            }
        }
    }

    fn announce<R: BufRead, W: Write>(
        &mut self,
        outcome: RoundOutcome,
        console: &mut Console<R, W>,
    ) -> io::Result<()> {
        match outcome {
            RoundOutcome::Win(disc) => {
                let winner = self
                    .sources
                    .iter()
                    .find(|s| s.disc() == disc)
                    .map(|s| s.name().to_string())
                    .unwrap_or_else(|| disc.name().to_string());
                log::info!("round won by {winner}");
                console.say(&format!("{winner} Connected Four, You Win!"))
            }
            RoundOutcome::Draw => {
                log::info!("round drawn");
                console.say("The board is full, it is a draw!")
            }
        }
    }

    /// Iterative restart prompt; keeps asking until the answer is
    /// recognizable. End of input declines.
    fn prompt_restart<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> io::Result<bool> {
        loop {
            let line = match console.ask("Would you like to restart? Yes(1) No(2): ")? {
                Some(line) => line,
                None => return Ok(false),
            };
            match line.trim() {
                "1" | "y" | "Y" | "yes" => return Ok(true),
                "2" | "n" | "N" | "no" => return Ok(false),
                _ => console.say("Invalid choice, please enter 1 or 2.")?,
            }
        }
    }
}
