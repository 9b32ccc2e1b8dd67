use super::{Board, BoardError, Disc};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Win(Disc),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    RoundOver,
}

/// Turn-sequencing state machine for one round: the board, whose disc moves
/// next, and the outcome once the round is decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    board: Board,
    to_move: Disc,
    outcome: Option<RoundOutcome>,
}

impl RoundState {
    /// Start a fresh round on an empty board. Red moves first.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        Ok(RoundState {
            board: Board::new(rows, cols)?,
            to_move: Disc::Red,
            outcome: None,
        })
    }

    /// Whose disc is to move
    pub fn to_move(&self) -> Disc {
        self.to_move
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get round outcome if the round is over
    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Check if the round is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Apply a move for the active disc: drop, evaluate win then draw, and
    /// swap the turn if the round continues.
    pub fn apply_move(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::RoundOver);
        }

        self.board
            .drop_disc(column, self.to_move)
            .map_err(|e| match e {
                super::board::MoveError::ColumnFull => MoveError::ColumnFull,
                super::board::MoveError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        if self.board.check_win(self.to_move) {
            self.outcome = Some(RoundOutcome::Win(self.to_move));
        } else if self.board.is_full() {
            self.outcome = Some(RoundOutcome::Draw);
        } else {
            self.to_move = self.to_move.other();
        }

        Ok(())
    }

    /// Replace the board with a fresh empty one of the same dimensions and
    /// hand the first move back to Red.
    pub fn restart(&mut self) {
        let rows = self.board.rows();
        let cols = self.board.cols();
        self.board = Board::new(rows, cols).expect("dimensions were already validated");
        self.to_move = Disc::Red;
        self.outcome = None;
        log::info!("round restarted on a fresh {rows}x{cols} board");
    }
}
