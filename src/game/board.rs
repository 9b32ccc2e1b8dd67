use crate::game::Disc;

/// Smallest board on which four-in-a-row is achievable along some axis.
pub const MIN_ROWS: usize = 4;
pub const MIN_COLS: usize = 4;

pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board dimensions {rows}x{cols} below minimum {MIN_ROWS}x{MIN_COLS}")]
    InvalidDimensions { rows: usize, cols: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

/// The grid. Row 0 is the top row; discs stack upward from row `rows - 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

/// Walk directions for win detection: horizontal, vertical, and the two
/// diagonals. Each occupied cell is treated as a potential run start.
const WIN_DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

impl Board {
    /// Create a new empty board. Dimensions below 4x4 are rejected: no
    /// four-in-a-row could ever be completed on such a grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows < MIN_ROWS || cols < MIN_COLS {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row `rows - 1` is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// True iff `col` is in range and its topmost cell is still empty.
    /// Out-of-range columns are simply not valid, not an error.
    pub fn is_valid_drop(&self, col: usize) -> bool {
        col < self.cols && self.get(0, col) == Cell::Empty
    }

    /// Drop a disc in a column, returning the row where it landed.
    /// A failed drop leaves the grid untouched.
    pub fn drop_disc(&mut self, col: usize, disc: Disc) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }

        // Find the lowest empty row in this column
        for row in (0..self.rows).rev() {
            if self.get(row, col) == Cell::Empty {
                self.set(row, col, disc.to_cell());
                log::debug!("disc {} dropped in column {col}, row {row}", disc.name());
                return Ok(row);
            }
        }

        Err(MoveError::ColumnFull)
    }

    /// True iff every cell in the top row is occupied. Gravity guarantees a
    /// full top row implies full columns beneath it, so one row suffices.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| self.get(0, col) != Cell::Empty)
    }

    /// True iff some cell holding `disc` starts a run of four consecutive
    /// matching cells along one of the four axes. Scans the whole board;
    /// fast enough at game sizes.
    pub fn check_win(&self, disc: Disc) -> bool {
        let cell = disc.to_cell();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.get(row, col) != cell {
                    continue;
                }
                for (row_dir, col_dir) in WIN_DIRECTIONS {
                    if self.check_direction(row, col, cell, row_dir, col_dir) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Four consecutive matches starting at (row, col), stepping by
    /// (row_dir, col_dir), all in bounds.
    fn check_direction(
        &self,
        row: usize,
        col: usize,
        cell: Cell,
        row_dir: i32,
        col_dir: i32,
    ) -> bool {
        for i in 0..4 {
            let r = row as i32 + i * row_dir;
            let c = col as i32 + i * col_dir;
            if r < 0 || r >= self.rows as i32 || c < 0 || c >= self.cols as i32 {
                return false;
            }
            if self.get(r as usize, c as usize) != cell {
                return false;
            }
        }
        true
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(DEFAULT_ROWS, DEFAULT_COLS).expect("default dimensions are valid")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::default();
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert!(!board.is_full());
        assert!(!board.check_win(Disc::Red));
        assert!(!board.check_win(Disc::Yellow));
    }

    #[test]
    fn test_fresh_board_all_columns_droppable() {
        for (rows, cols) in [(4, 4), (6, 7), (8, 10)] {
            let board = Board::new(rows, cols).unwrap();
            assert!(!board.is_full());
            for col in 0..cols {
                assert!(board.is_valid_drop(col));
            }
        }
    }

    #[test]
    fn test_rejects_undersized_dimensions() {
        assert_eq!(
            Board::new(3, 7),
            Err(BoardError::InvalidDimensions { rows: 3, cols: 7 })
        );
        assert_eq!(
            Board::new(6, 3),
            Err(BoardError::InvalidDimensions { rows: 6, cols: 3 })
        );
        assert!(Board::new(4, 4).is_ok());
    }

    #[test]
    fn test_drop_disc_stacks_upward() {
        let mut board = Board::default();

        let row = board.drop_disc(3, Disc::Red).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Red);

        let row = board.drop_disc(3, Disc::Yellow).unwrap();
        assert_eq!(row, 4); // Should land on top of first disc
        assert_eq!(board.get(4, 3), Cell::Yellow);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::default();

        for _ in 0..board.rows() {
            board.drop_disc(0, Disc::Red).unwrap();
        }

        assert!(!board.is_valid_drop(0));
        let before = board.clone();
        assert_eq!(board.drop_disc(0, Disc::Yellow), Err(MoveError::ColumnFull));
        assert_eq!(board, before); // failed drop is a no-op
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::default();
        assert!(!board.is_valid_drop(7));
        assert_eq!(board.drop_disc(7, Disc::Red), Err(MoveError::InvalidColumn));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::default();
        for col in 0..board.cols() {
            for _ in 0..board.rows() {
                board.drop_disc(col, Disc::Red).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_read_queries_idempotent() {
        let mut board = Board::default();
        board.drop_disc(2, Disc::Red).unwrap();
        for _ in 0..3 {
            assert!(!board.is_full());
            assert!(!board.check_win(Disc::Red));
        }
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::default();
        for col in 0..4 {
            board.drop_disc(col, Disc::Red).unwrap();
        }
        assert!(board.check_win(Disc::Red));
        assert!(!board.check_win(Disc::Yellow));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::default();
        for _ in 0..4 {
            board.drop_disc(3, Disc::Yellow).unwrap();
        }
        assert!(board.check_win(Disc::Yellow));
        assert!(!board.check_win(Disc::Red));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::default();
        // Staircase rising to the right, Red on top of each step
        board.drop_disc(0, Disc::Red).unwrap();

        board.drop_disc(1, Disc::Yellow).unwrap();
        board.drop_disc(1, Disc::Red).unwrap();

        board.drop_disc(2, Disc::Yellow).unwrap();
        board.drop_disc(2, Disc::Yellow).unwrap();
        board.drop_disc(2, Disc::Red).unwrap();

        board.drop_disc(3, Disc::Yellow).unwrap();
        board.drop_disc(3, Disc::Yellow).unwrap();
        board.drop_disc(3, Disc::Yellow).unwrap();
        board.drop_disc(3, Disc::Red).unwrap();

        assert!(board.check_win(Disc::Red));
        assert!(!board.check_win(Disc::Yellow));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::default();
        // Staircase rising to the left
        board.drop_disc(6, Disc::Red).unwrap();

        board.drop_disc(5, Disc::Yellow).unwrap();
        board.drop_disc(5, Disc::Red).unwrap();

        board.drop_disc(4, Disc::Yellow).unwrap();
        board.drop_disc(4, Disc::Yellow).unwrap();
        board.drop_disc(4, Disc::Red).unwrap();

        board.drop_disc(3, Disc::Yellow).unwrap();
        board.drop_disc(3, Disc::Yellow).unwrap();
        board.drop_disc(3, Disc::Yellow).unwrap();
        board.drop_disc(3, Disc::Red).unwrap();

        assert!(board.check_win(Disc::Red));
        assert!(!board.check_win(Disc::Yellow));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::default();
        for col in 0..3 {
            board.drop_disc(col, Disc::Red).unwrap();
        }
        assert!(!board.check_win(Disc::Red));
    }

    #[test]
    fn test_draw_board_has_no_winner() {
        // Stripe pattern shifted every two columns; fills 6x7 with no
        // four-in-a-row anywhere.
        let mut board = Board::default();
        for col in 0..board.cols() {
            for row in 0..board.rows() {
                let disc = if (row + (col / 2)) % 2 == 0 {
                    Disc::Red
                } else {
                    Disc::Yellow
                };
                board.drop_disc(col, disc).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(!board.check_win(Disc::Red));
        assert!(!board.check_win(Disc::Yellow));
    }
}
