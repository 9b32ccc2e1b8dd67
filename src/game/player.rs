use super::board::Cell;

/// A player's token identity. The first player always holds Red.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Red,
    Yellow,
}

impl Disc {
    /// Get the other disc
    pub fn other(self) -> Disc {
        match self {
            Disc::Red => Disc::Yellow,
            Disc::Yellow => Disc::Red,
        }
    }

    /// Convert disc to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Disc::Red => Cell::Red,
            Disc::Yellow => Cell::Yellow,
        }
    }

    /// Get disc name for display
    pub fn name(self) -> &'static str {
        match self {
            Disc::Red => "Red",
            Disc::Yellow => "Yellow",
        }
    }
}
