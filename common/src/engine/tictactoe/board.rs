use std::fmt;
use std::str::FromStr;

use super::types::{Mark, Side};

pub const BOARD_SIZE: usize = 9;
pub const BOARD_WIDTH: usize = 3;

/// Rows, then columns, then the two diagonals. Win detection scans them in this order.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A 3x3 grid stored row-major, `index = row * 3 + column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| cell == Mark::Empty)
    }

    /// Returns a copy with `index` taken by `side`. The receiver is left untouched.
    pub fn with_mark(&self, index: usize, side: Side) -> Board {
        debug_assert!(is_valid_move(self, index), "cell {} is not available", index);
        let mut next = *self;
        next.cells[index] = side.to_mark();
        next
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }
}

pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    board.get(index) == Some(Mark::Empty)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    InvalidLength { found: usize },
    InvalidSymbol { symbol: char, index: usize },
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::InvalidLength { found } => {
                write!(f, "Board needs {} cells, found {}", BOARD_SIZE, found)
            }
            BoardParseError::InvalidSymbol { symbol, index } => {
                write!(f, "Unknown symbol '{}' at cell {}", symbol, index)
            }
        }
    }
}

impl std::error::Error for BoardParseError {}

/// Parses nine cell symbols, whitespace ignored: `X`, `O`, and `.`, `-` or `_` for empty.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != BOARD_SIZE {
            return Err(BoardParseError::InvalidLength { found: symbols.len() });
        }

        let mut cells = [Mark::Empty; BOARD_SIZE];
        for (index, &symbol) in symbols.iter().enumerate() {
            cells[index] = match symbol {
                'X' | 'x' => Mark::X,
                'O' | 'o' => Mark::O,
                '.' | '-' | '_' => Mark::Empty,
                _ => return Err(BoardParseError::InvalidSymbol { symbol, index }),
            };
        }
        Ok(Self { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.to_char())?;
        }
        Ok(())
    }
}
