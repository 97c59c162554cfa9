//! NoGo game implementation for the engine
//!
//! NoGo is played like Go on an empty rectangular board, except that any
//! placement which captures is illegal: a stone may not leave its own group
//! without liberties (suicide) nor take the last liberty of an adjacent
//! opponent group. The side to move with no legal placement loses.
//!
//! # Usage
//!
//! ```rust
//! use engine_core::{Place, Position, Side};
//! use games_nogo::Board;
//!
//! let mut board = Board::with_size(2, 2).unwrap();
//! assert_eq!(board.legal_moves().len(), 4);
//!
//! assert!(board.apply(Place::new(0, Side::Black)).is_legal());
//! assert_eq!(board.side_to_move(), Side::White);
//! ```

use std::fmt;

use engine_core::{Place, PlaceOutcome, Position, Side};
use thiserror::Error;

/// Default board edge.
pub const DEFAULT_SIZE: u8 = 9;

/// Largest supported board edge.
pub const MAX_SIZE: u8 = 19;

/// Errors raised when constructing a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Invalid board size {width}x{height}, each edge must be within 1..={max}", max = MAX_SIZE)]
    InvalidSize { width: usize, height: usize },

    #[error("Row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown cell character '{0}', expected '.', 'X' or 'O'")]
    UnknownCell(char),
}

/// NoGo board state
///
/// Cells are indexed row-major: `cell = row * width + col`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// None = empty, Some(side) = stone of that side
    cells: Vec<Option<Side>>,
    /// Side whose turn it is (Black moves first)
    to_move: Side,
}

impl Board {
    /// Create an empty 9x9 board with Black to move.
    pub fn new() -> Self {
        Self::empty(DEFAULT_SIZE, DEFAULT_SIZE)
    }

    /// Create an empty board of the given size with Black to move.
    pub fn with_size(width: usize, height: usize) -> Result<Self, BoardError> {
        check_size(width, height)?;
        Ok(Self::empty(width as u8, height as u8))
    }

    fn empty(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            to_move: Side::Black,
        }
    }

    /// Build a position from text rows.
    ///
    /// `.` is an empty cell, `X` a black stone and `O` a white stone. Rows are
    /// separated by `/` or newlines; surrounding whitespace is ignored. The
    /// layout is taken as-is: no capture check is applied to the stones.
    pub fn from_layout(layout: &str, side_to_move: Side) -> Result<Self, BoardError> {
        let rows: Vec<&str> = layout
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();

        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        check_size(width, rows.len())?;

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row_idx, row) in rows.iter().enumerate() {
            let actual = row.chars().count();
            if actual != width {
                return Err(BoardError::RaggedRow {
                    row: row_idx,
                    expected: width,
                    actual,
                });
            }
            for c in row.chars() {
                cells.push(match c {
                    '.' => None,
                    'X' | 'x' => Some(Side::Black),
                    'O' | 'o' => Some(Side::White),
                    other => return Err(BoardError::UnknownCell(other)),
                });
            }
        }

        Ok(Self {
            width: width as u8,
            height: rows.len() as u8,
            cells,
            to_move: side_to_move,
        })
    }

    pub fn width(&self) -> usize {
        self.width as usize
    }

    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Stone at a cell, `None` when empty or out of range.
    pub fn stone_at(&self, cell: usize) -> Option<Side> {
        self.cells.get(cell).copied().flatten()
    }

    /// Number of stones on the board.
    pub fn moves_played(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Winner of a finished game: the opponent of the side left without a
    /// legal placement. `None` while the game is still running.
    pub fn winner(&self) -> Option<Side> {
        if self.has_legal_move() {
            None
        } else {
            Some(self.to_move.opponent())
        }
    }

    /// Orthogonal neighbours of a cell.
    fn neighbors(&self, cell: usize) -> impl Iterator<Item = usize> {
        let width = self.width as usize;
        let height = self.height as usize;
        let (row, col) = (cell / width, cell % width);

        let up = (row > 0).then(|| cell - width);
        let down = (row + 1 < height).then(|| cell + width);
        let left = (col > 0).then(|| cell - 1);
        let right = (col + 1 < width).then(|| cell + 1);

        [up, down, left, right].into_iter().flatten()
    }

    /// Whether the group containing `start` has at least one liberty.
    fn group_has_liberty(&self, start: usize) -> bool {
        let Some(side) = self.cells[start] else {
            return true;
        };

        let mut seen = vec![false; self.cells.len()];
        let mut stack = vec![start];
        seen[start] = true;

        while let Some(cell) = stack.pop() {
            for next in self.neighbors(cell) {
                match self.cells[next] {
                    None => return true,
                    Some(s) if s == side && !seen[next] => {
                        seen[next] = true;
                        stack.push(next);
                    }
                    _ => {}
                }
            }
        }

        false
    }
}

fn check_size(width: usize, height: usize) -> Result<(), BoardError> {
    let range = 1..=MAX_SIZE as usize;
    if range.contains(&width) && range.contains(&height) {
        Ok(())
    } else {
        Err(BoardError::InvalidSize { width, height })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Position for Board {
    fn num_cells(&self) -> usize {
        self.cells.len()
    }

    fn side_to_move(&self) -> Side {
        self.to_move
    }

    fn apply(&mut self, place: Place) -> PlaceOutcome {
        let cell = place.cell as usize;
        if place.side != self.to_move || cell >= self.cells.len() || self.cells[cell].is_some() {
            return PlaceOutcome::Illegal;
        }

        self.cells[cell] = Some(place.side);

        let suicide = !self.group_has_liberty(cell);
        let captures = self.neighbors(cell).any(|next| {
            self.cells[next] == Some(place.side.opponent()) && !self.group_has_liberty(next)
        });

        if suicide || captures {
            self.cells[cell] = None;
            return PlaceOutcome::Illegal;
        }

        self.to_move = self.to_move.opponent();
        PlaceOutcome::Legal
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width as usize;

        write!(f, "   ")?;
        for col in 0..width {
            write!(f, " {}", (b'A' + col as u8) as char)?;
        }
        writeln!(f)?;

        for (row, cells) in self.cells.chunks(width).enumerate() {
            write!(f, "{:>3}", row + 1)?;
            for cell in cells {
                let c = match cell {
                    None => '.',
                    Some(Side::Black) => 'X',
                    Some(Side::White) => 'O',
                };
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }

        write!(f, "{} to move", self.to_move)
    }
}

#[cfg(test)]
mod tests;
