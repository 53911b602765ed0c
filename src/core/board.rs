//! The 3x3 board and its win lines.
//!
//! Cells are indexed 0-8 in row-major order:
//!
//! ```text
//! 0 | 1 | 2
//! --+---+--
//! 3 | 4 | 5
//! --+---+--
//! 6 | 7 | 8
//! ```
//!
//! `Board` is `Copy`; search code mutates a private copy in place and
//! clears each cell again after exploring it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::symbol::Symbol;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Empty-cell indices. Never spills: a board has at most 9 cells.
pub type CellList = SmallVec<[usize; CELL_COUNT]>;

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark.
    #[default]
    Empty,
    /// Marked by a player.
    Occupied(Symbol),
}

impl Cell {
    /// The symbol in this cell, if any.
    #[must_use]
    pub const fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }
}

/// Three cell indices that win when held by one symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine(pub [usize; 3]);

impl WinLine {
    /// The cell indices of this line.
    #[must_use]
    pub const fn cells(self) -> [usize; 3] {
        self.0
    }

    /// Check whether an index is part of this line.
    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// All win lines: rows, then columns, then diagonals.
///
/// The order is significant. When several lines are complete the first one
/// listed here is reported.
pub const WIN_LINES: [WinLine; 8] = [
    WinLine([0, 1, 2]),
    WinLine([3, 4, 5]),
    WinLine([6, 7, 8]),
    WinLine([0, 3, 6]),
    WinLine([1, 4, 7]),
    WinLine([2, 5, 8]),
    WinLine([0, 4, 8]),
    WinLine([2, 4, 6]),
];

/// 3x3 board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from explicit cell contents.
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Get the cell at an index, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Check if an in-range cell is empty. Out-of-range indices are not empty.
    #[must_use]
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Check whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Indices of empty cells in ascending order.
    #[must_use]
    pub fn empty_cells(&self) -> CellList {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// The first complete win line, in `WIN_LINES` order.
    #[must_use]
    pub fn winner(&self) -> Option<(Symbol, WinLine)> {
        WIN_LINES.iter().find_map(|&line| {
            let [a, b, c] = line.cells();
            match self.cells[a] {
                Cell::Occupied(s) if self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a] => Some((s, line)),
                _ => None,
            }
        })
    }

    /// Place a mark. Caller guarantees the index is in range.
    pub(crate) fn place(&mut self, index: usize, symbol: Symbol) {
        self.cells[index] = Cell::Occupied(symbol);
    }

    /// Clear a cell. Caller guarantees the index is in range.
    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                match self.cells[row * 3 + col] {
                    Cell::Empty => write!(f, ".")?,
                    Cell::Occupied(s) => write!(f, "{s}")?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
