//! Square cell matrix backing a generated maze.

use core::fmt;

use crate::common::{Cell, MazeError};

/// An `n`×`n` matrix of cell kinds. After generation the outer ring is
/// always [`Cell::Wall`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    n: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an `n`×`n` grid filled with walls.
    pub fn filled_with_walls(n: usize) -> Self {
        Grid {
            n,
            cells: vec![Cell::Wall; n * n],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Gets the cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, MazeError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row * self.n + col])
    }

    /// Sets the cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), MazeError> {
        self.check_bounds(row, col)?;
        self.cells[row * self.n + col] = cell;
        Ok(())
    }

    /// Read without the bounds check the caller has already done.
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.n + col]
    }

    pub(crate) fn put(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.n + col] = cell;
    }

    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.n && col < self.n
    }

    /// Whether the coordinate lies strictly inside the border ring.
    pub fn is_interior(&self, row: usize, col: usize) -> bool {
        row > 0 && row < self.n - 1 && col > 0 && col < self.n - 1
    }

    /// Number of cells of the given kind.
    pub fn count(&self, kind: Cell) -> usize {
        self.cells.iter().filter(|c| **c == kind).count()
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), MazeError> {
        if row >= self.n || col >= self.n {
            Err(MazeError::OutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.n {
            for c in 0..self.n {
                write!(f, "{}", self.at(r, c).glyph())?;
            }
            if r + 1 < self.n {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
