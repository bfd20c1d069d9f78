//! Terminal Grid
//!
//! A dense 2D array of cells backing the visible terminal area. The cells
//! live in a single flat buffer indexed `row * cols + col`, so mutation is
//! O(1) and rows never allocate individually.

use serde::{Deserialize, Serialize};

use super::cell::Cell;

/// The terminal grid - a rectangular array of cells in row-major order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Flat cell storage, `rows * cols` entries, row-major
    cells: Vec<Cell>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Grid {
    /// Create a grid filled with the given blank cell
    pub fn new(cols: usize, rows: usize, blank: Cell) -> Self {
        Self {
            cells: vec![blank; cols * rows],
            cols,
            rows,
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get a reference to a cell
    pub fn cell(&self, col: usize, row: usize) -> Option<&Cell> {
        if col < self.cols && row < self.rows {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Get a mutable reference to a cell
    pub fn cell_mut(&mut self, col: usize, row: usize) -> Option<&mut Cell> {
        if col < self.cols && row < self.rows {
            self.cells.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Get a row as a cell slice
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row < self.rows {
            Some(&self.cells[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    /// Reset every cell to the given blank
    pub fn fill(&mut self, blank: Cell) {
        self.cells.fill(blank);
    }

    /// Resize the grid, keeping the overlapping top-left subregion and
    /// filling newly exposed cells with the given blank.
    pub fn resize(&mut self, cols: usize, rows: usize, blank: Cell) {
        let mut cells = vec![blank; cols * rows];
        for row in 0..rows.min(self.rows) {
            for col in 0..cols.min(self.cols) {
                cells[row * cols + col] = self.cells[row * self.cols + col];
            }
        }
        self.cells = cells;
        self.cols = cols;
        self.rows = rows;
    }

    /// Shift every row's content up by `lines` rows and fill the bottom
    /// `lines` rows with the given blank. `lines >= rows` blanks the whole
    /// grid; `lines == 0` does nothing.
    pub fn scroll_up(&mut self, lines: usize, blank: Cell) {
        if lines == 0 {
            return;
        }
        if lines >= self.rows {
            self.fill(blank);
            return;
        }
        self.cells.copy_within(lines * self.cols.., 0);
        let first_blank = (self.rows - lines) * self.cols;
        self.cells[first_blank..].fill(blank);
    }
}
