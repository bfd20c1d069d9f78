//! Terminal Cell
//!
//! Represents a single cell in the terminal grid: one character plus its
//! foreground and background colors. Cells are never "unset" — a blank cell
//! holds a space and the terminal's default colors.

use serde::{Deserialize, Serialize};

use super::color::Argb;

/// A single cell in the terminal grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The character in this cell
    pub ch: char,
    /// Foreground color
    pub fg: Argb,
    /// Background color
    pub bg: Argb,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Argb::WHITE,
            bg: Argb::BLACK,
        }
    }
}

impl Cell {
    /// Create a cell with the given character and colors
    pub fn new(ch: char, fg: Argb, bg: Argb) -> Self {
        Self { ch, fg, bg }
    }

    /// A blank cell carrying the given colors
    pub fn blank(fg: Argb, bg: Argb) -> Self {
        Self { ch: ' ', fg, bg }
    }

    /// Check if this cell shows nothing (a space)
    pub fn is_blank(&self) -> bool {
        self.ch == ' '
    }

    /// Reset the cell to a blank with the given colors
    pub fn reset(&mut self, fg: Argb, bg: Argb) {
        self.ch = ' ';
        self.fg = fg;
        self.bg = bg;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_default() {
        let cell = Cell::default();
        assert!(cell.is_blank());
        assert_eq!(cell.fg, Argb::WHITE);
        assert_eq!(cell.bg, Argb::BLACK);
    }

    #[test]
    fn test_cell_new() {
        let cell = Cell::new('A', Argb::rgb(255, 0, 0), Argb::BLACK);
        assert_eq!(cell.ch, 'A');
        assert!(!cell.is_blank());
    }

    #[test]
    fn test_cell_reset() {
        let mut cell = Cell::new('A', Argb::rgb(255, 0, 0), Argb::rgb(0, 0, 255));
        cell.reset(Argb::WHITE, Argb::BLACK);
        assert!(cell.is_blank());
        assert_eq!(cell.fg, Argb::WHITE);
        assert_eq!(cell.bg, Argb::BLACK);
    }
}
