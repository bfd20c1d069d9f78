//! Deterministic snapshot generation
//!
//! Snapshots capture the complete terminal state in a serializable format
//! for testing and debugging. Given the same write sequence, the terminal
//! must produce identical snapshots.

use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::color::Argb;
use super::term::{RenderOptions, Terminal};

/// A complete snapshot of the terminal state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Grid dimensions
    pub cols: usize,
    pub rows: usize,
    /// Visible grid content, row-major
    pub grid: Vec<Vec<Cell>>,
    /// Cursor position
    pub cursor_x: usize,
    pub cursor_y: usize,
    /// Default colors at capture time
    pub default_fg: Argb,
    pub default_bg: Argb,
    /// Render options at capture time
    pub render_options: RenderOptions,
    /// Scaling policy flag
    pub fill_screen: bool,
}

impl Snapshot {
    /// Capture the current terminal state
    pub fn from_terminal(term: &Terminal) -> Self {
        let grid = (0..term.rows())
            .map(|row| term.grid().row(row).map(<[Cell]>::to_vec).unwrap_or_default())
            .collect();

        Snapshot {
            cols: term.cols(),
            rows: term.rows(),
            grid,
            cursor_x: term.cursor_x(),
            cursor_y: term.cursor_y(),
            default_fg: term.default_fg,
            default_bg: term.default_bg,
            render_options: term.render_options,
            fill_screen: term.fill_screen,
        }
    }

    /// Convert snapshot to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse snapshot from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Get a simple text representation of the grid (for debugging)
    pub fn to_text(&self) -> String {
        let mut result = String::new();

        for row in &self.grid {
            for cell in row {
                result.push(cell.ch);
            }
            while result.ends_with(' ') {
                result.pop();
            }
            result.push('\n');
        }

        result
    }

    /// Compare two snapshots cell-for-cell, ignoring cursor and options
    pub fn content_equals(&self, other: &Snapshot) -> bool {
        self.cols == other.cols && self.rows == other.rows && self.grid == other.grid
    }
}
