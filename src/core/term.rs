//! Terminal buffer and line discipline
//!
//! The [`Terminal`] owns the cell grid, the cursor, the default colors and
//! the render options, and implements the write/scroll/resize discipline on
//! top of them. There is no escape-sequence parsing here: `write` handles
//! `\r`, `\n`, `\b` and `\t` and places everything else verbatim.
//!
//! Two write primitives exist on purpose and must stay distinct:
//!
//! - [`Terminal::put_char`] is the cursor-driven path. It always stamps the
//!   buffer's current default colors and participates in wrap and scroll.
//! - [`Terminal::put_string_at`] is the direct-addressed path. It bypasses
//!   the cursor entirely and is the only way to place non-default colors.

use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use super::cell::Cell;
use super::color::Argb;
use super::grid::Grid;
use crate::input::{map_key, Key};

/// Terminal error type
#[derive(Error, Debug)]
pub enum Error {
    /// Construction was attempted with a zero dimension
    #[error("terminal dimensions must be positive, got {cols}x{rows}")]
    InvalidDimensions { cols: usize, rows: usize },
}

/// Result type for terminal operations
pub type Result<T> = std::result::Result<T, Error>;

/// Options controlling text layout when rendering (spacing, padding)
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RenderOptions {
    /// Extra blank pixels added horizontally between characters
    pub char_spacing: i32,
    /// Extra blank pixels added vertically between lines
    pub line_spacing: i32,
    /// Horizontal padding in pixels around the terminal content
    pub padding_x: i32,
    /// Vertical padding in pixels around the terminal content
    pub padding_y: i32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            char_spacing: 1,
            line_spacing: 10,
            padding_x: 1,
            padding_y: 1,
        }
    }
}

/// Callback invoked with the trimmed current line when Enter is handled
type EnterCallback = Box<dyn FnMut(&str)>;

/// The terminal buffer: grid, cursor, colors, render options
pub struct Terminal {
    /// The cell grid
    grid: Grid,
    /// Cursor column. May transiently equal `cols` after a `put_char` at the
    /// last column; the wrap happens lazily on the next write.
    cursor_x: usize,
    /// Cursor row, always `< rows` after any public operation returns
    cursor_y: usize,
    /// Default foreground stamped by the cursor-driven write path
    pub default_fg: Argb,
    /// Default background stamped by the cursor-driven write path
    pub default_bg: Argb,
    /// Spacing and padding applied by the renderer
    pub render_options: RenderOptions,
    /// Scaling policy: `true` stretches per-axis to fill the surface
    /// (anchored top-left), `false` scales uniformly and centers.
    pub fill_screen: bool,
    /// Single-slot Enter handler
    on_enter: Option<EnterCallback>,
}

impl fmt::Debug for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Terminal")
            .field("cols", &self.grid.cols())
            .field("rows", &self.grid.rows())
            .field("cursor_x", &self.cursor_x)
            .field("cursor_y", &self.cursor_y)
            .field("fill_screen", &self.fill_screen)
            .field("on_enter", &self.on_enter.is_some())
            .finish()
    }
}

impl Terminal {
    /// Create a terminal with the given dimensions. Fails if either
    /// dimension is zero.
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        if cols == 0 || rows == 0 {
            return Err(Error::InvalidDimensions { cols, rows });
        }

        let default_fg = Argb::WHITE;
        let default_bg = Argb::BLACK;

        Ok(Self {
            grid: Grid::new(cols, rows, Cell::blank(default_fg, default_bg)),
            cursor_x: 0,
            cursor_y: 0,
            default_fg,
            default_bg,
            render_options: RenderOptions::default(),
            fill_screen: true,
            on_enter: None,
        })
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cursor_x(&self) -> usize {
        self.cursor_x
    }

    pub fn cursor_y(&self) -> usize {
        self.cursor_y
    }

    /// Read access to the grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Register the Enter handler, replacing any previous one. The callback
    /// runs synchronously inside [`Terminal::handle_key`].
    pub fn on_enter(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_enter = Some(Box::new(callback));
    }

    /// A blank cell carrying the current default colors
    fn blank(&self) -> Cell {
        Cell::blank(self.default_fg, self.default_bg)
    }

    /// Reset every cell to a default blank and home the cursor
    pub fn clear(&mut self) {
        self.grid.fill(self.blank());
        self.cursor_x = 0;
        self.cursor_y = 0;
    }

    /// Resize the grid, preserving the overlapping top-left subregion and
    /// clamping each cursor axis into the new bounds. A zero dimension is
    /// silently ignored — this is a soft-fail policy, unlike construction.
    pub fn resize(&mut self, cols: usize, rows: usize) {
        if cols == 0 || rows == 0 {
            debug!(cols, rows, "ignoring resize to zero dimension");
            return;
        }

        self.grid.resize(cols, rows, self.blank());
        self.cursor_x = self.cursor_x.min(cols - 1);
        self.cursor_y = self.cursor_y.min(rows - 1);
    }

    /// Write text at the cursor, interpreting `\r`, `\n`, `\b` and `\t`.
    /// Tabs advance to the next multiple-of-4 column.
    pub fn write(&mut self, text: &str) {
        for ch in text.chars() {
            match ch {
                '\r' => self.cursor_x = 0,
                '\n' => {
                    self.cursor_x = 0;
                    self.cursor_y += 1;
                }
                '\u{8}' => {
                    if self.cursor_x > 0 {
                        self.cursor_x -= 1;
                    }
                    // The blank is unconditional: at column 0 the cell under
                    // the cursor is still cleared. Character only, colors
                    // stay as they were.
                    if let Some(cell) = self.grid.cell_mut(self.cursor_x, self.cursor_y) {
                        cell.ch = ' ';
                    }
                }
                '\t' => {
                    let spaces = 4 - self.cursor_x % 4;
                    for _ in 0..spaces {
                        self.put_char(' ');
                    }
                }
                ch => self.put_char(ch),
            }

            if self.cursor_y >= self.grid.rows() {
                self.scroll_up(1);
                self.cursor_y = self.grid.rows() - 1;
            }
        }
    }

    /// Write text, then move to the start of the next line
    pub fn write_line(&mut self, text: &str) {
        self.write(text);
        self.cursor_x = 0;
        self.cursor_y += 1;
        if self.cursor_y >= self.grid.rows() {
            self.scroll_up(1);
            self.cursor_y = self.grid.rows() - 1;
        }
    }

    /// Place a single character at the cursor and advance. Wraps at the
    /// right edge and scrolls at the bottom. Always stamps the current
    /// default colors; `'\0'` is a no-op.
    pub fn put_char(&mut self, ch: char) {
        if ch == '\0' {
            return;
        }
        if self.cursor_x >= self.grid.cols() {
            self.cursor_x = 0;
            self.cursor_y += 1;
        }
        if self.cursor_y >= self.grid.rows() {
            let lines = self.cursor_y - self.grid.rows() + 1;
            self.scroll_up(lines);
            self.cursor_y = self.grid.rows() - 1;
        }

        let cell = Cell::new(ch, self.default_fg, self.default_bg);
        if let Some(slot) = self.grid.cell_mut(self.cursor_x, self.cursor_y) {
            *slot = cell;
        }
        // No wrap check after advancing; the wrap is detected lazily on the
        // next write.
        self.cursor_x += 1;
    }

    /// Write a string at an explicit position with explicit colors,
    /// bypassing the cursor and all wrap/scroll logic. Out-of-range rows are
    /// ignored, the column is clamped, and writing stops at the right edge.
    pub fn put_string_at(&mut self, text: &str, x: usize, y: usize, fg: Argb, bg: Argb) {
        if y >= self.grid.rows() {
            return;
        }
        let mut cx = x.min(self.grid.cols() - 1);
        for ch in text.chars() {
            if cx >= self.grid.cols() {
                break;
            }
            if let Some(cell) = self.grid.cell_mut(cx, y) {
                *cell = Cell::new(ch, fg, bg);
            }
            cx += 1;
        }
    }

    /// Scroll the content up by `lines`, filling the bottom with default
    /// blanks. Scrolling by the full height (or more) blanks every row. The
    /// cursor is left untouched either way.
    pub fn scroll_up(&mut self, lines: usize) {
        if lines == 0 {
            return;
        }
        trace!(lines, "scroll up");
        self.grid.scroll_up(lines, self.blank());
    }

    /// The text of the cursor's row, up to the first NUL character, with
    /// trailing whitespace trimmed. Returns an empty string if the cursor
    /// row is somehow out of bounds.
    pub fn current_line(&self) -> String {
        let Some(row) = self.grid.row(self.cursor_y) else {
            return String::new();
        };
        let mut line = String::with_capacity(row.len());
        for cell in row {
            if cell.ch == '\0' {
                break;
            }
            line.push(cell.ch);
        }
        line.truncate(line.trim_end().len());
        line
    }

    /// Handle a key event from the embedding input loop.
    ///
    /// Backspace erases the cell left of the cursor (only when the cursor
    /// can retreat). Enter fires the registered callback with the trimmed
    /// current line, then moves to the next line. The Tab key writes a
    /// fixed four spaces — unlike `write("\t")`, which advances to the next
    /// multiple-of-4 tab stop; the two paths intentionally stay separate
    /// (see DESIGN.md). Everything else goes through [`map_key`] and, on a
    /// match, [`Terminal::put_char`].
    pub fn handle_key(&mut self, key: Key, shift: bool) {
        match key {
            Key::Backspace => {
                if self.cursor_x > 0 {
                    self.cursor_x -= 1;
                    if let Some(cell) = self.grid.cell_mut(self.cursor_x, self.cursor_y) {
                        cell.ch = ' ';
                    }
                }
            }
            Key::Enter => {
                let line = self.current_line();
                if let Some(callback) = self.on_enter.as_mut() {
                    callback(&line);
                }
                self.cursor_x = 0;
                self.cursor_y += 1;
                if self.cursor_y >= self.grid.rows() {
                    self.scroll_up(1);
                    self.cursor_y = self.grid.rows() - 1;
                }
            }
            Key::Tab => self.write("    "),
            _ => {
                if let Some(ch) = map_key(key, shift) {
                    self.put_char(ch);
                }
            }
        }
    }
}
