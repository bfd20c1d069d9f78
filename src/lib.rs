//! Character-cell virtual terminal
//!
//! An in-memory text grid with cursor semantics and line discipline, plus a
//! pixel renderer that projects the grid onto an arbitrary-sized surface.
//! This crate provides:
//!
//! - `core`: cell/color/grid data model, the terminal buffer, snapshots
//! - `input`: physical key identifiers and the key-to-character mapper
//! - `render`: glyph-source/pixel-sink traits and the render entry points
//!
//! The terminal does no escape-sequence parsing: control handling is limited
//! to `\r`, `\n`, `\b` and `\t`. Fonts and pixel surfaces are external
//! collaborators supplied through the traits in [`render`].

pub mod core;
pub mod input;
pub mod render;

pub use crate::core::{Argb, Cell, Error, Grid, RenderOptions, Result, Snapshot, Terminal};
pub use crate::input::{map_key, Key};
pub use crate::render::{GlyphSource, PixelSink};
