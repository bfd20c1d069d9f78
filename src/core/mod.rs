//! Core terminal data model
//!
//! The terminal buffer, its cells and colors, the flat cell grid, and
//! serializable state snapshots.

pub mod cell;
pub mod color;
pub mod grid;
pub mod snapshot;
pub mod term;

pub use cell::Cell;
pub use color::Argb;
pub use grid::Grid;
pub use snapshot::Snapshot;
pub use term::{Error, RenderOptions, Result, Terminal};
