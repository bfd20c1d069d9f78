//! Packed ARGB colors
//!
//! Cell colors are stored as packed 32-bit `0xAARRGGBB` values, the format
//! the pixel sinks consume directly. No palette indirection exists at this
//! layer.

use serde::{Deserialize, Serialize};

/// A packed 32-bit color, layout `0xAARRGGBB`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque white, the default foreground
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    /// Opaque black, the default background
    pub const BLACK: Argb = Argb(0xFF00_0000);

    /// Build an opaque color from RGB components
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(0xFF, r, g, b)
    }

    /// Build a color from all four components
    pub const fn rgba(a: u8, r: u8, g: u8, b: u8) -> Self {
        Argb(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Alpha component
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red component
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green component
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue component
    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

impl Default for Argb {
    fn default() -> Self {
        Argb::BLACK
    }
}

impl From<u32> for Argb {
    fn from(raw: u32) -> Self {
        Argb(raw)
    }
}

impl From<Argb> for u32 {
    fn from(color: Argb) -> Self {
        color.0
    }
}
