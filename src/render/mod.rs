//! Pixel rendering
//!
//! Projects the terminal grid onto an external pixel surface. Two entry
//! points exist: [`Terminal::render`] redraws the full frame under the
//! buffer's scaling policy, and [`Terminal::render_region`] repaints only a
//! requested pixel rectangle for incremental updates.
//!
//! The renderer owns no pixels and no glyphs. Both come from the embedding
//! environment through [`GlyphSource`] and [`PixelSink`]; one sink trait
//! serves both the surface and canvas adapters of the host, since they
//! expose the same two primitives.

use crate::core::{Argb, Terminal};

/// A fixed-size bitmap glyph supplier.
///
/// Every character maps to `char_height()` row bitmasks, one byte per row
/// with the most significant bit as the leftmost column. Glyphs are at most
/// 8 columns wide.
pub trait GlyphSource {
    /// Glyph width in pixels, at most 8, identical for all characters
    fn char_width(&self) -> i32;
    /// Glyph height in pixels (rows per glyph), identical for all characters
    fn char_height(&self) -> i32;
    /// Row bitmasks for a character, `char_height()` bytes, MSB-first
    fn glyph(&self, ch: char) -> &[u8];
}

/// A destination for pixel output.
///
/// Coordinates are signed: scaled content can extend past the sink on any
/// side, and implementations are expected to clip.
pub trait PixelSink {
    /// Sink width in pixels
    fn width(&self) -> i32;
    /// Sink height in pixels
    fn height(&self) -> i32;
    /// Write one pixel
    fn set_pixel(&mut self, x: i32, y: i32, color: Argb);
    /// Fill a rectangle
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Argb);
}

impl Terminal {
    /// Render the whole grid into the sink.
    ///
    /// The unscaled footprint is `cols * (char_w + char_spacing) + 2 *
    /// padding_x` by the analogous height. With `fill_screen` set, each axis
    /// gets its own floored integer scale (minimum 1) and content is
    /// anchored top-left; otherwise one uniform integer scale is used and
    /// the content is centered. Padding is applied unscaled in both modes.
    ///
    /// Each cell's background rectangle is filled before its glyph bits, so
    /// foreground pixels are never occluded.
    pub fn render<G, S>(&self, font: &G, sink: &mut S)
    where
        G: GlyphSource + ?Sized,
        S: PixelSink + ?Sized,
    {
        let char_w = font.char_width();
        let char_h = font.char_height();
        let opts = self.render_options;
        let cell_w = char_w + opts.char_spacing;
        let cell_h = char_h + opts.line_spacing;
        let cols = self.cols() as i32;
        let rows = self.rows() as i32;
        let vt_w = cols * cell_w + opts.padding_x * 2;
        let vt_h = rows * cell_h + opts.padding_y * 2;

        let scale_x = sink.width() / vt_w.max(1);
        let scale_y = sink.height() / vt_h.max(1);

        let (sx, sy, offs_x, offs_y) = if self.fill_screen {
            // Separate per-axis integer scales, aligned top-left
            (scale_x.max(1), scale_y.max(1), 0, 0)
        } else {
            // Uniform integer scale, centered
            let scale = scale_x.min(scale_y).max(1);
            (
                scale,
                scale,
                (sink.width() - vt_w * scale) / 2,
                (sink.height() - vt_h * scale) / 2,
            )
        };

        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let Some(cell) = self.grid().cell(col, row) else {
                    continue;
                };

                let base_x = offs_x + opts.padding_x + col as i32 * cell_w * sx;
                let base_y = offs_y + opts.padding_y + row as i32 * cell_h * sy;

                sink.fill_rect(base_x, base_y, cell_w * sx, cell_h * sy, cell.bg);

                let glyph = font.glyph(cell.ch);
                for gy in 0..char_h {
                    let bits = glyph.get(gy as usize).copied().unwrap_or(0);
                    for gx in 0..char_w {
                        if bits & (1 << (7 - gx)) != 0 {
                            // Each set bit becomes one scaled rectangle
                            sink.fill_rect(base_x + gx * sx, base_y + gy * sy, sx, sy, cell.fg);
                        }
                    }
                }
            }
        }
    }

    /// Repaint only the cells intersecting a pixel rectangle.
    ///
    /// Pixels outside the rectangle are never touched, so adjacent dirty
    /// regions can be repainted without double-drawing.
    ///
    /// Scale and offset are always computed with the uniform centered
    /// formula over the spacing-free footprint `cols * char_w` by `rows *
    /// char_h`, regardless of `fill_screen`, and are used only to pick the
    /// affected cell range; drawing happens at the unscaled 1:1 cell
    /// footprint. Partial redraws therefore only line up with a full-frame
    /// render when the sink matches the terminal's native pixel size (see
    /// DESIGN.md).
    pub fn render_region<G, S>(
        &self,
        font: &G,
        sink: &mut S,
        rect_x: i32,
        rect_y: i32,
        rect_w: i32,
        rect_h: i32,
    ) where
        G: GlyphSource + ?Sized,
        S: PixelSink + ?Sized,
    {
        if rect_w <= 0 || rect_h <= 0 {
            return;
        }

        let char_w = font.char_width();
        let char_h = font.char_height();
        let cols = self.cols() as i32;
        let rows = self.rows() as i32;
        let vt_w = cols * char_w;
        let vt_h = rows * char_h;

        let scale_x = sink.width() / vt_w.max(1);
        let scale_y = sink.height() / vt_h.max(1);
        let scale = scale_x.min(scale_y).max(1);
        let offs_x = (sink.width() - vt_w * scale) / 2;
        let offs_y = (sink.height() - vt_h * scale) / 2;

        let start_col = ((rect_x - offs_x) / (char_w * scale)).max(0);
        let end_col = ((rect_x + rect_w - 1 - offs_x) / (char_w * scale)).min(cols - 1);
        let start_row = ((rect_y - offs_y) / (char_h * scale)).max(0);
        let end_row = ((rect_y + rect_h - 1 - offs_y) / (char_h * scale)).min(rows - 1);

        for row in start_row..=end_row {
            for col in start_col..=end_col {
                let px = col * char_w;
                let py = row * char_h;

                // Clip the cell footprint to the requested rectangle
                let clip_x0 = rect_x.max(px);
                let clip_y0 = rect_y.max(py);
                let clip_x1 = (rect_x + rect_w).min(px + char_w);
                let clip_y1 = (rect_y + rect_h).min(py + char_h);
                if clip_x1 <= clip_x0 || clip_y1 <= clip_y0 {
                    continue;
                }

                let Some(cell) = self.grid().cell(col as usize, row as usize) else {
                    continue;
                };

                sink.fill_rect(
                    clip_x0,
                    clip_y0,
                    clip_x1 - clip_x0,
                    clip_y1 - clip_y0,
                    cell.bg,
                );

                let glyph = font.glyph(cell.ch);
                for gy in 0..char_h {
                    let y = py + gy;
                    if y < clip_y0 || y >= clip_y1 {
                        continue;
                    }
                    let bits = glyph.get(gy as usize).copied().unwrap_or(0);
                    for gx in 0..char_w {
                        let x = px + gx;
                        if x < clip_x0 || x >= clip_x1 {
                            continue;
                        }
                        if bits & (1 << (7 - gx)) != 0 {
                            sink.set_pixel(x, y, cell.fg);
                        }
                    }
                }
            }
        }
    }
}
