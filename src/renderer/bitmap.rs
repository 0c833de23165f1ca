use std::sync::Arc;

use euclid::default::Point2D;

use crate::config::Rgba;
use crate::renderer::surface::{DrawSurface, TextStyle};

/// Simple L8 coverage bitmap.
///
/// Pixels are arranged in row-major order with the origin at the top-left.
/// Each pixel stores a single 8-bit coverage value where `0` is empty and
/// `255` is fully covered.
pub struct Bitmap {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: usize, height: usize) -> Self {
        let len = width.saturating_mul(height);
        Self {
            width,
            height,
            pixels: vec![0; len],
        }
    }

    /// Adds coverage at a pixel, saturating at 255. Out-of-bounds writes
    /// are silently dropped so glyphs can be clipped at the canvas edges.
    pub fn accumulate(&mut self, x: usize, y: usize, coverage: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = y * self.width + x;
        self.pixels[idx] = self.pixels[idx].saturating_add(coverage);
    }

    /// Expands the coverage into RGBA pixels tinted with `color`, using the
    /// coverage as the alpha channel. The host composites the result over
    /// its own background.
    pub fn tinted_pixels(&self, color: Rgba) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for &coverage in &self.pixels {
            let alpha = (coverage as u16 * color.a as u16 / 255) as u8;
            out.extend_from_slice(&[color.r, color.g, color.b, alpha]);
        }
        out
    }
}

/// [`DrawSurface`] that rasterizes text into a [`Bitmap`] with `fontdue`.
///
/// The surface is bound to a single loaded font; `TextStyle::font_id` is
/// informational here since the host already resolved the face. Within one
/// `draw_text` call characters advance by their natural advance width, so a
/// whole-line op renders at its natural width and the spacing of justified
/// lines comes only from the op positions.
pub struct BitmapSurface {
    bitmap: Bitmap,
    font: Arc<fontdue::Font>,
}

impl BitmapSurface {
    pub fn new(width: usize, height: usize, font: Arc<fontdue::Font>) -> Self {
        Self {
            bitmap: Bitmap::new(width, height),
            font,
        }
    }

    /// Consumes the surface and returns the rendered bitmap.
    pub fn into_bitmap(self) -> Bitmap {
        self.bitmap
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    fn blit_glyph(&mut self, ch: char, origin_x: f32, baseline_y: f32, px_size: f32) {
        let (metrics, coverage) = self.font.rasterize(ch, px_size);

        if metrics.width == 0 || metrics.height == 0 {
            return;
        }

        // Glyph bitmaps hang from the baseline: the top row sits at
        // baseline - height - ymin.
        let left = origin_x + metrics.xmin as f32;
        let top = baseline_y - (metrics.height as f32 + metrics.ymin as f32);

        for row in 0..metrics.height {
            let y = top + row as f32;
            if y < 0.0 {
                continue;
            }
            let iy = y.floor() as usize;
            if iy >= self.bitmap.height {
                continue;
            }

            for col in 0..metrics.width {
                let src_alpha = coverage[row * metrics.width + col];
                if src_alpha == 0 {
                    continue;
                }

                let x = left + col as f32;
                if x < 0.0 {
                    continue;
                }

                self.bitmap.accumulate(x.floor() as usize, iy, src_alpha);
            }
        }
    }
}

impl DrawSurface for BitmapSurface {
    fn draw_text(&mut self, text: &str, pos: Point2D<f32>, style: &TextStyle) {
        let mut x = pos.x;
        for ch in text.chars() {
            if ch == '\n' {
                // Forced-break pass-through ops keep their newline; it has
                // no glyph and no advance.
                continue;
            }
            self.blit_glyph(ch, x, pos.y, style.px_size);
            x += self.font.metrics(ch, style.px_size).advance_width;
        }
    }
}
