use euclid::default::Point2D;

use crate::config::Rgba;

/// Paint state shared by every draw call of one paint pass.
///
/// Resolved once from the widget configuration before painting starts and
/// read-only afterwards, so repeating a pass with the same style replays
/// the same pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// The face to draw with, as registered in the host's font storage.
    pub font_id: fontdb::ID,
    /// Text size in device pixels (already scale-converted).
    pub px_size: f32,
    /// Glyph fill colour.
    pub color: Rgba,
}

/// A surface that can place text at explicit coordinates.
///
/// This is the only outward edge of the painter: each op of the render plan
/// becomes exactly one `draw_text` call, issued in plan order. `pos.y` is
/// the baseline, not the top of the glyphs. Implementations write pixels
/// (or record commands) and must not reorder calls, since justified lines
/// rely on left-to-right emission.
pub trait DrawSurface {
    fn draw_text(&mut self, text: &str, pos: Point2D<f32>, style: &TextStyle);
}

/// Surface that records calls instead of drawing, for hosts that batch
/// commands themselves and for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<(String, Point2D<f32>, TextStyle)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_text(&mut self, text: &str, pos: Point2D<f32>, style: &TextStyle) {
        self.calls.push((text.to_string(), pos, *style));
    }
}
