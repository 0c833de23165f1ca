use std::sync::Arc;

/// Horizontal text measurement.
///
/// The justifier measures whole lines and single characters through the
/// *same* implementation so the per-character advances sum to the value the
/// line's natural width was derived from. Splitting these would let
/// rounding drift accumulate across a justified line and the last
/// character's right edge would miss the content edge.
pub trait Measure {
    /// Rendered width of `text` in pixels.
    fn width(&self, text: &str) -> f32;
}

/// [`Measure`] backed by a `fontdue` font at a fixed pixel size.
///
/// Width is the sum of glyph advance widths. Kerning is intentionally not
/// applied: justified lines are drawn one character at a time, so the drawn
/// width of a line is exactly the sum of its single-character widths, and
/// measurement has to agree with that.
#[derive(Clone)]
pub struct FontMeasurer {
    font: Arc<fontdue::Font>,
    px_size: f32,
}

impl FontMeasurer {
    pub fn new(font: Arc<fontdue::Font>, px_size: f32) -> Self {
        Self { font, px_size }
    }

    pub fn font(&self) -> &Arc<fontdue::Font> {
        &self.font
    }

    pub fn px_size(&self) -> f32 {
        self.px_size
    }
}

impl Measure for FontMeasurer {
    fn width(&self, text: &str) -> f32 {
        text.chars()
            .map(|ch| self.font.metrics(ch, self.px_size).advance_width)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Advance of 1px per byte, to exercise the trait without a real font.
    struct BytePx;

    impl Measure for BytePx {
        fn width(&self, text: &str) -> f32 {
            text.len() as f32
        }
    }

    #[test]
    fn empty_text_measures_zero() {
        assert_eq!(BytePx.width(""), 0.0);
    }

    #[test]
    fn substring_widths_sum_to_line_width() {
        let line = "fox jumps";
        let per_char: f32 = line
            .char_indices()
            .map(|(i, ch)| BytePx.width(&line[i..i + ch.len_utf8()]))
            .sum();
        assert_eq!(per_char, BytePx.width(line));
    }
}
