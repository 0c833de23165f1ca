use crate::measure::Measure;

/// One line as reported by the external line-breaking engine.
///
/// `start..end` is a half-open byte range into the full text. The engine
/// guarantees that ranges are ascending, non-overlapping, and cover the
/// text exactly; this crate trusts that contract and treats violations as
/// fatal (string slicing panics on an invalid range).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineDescriptor {
    /// Byte offset of the first character of the line.
    pub start: usize,
    /// Byte offset one past the last character of the line.
    pub end: usize,
    /// Vertical baseline position, already adjusted for the top inset.
    pub baseline: f32,
    /// The line's unjustified rendered width, measured with the same
    /// function the painter uses for single characters.
    pub natural_width: f32,
}

/// Read access to the external layout engine's per-line results.
///
/// Mirrors the accessor surface of typical line-break engines so hosts can
/// implement it directly on their engine's layout object instead of copying
/// descriptors out.
pub trait LineLayout {
    fn line_count(&self) -> usize;
    fn line_start(&self, i: usize) -> usize;
    fn line_end(&self, i: usize) -> usize;
    fn line_baseline(&self, i: usize) -> f32;
    fn line_natural_width(&self, i: usize) -> f32;
}

/// An owned list of [`LineDescriptor`]s.
///
/// The simplest [`LineLayout`] implementation, for hosts that already hold
/// the engine's results as plain data.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lines {
    pub lines: Vec<LineDescriptor>,
}

impl Lines {
    pub fn new(lines: Vec<LineDescriptor>) -> Self {
        Self { lines }
    }

    /// Builds descriptors from `(start, end, baseline)` ranges, measuring
    /// each line's natural width with `measure`.
    ///
    /// Using the painter's own measurement function here keeps the natural
    /// widths consistent with the per-character widths used during
    /// justification, so spacing errors do not accumulate across a line.
    pub fn from_ranges(
        text: &str,
        ranges: impl IntoIterator<Item = (usize, usize, f32)>,
        measure: &impl Measure,
    ) -> Self {
        let lines = ranges
            .into_iter()
            .map(|(start, end, baseline)| LineDescriptor {
                start,
                end,
                baseline,
                natural_width: measure.width(&text[start..end]),
            })
            .collect();
        Self { lines }
    }
}

impl LineLayout for Lines {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_start(&self, i: usize) -> usize {
        self.lines[i].start
    }

    fn line_end(&self, i: usize) -> usize {
        self.lines[i].end
    }

    fn line_baseline(&self, i: usize) -> f32 {
        self.lines[i].baseline
    }

    fn line_natural_width(&self, i: usize) -> f32 {
        self.lines[i].natural_width
    }
}

/// The drawable area inside the widget after subtracting padding.
///
/// Recomputed by the host whenever the widget is resized; read-only during
/// a paint pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentBox {
    /// Left padding in pixels. Also the x origin of every line.
    pub left_inset: f32,
    /// Right padding in pixels.
    pub right_inset: f32,
    /// The widget's full measured width in pixels.
    pub measured_width: f32,
}

impl ContentBox {
    pub fn new(left_inset: f32, right_inset: f32, measured_width: f32) -> Self {
        Self {
            left_inset,
            right_inset,
            measured_width,
        }
    }

    /// Width available for glyphs between the insets.
    pub fn content_width(&self) -> f32 {
        self.measured_width - self.left_inset - self.right_inset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-advance measurement: every char is 10px wide.
    struct TenPx;

    impl Measure for TenPx {
        fn width(&self, text: &str) -> f32 {
            text.chars().count() as f32 * 10.0
        }
    }

    #[test]
    fn content_width_subtracts_both_insets() {
        let content_box = ContentBox::new(16.0, 24.0, 320.0);
        assert_eq!(content_box.content_width(), 280.0);
    }

    #[test]
    fn from_ranges_measures_each_line() {
        let text = "The quick brown fox jumps";
        let lines = Lines::from_ranges(text, [(0, 15, 20.0), (16, 25, 44.0)], &TenPx);

        assert_eq!(lines.line_count(), 2);
        assert_eq!(lines.line_natural_width(0), 150.0);
        assert_eq!(lines.line_natural_width(1), 90.0);
        assert_eq!(lines.line_baseline(1), 44.0);
        assert_eq!(&text[lines.line_start(1)..lines.line_end(1)], "fox jumps");
    }
}
