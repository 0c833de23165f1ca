use euclid::default::Point2D;

use crate::layout::ContentBox;
use crate::measure::Measure;

/// A single low-level draw call: place `text` with its first character's
/// origin at `pos`, where `pos.y` is the baseline.
///
/// Justified lines produce one op per character; pass-through lines produce
/// one op for the whole line. The op borrows from the content string, so a
/// plan is cheap to build every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawOp<'a> {
    pub text: &'a str,
    pub pos: Point2D<f32>,
}

impl<'a> DrawOp<'a> {
    pub fn new(text: &'a str, x: f32, y: f32) -> Self {
        Self {
            text,
            pos: Point2D::new(x, y),
        }
    }
}

/// Draws a line the way the stock widget would: one call at the left inset.
pub fn default_line<'a>(line: &'a str, baseline: f32, content_box: &ContentBox) -> DrawOp<'a> {
    DrawOp::new(line, content_box.left_inset, baseline)
}

/// Stretches one line so its rightmost drawn edge lands on the content
/// box's right edge, emitting one draw op per character.
///
/// The uniform per-character spacing is
/// `(content_width - natural_width) / char_count`. When the line overflows
/// the box the spacing goes negative and characters compress; that is the
/// accepted behavior, not clamped.
///
/// Two inputs bypass stretching entirely:
/// * an empty line emits nothing;
/// * a line ending in `'\n'` ended on a forced break, so its short width is
///   intentional and it is emitted as a single unmodified op.
///
/// `natural_width` must come from the same [`Measure`] implementation
/// passed here, otherwise rounding drift accumulates across the line.
pub fn justify_line<'a>(
    line: &'a str,
    baseline: f32,
    natural_width: f32,
    content_box: &ContentBox,
    measure: &impl Measure,
) -> Vec<DrawOp<'a>> {
    if line.is_empty() {
        return Vec::new();
    }

    let x = content_box.left_inset;
    if line.ends_with('\n') {
        return vec![DrawOp::new(line, x, baseline)];
    }

    let char_count = line.chars().count();
    let extra = (content_box.content_width() - natural_width) / char_count as f32;

    let mut ops = Vec::with_capacity(char_count);
    let mut x = x;
    for (idx, ch) in line.char_indices() {
        let ch_text = &line[idx..idx + ch.len_utf8()];
        let ch_width = measure.width(ch_text);
        ops.push(DrawOp::new(ch_text, x, baseline));
        x += ch_width + extra;
    }

    ops
}
