use crate::config::JustificationConfig;
use crate::content::TextContent;
use crate::justify::{DrawOp, default_line, justify_line};
use crate::layout::{ContentBox, LineLayout};
use crate::measure::Measure;

/// Builds the full draw plan for one paint pass.
///
/// Walks the engine's lines in order and decides, per line, between the
/// justification path and the default left-aligned path:
///
/// * styled content skips justification entirely and every line goes
///   through the default path (a defined fallback, not an error);
/// * with `one_line` set and exactly one line, that line is justified;
/// * the last line is drawn unjustified, from its start offset to the end
///   of the whole text, and processing stops there;
/// * every other (interior) line is justified.
///
/// Pure: identical inputs yield an identical op sequence, emitted in
/// left-to-right, top-to-bottom order.
pub fn render_plan<'a>(
    content: &'a TextContent,
    layout: &impl LineLayout,
    config: &JustificationConfig,
    content_box: &ContentBox,
    measure: &impl Measure,
) -> Vec<DrawOp<'a>> {
    let text = content.text();
    let line_count = layout.line_count();
    let mut ops = Vec::new();

    if !content.is_plain() {
        for i in 0..line_count {
            let line = &text[layout.line_start(i)..layout.line_end(i)];
            ops.push(default_line(line, layout.line_baseline(i), content_box));
        }
        return ops;
    }

    for i in 0..line_count {
        let start = layout.line_start(i);
        let baseline = layout.line_baseline(i);

        if config.one_line && line_count == 1 {
            let line = &text[start..layout.line_end(i)];
            ops.extend(justify_line(
                line,
                baseline,
                layout.line_natural_width(i),
                content_box,
                measure,
            ));
        } else if i == line_count - 1 {
            // The trailing ragged line keeps its natural width. It runs to
            // the end of the whole text, not to the line's end offset.
            ops.push(default_line(&text[start..], baseline, content_box));
            break;
        } else {
            let line = &text[start..layout.line_end(i)];
            ops.extend(justify_line(
                line,
                baseline,
                layout.line_natural_width(i),
                content_box,
                measure,
            ));
        }
    }

    ops
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Rgba;
    use crate::content::{StyleSpan, StyledText};
    use crate::layout::Lines;

    /// Fixed-advance measurement: every char is `self.0` px wide.
    struct FixedAdvance(f32);

    impl Measure for FixedAdvance {
        fn width(&self, text: &str) -> f32 {
            text.chars().count() as f32 * self.0
        }
    }

    fn config(one_line: bool) -> JustificationConfig {
        JustificationConfig {
            one_line,
            ..Default::default()
        }
    }

    #[test]
    fn two_wrapped_lines_justify_interior_and_pass_last_through() {
        // "The quick brown fox jumps" wrapped at 280px of content width.
        let measure = FixedAdvance(10.0);
        let content = TextContent::from("The quick brown fox jumps");
        let content_box = ContentBox::new(0.0, 0.0, 280.0);
        let lines = Lines::from_ranges(content.text(), [(0, 15, 20.0), (16, 25, 44.0)], &measure);

        let ops = render_plan(&content, &lines, &config(false), &content_box, &measure);

        // Line 0 is interior: 15 single-character ops.
        assert_eq!(ops.len(), 16);
        assert!(ops[..15].iter().all(|op| op.text.chars().count() == 1));
        assert_eq!(ops[0].text, "T");
        assert_eq!(ops[0].pos.x, 0.0);

        // extra = (280 - 150) / 15; the last glyph's right edge sits one
        // `extra` short of 280, per the uniform spacing formula.
        let extra = (280.0 - 150.0) / 15.0;
        let last_char = &ops[14];
        let right_edge = last_char.pos.x + measure.width(last_char.text);
        assert!((right_edge + extra - 280.0).abs() < 1e-3);

        // Line 1 is the trailing line: one op at the left inset with its
        // natural width (position only; no spacing applied).
        assert_eq!(ops[15], DrawOp::new("fox jumps", 0.0, 44.0));
    }

    #[test]
    fn last_line_uses_text_to_the_end_of_content() {
        // End offsets that exclude a trailing character still draw it: the
        // final line's slice runs from its start offset to the text's end.
        let measure = FixedAdvance(10.0);
        let content = TextContent::from("ab cd");
        let content_box = ContentBox::new(5.0, 5.0, 100.0);
        let lines = Lines::from_ranges(content.text(), [(0, 2, 10.0), (3, 4, 30.0)], &measure);

        let ops = render_plan(&content, &lines, &config(false), &content_box, &measure);
        assert_eq!(*ops.last().unwrap(), DrawOp::new("cd", 5.0, 30.0));
    }

    #[test]
    fn single_line_without_one_line_mode_is_not_justified() {
        let measure = FixedAdvance(20.0);
        let content = TextContent::from("Hi");
        let content_box = ContentBox::new(0.0, 0.0, 200.0);
        let lines = Lines::from_ranges(content.text(), [(0, 2, 24.0)], &measure);

        let ops = render_plan(&content, &lines, &config(false), &content_box, &measure);
        assert_eq!(ops, vec![DrawOp::new("Hi", 0.0, 24.0)]);
    }

    #[test]
    fn single_line_with_one_line_mode_is_justified() {
        // "Hi" at 200px content width, natural 40px -> extra = 80.
        let measure = FixedAdvance(20.0);
        let content = TextContent::from("Hi");
        let content_box = ContentBox::new(0.0, 0.0, 200.0);
        let lines = Lines::from_ranges(content.text(), [(0, 2, 24.0)], &measure);

        let ops = render_plan(&content, &lines, &config(true), &content_box, &measure);
        assert_eq!(
            ops,
            vec![DrawOp::new("H", 0.0, 24.0), DrawOp::new("i", 100.0, 24.0)]
        );
    }

    #[test]
    fn styled_content_falls_back_to_default_rendering() {
        let measure = FixedAdvance(10.0);
        let content = TextContent::Styled(StyledText {
            text: "The quick brown fox jumps".into(),
            spans: vec![StyleSpan {
                range: 0..3,
                color: Rgba::new(255, 0, 0),
            }],
        });
        let content_box = ContentBox::new(0.0, 0.0, 280.0);
        let lines = Lines::from_ranges(content.text(), [(0, 15, 20.0), (16, 25, 44.0)], &measure);

        let ops = render_plan(&content, &lines, &config(false), &content_box, &measure);
        assert_eq!(
            ops,
            vec![
                DrawOp::new("The quick brown", 0.0, 20.0),
                DrawOp::new("fox jumps", 0.0, 44.0),
            ]
        );
    }

    #[test]
    fn interior_forced_break_line_is_not_stretched() {
        let measure = FixedAdvance(10.0);
        let content = TextContent::from("ab\ncdef");
        let content_box = ContentBox::new(0.0, 0.0, 100.0);
        let lines = Lines::from_ranges(content.text(), [(0, 3, 12.0), (3, 7, 28.0)], &measure);

        let ops = render_plan(&content, &lines, &config(false), &content_box, &measure);
        // Interior line keeps its newline and is emitted as one op.
        assert_eq!(
            ops,
            vec![
                DrawOp::new("ab\n", 0.0, 12.0),
                DrawOp::new("cdef", 0.0, 28.0),
            ]
        );
    }

    #[test]
    fn plan_is_identical_across_invocations() {
        let measure = FixedAdvance(9.0);
        let content = TextContent::from("stretch me wide");
        let content_box = ContentBox::new(2.0, 2.0, 240.0);
        let lines = Lines::from_ranges(content.text(), [(0, 10, 18.0), (11, 15, 40.0)], &measure);

        let first = render_plan(&content, &lines, &config(false), &content_box, &measure);
        let second = render_plan(&content, &lines, &config(false), &content_box, &measure);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_content_produces_no_ops() {
        let measure = FixedAdvance(10.0);
        let content = TextContent::from("");
        let content_box = ContentBox::new(0.0, 0.0, 100.0);
        let lines = Lines::default();

        let ops = render_plan(&content, &lines, &config(false), &content_box, &measure);
        assert!(ops.is_empty());
    }
}
