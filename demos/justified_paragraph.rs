//! Renders a justified paragraph to `justified_paragraph.png`.
//!
//! Wrapping stays outside the library, so this demo includes a minimal
//! greedy word-wrap that produces the `Lines` descriptors a real host
//! would get from its layout engine.

use image::{ImageBuffer, Rgba as ImageRgba};

use fulljust::{
    ContentBox, FontMeasurer, JustificationConfig, Measure, Scale, TextContent, TextSystem,
    layout::Lines,
    renderer::BitmapSurface,
};

/// Greedy word-wrap producing `(start, end, baseline)` byte ranges.
///
/// Stands in for the host's layout engine; the library never wraps text
/// itself.
fn wrap_ranges(
    text: &str,
    max_width: f32,
    line_height: f32,
    measure: &impl Measure,
) -> Vec<(usize, usize, f32)> {
    let mut ranges = Vec::new();
    let mut line_start = 0;
    let mut last_space = None;
    let mut baseline = line_height;

    let mut chars = text.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if ch == ' ' {
            last_space = Some(idx);
        }

        let end = idx + ch.len_utf8();
        if measure.width(&text[line_start..end]) > max_width {
            let break_at = last_space.map(|s| s + 1).unwrap_or(idx);
            if break_at > line_start {
                ranges.push((line_start, break_at, baseline));
                baseline += line_height;
                line_start = break_at;
                last_space = None;
            }
        }

        if chars.peek().is_none() {
            ranges.push((line_start, text.len(), baseline));
        }
    }

    ranges
}

fn main() {
    let system = TextSystem::new(Scale(1.0));
    system.load_system_fonts();
    system.set_config(JustificationConfig {
        text_size: 28.0,
        ..Default::default()
    });

    let content = TextContent::from(
        "The quick brown fox jumps over the lazy dog while every line \
         of this paragraph is stretched to meet the right edge of the box.",
    );

    let (width, height) = (480usize, 240usize);
    let content_box = ContentBox::new(16.0, 16.0, width as f32);

    let Some((_, font)) = system.font_storage.lock().default_font() else {
        eprintln!("no system fonts available");
        return;
    };

    let config = system.config();
    let px_size = system.scale().to_px(config.text_size);
    let measurer = FontMeasurer::new(font, px_size);
    let lines = Lines::from_ranges(
        content.text(),
        wrap_ranges(
            content.text(),
            content_box.content_width(),
            measurer.px_size() * 1.3,
            &measurer,
        ),
        &measurer,
    );

    let mut surface = BitmapSurface::new(width, height, measurer.font().clone());
    system.paint(&content, &lines, &content_box, &mut surface);

    let bitmap = surface.into_bitmap();
    let rgba = bitmap.tinted_pixels(config.text_color);
    let image: ImageBuffer<ImageRgba<u8>, _> =
        ImageBuffer::from_raw(width as u32, height as u32, rgba)
            .expect("pixel buffer matches image dimensions");
    image
        .save("justified_paragraph.png")
        .expect("failed to write justified_paragraph.png");

    println!("wrote justified_paragraph.png ({} lines)", lines.lines.len());
}
