//! Minimal embedded 5x7 glyph table for the gauge title.
//!
//! Covers just the characters a `BMI <value>` label can contain. Each
//! glyph row is 5 bits, most significant bit on the left.

use tiny_skia::{Path, PathBuilder, Rect};

pub(crate) const GLYPH_COLS: usize = 5;
pub(crate) const GLYPH_ROWS: usize = 7;

/// Horizontal advance between glyph origins, in cells.
const ADVANCE: usize = GLYPH_COLS + 1;

fn glyph(c: char) -> [u8; GLYPH_ROWS] {
    match c {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00110, 0b00110],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        _ => [0; GLYPH_ROWS],
    }
}

/// Total width of a rendered string in pixels.
pub(crate) fn text_width(text: &str, scale: f32) -> f32 {
    let chars = text.chars().count();
    if chars == 0 {
        return 0.0;
    }
    ((chars * ADVANCE - 1) as f32) * scale
}

/// Builds a fill path covering every set cell of the string.
///
/// `x`/`y` are the top-left corner of the first glyph; one font cell
/// spans `scale` pixels. Returns `None` only for fully blank text.
pub(crate) fn text_path(text: &str, x: f32, y: f32, scale: f32) -> Option<Path> {
    let mut pb = PathBuilder::new();
    for (i, c) in text.chars().enumerate() {
        let origin_x = x + (i * ADVANCE) as f32 * scale;
        let rows = glyph(c);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_COLS {
                if bits & (1 << (GLYPH_COLS - 1 - col)) != 0 {
                    let cell = Rect::from_xywh(
                        origin_x + col as f32 * scale,
                        y + row as f32 * scale,
                        scale,
                        scale,
                    );
                    if let Some(cell) = cell {
                        pb.push_rect(cell);
                    }
                }
            }
        }
    }
    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_characters_have_glyphs() {
        for c in "BMI 0123456789.-".chars() {
            if c == ' ' {
                continue;
            }
            assert_ne!(glyph(c), [0; GLYPH_ROWS], "missing glyph for {c:?}");
        }
    }

    #[test]
    fn text_width_scales_with_length() {
        assert_eq!(text_width("", 4.0), 0.0);
        assert!(text_width("BMI 22.9", 4.0) > text_width("BMI", 4.0));
    }

    #[test]
    fn text_path_is_nonempty_for_label() {
        assert!(text_path("BMI 22.9", 0.0, 0.0, 4.0).is_some());
    }

    #[test]
    fn blank_text_produces_no_path() {
        assert!(text_path("   ", 0.0, 0.0, 4.0).is_none());
    }
}
