//! Bitmap Text Rendering
//!
//! Procedural 5x7 bitmap font. Glyphs are drawn as filled squares through a
//! [`Surface`], so any backend that can fill rectangles can render labels.

use crate::render::Surface;
use crate::transform::ScreenRect;
use sdl2::pixels::Color;

/// Glyph cell width in font pixels (5 pixels + 1 spacing)
pub const GLYPH_ADVANCE: u32 = 6;

/// Glyph height in font pixels
pub const GLYPH_HEIGHT: u32 = 7;

/// Row patterns for a character (1 = pixel on), case-insensitive
fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => [0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00110, 0b00100, 0b00000, 0b00100],
        '<' => [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => [0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        ' ' => [0; 7],
        _ => [0b11111; 7],
    }
}

/// Converts a point-style font size to a whole-pixel glyph scale.
///
/// A glyph is 7 font pixels tall, so a label of size `n` gets glyphs roughly
/// `n` screen pixels tall. Never below 1.
pub fn glyph_scale(font_size: f32) -> u32 {
    let scale = (font_size / GLYPH_HEIGHT as f32).round();
    if scale.is_finite() && scale >= 1.0 {
        scale as u32
    } else {
        1
    }
}

/// Pixel extent of `text` at the given glyph scale
pub fn text_extent(text: &str, scale: u32) -> (u32, u32) {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return (0, 0);
    }
    // Drop the trailing spacing column of the last glyph
    ((chars * GLYPH_ADVANCE - 1) * scale, GLYPH_HEIGHT * scale)
}

/// Renders bitmap text with its top-left corner at `(x, y)`
///
/// `scale` is the size of one font pixel in screen pixels
/// (1 = 5x7 pixels, 2 = 10x14 pixels, etc.).
pub fn draw_bitmap_text<S: Surface + ?Sized>(
    surface: &mut S,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    let advance = (GLYPH_ADVANCE * scale) as i32;
    let pixel_size = scale as i32;

    for (i, c) in text.chars().enumerate() {
        let char_x = x + i as i32 * advance;

        for (row, pattern_row) in glyph(c).iter().enumerate() {
            for col in 0..5 {
                if (pattern_row >> (4 - col)) & 1 == 1 {
                    surface.fill_rect(
                        ScreenRect::new(
                            char_x + col * pixel_size,
                            y + row as i32 * pixel_size,
                            scale,
                            scale,
                        ),
                        color,
                    )?;
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PixelCounter {
        rects: Vec<ScreenRect>,
    }

    impl Surface for PixelCounter {
        fn fill_rect(&mut self, rect: ScreenRect, _color: Color) -> Result<(), String> {
            self.rects.push(rect);
            Ok(())
        }
    }

    #[test]
    fn test_glyph_scale_from_font_size() {
        assert_eq!(glyph_scale(87.5), 13);
        assert_eq!(glyph_scale(14.0), 2);
        assert_eq!(glyph_scale(0.0), 1);
        assert_eq!(glyph_scale(f32::NAN), 1);
    }

    #[test]
    fn test_text_extent() {
        assert_eq!(text_extent("", 3), (0, 0));
        assert_eq!(text_extent("hi", 1), (11, 7));
        assert_eq!(text_extent("hi", 2), (22, 14));
    }

    #[test]
    fn test_draws_one_square_per_lit_pixel() {
        let mut surface = PixelCounter { rects: Vec::new() };
        // '-' has a single row of five pixels
        draw_bitmap_text(&mut surface, "-", 10, 20, Color::RGB(255, 255, 255), 2).unwrap();

        assert_eq!(surface.rects.len(), 5);
        assert_eq!(surface.rects[0], ScreenRect::new(10, 26, 2, 2));
        assert_eq!(surface.rects[4], ScreenRect::new(18, 26, 2, 2));
    }

    #[test]
    fn test_space_draws_nothing() {
        let mut surface = PixelCounter { rects: Vec::new() };
        draw_bitmap_text(&mut surface, "  ", 0, 0, Color::RGB(0, 0, 0), 1).unwrap();
        assert!(surface.rects.is_empty());
    }
}
