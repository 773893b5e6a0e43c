use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::encoding::{ModuleString, is_guard_module};
use crate::identifier::Identifier;

pub const GLYPH_WIDTH: usize = 5;
pub const GLYPH_HEIGHT: usize = 7;

const WHITE: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);
const BLACK: Rgb<u8> = Rgb([0x00, 0x00, 0x00]);

/// Geometry bundle for a rendered symbol.
///
/// All pixel offsets that position bars and digit glyphs live here; the
/// default is the 328x194 reference canvas with 3 px modules.
#[derive(Debug, Clone, Copy)]
pub struct SymbolLayout {
    pub width: u32,
    pub height: u32,
    /// Pixel width of one module.
    pub module_width: u32,
    /// X of the leftmost module; leaves room for the leading digit.
    pub bar_origin_x: i32,
    /// Y of the top edge of every bar.
    pub bar_top: i32,
    /// Pixel height of guard bars.
    pub guard_height: u32,
    /// Pixel height of data bars; same top edge as the guards, shorter foot.
    pub bar_height: u32,
    /// Y of the top edge of the digit glyphs.
    pub text_top: i32,
    /// Horizontal distance between adjacent digit slots.
    pub digit_pitch: i32,
    /// X of the leading digit, left of the bar block.
    pub leading_x: i32,
    /// Pitch offset for the six digits under the left bar half.
    pub left_shift: i32,
    /// Pitch offset for the six digits under the right bar half.
    pub right_shift: i32,
    /// Pitch offset for the trailing `>` marker.
    pub trailer_shift: i32,
    /// Integer scale applied to the built-in 5x7 glyphs.
    pub glyph_scale: u32,
}

impl Default for SymbolLayout {
    fn default() -> Self {
        Self {
            width: 328,
            height: 194,
            module_width: 3,
            bar_origin_x: 20,
            bar_top: 3,
            guard_height: 188,
            bar_height: 164,
            text_top: 169,
            digit_pitch: 21,
            leading_x: 2,
            left_shift: 11,
            right_shift: 24,
            trailer_shift: 33,
            glyph_scale: 3,
        }
    }
}

impl SymbolLayout {
    /// X of the glyph in digit slot `index`: 0 is the leading digit, 1..=6
    /// sit under the left bar half, 7..=12 under the right half, 13 is the
    /// trailing marker.
    fn digit_x(&self, index: usize) -> i32 {
        let pitch = index as i32 * self.digit_pitch;
        match index {
            0 => self.leading_x,
            1..=6 => pitch + self.left_shift,
            7..=12 => pitch + self.right_shift,
            _ => pitch + self.trailer_shift,
        }
    }
}

/// Paint a symbol onto a white RGB canvas using the supplied layout.
///
/// Accepts only already-validated values, so there is nothing to re-check
/// and no failure mode; the buffer is owned for the duration of the call
/// and handed back to the caller.
pub fn render_symbol_image(
    identifier: &Identifier,
    modules: &ModuleString,
    layout: &SymbolLayout,
) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(layout.width, layout.height, WHITE);

    for (index, bar) in modules.modules().enumerate() {
        if !bar {
            continue;
        }
        let height = if is_guard_module(index) {
            layout.guard_height
        } else {
            layout.bar_height
        };
        let x = layout.bar_origin_x + index as i32 * layout.module_width as i32;
        draw_filled_rect_mut(
            &mut canvas,
            Rect::at(x, layout.bar_top).of_size(layout.module_width, height),
            BLACK,
        );
    }

    for (index, ch) in identifier
        .as_str()
        .chars()
        .chain(std::iter::once('>'))
        .enumerate()
    {
        draw_glyph(
            &mut canvas,
            layout.digit_x(index),
            layout.text_top,
            ch,
            BLACK,
            layout.glyph_scale,
        );
    }

    canvas
}

fn draw_glyph(canvas: &mut RgbImage, x: i32, y: i32, ch: char, color: Rgb<u8>, scale: u32) {
    let pattern = glyph_pattern(ch);
    for (row, bits) in pattern.iter().enumerate() {
        for col in 0..GLYPH_WIDTH {
            if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                let px = x + (col as i32 * scale as i32);
                let py = y + (row as i32 * scale as i32);
                draw_filled_rect_mut(canvas, Rect::at(px, py).of_size(scale, scale), color);
            }
        }
    }
}

#[rustfmt::skip]
fn glyph_pattern(ch: char) -> [u8; GLYPH_HEIGHT] {
    match ch {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => [0b11110, 0b00001, 0b00001, 0b01110, 0b00001, 0b00001, 0b11110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '<' => [0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => [0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        _   => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
    }
}
