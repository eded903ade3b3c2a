//! Bitmaps for user-defined glyphs, and helpers for building them from pixel grids and binary
//! literals.

use crate::command::consts::*;

/// An 8x5 glyph bitmap as stored in CGRAM: one byte per pixel row, top to bottom. Only the low 5
/// bits of each row are displayed, with bit 4 being the leftmost pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Glyph(pub [u8; GLYPH_ROWS]);

impl Glyph {
    pub const BLANK: Glyph = Glyph([0; GLYPH_ROWS]);

    /// Pack a grid of pixels into row bytes. A pixel is lit when it differs from its type's
    /// default (so `true`, or any non-zero number). The grid may be ragged or smaller than 8x5;
    /// anything missing, and anything beyond 8 rows or 5 columns, is left dark.
    pub fn from_pixels<R, P>(pixels: &[R]) -> Self
    where
        R: AsRef<[P]>,
        P: Default + PartialEq,
    {
        let mut rows = [0u8; GLYPH_ROWS];
        for (row, line) in rows.iter_mut().zip(pixels) {
            for (x, pixel) in line.as_ref().iter().take(GLYPH_COLS).enumerate() {
                if *pixel != P::default() {
                    *row |= 1 << (GLYPH_COLS - 1 - x);
                }
            }
        }
        Glyph(rows)
    }

    /// Build a glyph from up to 8 binary row literals such as `"10101"`, each parsed with
    /// `binary_to_row`. Missing rows are dark.
    pub fn from_binary_rows(lines: &[&str]) -> Self {
        let mut rows = [0u8; GLYPH_ROWS];
        for (row, line) in rows.iter_mut().zip(lines) {
            *row = binary_to_row(line);
        }
        Glyph(rows)
    }

    pub fn rows(&self) -> &[u8; GLYPH_ROWS] {
        &self.0
    }
}

/// Parse a pixel row written as a binary literal, e.g. `"01110"`, clamped to the 5-bit range.
///
/// Parsing is lenient: leading whitespace and a sign are accepted, and only the leading run of
/// binary digits counts, so `"1102"` reads as `0b110`. Input with no leading digits, or a negative
/// value, yields 0. Values wider than 5 bits saturate at 31.
pub fn binary_to_row(binary: &str) -> u8 {
    let s = binary.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: u32 = 0;
    let mut seen_digit = false;
    for bit in digits.bytes().take_while(|b| *b == b'0' || *b == b'1') {
        value = value.saturating_mul(2).saturating_add(u32::from(bit - b'0'));
        seen_digit = true;
    }

    if !seen_digit || negative {
        return 0;
    }
    value.min(u32::from(ROW_MAX)) as u8
}
