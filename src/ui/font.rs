//! 3x7 pixel glyph table.
//!
//! Each glyph is three column bytes. Bit 0 is the top row, bit 6 the
//! bottom row, bit 7 is always clear:
//! ```text
//! '2'   col 0  col 1  col 2
//! r0      #      #      #
//! r1      .      .      #
//! r2      .      .      #
//! r3      #      #      #
//! r4      #      .      .
//! r5      #      .      .
//! r6      #      #      #
//!       0x79   0x49   0x4F
//! ```
//!
//! A [`Glyph`] can only be built from the closed set of supported shapes,
//! so looking up its columns never reads outside the table.

use crate::error::Error;

/// Glyph width in columns.
pub const GLYPH_WIDTH: usize = 3;

/// Glyph height in rows.
pub const GLYPH_HEIGHT: usize = 7;

const DIGITS: u8 = 0;
const COLON: u8 = 10;
const SPACE: u8 = 11;
const ARROW_LEFT: u8 = 12;
const ARROW_RIGHT: u8 = 13;
const CARET_LEFT: u8 = 14;
const CARET_RIGHT: u8 = 15;
const EQUALS: u8 = 16;
const LETTERS: u8 = 17;

#[rustfmt::skip]
const TABLE: [[u8; GLYPH_WIDTH]; 43] = [
    [0x7F, 0x41, 0x7F], // 0
    [0x42, 0x7F, 0x40], // 1
    [0x79, 0x49, 0x4F], // 2
    [0x49, 0x49, 0x7F], // 3
    [0x0F, 0x08, 0x7F], // 4
    [0x4F, 0x49, 0x79], // 5
    [0x7F, 0x49, 0x79], // 6
    [0x01, 0x01, 0x7F], // 7
    [0x7F, 0x49, 0x7F], // 8
    [0x4F, 0x49, 0x7F], // 9
    [0x00, 0x14, 0x00], // :
    [0x00, 0x00, 0x00], // space
    [0x04, 0x06, 0x7F], // up arrow, left half
    [0x7F, 0x06, 0x04], // up arrow, right half
    [0x08, 0x14, 0x22], // <
    [0x22, 0x14, 0x08], // >
    [0x14, 0x14, 0x14], // =
    [0x7E, 0x09, 0x7E], // A
    [0x7F, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41], // C
    [0x7F, 0x41, 0x3E], // D
    [0x7F, 0x49, 0x41], // E
    [0x7F, 0x09, 0x01], // F
    [0x3E, 0x41, 0x79], // G
    [0x7F, 0x08, 0x7F], // H
    [0x41, 0x7F, 0x41], // I
    [0x20, 0x40, 0x3F], // J
    [0x7F, 0x08, 0x77], // K
    [0x7F, 0x40, 0x40], // L
    [0x7F, 0x06, 0x7F], // M
    [0x7F, 0x1C, 0x7F], // N
    [0x3E, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x06], // P
    [0x3E, 0x61, 0x7E], // Q
    [0x7F, 0x09, 0x76], // R
    [0x46, 0x49, 0x31], // S
    [0x01, 0x7F, 0x01], // T
    [0x3F, 0x40, 0x3F], // U
    [0x1F, 0x60, 0x1F], // V
    [0x7F, 0x30, 0x7F], // W
    [0x63, 0x1C, 0x63], // X
    [0x07, 0x78, 0x07], // Y
    [0x61, 0x5D, 0x43], // Z
];

/// A validated index into the glyph table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph(u8);

impl Glyph {
    pub const COLON: Glyph = Glyph(COLON);
    pub const SPACE: Glyph = Glyph(SPACE);
    /// Left half of the two-glyph up arrow used to mark the edited digit.
    pub const ARROW_LEFT: Glyph = Glyph(ARROW_LEFT);
    /// Right half of the two-glyph up arrow.
    pub const ARROW_RIGHT: Glyph = Glyph(ARROW_RIGHT);
    pub const CARET_LEFT: Glyph = Glyph(CARET_LEFT);
    pub const CARET_RIGHT: Glyph = Glyph(CARET_RIGHT);
    pub const EQUALS: Glyph = Glyph(EQUALS);

    /// Glyph for the ones digit of `value`.
    pub const fn digit(value: u64) -> Glyph {
        Glyph(DIGITS + (value % 10) as u8)
    }

    /// Column bitmaps, left to right.
    pub const fn columns(self) -> [u8; GLYPH_WIDTH] {
        TABLE[self.0 as usize]
    }
}

impl TryFrom<char> for Glyph {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '0'..='9' => Ok(Glyph::digit(c as u64 - '0' as u64)),
            ':' => Ok(Glyph::COLON),
            ' ' => Ok(Glyph::SPACE),
            '<' => Ok(Glyph::CARET_LEFT),
            '>' => Ok(Glyph::CARET_RIGHT),
            '=' => Ok(Glyph::EQUALS),
            'A'..='Z' => Ok(Glyph(LETTERS + (c as u8 - b'A'))),
            _ => Err(Error::UnsupportedGlyph(c)),
        }
    }
}
