//! Half-resolution logical framebuffer.
//!
//! The buffer is laid out the way the SSD1306 addresses its GDDRAM: one
//! byte per column per 8-row page, bit 0 at the top. Every logical pixel
//! becomes a 2x2 block on the panel, so a 64x32 logical buffer fills the
//! 128x64 display.

use crate::config::{LOGICAL_HEIGHT, LOGICAL_PAGES, LOGICAL_WIDTH};
use crate::ui::font::Glyph;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;

/// Size of the logical framebuffer in bytes.
pub const FRAME_BYTES: usize = LOGICAL_WIDTH * LOGICAL_PAGES;

/// Bit-doubling table.
///
/// ```text
/// in    out       in    out
/// 0000  00000000  1000  11000000
/// 0001  00000011  1001  11000011
/// 0010  00001100  1010  11001100
/// 0011  00001111  1011  11001111
/// 0100  00110000  1100  11110000
/// 0101  00110011  1101  11110011
/// 0110  00111100  1110  11111100
/// 0111  00111111  1111  11111111
/// ```
#[rustfmt::skip]
const EXPAND: [u8; 16] = [
    0x00, 0x03, 0x0C, 0x0F, 0x30, 0x33, 0x3C, 0x3F,
    0xC0, 0xC3, 0xCC, 0xCF, 0xF0, 0xF3, 0xFC, 0xFF,
];

/// Expand the low nibble of `nibble` to a byte, doubling every bit.
///
/// Input bit `i` lands on output bits `2i` and `2i + 1`. The high nibble
/// of the argument is ignored.
pub const fn expand_nibble(nibble: u8) -> u8 {
    EXPAND[(nibble & 0x0F) as usize]
}

/// Per-axis glyph magnification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Scale {
    Single,
    Double,
}

impl Scale {
    pub const fn factor(self) -> usize {
        match self {
            Scale::Single => 1,
            Scale::Double => 2,
        }
    }
}

/// Logical framebuffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Framebuffer {
    buf: [u8; FRAME_BYTES],
}

impl Framebuffer {
    pub const fn new() -> Self {
        Self {
            buf: [0; FRAME_BYTES],
        }
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.buf.fill(0);
    }

    /// Returns `true` if no pixel is lit.
    pub fn is_blank(&self) -> bool {
        self.buf.iter().all(|&b| b == 0)
    }

    /// One logical page, `LOGICAL_WIDTH` column bytes.
    pub fn page(&self, page: usize) -> &[u8] {
        &self.buf[page * LOGICAL_WIDTH..(page + 1) * LOGICAL_WIDTH]
    }

    /// Raw byte at logical column `x` of `page`. Out-of-range reads return 0.
    pub fn byte(&self, x: usize, page: usize) -> u8 {
        if x < LOGICAL_WIDTH && page < LOGICAL_PAGES {
            self.buf[page * LOGICAL_WIDTH + x]
        } else {
            0
        }
    }

    fn put(&mut self, x: usize, page: usize, value: u8) {
        // Clip silently: layouts are fixed, so this only trims partial cells.
        if x < LOGICAL_WIDTH && page < LOGICAL_PAGES {
            self.buf[page * LOGICAL_WIDTH + x] = value;
        }
    }

    /// Set or clear a single logical pixel.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= LOGICAL_WIDTH || y >= LOGICAL_HEIGHT {
            return;
        }
        let idx = (y / 8) * LOGICAL_WIDTH + x;
        let mask = 1 << (y % 8);
        if on {
            self.buf[idx] |= mask;
        } else {
            self.buf[idx] &= !mask;
        }
    }

    /// Draw `glyph` with its top-left corner at column `x` of `page`.
    ///
    /// Double width repeats every glyph column. Double height spreads the
    /// glyph over two pages by expanding the low nibble of each column into
    /// `page` and the high nibble into `page + 1`. The glyph cell replaces
    /// whatever was underneath it.
    pub fn blit(&mut self, glyph: Glyph, x: usize, page: usize, width: Scale, height: Scale) {
        for (c, &column) in glyph.columns().iter().enumerate() {
            let (parts, rows) = match height {
                Scale::Single => ([column, 0], 1),
                Scale::Double => ([expand_nibble(column), expand_nibble(column >> 4)], 2),
            };
            for dx in 0..width.factor() {
                let col_x = x + c * width.factor() + dx;
                for (dy, &part) in parts[..rows].iter().enumerate() {
                    self.put(col_x, page + dy, part);
                }
            }
        }
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(LOGICAL_WIDTH as u32, LOGICAL_HEIGHT as u32)
    }
}

/// Logical-resolution drawing surface for `embedded-graphics` primitives
/// and fonts. The stock watch face uses the glyph blitter instead.
impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (usize::try_from(point.x), usize::try_from(point.y)) {
                self.set_pixel(x, y, color.is_on());
            }
        }
        Ok(())
    }
}
