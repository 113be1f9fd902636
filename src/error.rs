//! Unified error type for tinywatch.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

use embedded_hal::i2c::ErrorKind;

/// Top-level error type used across the firmware.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Bus
    /// The transport's transaction buffer is full. The caller closes and
    /// reopens the transaction and resends the byte.
    BusBusy,

    /// I²C transaction to the display failed.
    Bus(ErrorKind),

    // Rendering
    /// The character has no glyph in the font table.
    UnsupportedGlyph(char),
}

// Convenience conversions

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::Bus(kind)
    }
}
