//! Application-wide constants and compile-time configuration.
//!
//! All timing parameters, display geometry and bus constants live here
//! so they can be tuned in one place.

// Display

/// Factory I²C address of the SSD1306 controller.
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

/// Initial display brightness (0x00..=0xFF).
pub const CONTRAST: u8 = 0x80;

/// Physical panel width in pixels.
pub const PHYSICAL_WIDTH: usize = 128;

/// Physical panel height in pixels.
pub const PHYSICAL_HEIGHT: usize = 64;

/// Logical framebuffer width. Every logical column is drawn twice.
pub const LOGICAL_WIDTH: usize = PHYSICAL_WIDTH / 2;

/// Logical framebuffer height. Every logical row is drawn twice.
pub const LOGICAL_HEIGHT: usize = PHYSICAL_HEIGHT / 2;

/// Number of 8-row pages in the logical framebuffer.
pub const LOGICAL_PAGES: usize = LOGICAL_HEIGHT / 8;

// Timekeeping

/// Inactivity window before the watch goes back to deep sleep (ms).
pub const TIMEOUT_MS: u64 = 5000;

/// Hour-of-day modulus shown on the watch face.
#[cfg(not(feature = "twelve-hour"))]
pub const HOUR_FORMAT: HourFormat = HourFormat::H24;
#[cfg(feature = "twelve-hour")]
pub const HOUR_FORMAT: HourFormat = HourFormat::H12;

/// Milliseconds credited to the clock per periodic wake tick.
///
/// The tick is driven by the low-frequency RC oscillator, which runs
/// noticeably off its nominal rate. Tune per unit against a reference
/// clock: if the watch gains time lower this, if it loses time raise it.
pub const TICK_CALIBRATION_MS: u32 = 1072;

/// Nominal period of the wake tick as programmed into the timer (ms).
pub const TICK_PERIOD_MS: u64 = 1000;

// Button

/// Wait after a press is first seen before deciding short vs. long (ms).
pub const PRESS_WINDOW_MS: u32 = 500;

/// Extra wait after a long press so the release is not read as a new press (ms).
pub const RELEASE_WINDOW_MS: u32 = 500;

/// Hour-of-day display format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HourFormat {
    H12,
    H24,
}

impl HourFormat {
    /// Modulus applied to whole elapsed hours.
    pub const fn modulus(self) -> u64 {
        match self {
            HourFormat::H12 => 12,
            HourFormat::H24 => 24,
        }
    }
}

/// Runtime view of the compile-time configuration.
///
/// The firmware always runs with [`Config::DEFAULT`]; the struct exists so
/// the controller can be exercised with other values on the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub contrast: u8,
    pub timeout_ms: u64,
    pub hour_format: HourFormat,
    pub tick_ms: u32,
    pub press_window_ms: u32,
    pub release_window_ms: u32,
}

impl Config {
    pub const DEFAULT: Config = Config {
        contrast: CONTRAST,
        timeout_ms: TIMEOUT_MS,
        hour_format: HOUR_FORMAT,
        tick_ms: TICK_CALIBRATION_MS,
        press_window_ms: PRESS_WINDOW_MS,
        release_window_ms: RELEASE_WINDOW_MS,
    };
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}
