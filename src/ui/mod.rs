//! User interface subsystem - OLED display + the single button.
//!
//! ## Components
//!
//! - **Font**: 3x7 glyph table
//! - **Framebuffer**: 64x32 logical buffer, drawn 2x on the panel
//! - **Screen**: watch face layout
//! - **Display**: SSD1306 128×64 OLED over a buffered I²C transport
//! - **Buttons**: active-low pin level mirror and its edge handler

pub mod buttons;
pub mod display;
pub mod font;
pub mod framebuffer;
pub mod input_logic;
pub mod screen;
pub mod transport;
