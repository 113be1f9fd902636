//! SSD1306 OLED driver for the half-resolution framebuffer.
//!
//! Only the handful of controller commands the watch needs are emitted.
//! Frames are pushed one physical page at a time: each logical page holds
//! two physical pages (low nibble, then high nibble), and every logical
//! column is sent twice.

use crate::config::{PHYSICAL_HEIGHT, PHYSICAL_WIDTH};
use crate::error::Error;
use crate::ui::framebuffer::{expand_nibble, Framebuffer};
use crate::ui::transport::Transport;

/// Control byte introducing a command stream.
const CONTROL_COMMAND: u8 = 0x00;
/// Control byte introducing a GDDRAM data stream.
const CONTROL_DATA: u8 = 0x40;

const SET_MULTIPLEX: u8 = 0xA8;
const SET_COM_PINS: u8 = 0xDA;
const CHARGE_PUMP: u8 = 0x8D;
const SET_CONTRAST: u8 = 0x81;
const DISPLAY_ON: u8 = 0xAF;
const DISPLAY_OFF: u8 = 0xAE;
const ADDRESSING_MODE: u8 = 0x20;
const COLUMN_RANGE: u8 = 0x21;
const PAGE_RANGE: u8 = 0x22;

/// Vertical addressing mode argument for [`ADDRESSING_MODE`].
const VERTICAL: u8 = 0x01;

/// Physical 8-row pages on the panel.
pub const PHYSICAL_PAGES: usize = PHYSICAL_HEIGHT / 8;

/// Display driver over a [`Transport`].
pub struct Display<T> {
    transport: T,
    address: u8,
}

impl<T: Transport> Display<T> {
    pub fn new(transport: T, address: u8) -> Self {
        Self { transport, address }
    }

    /// Give back the transport.
    pub fn release(self) -> T {
        self.transport
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Configure the controller for a 128x64 panel and switch it on.
    pub fn init(&mut self, contrast: u8) -> Result<(), Error> {
        self.commands(&[
            SET_MULTIPLEX,
            0x3F,
            SET_COM_PINS,
            0x12,
            CHARGE_PUMP,
            0x14,
            SET_CONTRAST,
            contrast,
            DISPLAY_ON,
        ])
    }

    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error> {
        self.commands(&[SET_CONTRAST, contrast])
    }

    pub fn power_on(&mut self) -> Result<(), Error> {
        self.commands(&[DISPLAY_ON])
    }

    pub fn power_off(&mut self) -> Result<(), Error> {
        self.commands(&[DISPLAY_OFF])
    }

    /// Push the whole framebuffer to the panel at 2x magnification.
    pub fn write_frame(&mut self, frame: &Framebuffer) -> Result<(), Error> {
        for page in 0..PHYSICAL_PAGES {
            let logical = frame.page(page / 2);
            let shift = (page % 2) * 4;
            let p = page as u8;

            self.commands(&[
                ADDRESSING_MODE,
                VERTICAL,
                COLUMN_RANGE,
                0,
                (PHYSICAL_WIDTH - 1) as u8,
                PAGE_RANGE,
                p,
                p,
            ])?;

            self.stream(
                CONTROL_DATA,
                logical.iter().flat_map(|&b| {
                    let wide = expand_nibble(b >> shift);
                    [wide, wide]
                }),
            )?;
        }
        Ok(())
    }

    fn commands(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.stream(CONTROL_COMMAND, bytes.iter().copied())
    }

    /// Send `bytes` in one logical transaction, splitting it wherever the
    /// transport runs out of room.
    fn stream(&mut self, control: u8, bytes: impl IntoIterator<Item = u8>) -> Result<(), Error> {
        self.transport.begin(self.address);
        self.transport.send(control)?;

        for byte in bytes {
            match self.transport.send(byte) {
                Ok(()) => {}
                Err(Error::BusBusy) => {
                    self.transport.end()?;
                    self.transport.begin(self.address);
                    self.transport.send(control)?;
                    self.transport.send(byte)?;
                }
                Err(e) => return Err(e),
            }
        }

        self.transport.end()
    }
}
