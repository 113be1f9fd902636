//! Two-wire transport used by the display driver.
//!
//! The driver talks to the panel through three primitives, mirroring a
//! small buffered I²C master: open a transaction to an address, queue
//! bytes, close (which actually puts the bytes on the wire). Queuing into
//! a full buffer yields [`Error::BusBusy`]; the caller closes, reopens and
//! resends.

use crate::error::Error;
use embedded_hal::i2c::{Error as _, I2c};
use heapless::Vec;

/// Bytes buffered per transaction, including the control byte.
pub const TRANSACTION_CAPACITY: usize = 32;

/// Byte-oriented bus transaction interface.
pub trait Transport {
    /// Start a write transaction to the 7-bit `address`.
    fn begin(&mut self, address: u8);

    /// Queue one byte. Returns [`Error::BusBusy`] if the byte did not fit.
    fn send(&mut self, byte: u8) -> Result<(), Error>;

    /// Finish the transaction and transmit everything queued.
    fn end(&mut self) -> Result<(), Error>;
}

/// [`Transport`] over any blocking `embedded-hal` I²C bus.
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: u8,
    buf: Vec<u8, TRANSACTION_CAPACITY>,
}

impl<I2C: I2c> I2cTransport<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: 0,
            buf: Vec::new(),
        }
    }

    /// Give back the underlying bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Transport for I2cTransport<I2C> {
    fn begin(&mut self, address: u8) {
        self.address = address;
        self.buf.clear();
    }

    fn send(&mut self, byte: u8) -> Result<(), Error> {
        self.buf.push(byte).map_err(|_| Error::BusBusy)
    }

    fn end(&mut self) -> Result<(), Error> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let result = self.i2c.write(self.address, &self.buf);
        self.buf.clear();
        result.map_err(|e| Error::Bus(e.kind()))
    }
}
