//! Supply voltage sampling.
//!
//! The reading is shown on the watch face as `<volts>=<tenths>`, so it
//! is kept in centivolts (330 = 3.30 V).

/// Supply voltage in centivolts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryReading(pub u16);

impl BatteryReading {
    pub const fn from_millivolts(mv: u32) -> Self {
        let cv = mv / 10;
        Self(if cv > u16::MAX as u32 { u16::MAX } else { cv as u16 })
    }

    /// Hundreds digit of the raw reading (whole volts).
    pub const fn hundreds(self) -> u8 {
        ((self.0 / 100) % 10) as u8
    }

    /// Tens digit of the raw reading (tenths of a volt).
    pub const fn tens(self) -> u8 {
        ((self.0 / 10) % 10) as u8
    }
}

/// One-shot supply voltage measurement.
pub trait BatterySampler {
    fn sample(&mut self) -> BatteryReading;
}

#[cfg(feature = "embedded")]
pub use saadc::SaadcBattery;

#[cfg(feature = "embedded")]
mod saadc {
    use super::{BatteryReading, BatterySampler};
    use embassy_nrf::saadc::Saadc;

    /// Full-scale input with the internal 0.6 V reference and 1/6 gain.
    const FULL_SCALE_MV: i32 = 3600;
    /// 12-bit conversion.
    const FULL_SCALE_COUNTS: i32 = 4096;

    /// Measures VDD through the SAADC's internal VDD channel.
    pub struct SaadcBattery<'d> {
        saadc: Saadc<'d, 1>,
    }

    impl<'d> SaadcBattery<'d> {
        pub fn new(saadc: Saadc<'d, 1>) -> Self {
            Self { saadc }
        }
    }

    impl BatterySampler for SaadcBattery<'_> {
        fn sample(&mut self) -> BatteryReading {
            let mut buf = [0i16; 1];
            // Called from the blocking main loop; the conversion takes a few µs.
            embassy_futures::block_on(self.saadc.sample(&mut buf));
            let raw = i32::from(buf[0]).max(0);
            let mv = raw * FULL_SCALE_MV / FULL_SCALE_COUNTS;
            defmt::trace!("Battery: raw={} mv={}", raw, mv);
            BatteryReading::from_millivolts(mv as u32)
        }
    }
}
