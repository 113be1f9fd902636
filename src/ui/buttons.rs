//! Single watch button (active-low with internal pull-up).
//!
//! The pin belongs to the high-priority edge handler, which keeps a copy
//! of its level in a [`PinMirror`]. The main loop samples that copy
//! through the ordinary `embedded-hal` input pin interface.

use core::convert::Infallible;
use core::sync::atomic::{AtomicBool, Ordering};
use embedded_hal::digital::{ErrorType, InputPin};

/// Last level seen on the button pin.
pub struct PinMirror {
    low: AtomicBool,
}

impl PinMirror {
    /// Pull-up idle level: released.
    pub const fn new() -> Self {
        Self {
            low: AtomicBool::new(false),
        }
    }

    pub fn set_low(&self, low: bool) {
        self.low.store(low, Ordering::Release);
    }

    /// Input pin view for the main loop.
    pub fn reader(&self) -> MirrorPin<'_> {
        MirrorPin(self)
    }
}

impl Default for PinMirror {
    fn default() -> Self {
        Self::new()
    }
}

/// Read side of a [`PinMirror`].
pub struct MirrorPin<'a>(&'a PinMirror);

impl ErrorType for MirrorPin<'_> {
    type Error = Infallible;
}

impl InputPin for MirrorPin<'_> {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.low.load(Ordering::Acquire))
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.low.load(Ordering::Acquire))
    }
}

#[cfg(feature = "embedded")]
pub use handler::button_task;

#[cfg(feature = "embedded")]
mod handler {
    use super::PinMirror;
    use crate::wake::WakeSignals;
    use embassy_nrf::gpio::{AnyPin, Input, Pull};

    /// Button-edge handler.
    ///
    /// Mirrors every edge into `mirror`. A falling edge while the watch
    /// sleeps clears the sleeping flag; the main loop does the rest.
    pub async fn button_task(
        pin: AnyPin,
        signals: &'static WakeSignals,
        mirror: &'static PinMirror,
    ) -> ! {
        let mut btn = Input::new(pin, Pull::Up);
        mirror.set_low(btn.is_low());

        loop {
            btn.wait_for_any_edge().await;

            let pressed = btn.is_low();
            mirror.set_low(pressed);
            if pressed && signals.on_button_edge() {
                defmt::trace!("Button: wake");
            }
        }
    }
}
