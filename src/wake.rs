//! State shared between the main loop and the two wake handlers.
//!
//! The periodic timer handler and the button-edge handler run to
//! completion at a higher priority than the main loop and may fire
//! between any two of its instructions. They only touch the two atomics
//! here and never block or talk to the bus.
//!
//! - Tick residue: single producer (timer handler), single consumer (the
//!   main loop's drain). The drain is an exchange-with-zero, so a tick
//!   landing mid-drain is either in this drain or the next, never lost.
//! - Sleeping flag: set by the main loop before it parks, cleared by the
//!   button-edge handler, or by the main loop itself when the button is
//!   already held as the flag goes up.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

pub struct WakeSignals {
    residue_ms: AtomicU32,
    sleeping: AtomicBool,
}

impl WakeSignals {
    pub const fn new() -> Self {
        Self {
            residue_ms: AtomicU32::new(0),
            sleeping: AtomicBool::new(false),
        }
    }

    /// Periodic timer handler body: credit one calibrated tick.
    pub fn on_timer_tick(&self, tick_ms: u32) {
        self.residue_ms.fetch_add(tick_ms, Ordering::Relaxed);
    }

    /// Button-edge handler body. Returns `true` if this edge woke the watch.
    pub fn on_button_edge(&self) -> bool {
        self.sleeping
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Relaxed)
            .is_ok()
    }

    /// Take all accumulated milliseconds, leaving zero behind.
    pub fn take_residue(&self) -> u32 {
        self.residue_ms.swap(0, Ordering::AcqRel)
    }

    /// Milliseconds accrued since the last drain.
    pub fn residue(&self) -> u32 {
        self.residue_ms.load(Ordering::Relaxed)
    }

    /// Main-loop counterpart of [`Self::on_button_edge`] for a press that
    /// was already held when the flag was set. Returns `true` if the flag
    /// was still set.
    pub fn cancel_sleep(&self) -> bool {
        self.sleeping
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Relaxed)
            .is_ok()
    }

    pub fn set_sleeping(&self) {
        self.sleeping.store(true, Ordering::Release);
    }

    pub fn is_sleeping(&self) -> bool {
        self.sleeping.load(Ordering::Acquire)
    }
}

impl Default for WakeSignals {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "embedded")]
pub use handler::tick_task;

#[cfg(feature = "embedded")]
mod handler {
    use super::WakeSignals;
    use crate::config::TICK_PERIOD_MS;
    use embassy_time::{Duration, Ticker};

    /// Periodic timer handler. Credits `tick_ms` per nominal period, which
    /// absorbs the drift of the low-frequency oscillator.
    pub async fn tick_task(signals: &'static WakeSignals, tick_ms: u32) -> ! {
        let mut ticker = Ticker::every(Duration::from_millis(TICK_PERIOD_MS));
        loop {
            ticker.next().await;
            signals.on_timer_tick(tick_ms);
        }
    }
}
