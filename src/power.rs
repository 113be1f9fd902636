//! Power management - active display vs. deep sleep.
//!
//! Two states:
//! - Active: display on, button sampled once per wake cycle.
//! - Sleeping: display off, CPU parked in its deepest sleep that still
//!   keeps the wake timer running. Only the button edge brings it back;
//!   timer ticks just credit time and park again.

use crate::power_logic;

/// Power state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerState {
    /// Display on, input live.
    Active,
    /// Display off, waiting for a button edge.
    Sleeping,
}

/// Low-power wait primitive. Returns after any interrupt.
pub trait Sleep {
    fn wait_for_interrupt(&mut self);
}

/// Wait-for-event on Cortex-M.
///
/// An interrupt taken between the sleeping-flag check and the wait leaves
/// the event register set, and the wait returns at once.
#[cfg(feature = "embedded")]
pub struct WfeSleep;

#[cfg(feature = "embedded")]
impl Sleep for WfeSleep {
    fn wait_for_interrupt(&mut self) {
        cortex_m::asm::wfe();
    }
}

/// Tracks the display-on deadline and the active/sleeping state.
pub struct PowerManager {
    state: PowerState,
    deadline_ms: u64,
    timeout_ms: u64,
}

impl PowerManager {
    /// Create a new power manager, active with an expired deadline.
    pub const fn new(timeout_ms: u64) -> Self {
        Self {
            state: PowerState::Active,
            deadline_ms: 0,
            timeout_ms,
        }
    }

    /// Record activity (button press or wake) at `now_ms`.
    pub fn activity(&mut self, now_ms: u64) {
        self.deadline_ms = power_logic::display_deadline(now_ms, self.timeout_ms);
    }

    /// Check if the inactivity window has run out.
    pub fn should_sleep(&self, now_ms: u64) -> bool {
        self.state == PowerState::Active && power_logic::should_sleep(now_ms, self.deadline_ms)
    }

    pub fn enter_sleep(&mut self) {
        self.state = PowerState::Sleeping;
    }

    /// Back to active after a button wake at `now_ms`.
    pub fn wake(&mut self, now_ms: u64) {
        self.state = PowerState::Active;
        self.activity(now_ms);
    }

    /// Get current power state.
    pub fn state(&self) -> PowerState {
        self.state
    }

    pub fn deadline_ms(&self) -> u64 {
        self.deadline_ms
    }
}
