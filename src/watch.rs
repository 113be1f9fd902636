//! The watch controller: one owner for all foreground state.
//!
//! Each call to [`Watch::step`] is one wake cycle of the main loop:
//!
//! 1. If sleeping, park in the sleep primitive until a button edge clears
//!    the sleeping flag, then switch the display back on.
//! 2. Drain the tick residue into elapsed time.
//! 3. Button held: refresh the deadline, wait out the press window,
//!    re-sample the battery and classify the press. Otherwise, if the
//!    deadline has passed, go to sleep.
//! 4. Compose and push the frame.

use crate::battery::{BatteryReading, BatterySampler};
use crate::clock::{Clock, Setting};
use crate::config::Config;
use crate::error::Error;
use crate::power::{PowerManager, PowerState, Sleep};
use crate::ui::display::Display;
use crate::ui::framebuffer::Framebuffer;
use crate::ui::input_logic::{classify_press, Press};
use crate::ui::screen;
use crate::ui::transport::Transport;
use crate::wake::WakeSignals;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

/// Foreground controller, generic over the board's peripherals.
pub struct Watch<'a, T, B, D, S, Z> {
    config: Config,
    signals: &'a WakeSignals,
    clock: Clock,
    power: PowerManager,
    frame: Framebuffer,
    display: Display<T>,
    button: B,
    delay: D,
    sampler: S,
    sleeper: Z,
    battery: BatteryReading,
}

impl<'a, T, B, D, S, Z> Watch<'a, T, B, D, S, Z>
where
    T: Transport,
    B: InputPin,
    D: DelayNs,
    S: BatterySampler,
    Z: Sleep,
{
    pub fn new(
        config: Config,
        signals: &'a WakeSignals,
        display: Display<T>,
        button: B,
        delay: D,
        sampler: S,
        sleeper: Z,
    ) -> Self {
        Self {
            config,
            signals,
            clock: Clock::new(),
            power: PowerManager::new(config.timeout_ms),
            frame: Framebuffer::new(),
            display,
            button,
            delay,
            sampler,
            sleeper,
            battery: BatteryReading::default(),
        }
    }

    /// Bring up the display and draw the first frame.
    pub fn boot(&mut self) -> Result<(), Error> {
        self.battery = self.sampler.sample();
        self.display.init(self.config.contrast)?;
        self.power.activity(self.clock.elapsed_ms());
        #[cfg(feature = "defmt")]
        defmt::info!("Watch: boot, battery={}", self.battery.0);
        self.render()
    }

    /// Run wake cycles forever. Frame errors are logged and the loop
    /// carries on with the next cycle.
    pub fn run(&mut self) -> ! {
        loop {
            if let Err(_e) = self.step() {
                #[cfg(feature = "defmt")]
                defmt::warn!("Watch: frame failed: {:?}", _e);
            }
            if self.power.state() == PowerState::Active {
                self.sleeper.wait_for_interrupt();
            }
        }
    }

    /// One wake cycle.
    pub fn step(&mut self) -> Result<(), Error> {
        if self.power.state() == PowerState::Sleeping {
            self.sleep_until_woken();
            self.wake()?;
        }

        self.clock.drain(self.signals);
        let now = self.clock.elapsed_ms();

        if self.button_pressed() {
            self.handle_press(now);
        } else if self.power.should_sleep(now) {
            return self.sleep();
        }

        self.render()
    }

    fn button_pressed(&mut self) -> bool {
        // Active low. A pin that cannot be read counts as released.
        self.button.is_low().unwrap_or(false)
    }

    fn handle_press(&mut self, now: u64) {
        self.power.activity(now);
        self.delay.delay_ms(self.config.press_window_ms);
        self.battery = self.sampler.sample();

        match classify_press(self.button_pressed()) {
            Press::Long => {
                self.delay.delay_ms(self.config.release_window_ms);
                let _setting = self.clock.advance_setting();
                #[cfg(feature = "defmt")]
                defmt::info!("Watch: setting -> {}", _setting);
            }
            Press::Short => self.clock.apply_short_press(),
        }
    }

    /// Blank the panel, switch it off and mark the watch as sleeping.
    ///
    /// The panel is switched off even if the blank frame could not be
    /// pushed; the first bus error is returned.
    fn sleep(&mut self) -> Result<(), Error> {
        #[cfg(feature = "defmt")]
        defmt::info!("Watch: sleep at {}ms", self.clock.elapsed_ms());

        self.clock.reset_setting();
        self.frame.clear();
        self.power.enter_sleep();
        self.signals.set_sleeping();

        let blanked = self.display.write_frame(&self.frame);
        let off = self.display.power_off();

        // A press that landed after this cycle sampled the button found
        // the flag still clear and did not count as a wake.
        if self.button_pressed() && self.signals.cancel_sleep() {
            #[cfg(feature = "defmt")]
            defmt::info!("Watch: button held at sleep entry");
        }

        blanked.and(off)
    }

    fn sleep_until_woken(&mut self) {
        // Timer ticks return from the primitive too; only the button
        // handler clears the flag. Each tick wake drains so the residue
        // stays within a single tick.
        while self.signals.is_sleeping() {
            self.sleeper.wait_for_interrupt();
            self.clock.drain(self.signals);
        }
    }

    fn wake(&mut self) -> Result<(), Error> {
        self.clock.drain(self.signals);
        self.power.wake(self.clock.elapsed_ms());
        #[cfg(feature = "defmt")]
        defmt::info!("Watch: wake at {}ms", self.clock.elapsed_ms());
        self.display.power_on()
    }

    fn render(&mut self) -> Result<(), Error> {
        screen::compose(
            &mut self.frame,
            self.clock.elapsed_ms(),
            self.clock.setting(),
            self.clock.weekday(),
            self.battery,
            self.config.hour_format,
        );
        self.display.write_frame(&self.frame)
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn power(&self) -> &PowerManager {
        &self.power
    }

    pub fn frame(&self) -> &Framebuffer {
        &self.frame
    }

    pub fn setting(&self) -> Setting {
        self.clock.setting()
    }

    pub fn battery(&self) -> BatteryReading {
        self.battery
    }

    pub fn display(&self) -> &Display<T> {
        &self.display
    }
}
