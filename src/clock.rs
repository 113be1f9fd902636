//! Timekeeping and the button-driven settings cycle.
//!
//! The watch has no calendar and no RTC registers: the time of day is
//! whatever the elapsed-millisecond counter says, modulo a day. The user
//! corrects it by long-pressing to pick a field and short-pressing to
//! bump it.

use crate::config::HourFormat;
use crate::wake::WakeSignals;

pub const MS_PER_SECOND: u64 = 1_000;
pub const MS_PER_MINUTE: u64 = 60 * MS_PER_SECOND;
pub const MS_PER_HOUR: u64 = 60 * MS_PER_MINUTE;

/// Field currently being edited. Long press moves to the next one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Setting {
    #[default]
    None,
    ResetSeconds,
    AddMinute,
    Add10Minutes,
    AddHour,
    Add10Hours,
    AddDay,
}

impl Setting {
    pub const COUNT: u8 = 7;

    /// Next state in the cycle, wrapping from `AddDay` to `None`.
    pub const fn next(self) -> Setting {
        match self {
            Setting::None => Setting::ResetSeconds,
            Setting::ResetSeconds => Setting::AddMinute,
            Setting::AddMinute => Setting::Add10Minutes,
            Setting::Add10Minutes => Setting::AddHour,
            Setting::AddHour => Setting::Add10Hours,
            Setting::Add10Hours => Setting::AddDay,
            Setting::AddDay => Setting::None,
        }
    }

    /// Position in the cycle, 0..=6.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Milliseconds a short press adds in this state, if it adds any.
    pub const fn step_ms(self) -> Option<u64> {
        match self {
            Setting::AddMinute => Some(MS_PER_MINUTE),
            Setting::Add10Minutes => Some(10 * MS_PER_MINUTE),
            Setting::AddHour => Some(MS_PER_HOUR),
            Setting::Add10Hours => Some(10 * MS_PER_HOUR),
            Setting::None | Setting::ResetSeconds | Setting::AddDay => None,
        }
    }
}

/// Day of the week, 0 = Monday.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Weekday(u8);

const WEEKDAY_NAMES: [[char; 2]; 7] = [
    ['M', 'O'],
    ['T', 'U'],
    ['W', 'E'],
    ['T', 'H'],
    ['F', 'R'],
    ['S', 'A'],
    ['S', 'U'],
];

impl Weekday {
    pub const DAYS: u8 = 7;

    /// Weekday `index % 7`.
    pub const fn new(index: u8) -> Self {
        Self(index % Self::DAYS)
    }

    pub const fn index(self) -> u8 {
        self.0
    }

    pub const fn next(self) -> Self {
        Self::new(self.0 + 1)
    }

    /// Two-letter abbreviation.
    pub const fn abbreviation(self) -> [char; 2] {
        WEEKDAY_NAMES[self.0 as usize]
    }
}

/// Time of day broken out for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeOfDay {
    pub const fn from_millis(ms: u64, format: HourFormat) -> Self {
        Self {
            hours: (ms / MS_PER_HOUR) % format.modulus(),
            minutes: (ms / MS_PER_MINUTE) % 60,
            seconds: (ms / MS_PER_SECOND) % 60,
        }
    }
}

/// Elapsed time, edit state and weekday.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Clock {
    elapsed_ms: u64,
    setting: Setting,
    weekday: Weekday,
}

impl Clock {
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    pub const fn starting_at(elapsed_ms: u64) -> Self {
        Self {
            elapsed_ms,
            setting: Setting::None,
            weekday: Weekday::new(0),
        }
    }

    pub const fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    pub const fn setting(&self) -> Setting {
        self.setting
    }

    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub const fn time_of_day(&self, format: HourFormat) -> TimeOfDay {
        TimeOfDay::from_millis(self.elapsed_ms, format)
    }

    /// Fold the handler's tick residue into elapsed time.
    ///
    /// Returns the number of milliseconds drained.
    pub fn drain(&mut self, signals: &WakeSignals) -> u32 {
        let residue = signals.take_residue();
        self.elapsed_ms += u64::from(residue);
        residue
    }

    /// Long press: move to the next field.
    pub fn advance_setting(&mut self) -> Setting {
        self.setting = self.setting.next();
        self.setting
    }

    pub fn reset_setting(&mut self) {
        self.setting = Setting::None;
    }

    /// Short press: apply the edit for the current field.
    pub fn apply_short_press(&mut self) {
        match self.setting.step_ms() {
            Some(step) => self.elapsed_ms += step,
            None => match self.setting {
                Setting::ResetSeconds => {
                    let seconds = (self.elapsed_ms / MS_PER_SECOND) % 60;
                    self.elapsed_ms -= seconds * MS_PER_SECOND;
                }
                Setting::AddDay => self.weekday = self.weekday.next(),
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_in(setting: Setting, elapsed_ms: u64) -> Clock {
        let mut c = Clock::starting_at(elapsed_ms);
        while c.setting() != setting {
            c.advance_setting();
        }
        c
    }

    #[test]
    fn time_of_day_boundaries() {
        let t = |ms| TimeOfDay::from_millis(ms, HourFormat::H24);
        assert_eq!(t(0), TimeOfDay { hours: 0, minutes: 0, seconds: 0 });
        assert_eq!(t(999), TimeOfDay { hours: 0, minutes: 0, seconds: 0 });
        assert_eq!(t(1000), TimeOfDay { hours: 0, minutes: 0, seconds: 1 });
        assert_eq!(t(3_599_999), TimeOfDay { hours: 0, minutes: 59, seconds: 59 });
        assert_eq!(t(3_600_000), TimeOfDay { hours: 1, minutes: 0, seconds: 0 });
        assert_eq!(t(24 * MS_PER_HOUR - 1), TimeOfDay { hours: 23, minutes: 59, seconds: 59 });
        assert_eq!(t(24 * MS_PER_HOUR), TimeOfDay { hours: 0, minutes: 0, seconds: 0 });
    }

    #[test]
    fn twelve_hour_rollover() {
        let t = |ms| TimeOfDay::from_millis(ms, HourFormat::H12);
        assert_eq!(t(12 * MS_PER_HOUR - 1).hours, 11);
        assert_eq!(t(12 * MS_PER_HOUR).hours, 0);
        assert_eq!(t(13 * MS_PER_HOUR).hours, 1);
    }

    #[test]
    fn setting_cycles_through_seven_states() {
        let mut c = Clock::new();
        let mut seen = [false; 7];
        for step in 1..=14u8 {
            let s = c.advance_setting();
            assert!(s.index() < Setting::COUNT);
            assert_eq!(s.index(), step % 7);
            seen[s.index() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(Setting::AddDay.next(), Setting::None);
    }

    #[test]
    fn reset_seconds_keeps_milliseconds() {
        let mut c = clock_in(Setting::ResetSeconds, 125_743);
        c.apply_short_press();
        assert_eq!(c.elapsed_ms(), 120_743);
        // Already on the minute: no change
        c.apply_short_press();
        assert_eq!(c.elapsed_ms(), 120_743);
    }

    #[test]
    fn add_steps() {
        for (setting, step) in [
            (Setting::AddMinute, 60_000),
            (Setting::Add10Minutes, 600_000),
            (Setting::AddHour, 3_600_000),
            (Setting::Add10Hours, 36_000_000),
        ] {
            let mut c = clock_in(setting, 42);
            c.apply_short_press();
            assert_eq!(c.elapsed_ms(), 42 + step, "{:?}", setting);
            assert_eq!(c.weekday(), Weekday::new(0));
        }
    }

    #[test]
    fn add_ten_hours_wraps_after_hour_format_presses() {
        for format in [HourFormat::H12, HourFormat::H24] {
            let mut c = clock_in(Setting::Add10Hours, 7 * MS_PER_HOUR + 123);
            let before = c.time_of_day(format);
            c.apply_short_press();
            assert_ne!(c.time_of_day(format).hours, before.hours);
            for _ in 1..format.modulus() {
                c.apply_short_press();
            }
            assert_eq!(c.time_of_day(format), before);
        }
    }

    #[test]
    fn add_day_cycles_weekday() {
        let mut c = clock_in(Setting::AddDay, 5000);
        for step in 1..=14u8 {
            c.apply_short_press();
            assert!(c.weekday().index() < Weekday::DAYS);
            assert_eq!(c.weekday().index(), step % 7);
        }
        assert_eq!(c.elapsed_ms(), 5000);
    }

    #[test]
    fn short_press_in_none_is_noop() {
        let mut c = Clock::starting_at(987_654);
        c.apply_short_press();
        assert_eq!(c, Clock::starting_at(987_654));
    }

    #[test]
    fn drain_moves_residue_into_elapsed() {
        let signals = WakeSignals::new();
        let mut c = Clock::starting_at(10);
        assert_eq!(c.drain(&signals), 0);
        assert_eq!(c.elapsed_ms(), 10);

        signals.on_timer_tick(u32::MAX);
        assert_eq!(c.drain(&signals), u32::MAX);
        assert_eq!(c.elapsed_ms(), 10 + u64::from(u32::MAX));
        assert_eq!(signals.residue(), 0);
    }

    #[test]
    fn weekday_names() {
        assert_eq!(Weekday::new(0).abbreviation(), ['M', 'O']);
        assert_eq!(Weekday::new(6).abbreviation(), ['S', 'U']);
        assert_eq!(Weekday::new(6).next(), Weekday::new(0));
        assert_eq!(Weekday::new(9), Weekday::new(2));
    }

    #[test]
    fn short_press_adds_exactly_one_step() {
        for (setting, step) in [
            (Setting::AddMinute, MS_PER_MINUTE),
            (Setting::Add10Minutes, 10 * MS_PER_MINUTE),
            (Setting::AddHour, MS_PER_HOUR),
            (Setting::Add10Hours, 10 * MS_PER_HOUR),
        ] {
            let mut c = clock_in(setting, 125_743);
            c.apply_short_press();
            assert_eq!(c.elapsed_ms(), 125_743 + step, "{:?}", setting);
            assert_eq!(c.weekday(), Weekday::default());
        }
    }
}
