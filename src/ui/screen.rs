//! Watch face layout.
//!
//! Logical 64x32 buffer, four 8-row pages:
//! ```text
//! page 0-1   HH:MM (double size)        weekday (page 0)
//!                                       seconds (page 1)
//! page 2     edit arrows under the digit being changed
//! page 3                                battery  V=T
//! ```

use crate::battery::BatteryReading;
use crate::clock::{Setting, TimeOfDay, Weekday};
use crate::config::HourFormat;
use crate::ui::font::Glyph;
use crate::ui::framebuffer::{Framebuffer, Scale};

pub const TIME_PAGE: usize = 0;
pub const HOUR_TENS_X: usize = 2;
pub const HOUR_ONES_X: usize = 9;
pub const COLON_X: usize = 16;
pub const MINUTE_TENS_X: usize = 23;
pub const MINUTE_ONES_X: usize = 30;

pub const WEEKDAY_PAGE: usize = 0;
pub const WEEKDAY_X: usize = 40;
pub const DAY_CARET_X: usize = 36;

pub const SECONDS_PAGE: usize = 1;
pub const SECONDS_X: usize = 40;
pub const SECONDS_CARET_X: usize = 48;

pub const ARROW_PAGE: usize = 2;

pub const BATTERY_PAGE: usize = 3;
pub const BATTERY_X: usize = 52;

/// Small glyph advance (3 columns + 1 gap).
const SMALL_ADVANCE: usize = 4;

fn small(frame: &mut Framebuffer, glyph: Glyph, x: usize, page: usize) {
    frame.blit(glyph, x, page, Scale::Single, Scale::Single);
}

fn large(frame: &mut Framebuffer, glyph: Glyph, x: usize) {
    frame.blit(glyph, x, TIME_PAGE, Scale::Double, Scale::Double);
}

/// Two small digits, tens first.
fn two_digits(frame: &mut Framebuffer, value: u64, x: usize, page: usize) {
    small(frame, Glyph::digit(value / 10), x, page);
    small(frame, Glyph::digit(value), x + SMALL_ADVANCE, page);
}

/// Column of the large digit a setting edits, if it edits one.
fn edited_digit_x(setting: Setting) -> Option<usize> {
    match setting {
        Setting::AddMinute => Some(MINUTE_ONES_X),
        Setting::Add10Minutes => Some(MINUTE_TENS_X),
        Setting::AddHour => Some(HOUR_ONES_X),
        Setting::Add10Hours => Some(HOUR_TENS_X),
        Setting::None | Setting::ResetSeconds | Setting::AddDay => None,
    }
}

/// Lay out the whole watch face into `frame`.
///
/// Seconds and the battery gauge only show while no field is being
/// edited; the weekday shows while idle or while it is being edited.
pub fn compose(
    frame: &mut Framebuffer,
    elapsed_ms: u64,
    setting: Setting,
    weekday: Weekday,
    battery: BatteryReading,
    format: HourFormat,
) {
    let time = TimeOfDay::from_millis(elapsed_ms, format);

    frame.clear();

    large(frame, Glyph::digit(time.hours / 10), HOUR_TENS_X);
    large(frame, Glyph::digit(time.hours), HOUR_ONES_X);
    large(frame, Glyph::COLON, COLON_X);
    large(frame, Glyph::digit(time.minutes / 10), MINUTE_TENS_X);
    large(frame, Glyph::digit(time.minutes), MINUTE_ONES_X);

    if setting == Setting::None {
        two_digits(frame, time.seconds, SECONDS_X, SECONDS_PAGE);
    }

    if matches!(setting, Setting::None | Setting::AddDay) {
        for (i, &c) in weekday.abbreviation().iter().enumerate() {
            // Abbreviations are built from A-Z only.
            if let Ok(glyph) = Glyph::try_from(c) {
                small(frame, glyph, WEEKDAY_X + i * SMALL_ADVANCE, WEEKDAY_PAGE);
            }
        }
    }

    match setting {
        Setting::ResetSeconds => small(frame, Glyph::CARET_LEFT, SECONDS_CARET_X, SECONDS_PAGE),
        Setting::AddDay => small(frame, Glyph::CARET_RIGHT, DAY_CARET_X, WEEKDAY_PAGE),
        _ => {
            if let Some(x) = edited_digit_x(setting) {
                small(frame, Glyph::ARROW_LEFT, x, ARROW_PAGE);
                small(frame, Glyph::ARROW_RIGHT, x + 3, ARROW_PAGE);
            }
        }
    }

    if setting == Setting::None {
        small(frame, Glyph::digit(u64::from(battery.hundreds())), BATTERY_X, BATTERY_PAGE);
        small(frame, Glyph::EQUALS, BATTERY_X + SMALL_ADVANCE, BATTERY_PAGE);
        small(
            frame,
            Glyph::digit(u64::from(battery.tens())),
            BATTERY_X + 2 * SMALL_ADVANCE,
            BATTERY_PAGE,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LOGICAL_WIDTH;

    fn small_at(fb: &Framebuffer, x: usize, page: usize) -> [u8; 3] {
        [fb.byte(x, page), fb.byte(x + 1, page), fb.byte(x + 2, page)]
    }

    fn render(ms: u64, setting: Setting) -> Framebuffer {
        let mut fb = Framebuffer::new();
        compose(
            &mut fb,
            ms,
            setting,
            Weekday::new(2),
            BatteryReading(318),
            HourFormat::H24,
        );
        fb
    }

    fn large_matches(fb: &Framebuffer, x: usize, glyph: Glyph) -> bool {
        let mut expected = Framebuffer::new();
        expected.blit(glyph, x, TIME_PAGE, Scale::Double, Scale::Double);
        (x..x + 6).all(|col| {
            fb.byte(col, TIME_PAGE) == expected.byte(col, TIME_PAGE)
                && fb.byte(col, TIME_PAGE + 1) == expected.byte(col, TIME_PAGE + 1)
        })
    }

    fn page_is_blank(fb: &Framebuffer, page: usize) -> bool {
        fb.page(page).iter().all(|&b| b == 0)
    }

    #[test]
    fn idle_face_shows_everything() {
        // 13:47:25
        let ms = 13 * 3_600_000 + 47 * 60_000 + 25_000;
        let fb = render(ms, Setting::None);

        assert!(large_matches(&fb, HOUR_TENS_X, Glyph::digit(1)));
        assert!(large_matches(&fb, HOUR_ONES_X, Glyph::digit(3)));
        assert!(large_matches(&fb, COLON_X, Glyph::COLON));
        assert!(large_matches(&fb, MINUTE_TENS_X, Glyph::digit(4)));
        assert!(large_matches(&fb, MINUTE_ONES_X, Glyph::digit(7)));

        assert_eq!(small_at(&fb, SECONDS_X, SECONDS_PAGE), Glyph::digit(2).columns());
        assert_eq!(small_at(&fb, SECONDS_X + 4, SECONDS_PAGE), Glyph::digit(5).columns());

        // Weekday 2 = WE
        assert_eq!(small_at(&fb, WEEKDAY_X, WEEKDAY_PAGE), Glyph::try_from('W').unwrap().columns());
        assert_eq!(small_at(&fb, WEEKDAY_X + 4, WEEKDAY_PAGE), Glyph::try_from('E').unwrap().columns());

        // Battery 318 -> 3=1
        assert_eq!(small_at(&fb, BATTERY_X, BATTERY_PAGE), Glyph::digit(3).columns());
        assert_eq!(small_at(&fb, BATTERY_X + 4, BATTERY_PAGE), Glyph::EQUALS.columns());
        assert_eq!(small_at(&fb, BATTERY_X + 8, BATTERY_PAGE), Glyph::digit(1).columns());

        assert!(page_is_blank(&fb, ARROW_PAGE));
    }

    #[test]
    fn compose_is_idempotent() {
        let mut fb = Framebuffer::new();
        let args = (3_723_456, Setting::AddHour, Weekday::new(4), BatteryReading(301));
        compose(&mut fb, args.0, args.1, args.2, args.3, HourFormat::H24);
        let first = fb.clone();
        compose(&mut fb, args.0, args.1, args.2, args.3, HourFormat::H24);
        assert!(fb == first);
    }

    #[test]
    fn compose_overwrites_previous_frame() {
        let mut fb = Framebuffer::new();
        for x in 0..LOGICAL_WIDTH {
            for y in 0..32 {
                fb.set_pixel(x, y, true);
            }
        }
        compose(&mut fb, 0, Setting::None, Weekday::new(0), BatteryReading(0), HourFormat::H24);
        assert!(fb == render_with(0, Weekday::new(0), BatteryReading(0)));
    }

    fn render_with(ms: u64, day: Weekday, battery: BatteryReading) -> Framebuffer {
        let mut fb = Framebuffer::new();
        compose(&mut fb, ms, Setting::None, day, battery, HourFormat::H24);
        fb
    }

    #[test]
    fn seconds_only_when_not_editing() {
        let ms = 59_000;
        for setting in [
            Setting::ResetSeconds,
            Setting::AddMinute,
            Setting::Add10Minutes,
            Setting::AddHour,
            Setting::Add10Hours,
            Setting::AddDay,
        ] {
            let fb = render(ms, setting);
            assert_eq!(small_at(&fb, SECONDS_X, SECONDS_PAGE), [0, 0, 0], "{:?}", setting);
            assert_eq!(small_at(&fb, SECONDS_X + 4, SECONDS_PAGE), [0, 0, 0], "{:?}", setting);
            assert!(page_is_blank(&fb, BATTERY_PAGE), "{:?}", setting);
        }
        let fb = render(ms, Setting::None);
        assert_eq!(small_at(&fb, SECONDS_X + 4, SECONDS_PAGE), Glyph::digit(9).columns());
    }

    #[test]
    fn weekday_only_when_idle_or_editing_day() {
        for setting in [Setting::None, Setting::AddDay] {
            let fb = render(0, setting);
            assert_ne!(small_at(&fb, WEEKDAY_X, WEEKDAY_PAGE), [0, 0, 0]);
        }
        for setting in [Setting::ResetSeconds, Setting::AddMinute, Setting::Add10Hours] {
            let fb = render(0, setting);
            assert_eq!(small_at(&fb, WEEKDAY_X, WEEKDAY_PAGE), [0, 0, 0]);
        }
    }

    #[test]
    fn carets_mark_seconds_and_day() {
        let fb = render(0, Setting::ResetSeconds);
        assert_eq!(small_at(&fb, SECONDS_CARET_X, SECONDS_PAGE), Glyph::CARET_LEFT.columns());
        assert!(page_is_blank(&fb, ARROW_PAGE));

        let fb = render(0, Setting::AddDay);
        assert_eq!(small_at(&fb, DAY_CARET_X, WEEKDAY_PAGE), Glyph::CARET_RIGHT.columns());
        assert!(page_is_blank(&fb, ARROW_PAGE));
    }

    #[test]
    fn arrows_bracket_the_edited_digit() {
        for (setting, x) in [
            (Setting::AddMinute, MINUTE_ONES_X),
            (Setting::Add10Minutes, MINUTE_TENS_X),
            (Setting::AddHour, HOUR_ONES_X),
            (Setting::Add10Hours, HOUR_TENS_X),
        ] {
            let fb = render(0, setting);
            assert_eq!(small_at(&fb, x, ARROW_PAGE), Glyph::ARROW_LEFT.columns());
            assert_eq!(small_at(&fb, x + 3, ARROW_PAGE), Glyph::ARROW_RIGHT.columns());
            let lit = fb.page(ARROW_PAGE).iter().filter(|&&b| b != 0).count();
            assert_eq!(lit, 6, "{:?}", setting);
        }
    }

    #[test]
    fn end_to_end_one_hour_one_minute_one_second() {
        let fb = render(3_661_000, Setting::None);
        assert!(large_matches(&fb, HOUR_TENS_X, Glyph::digit(0)));
        assert!(large_matches(&fb, HOUR_ONES_X, Glyph::digit(1)));
        assert!(large_matches(&fb, MINUTE_TENS_X, Glyph::digit(0)));
        assert!(large_matches(&fb, MINUTE_ONES_X, Glyph::digit(1)));
        assert_eq!(small_at(&fb, SECONDS_X, SECONDS_PAGE), Glyph::digit(0).columns());
        assert_eq!(small_at(&fb, SECONDS_X + 4, SECONDS_PAGE), Glyph::digit(1).columns());
        assert!(page_is_blank(&fb, ARROW_PAGE));
    }
}
