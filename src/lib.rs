//! tinywatch - single-button OLED wristwatch firmware.
//!
//! Everything except the board bring-up in `main.rs` lives here and is
//! written against `embedded-hal` traits, so the whole wake cycle runs on
//! the host under `cargo test`.
//!
//! Usage: `cargo test` (host) or
//! `cargo run --release --features embedded --target thumbv7em-none-eabihf`.
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].

#![cfg_attr(not(test), no_std)]

pub mod battery;
pub mod clock;
pub mod config;
pub mod error;
pub mod power;
pub mod power_logic;
pub mod ui;
pub mod wake;
pub mod watch;

pub use battery::{BatteryReading, BatterySampler};
pub use clock::{Clock, Setting, TimeOfDay, Weekday};
pub use config::{Config, HourFormat};
pub use error::Error;
pub use power::{PowerManager, PowerState, Sleep};
pub use wake::WakeSignals;
pub use watch::Watch;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
