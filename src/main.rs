//! tinywatch firmware entry point (nRF52840).
//!
//! Two execution contexts:
//! - High-priority interrupt executor: the periodic tick and the button
//!   edge handlers. They only touch [`WakeSignals`] and the pin mirror.
//! - Thread mode: the blocking watch loop, which owns the display bus,
//!   the SAADC and every piece of clock state.

#![no_std]
#![no_main]

use cortex_m_rt::entry;
use defmt::{info, unwrap, warn};
use defmt_rtt as _;
use embassy_executor::InterruptExecutor;
use embassy_nrf::config::LfclkSource;
use embassy_nrf::gpio::{AnyPin, Pin};
use embassy_nrf::interrupt;
use embassy_nrf::interrupt::{InterruptExt, Priority};
use embassy_nrf::{bind_interrupts, peripherals, saadc, twim};
use embassy_time::Delay;
use panic_probe as _;

use tinywatch::battery::SaadcBattery;
use tinywatch::config::{self, Config};
use tinywatch::power::WfeSleep;
use tinywatch::ui::buttons::{self, PinMirror};
use tinywatch::ui::display::Display;
use tinywatch::ui::transport::I2cTransport;
use tinywatch::wake::{self, WakeSignals};
use tinywatch::watch::Watch;

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
    SAADC => saadc::InterruptHandler;
});

static SIGNALS: WakeSignals = WakeSignals::new();
static BUTTON_LEVEL: PinMirror = PinMirror::new();
static EXECUTOR_HIGH: InterruptExecutor = InterruptExecutor::new();

#[interrupt]
unsafe fn SWI1_EGU1() {
    EXECUTOR_HIGH.on_interrupt()
}

#[embassy_executor::task]
async fn tick(tick_ms: u32) {
    wake::tick_task(&SIGNALS, tick_ms).await
}

#[embassy_executor::task]
async fn button(pin: AnyPin) {
    buttons::button_task(pin, &SIGNALS, &BUTTON_LEVEL).await
}

#[entry]
fn main() -> ! {
    info!("tinywatch starting");

    // No crystal on the board: the wake timer runs off the RC oscillator,
    // hence the per-unit tick calibration.
    let mut nrf_config = embassy_nrf::config::Config::default();
    nrf_config.lfclk_source = LfclkSource::InternalRC;
    let p = embassy_nrf::init(nrf_config);

    interrupt::SWI1_EGU1.set_priority(Priority::P6);
    let spawner = EXECUTOR_HIGH.start(interrupt::SWI1_EGU1);
    unwrap!(spawner.spawn(tick(Config::DEFAULT.tick_ms)));
    unwrap!(spawner.spawn(button(p.P0_11.degrade())));

    // Display: SDA P0.26, SCL P0.27
    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let display = Display::new(I2cTransport::new(i2c), config::DISPLAY_I2C_ADDRESS);

    let mut adc_config = saadc::Config::default();
    adc_config.resolution = saadc::Resolution::_12BIT;
    let channel = saadc::ChannelConfig::single_ended(saadc::VddInput);
    let adc = saadc::Saadc::new(p.SAADC, Irqs, adc_config, [channel]);

    let mut watch = Watch::new(
        Config::DEFAULT,
        &SIGNALS,
        display,
        BUTTON_LEVEL.reader(),
        Delay,
        SaadcBattery::new(adc),
        WfeSleep,
    );

    if let Err(e) = watch.boot() {
        warn!("Display init failed: {:?}", e);
    }

    info!("Entering watch loop");
    watch.run()
}
