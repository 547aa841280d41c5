//! SDA5708 display firmware
//!
//! Drives an SDA5708 8-digit LED display from an RP2040. Pins,
//! brightness and custom glyphs come from display.toml, which is
//! compiled in and checked by the build script.
//!
//! The render cycle shows the uptime as HH:MM:SS.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Delay, Duration, Instant, Ticker};
use {defmt_rtt as _, panic_probe as _};

use sda5708_core::DisplayBuffer;
use sda5708_driver::{Sda5708, Sda5708Bus};

use crate::pins::PinBank;

mod config;
mod pins;

/// Embedded configuration (compiled into firmware)
/// Edit display.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../display.toml");

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("SDA5708 firmware starting...");

    let p = embassy_rp::init(Default::default());

    // Configuration errors are fatal before any pin is driven
    let settings = match config::load(EMBEDDED_CONFIG) {
        Ok(settings) => settings,
        Err(e) => {
            error!("Display configuration rejected: {}", e);
            panic!("invalid display.toml");
        }
    };

    let mut bank = PinBank::new(p);
    let bus_pins = match bank.bus_pins(&settings.pins) {
        Ok(pins) => pins,
        Err(e) => {
            error!("Display pins unavailable: {}", e);
            panic!("invalid display pins");
        }
    };

    let interval = Duration::from_millis(u64::from(settings.update_interval_ms));
    let bus = Sda5708Bus::new(bus_pins, Delay);
    let mut display = Sda5708::new(bus, settings).with_writer(uptime as fn(&mut DisplayBuffer));
    display.dump_config();

    let mut ticker = Ticker::every(interval);
    loop {
        // Output pins cannot fail on the RP2040
        if let Err(e) = display.tick() {
            match e {}
        }
        ticker.next().await;
    }
}

/// Writer: time since boot
fn uptime(buffer: &mut DisplayBuffer) {
    let secs = Instant::now().as_secs();
    buffer.print_fmt(
        0,
        format_args!(
            "{:02}:{:02}:{:02}",
            (secs / 3600) % 100,
            (secs / 60) % 60,
            secs % 60
        ),
    );
}
