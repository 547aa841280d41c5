//! GPIO pins by number
//!
//! Lets the bus pins come from display.toml instead of being hardcoded.

use defmt::*;
use embassy_rp::gpio::{AnyPin, Level, Output};
use embassy_rp::{Peri, Peripherals};

use sda5708_core::config::PinAssignment;
use sda5708_driver::BusPins;

/// Number of user GPIOs on the RP2040
pub const GPIO_COUNT: usize = 30;

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Format)]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin already taken
    AlreadyTaken(u8),
}

/// Pin bank that holds all GPIO pins and allows taking them by number
pub struct PinBank {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT],
}

impl PinBank {
    /// Take ownership of every GPIO
    pub fn new(p: Peripherals) -> Self {
        Self {
            pins: [
                Some(p.PIN_0.into()),
                Some(p.PIN_1.into()),
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        }
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        self.pins
            .get_mut(pin_num as usize)
            .ok_or(PinError::InvalidPin(pin_num))?
            .take()
            .ok_or(PinError::AlreadyTaken(pin_num))
    }

    /// Take a pin as an output starting at `level`
    pub fn output(&mut self, pin_num: u8, level: Level) -> Result<Output<'static>, PinError> {
        Ok(Output::new(self.take(pin_num)?, level))
    }

    /// Take the four display pins, already at their idle levels
    pub fn bus_pins(
        &mut self,
        pins: &PinAssignment,
    ) -> Result<BusPins<Output<'static>>, PinError> {
        for (role, pin) in pins.iter() {
            debug!("{} -> GPIO{}", role.key(), pin);
        }

        Ok(BusPins {
            data: self.output(pins.data, Level::Low)?,
            clock: self.output(pins.clock, Level::Low)?,
            load: self.output(pins.load, Level::High)?,
            reset: self.output(pins.reset, Level::High)?,
        })
    }
}

