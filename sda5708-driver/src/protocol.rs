//! SDA5708 bus protocol
//!
//! Every byte is shifted out as one frame:
//!
//! ```text
//! LOAD  ‾‾\_________________________________/‾‾‾
//! DATA  ____X b0 X b1 X ... X b7 X__________
//! CLOCK _______/‾\____/‾\___ ... _/‾\_______
//! ```
//!
//! Bits go out LSB first and are sampled on the rising CLOCK edge. The
//! rising LOAD edge latches the byte. A byte is either a digit address,
//! one row of the addressed digit, or the control word.
//!
//! Timing is driven by explicit busy-wait delays. A frame is never
//! interrupted, so nothing here is async.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};
use sda5708_core::{ControlRegister, Glyph, DIGITS};

/// Register select bytes
mod cmd {
    /// Digit address, ORed with the digit number
    pub const DIGIT_SELECT: u8 = 0b1010_0000;
    pub const DIGIT_MASK: u8 = 0b0000_0111;
    /// Row data, five low bits
    pub const ROW_MASK: u8 = 0b0001_1111;
}

/// CLOCK high and low hold time
pub const CLOCK_HOLD_NS: u32 = 1_000;
/// Delay after LOAD goes high
pub const LATCH_HOLD_NS: u32 = 1_000;
/// RESET low pulse width and settle time after it
pub const RESET_PULSE_NS: u32 = 1_000;

/// The four bus lines
///
/// All four share one pin type, which on most HALs is the type-erased
/// output (`Output<'static>` on embassy-rp).
pub struct BusPins<P> {
    pub data: P,
    pub clock: P,
    /// Active low, latches on the rising edge
    pub load: P,
    /// Active low
    pub reset: P,
}

/// Bit-banged SDA5708 bus
pub struct Sda5708Bus<P, D> {
    pins: BusPins<P>,
    delay: D,
}

impl<P, D> Sda5708Bus<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create the bus; pins are not touched until [`init`](Self::init)
    pub fn new(pins: BusPins<P>, delay: D) -> Self {
        Self { pins, delay }
    }

    /// Drive idle levels and pulse RESET
    pub fn init(&mut self) -> Result<(), P::Error> {
        self.pins.data.set_low()?;
        self.pins.clock.set_low()?;
        self.pins.load.set_high()?;
        self.pins.reset.set_high()?;
        self.reset()
    }

    /// Pulse RESET
    ///
    /// The chip comes back at full brightness, full peak current and
    /// with undefined display RAM.
    pub fn reset(&mut self) -> Result<(), P::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("SDA5708 reset");

        self.pins.reset.set_low()?;
        self.delay.delay_ns(RESET_PULSE_NS);
        self.pins.reset.set_high()?;
        self.delay.delay_ns(RESET_PULSE_NS);
        Ok(())
    }

    /// Shift out one byte frame, LSB first
    pub fn write_byte(&mut self, byte: u8) -> Result<(), P::Error> {
        self.pins.load.set_low()?;

        for bit in 0..8 {
            self.pins
                .data
                .set_state(PinState::from(byte & (1 << bit) != 0))?;
            self.pins.clock.set_high()?;
            self.delay.delay_ns(CLOCK_HOLD_NS);
            self.pins.clock.set_low()?;
            self.delay.delay_ns(CLOCK_HOLD_NS);
        }

        self.pins.load.set_high()?;
        self.delay.delay_ns(LATCH_HOLD_NS);
        Ok(())
    }

    /// Address a digit for the following row bytes
    pub fn select_digit(&mut self, digit: u8) -> Result<(), P::Error> {
        self.write_byte(cmd::DIGIT_SELECT | (digit & cmd::DIGIT_MASK))
    }

    /// Write the 7 rows of a glyph to a digit
    ///
    /// Digits past the last one are ignored.
    pub fn write_glyph(&mut self, digit: usize, glyph: &Glyph) -> Result<(), P::Error> {
        if digit >= DIGITS {
            return Ok(());
        }

        self.select_digit(digit as u8)?;
        for &row in glyph.rows() {
            self.write_byte(row & cmd::ROW_MASK)?;
        }
        Ok(())
    }

    /// Re-send all digits, leftmost first
    pub fn flush(&mut self, glyphs: &[Glyph; DIGITS]) -> Result<(), P::Error> {
        for (digit, glyph) in glyphs.iter().enumerate() {
            self.write_glyph(digit, glyph)?;
        }
        Ok(())
    }

    /// Write the control word
    pub fn write_control(&mut self, register: ControlRegister) -> Result<(), P::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!(
            "SDA5708 control: brightness {}, peak current reduced {}, clear {} ({=u8:#b})",
            register.brightness.level(),
            register.peak_current_reduced,
            register.clear,
            register.to_byte()
        );

        self.write_byte(register.to_byte())
    }

    /// Clear the display RAM, then restore `register`
    pub fn clear_screen(&mut self, register: ControlRegister) -> Result<(), P::Error> {
        self.write_control(register.clearing())?;
        self.write_control(ControlRegister {
            clear: false,
            ..register
        })
    }
}
