//! Control register model
//!
//! The SDA5708 control word is `1 1 CLR# IP 0 BR2 BR1 BR0`:
//!
//! - CLR# (D5): 0 clears the display RAM, 1 is normal operation
//! - IP (D4): 1 limits peak current to 12.5%
//! - BR (D2-D0): dimming level, 0 is full brightness and 7 is darkest
//!
//! [`Brightness`] is expressed the other way round (7 = full) and is
//! inverted when the byte is built.

use core::fmt;

/// Register select bits for the control word
const CONTROL_SELECT: u8 = 0b1100_0000;
/// CLR# bit, high for normal operation
const CLR_NORMAL: u8 = 1 << 5;
/// Peak current reduction bit
const PEAK_CURRENT: u8 = 1 << 4;
/// Dimming level bits
const BRIGHTNESS_MASK: u8 = 0b0000_0111;

/// Display brightness, 0 (dark) to 7 (full)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Brightness {
    /// Darkest level
    pub const MIN: Brightness = Brightness(0);
    /// Full brightness, the power-on level
    pub const MAX: Brightness = Brightness(7);

    /// Create a brightness level, `None` if above 7
    pub const fn new(level: u8) -> Option<Self> {
        if level <= Self::MAX.0 {
            Some(Self(level))
        } else {
            None
        }
    }

    /// Level as a plain integer
    pub const fn level(self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/7", self.0)
    }
}

impl TryFrom<u8> for Brightness {
    type Error = u8;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level).ok_or(level)
    }
}

/// Mirror of the chip's control register
///
/// The default is the chip's state right after a hardware reset: full
/// brightness, maximum peak current, not clearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlRegister {
    /// Brightness level
    pub brightness: Brightness,
    /// Peak current limited to 12.5%
    pub peak_current_reduced: bool,
    /// Display RAM clear in progress
    pub clear: bool,
}

impl ControlRegister {
    /// Register with the given settings and the clear bit off
    pub const fn new(brightness: Brightness, peak_current_reduced: bool) -> Self {
        Self {
            brightness,
            peak_current_reduced,
            clear: false,
        }
    }

    /// Encode as the byte shifted out on the bus
    pub const fn to_byte(self) -> u8 {
        let mut byte = CONTROL_SELECT;
        if !self.clear {
            byte |= CLR_NORMAL;
        }
        if self.peak_current_reduced {
            byte |= PEAK_CURRENT;
        }
        byte | ((Brightness::MAX.0 - self.brightness.0) & BRIGHTNESS_MASK)
    }

    /// Copy of this register with the clear bit set
    pub const fn clearing(self) -> Self {
        Self {
            clear: true,
            ..self
        }
    }
}
