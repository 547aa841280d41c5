//! Configuration types and validation
//!
//! [`DisplayConfig`] is the raw, operator-supplied configuration. It is
//! checked once by [`DisplayConfig::validate`], which either produces
//! [`DisplaySettings`] ready for the driver or a [`ConfigError`] naming
//! the first problem found. Nothing touches hardware before that.

use core::fmt;

use heapless::{String, Vec};

use crate::control::{Brightness, ControlRegister};
use crate::encoder::encode_rows;
use crate::font::{FontError, FontTable, MAX_OVERRIDES};
use crate::glyph::{Glyph, GlyphError, ROWS};

/// Default render interval
pub const DEFAULT_UPDATE_INTERVAL_MS: u32 = 1000;

/// Maximum custom glyph definitions
pub const MAX_GLYPHS: usize = MAX_OVERRIDES;

/// Maximum glyph name length
pub const MAX_LABEL_LEN: usize = 16;

/// Storage for one textual glyph row
///
/// Longer rows are not stored; see [`GlyphDefinition::overlong_row`].
pub const MAX_ROW_LEN: usize = 16;

/// Storage for the rows of one glyph definition
///
/// Rows past this are only counted in [`GlyphDefinition::extra_rows`].
pub const MAX_GLYPH_ROWS: usize = 12;

/// The four bus lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinRole {
    Data,
    Clock,
    Load,
    Reset,
}

impl PinRole {
    /// Configuration key for this pin
    pub const fn key(self) -> &'static str {
        match self {
            PinRole::Data => "data_pin",
            PinRole::Clock => "clock_pin",
            PinRole::Load => "load_pin",
            PinRole::Reset => "reset_pin",
        }
    }
}

impl fmt::Display for PinRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Validated GPIO numbers of the bus lines, all distinct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinAssignment {
    pub data: u8,
    pub clock: u8,
    pub load: u8,
    pub reset: u8,
}

impl PinAssignment {
    /// Pins paired with their role
    pub fn iter(&self) -> impl Iterator<Item = (PinRole, u8)> {
        [
            (PinRole::Data, self.data),
            (PinRole::Clock, self.clock),
            (PinRole::Load, self.load),
            (PinRole::Reset, self.reset),
        ]
        .into_iter()
    }
}

/// Custom glyph definition as written in the configuration
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphDefinition {
    /// Section name, used in error messages
    pub name: String<MAX_LABEL_LEN>,
    /// Character the glyph is shown for
    pub character: Option<char>,
    /// Textual rows, see [`crate::encoder`]
    pub rows: Vec<String<MAX_ROW_LEN>, MAX_GLYPH_ROWS>,
    /// Rows given beyond the storage in `rows`
    pub extra_rows: usize,
    /// First row too long to store: its index and length in characters.
    /// `rows` holds an empty placeholder at that index.
    pub overlong_row: Option<(usize, usize)>,
}

impl GlyphDefinition {
    /// Check the definition and encode it
    pub fn compile(&self) -> Result<(char, Glyph), ConfigError> {
        let character = self
            .character
            .ok_or_else(|| ConfigError::GlyphWithoutChar(self.name.clone()))?;
        if character.is_control() {
            return Err(ConfigError::UnprintableGlyphChar(character));
        }
        let invalid = |error| ConfigError::InvalidGlyph { character, error };

        let row_count = self.rows.len() + self.extra_rows;
        if row_count != ROWS {
            return Err(invalid(GlyphError::RowCount(row_count)));
        }
        if let Some((row, len)) = self.overlong_row {
            return Err(invalid(GlyphError::RowLength { row, len }));
        }

        let glyph = encode_rows(self.rows.as_slice()).map_err(invalid)?;
        Ok((character, glyph))
    }
}

/// Raw display configuration
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    pub data_pin: Option<u8>,
    pub clock_pin: Option<u8>,
    pub load_pin: Option<u8>,
    pub reset_pin: Option<u8>,
    /// Render cycle interval in milliseconds
    pub update_interval_ms: u32,
    /// Initial brightness 0-7; `None` keeps the power-on level (7)
    pub brightness: Option<i32>,
    /// Initial peak current reduction; `None` keeps the power-on setting (off)
    pub reduce_peak_current: Option<bool>,
    /// Custom glyphs, later entries win for the same character
    pub glyphs: Vec<GlyphDefinition, MAX_GLYPHS>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            data_pin: None,
            clock_pin: None,
            load_pin: None,
            reset_pin: None,
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            brightness: None,
            reduce_peak_current: None,
            glyphs: Vec::new(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A required pin is not assigned
    MissingPin(PinRole),
    /// Two roles share one pin
    DuplicatePin { pin: u8, first: PinRole, second: PinRole },
    /// Brightness outside 0-7
    BrightnessOutOfRange(i32),
    /// Render interval of zero
    ZeroUpdateInterval,
    /// Glyph section without a `char` key
    GlyphWithoutChar(String<MAX_LABEL_LEN>),
    /// Glyph for a control character
    UnprintableGlyphChar(char),
    /// Glyph rows are malformed
    InvalidGlyph { character: char, error: GlyphError },
    /// Glyph could not be added to the font
    Font(FontError),
}

impl From<FontError> for ConfigError {
    fn from(e: FontError) -> Self {
        ConfigError::Font(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingPin(role) => write!(f, "{} is required", role),
            ConfigError::DuplicatePin { pin, first, second } => {
                write!(f, "{} and {} both use pin {}", first, second, pin)
            }
            ConfigError::BrightnessOutOfRange(level) => {
                write!(f, "brightness {} is outside 0-7", level)
            }
            ConfigError::ZeroUpdateInterval => f.write_str("update_interval_ms must be above 0"),
            ConfigError::GlyphWithoutChar(name) => {
                write!(f, "glyph '{}' has no char", name.as_str())
            }
            ConfigError::UnprintableGlyphChar(ch) => {
                write!(f, "glyph char {:?} is not printable", ch)
            }
            ConfigError::InvalidGlyph { character, error } => {
                write!(f, "glyph '{}': {}", character, error)
            }
            ConfigError::Font(e) => write!(f, "{}", e),
        }
    }
}

/// Validated configuration, ready to build a driver from
#[derive(Debug, Clone)]
pub struct DisplaySettings {
    pub pins: PinAssignment,
    pub update_interval_ms: u32,
    /// Register value written at initialization
    pub control: ControlRegister,
    /// Built-in font plus the configured glyphs
    pub font: FontTable,
}

impl DisplayConfig {
    /// Configuration with the four pins assigned and everything else default
    pub fn new(data: u8, clock: u8, load: u8, reset: u8) -> Self {
        Self {
            data_pin: Some(data),
            clock_pin: Some(clock),
            load_pin: Some(load),
            reset_pin: Some(reset),
            ..Self::default()
        }
    }

    /// Check every option and build the settings
    pub fn validate(&self) -> Result<DisplaySettings, ConfigError> {
        let pins = self.validate_pins()?;

        if self.update_interval_ms == 0 {
            return Err(ConfigError::ZeroUpdateInterval);
        }

        let brightness = match self.brightness {
            None => Brightness::default(),
            Some(level) => u8::try_from(level)
                .ok()
                .and_then(Brightness::new)
                .ok_or(ConfigError::BrightnessOutOfRange(level))?,
        };
        let control =
            ControlRegister::new(brightness, self.reduce_peak_current.unwrap_or(false));

        let mut font = FontTable::new();
        for definition in &self.glyphs {
            let (ch, glyph) = definition.compile()?;
            font.register(ch, glyph)?;
        }

        Ok(DisplaySettings {
            pins,
            update_interval_ms: self.update_interval_ms,
            control,
            font,
        })
    }

    fn validate_pins(&self) -> Result<PinAssignment, ConfigError> {
        let pins = PinAssignment {
            data: self.data_pin.ok_or(ConfigError::MissingPin(PinRole::Data))?,
            clock: self.clock_pin.ok_or(ConfigError::MissingPin(PinRole::Clock))?,
            load: self.load_pin.ok_or(ConfigError::MissingPin(PinRole::Load))?,
            reset: self.reset_pin.ok_or(ConfigError::MissingPin(PinRole::Reset))?,
        };

        for (i, (first, pin)) in pins.iter().enumerate() {
            if let Some((second, _)) = pins.iter().skip(i + 1).find(|&(_, p)| p == pin) {
                return Err(ConfigError::DuplicatePin { pin, first, second });
            }
        }

        Ok(pins)
    }
}
