//! Display configuration loading
//!
//! The configuration is compiled in from display.toml. The build script
//! already ran the same checks, so a failure here means the embedded
//! text and the build-time copy disagree.

use defmt::*;

use sda5708_core::config::{parse_config, ConfigError, DisplaySettings, ParseError};

/// Configuration loading errors
#[derive(Debug, Clone, PartialEq, Eq, Format)]
pub enum LoadError {
    /// TOML subset could not be parsed
    Parse(ParseError),
    /// Values failed validation
    Invalid(ConfigError),
}

impl From<ParseError> for LoadError {
    fn from(e: ParseError) -> Self {
        LoadError::Parse(e)
    }
}

impl From<ConfigError> for LoadError {
    fn from(e: ConfigError) -> Self {
        LoadError::Invalid(e)
    }
}

/// Parse and validate configuration text
pub fn load(source: &str) -> Result<DisplaySettings, LoadError> {
    info!("Loading display configuration ({} bytes)", source.len());

    let config = parse_config(source)?;
    let settings = config.validate()?;

    info!(
        "Display configuration OK: {} custom glyph(s), every {}ms",
        settings.font.override_count(),
        settings.update_interval_ms
    );
    Ok(settings)
}
