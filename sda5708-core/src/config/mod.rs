//! Display configuration
//!
//! Configuration is read from a small TOML subset by [`parse_config`]
//! and checked by [`DisplayConfig::validate`].

pub mod toml;
pub mod types;

pub use self::toml::{parse_config, ParseError, ParseErrorKind};
pub use self::types::*;
