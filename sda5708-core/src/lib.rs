//! Board-agnostic core logic for SDA5708 dot-matrix LED displays
//!
//! This crate contains everything that does not touch hardware:
//!
//! - [`Glyph`] - one 5x7 character cell bitmap
//! - [`encoder`] - text-row to glyph compiler for custom glyphs
//! - [`FontTable`] - built-in ASCII font plus custom glyph overrides
//! - [`DisplayBuffer`] - the 8 character cells with dirty tracking
//! - [`ControlRegister`] - brightness and peak-current settings
//! - [`config`] - configuration types, TOML-subset parser and validation
//!
//! The bit-banged bus and the render cycle live in `sda5708-driver`.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod control;
pub mod encoder;
pub mod font;
pub mod glyph;

pub use buffer::{Cell, DisplayBuffer, DIGITS};
pub use config::{ConfigError, DisplayConfig, DisplaySettings, ParseError};
pub use control::{Brightness, ControlRegister};
pub use encoder::{encode_rows, LIT, UNLIT};
pub use font::{FontError, FontTable};
pub use glyph::{Glyph, GlyphError, COLUMNS, ROWS};
