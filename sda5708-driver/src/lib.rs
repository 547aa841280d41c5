//! SDA5708 display driver
//!
//! Two layers on top of `sda5708-core`:
//!
//! - [`Sda5708Bus`] - the bit-banged 4-wire protocol (DATA, CLOCK, LOAD, RESET)
//! - [`Sda5708`] - a driver instance owning the bus, the display buffer and
//!   the control register, with the periodic render cycle
//!
//! Both are generic over `embedded-hal` 1.0 [`OutputPin`] and [`DelayNs`],
//! and block for the whole of every frame.
//!
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod protocol;

#[cfg(test)]
mod mock;

pub use display::{Sda5708, Writer};
pub use protocol::{BusPins, Sda5708Bus};
