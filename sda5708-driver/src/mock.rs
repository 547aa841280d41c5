//! Test doubles: pins that record every level change into a shared log,
//! a delay that adds up requested hold times, and a decoder that turns
//! the recorded pin activity back into bus frames.

use core::convert::Infallible;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use sda5708_core::{DisplayConfig, ROWS};

use crate::display::Sda5708;
use crate::protocol::{BusPins, Sda5708Bus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Data,
    Clock,
    Load,
    Reset,
}

/// Pin activity shared by the four mock pins
#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<(Line, bool)>>>);

pub struct MockPin {
    line: Line,
    log: Log,
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.0.borrow_mut().push((self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.0.borrow_mut().push((self.line, true));
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct MockDelay(Rc<Cell<u64>>);

impl MockDelay {
    pub fn total_ns(&self) -> u64 {
        self.0.get()
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.set(self.0.get() + u64::from(ns));
    }
}

#[derive(Debug, Default)]
pub struct Levels {
    pub data: bool,
    pub clock: bool,
    pub load: bool,
    pub reset: bool,
}

/// Frames sorted by register
#[derive(Debug, Default, PartialEq)]
pub struct Decoded {
    /// Control words in order
    pub controls: Vec<u8>,
    /// Digit number and its 7 rows, per digit write
    pub digits: Vec<(u8, [u8; ROWS])>,
}

impl Decoded {
    /// Number of complete 8-digit flushes
    pub fn flushes(&self) -> usize {
        self.digits
            .chunks(8)
            .filter(|chunk| {
                chunk.len() == 8 && chunk.iter().enumerate().all(|(i, (d, _))| *d as usize == i)
            })
            .count()
    }
}

impl Log {
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn transitions(&self, line: Line) -> impl Iterator<Item = bool> {
        let events: Vec<bool> = self
            .0
            .borrow()
            .iter()
            .filter(|(l, _)| *l == line)
            .map(|&(_, level)| level)
            .collect();
        events.into_iter()
    }

    pub fn final_levels(&self) -> Levels {
        let mut levels = Levels::default();
        for &(line, level) in self.0.borrow().iter() {
            match line {
                Line::Data => levels.data = level,
                Line::Clock => levels.clock = level,
                Line::Load => levels.load = level,
                Line::Reset => levels.reset = level,
            }
        }
        levels
    }

    /// Walk the log, calling `on_rise(load_low, data)` for each rising
    /// CLOCK edge and `on_latch()` for each LOAD low-to-high edge
    fn replay(&self, mut on_rise: impl FnMut(bool, bool), mut on_latch: impl FnMut()) {
        let mut levels = Levels {
            load: true,
            ..Levels::default()
        };
        for &(line, level) in self.0.borrow().iter() {
            match line {
                Line::Data => levels.data = level,
                Line::Clock => {
                    if level && !levels.clock {
                        on_rise(!levels.load, levels.data);
                    }
                    levels.clock = level;
                }
                Line::Load => {
                    if level && !levels.load {
                        on_latch();
                    }
                    levels.load = level;
                }
                Line::Reset => levels.reset = level,
            }
        }
    }

    /// DATA level at every rising CLOCK edge inside a frame
    pub fn sampled_bits(&self) -> Vec<bool> {
        let mut bits = Vec::new();
        self.replay(
            |in_frame, data| {
                if in_frame {
                    bits.push(data)
                }
            },
            || {},
        );
        bits
    }

    pub fn clock_pulses(&self) -> usize {
        let mut count = 0;
        self.replay(|_, _| count += 1, || {});
        count
    }

    pub fn clocks_outside_load(&self) -> usize {
        let mut count = 0;
        self.replay(
            |in_frame, _| {
                if !in_frame {
                    count += 1
                }
            },
            || {},
        );
        count
    }

    /// Bytes latched on the bus, rebuilt LSB first
    pub fn frames(&self) -> Vec<u8> {
        let bits = RefCell::new(Vec::new());
        let mut frames = Vec::new();
        self.replay(
            |in_frame, data| {
                if in_frame {
                    bits.borrow_mut().push(data)
                }
            },
            || {
                let mut bits = bits.borrow_mut();
                assert_eq!(bits.len(), 8, "frame with {} bits", bits.len());
                let byte = bits
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &bit)| acc | (u8::from(bit) << i));
                frames.push(byte);
                bits.clear();
            },
        );
        frames
    }

    /// Frames grouped into control words and digit writes
    pub fn decode(&self) -> Decoded {
        let mut decoded = Decoded::default();
        let mut current: Option<(u8, Vec<u8>)> = None;

        fn finish(current: &mut Option<(u8, Vec<u8>)>, decoded: &mut Decoded) {
            if let Some((digit, rows)) = current.take() {
                let rows: [u8; ROWS] = rows.try_into().expect("digit write with wrong row count");
                decoded.digits.push((digit, rows));
            }
        }

        for byte in self.frames() {
            match byte {
                0b1100_0000..=0b1111_1111 => {
                    finish(&mut current, &mut decoded);
                    decoded.controls.push(byte);
                }
                0b1010_0000..=0b1010_0111 => {
                    finish(&mut current, &mut decoded);
                    current = Some((byte & 0b111, Vec::new()));
                }
                0b0000_0000..=0b0001_1111 => match current.as_mut() {
                    Some((_, rows)) => rows.push(byte),
                    None => panic!("row byte {:#04x} without digit select", byte),
                },
                _ => panic!("unexpected byte {:#010b}", byte),
            }
        }
        finish(&mut current, &mut decoded);
        decoded
    }
}

fn pins(log: &Log) -> BusPins<MockPin> {
    let pin = |line| MockPin {
        line,
        log: log.clone(),
    };
    BusPins {
        data: pin(Line::Data),
        clock: pin(Line::Clock),
        load: pin(Line::Load),
        reset: pin(Line::Reset),
    }
}

pub struct MockBus {
    pub bus: Sda5708Bus<MockPin, MockDelay>,
    pub log: Log,
    pub delay: MockDelay,
}

pub fn bus() -> MockBus {
    let log = Log::default();
    let delay = MockDelay::default();
    MockBus {
        bus: Sda5708Bus::new(pins(&log), delay.clone()),
        log,
        delay,
    }
}

/// Driver on mock pins built from `config`
pub fn driver(config: DisplayConfig) -> (Sda5708<MockPin, MockDelay>, Log) {
    let MockBus { bus, log, .. } = bus();
    let settings = config.validate().unwrap();
    (Sda5708::new(bus, settings), log)
}
