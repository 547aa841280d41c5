//! SDA5708 driver instance and render cycle
//!
//! [`Sda5708`] owns the bus, the display buffer and a mirror of the
//! control register. The caller drives it by calling [`Sda5708::tick`]
//! once per update interval:
//!
//! 1. Initialize the chip if that has not happened yet
//! 2. Unless redraw is paused, clear the buffer and run the writer
//! 3. Flush the buffer if it differs from what the display shows
//!
//! The control register is only written at initialization and by the
//! explicit actions ([`set_brightness`](Sda5708::set_brightness),
//! [`set_peak_current`](Sda5708::set_peak_current),
//! [`clear_screen`](Sda5708::clear_screen)), never by a plain tick.

use core::fmt;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use sda5708_core::config::PinAssignment;
use sda5708_core::{
    Brightness, ControlRegister, DisplayBuffer, DisplaySettings, FontError, Glyph,
};

use crate::protocol::Sda5708Bus;

/// Render callback run on every tick
///
/// Implemented for any `FnMut(&mut DisplayBuffer)`.
pub trait Writer {
    fn write(&mut self, buffer: &mut DisplayBuffer);
}

impl<F> Writer for F
where
    F: FnMut(&mut DisplayBuffer),
{
    fn write(&mut self, buffer: &mut DisplayBuffer) {
        self(buffer)
    }
}

/// SDA5708 display driver
pub struct Sda5708<P, D, W = fn(&mut DisplayBuffer)> {
    bus: Sda5708Bus<P, D>,
    buffer: DisplayBuffer,
    /// Last value written (or to be written at init)
    control: ControlRegister,
    pins: PinAssignment,
    update_interval_ms: u32,
    writer: Option<W>,
    /// Ticks left with the writer skipped
    skip_frames: u32,
    initialized: bool,
}

impl<P, D> Sda5708<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a driver from validated settings
    ///
    /// Hardware is not touched until [`init`](Self::init) or the first
    /// [`tick`](Self::tick).
    pub fn new(bus: Sda5708Bus<P, D>, settings: DisplaySettings) -> Self {
        Self {
            bus,
            buffer: DisplayBuffer::new(settings.font),
            control: settings.control,
            pins: settings.pins,
            update_interval_ms: settings.update_interval_ms,
            writer: None,
            skip_frames: 0,
            initialized: false,
        }
    }
}

impl<P, D, W> Sda5708<P, D, W>
where
    P: OutputPin,
    D: DelayNs,
    W: Writer,
{
    /// Install a writer, replacing any previous one
    pub fn with_writer<W2: Writer>(self, writer: W2) -> Sda5708<P, D, W2> {
        Sda5708 {
            bus: self.bus,
            buffer: self.buffer,
            control: self.control,
            pins: self.pins,
            update_interval_ms: self.update_interval_ms,
            writer: Some(writer),
            skip_frames: self.skip_frames,
            initialized: self.initialized,
        }
    }

    /// Reset the chip and write the control register
    ///
    /// The display content is unknown afterwards, so the next tick
    /// flushes unconditionally.
    pub fn init(&mut self) -> Result<(), P::Error> {
        self.bus.init()?;
        self.bus.write_control(self.control)?;
        self.buffer.invalidate();
        self.initialized = true;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "SDA5708 ready, brightness {}",
            self.control.brightness.level()
        );

        Ok(())
    }

    /// Whether [`init`](Self::init) has run
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Run one render cycle
    pub fn tick(&mut self) -> Result<(), P::Error> {
        if !self.initialized {
            self.init()?;
        }

        if self.skip_frames > 0 {
            self.skip_frames -= 1;
        } else if let Some(writer) = self.writer.as_mut() {
            self.buffer.clear();
            writer.write(&mut self.buffer);
        }

        self.flush()
    }

    /// Send the buffer if it changed since the last flush
    fn flush(&mut self) -> Result<(), P::Error> {
        if !self.buffer.is_dirty() {
            return Ok(());
        }

        #[cfg(feature = "defmt")]
        for (digit, cell) in self.buffer.cells().iter().enumerate() {
            if !self.buffer.font().contains(cell.symbol()) {
                defmt::warn!("No glyph for '{}' at digit {}", cell.symbol(), digit);
            }
        }

        self.bus.flush(&self.buffer.glyphs())?;
        self.buffer.mark_clean();

        #[cfg(feature = "defmt")]
        defmt::debug!("SDA5708 flushed \"{}\"", self.buffer.text().as_str());

        Ok(())
    }

    /// Set brightness and write the control register
    pub fn set_brightness(&mut self, brightness: Brightness) -> Result<(), P::Error> {
        self.control.brightness = brightness;
        self.push_control()
    }

    /// Current brightness
    pub fn brightness(&self) -> Brightness {
        self.control.brightness
    }

    /// Limit peak current to 12.5% and write the control register
    pub fn set_peak_current(&mut self, reduced: bool) -> Result<(), P::Error> {
        self.control.peak_current_reduced = reduced;
        self.push_control()
    }

    /// Whether peak current is limited to 12.5%
    pub fn peak_current_reduced(&self) -> bool {
        self.control.peak_current_reduced
    }

    /// Mirror of the chip's control register
    pub fn control_register(&self) -> ControlRegister {
        self.control
    }

    /// Write the register now; before init, init does it
    fn push_control(&mut self) -> Result<(), P::Error> {
        if self.initialized {
            self.bus.write_control(self.control)
        } else {
            self.init()
        }
    }

    /// Clear the display RAM
    ///
    /// The buffer is kept and re-sent on the next tick.
    pub fn clear_screen(&mut self) -> Result<(), P::Error> {
        if !self.initialized {
            self.init()?;
        }
        self.bus.clear_screen(self.control)?;
        self.buffer.invalidate();
        Ok(())
    }

    /// Register a custom glyph
    ///
    /// Digits already showing `ch` change on the next tick.
    pub fn set_glyph(&mut self, ch: char, glyph: Glyph) -> Result<Option<Glyph>, FontError> {
        self.buffer.register_glyph(ch, glyph)
    }

    /// Skip the writer for the next `frames` ticks
    ///
    /// Content written directly to the buffer in the meantime is still
    /// flushed.
    pub fn pause_automatic_redraw(&mut self, frames: u32) {
        self.skip_frames = frames;
    }

    /// Run the writer again from the next tick
    pub fn resume_automatic_redraw(&mut self) {
        self.skip_frames = 0;
    }

    /// Display buffer
    pub fn buffer(&self) -> &DisplayBuffer {
        &self.buffer
    }

    /// Display buffer for direct writes between ticks
    pub fn buffer_mut(&mut self) -> &mut DisplayBuffer {
        &mut self.buffer
    }

    /// See [`DisplayBuffer::print`]
    pub fn print(&mut self, text: &str) -> usize {
        self.buffer.print(text)
    }

    /// See [`DisplayBuffer::print_at`]
    pub fn print_at(&mut self, pos: usize, text: &str) -> usize {
        self.buffer.print_at(pos, text)
    }

    /// See [`DisplayBuffer::print_fmt`]
    pub fn print_fmt(&mut self, pos: usize, args: fmt::Arguments<'_>) -> usize {
        self.buffer.print_fmt(pos, args)
    }

    /// Render interval the driver was configured with
    pub fn update_interval_ms(&self) -> u32 {
        self.update_interval_ms
    }

    /// Log the active configuration
    pub fn dump_config(&self) {
        #[cfg(feature = "defmt")]
        {
            defmt::info!("SDA5708:");
            defmt::info!("  Data Pin: GPIO{}", self.pins.data);
            defmt::info!("  Clock Pin: GPIO{}", self.pins.clock);
            defmt::info!("  Load Pin: GPIO{}", self.pins.load);
            defmt::info!("  Reset Pin: GPIO{}", self.pins.reset);
            defmt::info!("  Brightness: {}", self.control.brightness.level());
            defmt::info!(
                "  Peak Current: {}",
                if self.control.peak_current_reduced {
                    "12.5%"
                } else {
                    "Maximum"
                }
            );
            defmt::info!("  Custom Glyphs: {}", self.buffer.font().override_count());
            for (ch, _) in self.buffer.font().overrides() {
                defmt::info!("    '{}'", ch);
            }
            defmt::info!("  Update Interval: {}ms", self.update_interval_ms);
        }
    }

    /// Pins the driver was configured with
    pub fn pins(&self) -> PinAssignment {
        self.pins
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::driver;
    use sda5708_core::{encode_rows, DisplayConfig, FontTable, DIGITS};
    use std::cell::Cell;
    use std::rc::Rc;

    fn config() -> DisplayConfig {
        DisplayConfig::new(3, 13, 12, 14)
    }

    #[test]
    fn test_hello_single_flush() {
        let (mut display, log) = driver(config());
        display.print("HELLO");
        display.tick().unwrap();

        let decoded = log.decode();
        assert_eq!(decoded.flushes(), 1);
        assert_eq!(decoded.digits.len(), DIGITS);

        let font = FontTable::new();
        for (i, ch) in "HELLO   ".chars().enumerate() {
            assert_eq!(decoded.digits[i].0 as usize, i);
            assert_eq!(&decoded.digits[i].1, font.lookup(ch).rows());
        }
        for (_, rows) in &decoded.digits[5..] {
            assert_eq!(rows, Glyph::BLANK.rows());
        }
    }

    #[test]
    fn test_first_tick_writes_configured_control() {
        let mut cfg = config();
        cfg.brightness = Some(4);
        cfg.reduce_peak_current = Some(true);
        let (mut display, log) = driver(cfg);

        // clean buffer still gets the control write
        display.tick().unwrap();
        let decoded = log.decode();
        assert_eq!(decoded.controls, vec![0b1111_0011]);
        assert_eq!(display.brightness().level(), 4);
        assert!(display.peak_current_reduced());
    }

    #[test]
    fn test_first_tick_resets_before_any_frame() {
        let (mut display, log) = driver(config());
        display.tick().unwrap();
        assert!(display.is_initialized());
        let reset: Vec<bool> = log.transitions(crate::mock::Line::Reset).collect();
        assert_eq!(reset, vec![true, false, true]);
    }

    #[test]
    fn test_ticks_do_not_rewrite_control() {
        let (mut display, log) = driver(config());
        display.tick().unwrap();
        log.clear();

        display.print("X");
        display.tick().unwrap();
        display.tick().unwrap();

        let decoded = log.decode();
        assert!(decoded.controls.is_empty());
        assert_eq!(decoded.flushes(), 1);
    }

    #[test]
    fn test_unchanged_buffer_is_not_resent() {
        let (mut display, log) = driver(config());
        display.print("12:00");
        display.tick().unwrap();
        log.clear();

        display.tick().unwrap();
        assert!(log.frames().is_empty());

        // same text written again
        display.buffer_mut().clear();
        display.print("12:00");
        display.tick().unwrap();
        assert!(log.frames().is_empty());

        display.print_at(4, "1");
        display.tick().unwrap();
        assert_eq!(log.decode().flushes(), 1);
    }

    #[test]
    fn test_writer_runs_on_clean_buffer() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = calls.clone();
        let (display, log) = driver(config());
        let mut display = display.with_writer(move |buf: &mut DisplayBuffer| {
            counter.set(counter.get() + 1);
            buf.print_fmt(0, format_args!("T{}", counter.get()));
        });

        display.print("LEFTOVER");
        display.tick().unwrap();
        assert_eq!(display.buffer().text(), "T1      ");

        display.tick().unwrap();
        assert_eq!(calls.get(), 2);
        assert_eq!(display.buffer().text(), "T2      ");
        assert_eq!(log.decode().flushes(), 2);
    }

    #[test]
    fn test_function_writer() {
        fn banner(buf: &mut DisplayBuffer) {
            buf.print("BANNER");
        }

        let (display, log) = driver(config());
        let mut display = display.with_writer(banner as fn(&mut DisplayBuffer));
        display.tick().unwrap();
        display.tick().unwrap();

        // identical frame the second time
        assert_eq!(log.decode().flushes(), 1);
        assert_eq!(display.buffer().text(), "BANNER  ");
    }

    #[test]
    fn test_pause_automatic_redraw() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = calls.clone();
        let (display, _log) = driver(config());
        let mut display =
            display.with_writer(move |_: &mut DisplayBuffer| counter.set(counter.get() + 1));

        display.tick().unwrap();
        display.pause_automatic_redraw(2);

        // manual content shows while paused
        display.print("PAUSED");
        display.tick().unwrap();
        assert_eq!(display.buffer().text(), "PAUSED  ");
        display.tick().unwrap();
        assert_eq!(calls.get(), 1);

        display.tick().unwrap();
        assert_eq!(calls.get(), 2);
        assert_eq!(display.buffer().text(), "        ");

        display.pause_automatic_redraw(10);
        display.resume_automatic_redraw();
        display.tick().unwrap();
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_set_brightness_writes_immediately() {
        let (mut display, log) = driver(config());
        display.tick().unwrap();
        log.clear();

        display.set_brightness(Brightness::MIN).unwrap();
        assert_eq!(log.decode().controls, vec![0b1110_0111]);

        display.set_brightness(Brightness::MAX).unwrap();
        display.set_peak_current(true).unwrap();
        assert_eq!(
            log.decode().controls,
            vec![0b1110_0111, 0b1110_0000, 0b1111_0000]
        );
        assert_eq!(display.control_register().to_byte(), 0b1111_0000);

        // no frames from the following tick
        log.clear();
        display.tick().unwrap();
        assert!(log.frames().is_empty());
    }

    #[test]
    fn test_action_before_first_tick_initializes() {
        let (mut display, log) = driver(config());
        display.set_brightness(Brightness::new(2).unwrap()).unwrap();
        assert!(display.is_initialized());
        assert_eq!(log.decode().controls, vec![0b1110_0101]);

        // first tick only flushes
        log.clear();
        display.tick().unwrap();
        let decoded = log.decode();
        assert!(decoded.controls.is_empty());
        assert_eq!(decoded.flushes(), 1);
    }

    #[test]
    fn test_clear_screen() {
        let (mut display, log) = driver(config());
        display.print("ABC");
        display.tick().unwrap();
        log.clear();

        display.clear_screen().unwrap();
        assert_eq!(log.decode().controls, vec![0b1100_0000, 0b1110_0000]);
        assert!(!display.control_register().clear);

        // buffer is re-sent even though it did not change
        log.clear();
        display.tick().unwrap();
        assert_eq!(log.decode().flushes(), 1);
        assert_eq!(display.buffer().text(), "ABC     ");
    }

    #[test]
    fn test_set_glyph_updates_display() {
        let bar = encode_rows(&[".....", ".....", ".....", "#####", ".....", ".....", "....."])
            .unwrap();
        let (mut display, log) = driver(config());
        display.print("A");
        display.tick().unwrap();
        log.clear();

        assert_eq!(display.set_glyph('A', bar), Ok(None));
        display.tick().unwrap();

        let decoded = log.decode();
        assert_eq!(decoded.flushes(), 1);
        assert_eq!(&decoded.digits[0].1, bar.rows());
    }

    #[test]
    fn test_configured_glyph_is_used() {
        let mut cfg = config();
        let rows = ["#####", "#...#", "#...#", "#...#", "#...#", "#...#", "#####"];
        let toml = "[glyph.box]\nchar = \"@\"\nrows = [\"#####\", \"#...#\", \"#...#\", \"#...#\", \"#...#\", \"#...#\", \"#####\"]\n";
        cfg.glyphs = sda5708_core::config::parse_config(toml).unwrap().glyphs;
        let (mut display, log) = driver(cfg);

        display.print("@");
        display.tick().unwrap();
        assert_eq!(&log.decode().digits[0].1, encode_rows(&rows).unwrap().rows());
    }

    #[test]
    fn test_settings_are_kept() {
        let mut cfg = config();
        cfg.update_interval_ms = 250;
        let (display, _) = driver(cfg);
        assert_eq!(display.update_interval_ms(), 250);
        assert_eq!(display.pins().load, 12);
        assert!(!display.is_initialized());
        display.dump_config();
    }

    #[test]
    fn test_custom_glyphs_are_listed() {
        let (mut display, _) = driver(config());
        display.set_glyph('@', Glyph::FULL).unwrap();
        let listed: Vec<(char, Glyph)> = display.buffer().font().overrides().collect();
        assert_eq!(listed, vec![('@', Glyph::FULL)]);
        display.dump_config();
    }
}
