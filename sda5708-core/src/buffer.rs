//! Character cell buffer
//!
//! Holds the 8 digits shown on the display. Every write resolves the
//! character through the font table right away, so the buffer always
//! carries the exact glyphs that the next flush will send.

use core::fmt::{self, Write as _};

use heapless::String;

use crate::font::{FontError, FontTable};
use crate::glyph::Glyph;

/// Number of digits on the display
pub const DIGITS: usize = 8;

/// One digit: the character written there and its resolved glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell {
    symbol: char,
    glyph: Glyph,
}

impl Cell {
    /// An empty (space) cell
    pub const BLANK: Cell = Cell {
        symbol: ' ',
        glyph: Glyph::BLANK,
    };

    /// Character stored in the cell
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Glyph the character resolved to
    pub fn glyph(&self) -> Glyph {
        self.glyph
    }
}

/// Display buffer for the 8 digits
///
/// Tracks whether anything was written since the last flush, and keeps
/// a snapshot of the glyphs last flushed so that rewriting identical
/// content does not cause another transfer.
#[derive(Debug, Clone)]
pub struct DisplayBuffer {
    font: FontTable,
    cells: [Cell; DIGITS],
    /// Written since the last flush
    dirty: bool,
    /// Glyphs at the last flush, `None` if the display content is unknown
    flushed: Option<[Glyph; DIGITS]>,
}

impl Default for DisplayBuffer {
    fn default() -> Self {
        Self::new(FontTable::new())
    }
}

impl DisplayBuffer {
    /// Create a blank buffer using the given font
    pub fn new(font: FontTable) -> Self {
        Self {
            font,
            cells: [Cell::BLANK; DIGITS],
            dirty: true,
            flushed: None,
        }
    }

    /// Font used to resolve writes
    pub fn font(&self) -> &FontTable {
        &self.font
    }

    /// Register a custom glyph
    ///
    /// Cells already holding `ch` pick up the new glyph immediately.
    pub fn register_glyph(&mut self, ch: char, glyph: Glyph) -> Result<Option<Glyph>, FontError> {
        let previous = self.font.register(ch, glyph)?;
        for cell in self.cells.iter_mut().filter(|c| c.symbol == ch) {
            cell.glyph = glyph;
            self.dirty = true;
        }
        Ok(previous)
    }

    /// Write one character at a position
    ///
    /// Returns false (and writes nothing) if `pos` is past the last digit.
    pub fn set(&mut self, pos: usize, ch: char) -> bool {
        let glyph = self.font.lookup(ch);
        match self.cells.get_mut(pos) {
            Some(cell) => {
                *cell = Cell { symbol: ch, glyph };
                self.dirty = true;
                true
            }
            None => false,
        }
    }

    /// Write text starting at digit 0
    ///
    /// See [`print_at`](Self::print_at).
    pub fn print(&mut self, text: &str) -> usize {
        self.print_at(0, text)
    }

    /// Write text left to right starting at `pos`
    ///
    /// Characters that would land past the last digit are dropped; this
    /// is not an error. Returns the position after the last written
    /// character, or `pos` if nothing was written.
    pub fn print_at(&mut self, pos: usize, text: &str) -> usize {
        let mut next = pos;
        for ch in text.chars() {
            if !self.set(next, ch) {
                break;
            }
            next += 1;
        }
        next
    }

    /// Write formatted text starting at `pos`
    ///
    /// ```
    /// # use sda5708_core::DisplayBuffer;
    /// let mut buf = DisplayBuffer::default();
    /// buf.print_fmt(0, format_args!("{:>4}C", 21));
    /// assert_eq!(buf.text(), "  21C   ");
    /// ```
    pub fn print_fmt(&mut self, pos: usize, args: fmt::Arguments<'_>) -> usize {
        let mut cursor = Cursor { buffer: self, pos };
        // Cursor never fails, it drops what does not fit
        let _ = cursor.write_fmt(args);
        cursor.pos
    }

    /// Fill every cell with a space
    pub fn clear(&mut self) {
        self.cells = [Cell::BLANK; DIGITS];
        self.dirty = true;
    }

    /// Cell at a position
    pub fn cell(&self, pos: usize) -> Option<&Cell> {
        self.cells.get(pos)
    }

    /// All cells, leftmost first
    pub fn cells(&self) -> &[Cell; DIGITS] {
        &self.cells
    }

    /// Resolved glyphs, leftmost first
    pub fn glyphs(&self) -> [Glyph; DIGITS] {
        core::array::from_fn(|i| self.cells[i].glyph)
    }

    /// Current content as text
    pub fn text(&self) -> String<{ DIGITS * 4 }> {
        let mut text = String::new();
        for cell in &self.cells {
            // 8 chars of at most 4 bytes always fit
            let _ = text.push(cell.symbol);
        }
        text
    }

    /// Whether a flush would change what the display shows
    pub fn is_dirty(&self) -> bool {
        self.dirty && self.flushed.as_ref() != Some(&self.glyphs())
    }

    /// Record the current glyphs as flushed
    pub fn mark_clean(&mut self) {
        self.flushed = Some(self.glyphs());
        self.dirty = false;
    }

    /// Forget what the display shows so the next flush always happens
    ///
    /// Used after a reset or display RAM clear.
    pub fn invalidate(&mut self) {
        self.flushed = None;
        self.dirty = true;
    }

    /// Glyphs as they were last flushed
    pub fn flushed(&self) -> Option<&[Glyph; DIGITS]> {
        self.flushed.as_ref()
    }
}

/// Formatting sink writing straight into the cells
struct Cursor<'a> {
    buffer: &'a mut DisplayBuffer,
    pos: usize,
}

impl fmt::Write for Cursor<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.pos = self.buffer.print_at(self.pos, s);
        Ok(())
    }
}
