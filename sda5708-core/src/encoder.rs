//! Text-row glyph encoder
//!
//! Custom glyphs are written as 7 strings of 5 characters each, `#` for a
//! lit dot and `.` for an unlit one:
//!
//! ```text
//! ".#.#."
//! "....."
//! "#...#"
//! ```
//!
//! Malformed input is rejected; rows are never padded or truncated.

use crate::glyph::{Glyph, GlyphError, COLUMNS, ROWS};

/// Symbol for a lit dot
pub const LIT: char = '#';

/// Symbol for an unlit dot
pub const UNLIT: char = '.';

/// Encode textual rows into a glyph
///
/// Character `c` of row `r` being [`LIT`] sets bit `4 - c` of row `r`.
pub fn encode_rows<S: AsRef<str>>(rows: &[S]) -> Result<Glyph, GlyphError> {
    if rows.len() != ROWS {
        return Err(GlyphError::RowCount(rows.len()));
    }

    let mut masks = [0u8; ROWS];
    for (row, (text, mask)) in rows.iter().zip(masks.iter_mut()).enumerate() {
        *mask = encode_row(row, text.as_ref())?;
    }

    Glyph::new(masks)
}

fn encode_row(row: usize, text: &str) -> Result<u8, GlyphError> {
    let len = text.chars().count();
    if len != COLUMNS {
        return Err(GlyphError::RowLength { row, len });
    }

    let mut mask = 0u8;
    for (column, symbol) in text.chars().enumerate() {
        match symbol {
            LIT => mask |= 1 << (COLUMNS - 1 - column),
            UNLIT => {}
            _ => return Err(GlyphError::InvalidSymbol { row, column, symbol }),
        }
    }
    Ok(mask)
}
