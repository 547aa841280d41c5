//! 5x7 character cell bitmaps

use core::fmt;

/// Rows per glyph
pub const ROWS: usize = 7;

/// Columns per glyph row
pub const COLUMNS: usize = 5;

/// Mask of the valid column bits in a row
const ROW_MASK: u8 = (1 << COLUMNS) - 1;

/// Reasons a glyph definition is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphError {
    /// Definition does not have exactly 7 rows
    RowCount(usize),
    /// A textual row does not have exactly 5 characters
    RowLength { row: usize, len: usize },
    /// A textual row contains something other than the lit/unlit symbols
    InvalidSymbol { row: usize, column: usize, symbol: char },
    /// A numeric row has bits set above bit 4
    RowOutOfRange { row: usize, value: u8 },
}

impl fmt::Display for GlyphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GlyphError::RowCount(n) => write!(f, "expected {} rows, found {}", ROWS, n),
            GlyphError::RowLength { row, len } => {
                write!(f, "row {} has {} cells, expected {}", row, len, COLUMNS)
            }
            GlyphError::InvalidSymbol { row, column, symbol } => write!(
                f,
                "row {} column {} has '{}', only '{}' and '{}' are allowed",
                row,
                column,
                symbol,
                crate::encoder::LIT,
                crate::encoder::UNLIT
            ),
            GlyphError::RowOutOfRange { row, value } => {
                write!(f, "row {} value {:#04x} does not fit in 5 bits", row, value)
            }
        }
    }
}

/// One character cell: 7 rows of 5 columns
///
/// Bit 4 of each row is the leftmost column, row 0 is the top row.
/// Every row is guaranteed to be below 32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    rows: [u8; ROWS],
}

impl Glyph {
    /// All columns unlit
    pub const BLANK: Glyph = Glyph { rows: [0; ROWS] };

    /// All columns lit
    pub const FULL: Glyph = Glyph {
        rows: [ROW_MASK; ROWS],
    };

    /// Create a glyph from raw row masks
    ///
    /// Fails if any row has bits set outside the low 5 bits.
    pub fn new(rows: [u8; ROWS]) -> Result<Self, GlyphError> {
        for (row, &value) in rows.iter().enumerate() {
            if value > ROW_MASK {
                return Err(GlyphError::RowOutOfRange { row, value });
            }
        }
        Ok(Self { rows })
    }

    /// Create a glyph from row masks known to be in range
    ///
    /// Extra bits are masked off, so the invariant still holds.
    pub(crate) const fn from_masked(rows: [u8; ROWS]) -> Self {
        let mut masked = [0u8; ROWS];
        let mut i = 0;
        while i < ROWS {
            masked[i] = rows[i] & ROW_MASK;
            i += 1;
        }
        Self { rows: masked }
    }

    /// Row masks, top row first
    pub const fn rows(&self) -> &[u8; ROWS] {
        &self.rows
    }

    /// A single row mask (0 for rows past the bottom)
    pub fn row(&self, row: usize) -> u8 {
        self.rows.get(row).copied().unwrap_or(0)
    }

    /// Whether no dot is lit
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&r| r == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_5_bit_rows() {
        let glyph = Glyph::new([0, 1, 2, 4, 8, 16, 31]).unwrap();
        assert_eq!(glyph.rows(), &[0, 1, 2, 4, 8, 16, 31]);
    }

    #[test]
    fn test_new_rejects_wide_row() {
        assert_eq!(
            Glyph::new([0, 0, 0, 32, 0, 0, 0]),
            Err(GlyphError::RowOutOfRange { row: 3, value: 32 })
        );
    }

    #[test]
    fn test_from_masked_strips_high_bits() {
        let glyph = Glyph::from_masked([0xFF; ROWS]);
        assert_eq!(glyph, Glyph::FULL);
    }

    #[test]
    fn test_blank() {
        assert!(Glyph::BLANK.is_blank());
        assert!(!Glyph::FULL.is_blank());
        assert_eq!(Glyph::default(), Glyph::BLANK);
    }
}
