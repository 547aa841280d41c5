//! Glyph lookup
//!
//! The font table holds the built-in ASCII glyphs plus a small set of
//! overrides. An override shadows the built-in glyph for the same
//! character. Lookup never fails: characters without any glyph render
//! blank.

mod builtin;

use core::fmt;

use heapless::LinearMap;

use crate::glyph::Glyph;

pub use builtin::{FIRST as BUILTIN_FIRST, LAST as BUILTIN_LAST};

/// Maximum number of custom glyph overrides
pub const MAX_OVERRIDES: usize = 16;

/// Font table errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// Override table already holds [`MAX_OVERRIDES`] other characters
    TableFull,
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::TableFull => {
                write!(f, "no room for more than {} custom glyphs", MAX_OVERRIDES)
            }
        }
    }
}

/// Character to glyph mapping
#[derive(Debug, Clone)]
pub struct FontTable {
    overrides: LinearMap<char, Glyph, MAX_OVERRIDES>,
}

impl Default for FontTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FontTable {
    /// Create a table with only the built-in glyphs
    pub const fn new() -> Self {
        Self {
            overrides: LinearMap::new(),
        }
    }

    /// Built-in glyph for a character, if the default font has one
    pub fn builtin(ch: char) -> Option<Glyph> {
        if (BUILTIN_FIRST..=BUILTIN_LAST).contains(&ch) {
            builtin::GLYPHS
                .get(ch as usize - BUILTIN_FIRST as usize)
                .copied()
        } else {
            None
        }
    }

    /// Glyph for a character: override, then built-in, then blank
    pub fn lookup(&self, ch: char) -> Glyph {
        self.get(ch).unwrap_or(Glyph::BLANK)
    }

    /// Glyph for a character, `None` if neither an override nor a
    /// built-in glyph exists
    pub fn get(&self, ch: char) -> Option<Glyph> {
        self.overrides
            .get(&ch)
            .copied()
            .or_else(|| Self::builtin(ch))
    }

    /// Whether the character has a glyph other than the blank fallback
    pub fn contains(&self, ch: char) -> bool {
        self.get(ch).is_some()
    }

    /// Insert or replace the override glyph for a character
    ///
    /// Returns the previous override, if any. Replacing an existing
    /// override always succeeds.
    pub fn register(&mut self, ch: char, glyph: Glyph) -> Result<Option<Glyph>, FontError> {
        self.overrides
            .insert(ch, glyph)
            .map_err(|_| FontError::TableFull)
    }

    /// Number of registered overrides
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Registered overrides
    pub fn overrides(&self) -> impl Iterator<Item = (char, Glyph)> + '_ {
        self.overrides.iter().map(|(&c, &g)| (c, g))
    }
}
