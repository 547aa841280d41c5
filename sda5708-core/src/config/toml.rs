//! Simple TOML parser for display configuration
//!
//! This is a minimal parser for the subset of TOML the display
//! configuration needs. It does NOT support full TOML.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - Single-line arrays of strings
//! - `[glyph.<name>]` section headers
//! - Comments (# ...), including after a value
//!
//! NOT supported:
//! - Multi-line strings or arrays
//! - Escape sequences in strings
//! - Any other section

use core::fmt;

use heapless::String as HString;

use super::types::{DisplayConfig, GlyphDefinition, MAX_LABEL_LEN};

/// What went wrong on a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseErrorKind {
    /// Line is neither a section header nor `key = value`
    Malformed,
    /// Section header names an unsupported section
    UnknownSection,
    /// Key is not valid in the current section
    UnknownKey,
    /// Value has the wrong type or is out of the type's range
    InvalidValue,
    /// More items than fixed capacity allows
    TooManyItems,
}

/// Parse error with its 1-based line number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    fn new(line: usize, kind: ParseErrorKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            ParseErrorKind::Malformed => "expected `key = value` or `[section]`",
            ParseErrorKind::UnknownSection => "unknown section",
            ParseErrorKind::UnknownKey => "unknown key",
            ParseErrorKind::InvalidValue => "invalid value",
            ParseErrorKind::TooManyItems => "too many items",
        };
        write!(f, "line {}: {}", self.line, what)
    }
}

/// Current parsing context
enum Section {
    Root,
    Glyph(GlyphDefinition),
}

/// Parse TOML configuration into a [`DisplayConfig`]
///
/// Only syntax and value types are checked here; call
/// [`DisplayConfig::validate`] on the result.
pub fn parse_config(input: &str) -> Result<DisplayConfig, ParseError> {
    let mut config = DisplayConfig::default();
    let mut section = Section::Root;
    let mut section_line = 0;

    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_comment(raw).trim();

        if line.is_empty() {
            continue;
        }

        // Section header
        if line.starts_with('[') && line.ends_with(']') {
            save_section(&mut config, section, section_line)?;
            section = parse_section_header(&line[1..line.len() - 1])
                .map_err(|kind| ParseError::new(line_no, kind))?;
            section_line = line_no;
            continue;
        }

        let (key, value) =
            parse_key_value(line).ok_or(ParseError::new(line_no, ParseErrorKind::Malformed))?;

        let result = match &mut section {
            Section::Root => apply_root(&mut config, key, value),
            Section::Glyph(glyph) => apply_glyph(glyph, key, value),
        };
        result.map_err(|kind| ParseError::new(line_no, kind))?;
    }

    save_section(&mut config, section, section_line)?;
    Ok(config)
}

/// Parse section header like "glyph.smile" or `glyph."smile"`
fn parse_section_header(header: &str) -> Result<Section, ParseErrorKind> {
    let header = header.trim();
    let name = header
        .strip_prefix("glyph.")
        .ok_or(ParseErrorKind::UnknownSection)?
        .trim();
    let name = unquote(name).unwrap_or(name);

    if name.is_empty() {
        return Err(ParseErrorKind::Malformed);
    }

    let mut glyph = GlyphDefinition::default();
    glyph.name = HString::<MAX_LABEL_LEN>::try_from(name)
        .map_err(|_| ParseErrorKind::TooManyItems)?;
    Ok(Section::Glyph(glyph))
}

/// Store a finished section
fn save_section(
    config: &mut DisplayConfig,
    section: Section,
    line: usize,
) -> Result<(), ParseError> {
    match section {
        Section::Root => Ok(()),
        Section::Glyph(glyph) => config
            .glyphs
            .push(glyph)
            .map_err(|_| ParseError::new(line, ParseErrorKind::TooManyItems)),
    }
}

fn apply_root(config: &mut DisplayConfig, key: &str, value: &str) -> Result<(), ParseErrorKind> {
    match key {
        "data_pin" => config.data_pin = Some(parse_int(value)?),
        "clock_pin" => config.clock_pin = Some(parse_int(value)?),
        "load_pin" => config.load_pin = Some(parse_int(value)?),
        "reset_pin" => config.reset_pin = Some(parse_int(value)?),
        "update_interval_ms" => config.update_interval_ms = parse_int(value)?,
        "brightness" => config.brightness = Some(parse_int(value)?),
        "reduce_peak_current" => config.reduce_peak_current = Some(parse_bool(value)?),
        _ => return Err(ParseErrorKind::UnknownKey),
    }
    Ok(())
}

fn apply_glyph(glyph: &mut GlyphDefinition, key: &str, value: &str) -> Result<(), ParseErrorKind> {
    match key {
        "char" => {
            let text = unquote(value).ok_or(ParseErrorKind::InvalidValue)?;
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => glyph.character = Some(ch),
                _ => return Err(ParseErrorKind::InvalidValue),
            }
        }
        "rows" => {
            glyph.rows.clear();
            glyph.extra_rows = 0;
            glyph.overlong_row = None;
            // Oversized input is recorded, not rejected, so validation
            // can report the real row count or length
            for (index, row) in StringArray::new(value)?.enumerate() {
                let row = row?;
                let stored = HString::try_from(row).unwrap_or_else(|_| {
                    glyph
                        .overlong_row
                        .get_or_insert((index, row.chars().count()));
                    HString::new()
                });
                if glyph.rows.push(stored).is_err() {
                    glyph.extra_rows += 1;
                }
            }
        }
        _ => return Err(ParseErrorKind::UnknownKey),
    }
    Ok(())
}

/// Drop a trailing `# comment` that is not inside a string
fn strip_comment(line: &str) -> &str {
    let mut in_string = false;
    for (i, ch) in line.char_indices() {
        match ch {
            '"' => in_string = !in_string,
            '#' if !in_string => return &line[..i],
            _ => {}
        }
    }
    line
}

/// Split "key = value"
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some((key, value))
}

fn parse_int<T: TryFrom<i64>>(value: &str) -> Result<T, ParseErrorKind> {
    let n: i64 = value.parse().map_err(|_| ParseErrorKind::InvalidValue)?;
    T::try_from(n).map_err(|_| ParseErrorKind::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ParseErrorKind> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ParseErrorKind::InvalidValue),
    }
}

/// Contents of a `"quoted"` string
fn unquote(value: &str) -> Option<&str> {
    let inner = value.strip_prefix('"')?.strip_suffix('"')?;
    if inner.contains('"') {
        None
    } else {
        Some(inner)
    }
}

/// Iterator over the strings of `["a", "b", ...]`
struct StringArray<'a> {
    rest: &'a str,
    done: bool,
}

impl<'a> StringArray<'a> {
    fn new(value: &'a str) -> Result<Self, ParseErrorKind> {
        let inner = value
            .strip_prefix('[')
            .and_then(|v| v.strip_suffix(']'))
            .ok_or(ParseErrorKind::InvalidValue)?
            .trim();
        Ok(Self {
            rest: inner,
            done: inner.is_empty(),
        })
    }
}

impl<'a> Iterator for StringArray<'a> {
    type Item = Result<&'a str, ParseErrorKind>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let item = self.rest.strip_prefix('"').and_then(|after| {
            let end = after.find('"')?;
            Some((&after[..end], after[end + 1..].trim_start()))
        });

        let Some((item, rest)) = item else {
            self.done = true;
            return Some(Err(ParseErrorKind::InvalidValue));
        };

        if rest.is_empty() {
            self.done = true;
        } else if let Some(after_comma) = rest.strip_prefix(',') {
            self.rest = after_comma.trim_start();
            // trailing comma
            self.done = self.rest.is_empty();
        } else {
            self.done = true;
            return Some(Err(ParseErrorKind::InvalidValue));
        }

        Some(Ok(item))
    }
}
