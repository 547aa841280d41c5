//! Built-in 5x7 font covering printable ASCII (0x20..=0x7E)

use crate::glyph::{Glyph, ROWS};

/// First character in the table
pub const FIRST: char = ' ';

/// Last character in the table
pub const LAST: char = '~';

const fn g(rows: [u8; ROWS]) -> Glyph {
    Glyph::from_masked(rows)
}

/// Glyphs indexed by `c as usize - 0x20`
pub static GLYPHS: [Glyph; 95] = [
    g([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000]), // space
    g([0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100]), // '!'
    g([0b01010, 0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000]), // '"'
    g([0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010]), // '#'
    g([0b00100, 0b01111, 0b10100, 0b01110, 0b00101, 0b11110, 0b00100]), // '$'
    g([0b11000, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b00011]), // '%'
    g([0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101]), // '&'
    g([0b01100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000]), // '\''
    g([0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010]), // '('
    g([0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000]), // ')'
    g([0b00000, 0b01010, 0b00100, 0b11111, 0b00100, 0b01010, 0b00000]), // '*'
    g([0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000]), // '+'
    g([0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000]), // ','
    g([0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000]), // '-'
    g([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100]), // '.'
    g([0b00000, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b00000]), // '/'
    g([0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]), // '0'
    g([0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]), // '1'
    g([0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]), // '2'
    g([0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]), // '3'
    g([0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]), // '4'
    g([0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]), // '5'
    g([0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]), // '6'
    g([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]), // '7'
    g([0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]), // '8'
    g([0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]), // '9'
    g([0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000]), // ':'
    g([0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b00100, 0b01000]), // ';'
    g([0b00001, 0b00010, 0b00100, 0b01000, 0b00100, 0b00010, 0b00001]), // '<'
    g([0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000]), // '='
    g([0b10000, 0b01000, 0b00100, 0b00010, 0b00100, 0b01000, 0b10000]), // '>'
    g([0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100]), // '?'
    g([0b01110, 0b10001, 0b00001, 0b01101, 0b10101, 0b10101, 0b01110]), // '@'
    g([0b01110, 0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001]), // 'A'
    g([0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]), // 'B'
    g([0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]), // 'C'
    g([0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100]), // 'D'
    g([0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]), // 'E'
    g([0b11111, 0b10000, 0b10000, 0b11100, 0b10000, 0b10000, 0b10000]), // 'F'
    g([0b01110, 0b10001, 0b10000, 0b10000, 0b10011, 0b10001, 0b01110]), // 'G'
    g([0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]), // 'H'
    g([0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]), // 'I'
    g([0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]), // 'J'
    g([0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]), // 'K'
    g([0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]), // 'L'
    g([0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001]), // 'M'
    g([0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001]), // 'N'
    g([0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]), // 'O'
    g([0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]), // 'P'
    g([0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]), // 'Q'
    g([0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]), // 'R'
    g([0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]), // 'S'
    g([0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]), // 'T'
    g([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]), // 'U'
    g([0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]), // 'V'
    g([0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b11011, 0b10001]), // 'W'
    g([0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]), // 'X'
    g([0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100]), // 'Y'
    g([0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]), // 'Z'
    g([0b00111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00111]), // '['
    g([0b00000, 0b10000, 0b01000, 0b00100, 0b00010, 0b00001, 0b00000]), // '\\'
    g([0b11100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11100]), // ']'
    g([0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000]), // '^'
    g([0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111]), // '_'
    g([0b01000, 0b00100, 0b00010, 0b00000, 0b00000, 0b00000, 0b00000]), // '`'
    g([0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111]), // 'a'
    g([0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110]), // 'b'
    g([0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110]), // 'c'
    g([0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111]), // 'd'
    g([0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110]), // 'e'
    g([0b00110, 0b01001, 0b01000, 0b11100, 0b01000, 0b01000, 0b01000]), // 'f'
    g([0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110]), // 'g'
    g([0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001]), // 'h'
    g([0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110]), // 'i'
    g([0b00010, 0b00000, 0b00110, 0b00010, 0b00010, 0b10010, 0b01100]), // 'j'
    g([0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010]), // 'k'
    g([0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110]), // 'l'
    g([0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001]), // 'm'
    g([0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001]), // 'n'
    g([0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110]), // 'o'
    g([0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000]), // 'p'
    g([0b00000, 0b00000, 0b01101, 0b10011, 0b01111, 0b00001, 0b00001]), // 'q'
    g([0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000]), // 'r'
    g([0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110]), // 's'
    g([0b01000, 0b01000, 0b11100, 0b01000, 0b01000, 0b01001, 0b00110]), // 't'
    g([0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101]), // 'u'
    g([0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]), // 'v'
    g([0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010]), // 'w'
    g([0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001]), // 'x'
    g([0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110]), // 'y'
    g([0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111]), // 'z'
    g([0b00010, 0b00100, 0b00100, 0b01000, 0b00100, 0b00100, 0b00010]), // '{'
    g([0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]), // '|'
    g([0b01000, 0b00100, 0b00100, 0b00010, 0b00100, 0b00100, 0b01000]), // '}'
    g([0b00000, 0b00000, 0b01000, 0b10101, 0b00010, 0b00000, 0b00000]), // '~'
];
