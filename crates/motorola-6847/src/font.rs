//! MC6847 internal character generator.
//!
//! 64 glyphs in the chip's own code order: `@`, `A`-`Z`, `[`, `\`, `]`,
//! up-arrow, left-arrow, then space and the figures/punctuation. Each glyph
//! is an 8-row pattern, one byte per row, pixels MSB-first; the 5×7 glyph
//! body sits in bits 6-2 of each byte.

/// Font patterns indexed by the low 6 bits of the character code.
pub const FONT: [[u8; 8]; 64] = [
    [0x38, 0x44, 0x04, 0x34, 0x54, 0x54, 0x38, 0x00], // 0x00 '@'
    [0x38, 0x44, 0x44, 0x7C, 0x44, 0x44, 0x44, 0x00], // 0x01 'A'
    [0x78, 0x44, 0x44, 0x78, 0x44, 0x44, 0x78, 0x00], // 0x02 'B'
    [0x38, 0x44, 0x40, 0x40, 0x40, 0x44, 0x38, 0x00], // 0x03 'C'
    [0x78, 0x44, 0x44, 0x44, 0x44, 0x44, 0x78, 0x00], // 0x04 'D'
    [0x7C, 0x40, 0x40, 0x78, 0x40, 0x40, 0x7C, 0x00], // 0x05 'E'
    [0x7C, 0x40, 0x40, 0x78, 0x40, 0x40, 0x40, 0x00], // 0x06 'F'
    [0x38, 0x44, 0x40, 0x5C, 0x44, 0x44, 0x3C, 0x00], // 0x07 'G'
    [0x44, 0x44, 0x44, 0x7C, 0x44, 0x44, 0x44, 0x00], // 0x08 'H'
    [0x38, 0x10, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00], // 0x09 'I'
    [0x1C, 0x08, 0x08, 0x08, 0x08, 0x48, 0x30, 0x00], // 0x0A 'J'
    [0x44, 0x48, 0x50, 0x60, 0x50, 0x48, 0x44, 0x00], // 0x0B 'K'
    [0x40, 0x40, 0x40, 0x40, 0x40, 0x40, 0x7C, 0x00], // 0x0C 'L'
    [0x44, 0x6C, 0x54, 0x54, 0x44, 0x44, 0x44, 0x00], // 0x0D 'M'
    [0x44, 0x64, 0x54, 0x4C, 0x44, 0x44, 0x44, 0x00], // 0x0E 'N'
    [0x38, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00], // 0x0F 'O'
    [0x78, 0x44, 0x44, 0x78, 0x40, 0x40, 0x40, 0x00], // 0x10 'P'
    [0x38, 0x44, 0x44, 0x44, 0x54, 0x48, 0x34, 0x00], // 0x11 'Q'
    [0x78, 0x44, 0x44, 0x78, 0x50, 0x48, 0x44, 0x00], // 0x12 'R'
    [0x3C, 0x40, 0x40, 0x38, 0x04, 0x04, 0x78, 0x00], // 0x13 'S'
    [0x7C, 0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x00], // 0x14 'T'
    [0x44, 0x44, 0x44, 0x44, 0x44, 0x44, 0x38, 0x00], // 0x15 'U'
    [0x44, 0x44, 0x44, 0x44, 0x44, 0x28, 0x10, 0x00], // 0x16 'V'
    [0x44, 0x44, 0x44, 0x54, 0x54, 0x54, 0x28, 0x00], // 0x17 'W'
    [0x44, 0x44, 0x28, 0x10, 0x28, 0x44, 0x44, 0x00], // 0x18 'X'
    [0x44, 0x44, 0x28, 0x10, 0x10, 0x10, 0x10, 0x00], // 0x19 'Y'
    [0x7C, 0x04, 0x08, 0x10, 0x20, 0x40, 0x7C, 0x00], // 0x1A 'Z'
    [0x38, 0x20, 0x20, 0x20, 0x20, 0x20, 0x38, 0x00], // 0x1B '['
    [0x00, 0x40, 0x20, 0x10, 0x08, 0x04, 0x00, 0x00], // 0x1C '\'
    [0x38, 0x08, 0x08, 0x08, 0x08, 0x08, 0x38, 0x00], // 0x1D ']'
    [0x10, 0x38, 0x54, 0x10, 0x10, 0x10, 0x10, 0x00], // 0x1E up arrow
    [0x00, 0x10, 0x20, 0x7C, 0x20, 0x10, 0x00, 0x00], // 0x1F left arrow
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x20 ' '
    [0x10, 0x10, 0x10, 0x10, 0x10, 0x00, 0x10, 0x00], // 0x21 '!'
    [0x28, 0x28, 0x28, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x22 '"'
    [0x28, 0x28, 0x7C, 0x28, 0x7C, 0x28, 0x28, 0x00], // 0x23 '#'
    [0x10, 0x3C, 0x50, 0x38, 0x14, 0x78, 0x10, 0x00], // 0x24 '$'
    [0x60, 0x64, 0x08, 0x10, 0x20, 0x4C, 0x0C, 0x00], // 0x25 '%'
    [0x20, 0x50, 0x50, 0x20, 0x54, 0x48, 0x34, 0x00], // 0x26 '&'
    [0x10, 0x10, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00], // 0x27 '\''
    [0x08, 0x10, 0x20, 0x20, 0x20, 0x10, 0x08, 0x00], // 0x28 '('
    [0x20, 0x10, 0x08, 0x08, 0x08, 0x10, 0x20, 0x00], // 0x29 ')'
    [0x00, 0x10, 0x54, 0x38, 0x54, 0x10, 0x00, 0x00], // 0x2A '*'
    [0x00, 0x10, 0x10, 0x7C, 0x10, 0x10, 0x00, 0x00], // 0x2B '+'
    [0x00, 0x00, 0x00, 0x00, 0x10, 0x10, 0x20, 0x00], // 0x2C ','
    [0x00, 0x00, 0x00, 0x7C, 0x00, 0x00, 0x00, 0x00], // 0x2D '-'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00], // 0x2E '.'
    [0x00, 0x04, 0x08, 0x10, 0x20, 0x40, 0x00, 0x00], // 0x2F '/'
    [0x38, 0x44, 0x4C, 0x54, 0x64, 0x44, 0x38, 0x00], // 0x30 '0'
    [0x10, 0x30, 0x10, 0x10, 0x10, 0x10, 0x38, 0x00], // 0x31 '1'
    [0x38, 0x44, 0x04, 0x18, 0x20, 0x40, 0x7C, 0x00], // 0x32 '2'
    [0x7C, 0x04, 0x08, 0x18, 0x04, 0x44, 0x38, 0x00], // 0x33 '3'
    [0x08, 0x18, 0x28, 0x48, 0x7C, 0x08, 0x08, 0x00], // 0x34 '4'
    [0x7C, 0x40, 0x78, 0x04, 0x04, 0x44, 0x38, 0x00], // 0x35 '5'
    [0x18, 0x20, 0x40, 0x78, 0x44, 0x44, 0x38, 0x00], // 0x36 '6'
    [0x7C, 0x04, 0x08, 0x10, 0x20, 0x20, 0x20, 0x00], // 0x37 '7'
    [0x38, 0x44, 0x44, 0x38, 0x44, 0x44, 0x38, 0x00], // 0x38 '8'
    [0x38, 0x44, 0x44, 0x3C, 0x04, 0x08, 0x30, 0x00], // 0x39 '9'
    [0x00, 0x10, 0x00, 0x00, 0x10, 0x00, 0x00, 0x00], // 0x3A ':'
    [0x00, 0x10, 0x00, 0x00, 0x10, 0x10, 0x20, 0x00], // 0x3B ';'
    [0x08, 0x10, 0x20, 0x40, 0x20, 0x10, 0x08, 0x00], // 0x3C '<'
    [0x00, 0x00, 0x7C, 0x00, 0x7C, 0x00, 0x00, 0x00], // 0x3D '='
    [0x20, 0x10, 0x08, 0x04, 0x08, 0x10, 0x20, 0x00], // 0x3E '>'
    [0x38, 0x44, 0x04, 0x08, 0x10, 0x00, 0x10, 0x00], // 0x3F '?'
];
