//! MC6847 colour palette.
//!
//! The chip generates nine colours: eight saturated hues for graphics and
//! semigraphics plus black. Alphanumerics use a dark-green background with
//! light-green text (the classic look of every MC6847 machine).

/// One RGBA pixel.
pub type Rgba = [u8; 4];

pub const BLACK: Rgba = [0x00, 0x00, 0x00, 0xFF];
pub const GREEN: Rgba = [0x00, 0xFF, 0x00, 0xFF];
pub const YELLOW: Rgba = [0xFF, 0xFF, 0x00, 0xFF];
pub const BLUE: Rgba = [0x00, 0x00, 0xFF, 0xFF];
pub const RED: Rgba = [0xFF, 0x00, 0x00, 0xFF];
pub const BUFF: Rgba = [0xFF, 0xFF, 0xC8, 0xFF];
pub const CYAN: Rgba = [0x00, 0xFF, 0xFF, 0xFF];
pub const MAGENTA: Rgba = [0xFF, 0x00, 0xFF, 0xFF];
pub const ORANGE: Rgba = [0xFF, 0x80, 0x00, 0xFF];

/// Text foreground (lit glyph pixels).
pub const TEXT_LIGHT: Rgba = [0x00, 0xE0, 0x00, 0xFF];
/// Text background.
pub const TEXT_DARK: Rgba = [0x00, 0x28, 0x00, 0xFF];

/// Semigraphics palette. A cell lights its quadrants in a single colour;
/// the inverse bit selects between the green set and the buff set.
pub const SEMIGRAPHICS: [Rgba; 8] = [
    GREEN, YELLOW, BLUE, RED, BUFF, CYAN, MAGENTA, ORANGE,
];

/// Four-colour palette for 2-bit-per-pixel graphics modes.
pub const GRAPHICS_4: [Rgba; 4] = [GREEN, YELLOW, BLUE, RED];

/// Two-tone palette for 1-bit-per-pixel graphics modes.
pub const GRAPHICS_2: [Rgba; 2] = [BLACK, GREEN];
