//! Motorola MC6847 video display generator.
//!
//! Standalone IC emulation with no dependencies, following the project's
//! chip-level library pattern. The chip has no registers of its own: its
//! mode pins are driven from the PIA's port A and it fetches display data
//! straight from system memory. Emulation is therefore two pure functions:
//!
//! - [`field_sync`]: the FS output, derived from the CPU's cumulative cycle
//!   count alone. 262 lines per 60 Hz frame, 70 of them blanking; FS is
//!   asserted during the blanking period.
//! - [`snapshot`]: synthesize the full 256×192 raster from the current
//!   contents of video memory and the mode bits. No caching, no dirty
//!   tracking; every call renders from scratch.
//!
//! # Mode selection (port A)
//!
//! | Bits | Meaning                                   |
//! |------|-------------------------------------------|
//! | 4    | 0 = alphanumeric/semigraphics, 1 = graphics |
//! | 5-7  | Graphics submode (see `GRAPHICS_MODES`)   |
//!
//! In alphanumeric mode each character byte uses bit 7 for inverse video
//! and bit 6 to select a semigraphics cell instead of a glyph.

pub mod font;
pub mod palette;

use font::FONT;
use palette::{
    GRAPHICS_2, GRAPHICS_4, Rgba, SEMIGRAPHICS, TEXT_DARK, TEXT_LIGHT,
};

/// Output raster width in pixels.
pub const WIDTH: usize = 256;
/// Output raster height in pixels.
pub const HEIGHT: usize = 192;

/// CPU cycles per 60 Hz frame (1 MHz part).
const CYCLES_PER_FRAME: u64 = 1_000_000 / 60;
/// Cycles of the frame spent in vertical blanking (70 of 262 lines).
const CYCLES_PER_FRAME_BLANKING: u64 = CYCLES_PER_FRAME * 70 / 262;

/// Graphics submodes selected by port A bits 5-7:
/// (columns, lines, colour bits per pixel).
const GRAPHICS_MODES: [(usize, usize, usize); 8] = [
    (64, 64, 2),
    (128, 64, 1),
    (128, 64, 2),
    (128, 96, 1),
    (128, 96, 2),
    (128, 192, 1),
    (128, 192, 2),
    (256, 192, 1),
];

/// A freshly rendered raster frame, RGBA8, row-major.
pub struct Frame {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl Frame {
    fn new() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            pixels: vec![0; WIDTH * HEIGHT * 4],
        }
    }

    fn set(&mut self, x: usize, y: usize, colour: Rgba) {
        let offset = (y * self.width + x) * 4;
        self.pixels[offset..offset + 4].copy_from_slice(&colour);
    }

    /// The RGBA pixel at (x, y), for inspection.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        let offset = (y * self.width + x) * 4;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
            self.pixels[offset + 3],
        ]
    }
}

/// Field sync output: true during the vertical blanking period.
///
/// Pure function of the CPU's cumulative cycle count; the blanking window
/// is the first 70/262 of each frame period.
#[must_use]
pub fn field_sync(cycles: u64) -> bool {
    cycles % CYCLES_PER_FRAME < CYCLES_PER_FRAME_BLANKING
}

/// Render the current video memory into a fresh 256×192 RGBA frame.
///
/// `vram` is the display region of system memory, starting at the chip's
/// fetch base; `port_a` supplies the mode bits. Reads past the end of the
/// slice see zero, matching an open bus.
#[must_use]
pub fn snapshot(vram: &[u8], port_a: u8) -> Frame {
    let mut frame = Frame::new();
    if port_a & 0x10 == 0 {
        render_alphanumeric(vram, &mut frame);
    } else {
        let submode = usize::from(port_a >> 5) & 0x07;
        render_graphics(vram, submode, &mut frame);
    }
    frame
}

fn fetch(vram: &[u8], addr: usize) -> u8 {
    vram.get(addr).copied().unwrap_or(0)
}

/// Alphanumeric/semigraphics path: 32×16 cells of 8×12 pixels.
fn render_alphanumeric(vram: &[u8], frame: &mut Frame) {
    for cell_y in 0..16 {
        for cell_x in 0..32 {
            let ch = fetch(vram, cell_y * 32 + cell_x);
            let inverse = ch & 0x80 != 0;
            if ch & 0x40 != 0 {
                render_semigraphics_cell(frame, cell_x, cell_y, ch, inverse);
            } else {
                render_glyph_cell(frame, cell_x, cell_y, ch & 0x3F, inverse);
            }
        }
    }
}

/// One glyph cell. The font holds 8 pattern rows, drawn in character lines
/// 2-9 of the 12-line cell; the remaining lines are background. Each
/// pattern bit XORs with the inverse flag to pick light or dark.
fn render_glyph_cell(frame: &mut Frame, cell_x: usize, cell_y: usize, code: u8, inverse: bool) {
    for char_line in 0..12 {
        let pattern = if (2..10).contains(&char_line) {
            FONT[usize::from(code)][char_line - 2]
        } else {
            0
        };
        for bit in 0..8 {
            let lit = (pattern >> (7 - bit)) & 1 != 0;
            let colour = if lit ^ inverse { TEXT_LIGHT } else { TEXT_DARK };
            frame.set(cell_x * 8 + bit, cell_y * 12 + char_line, colour);
        }
    }
}

/// One semigraphics cell: 2 columns × 3 rows of 4×4-pixel blocks, lit from
/// bits 5-0 of the character. Block row r takes its pair of bits at shift
/// `2×(2−r)`, high bit = left block. Lit blocks use a single palette entry
/// per cell, selected by the inverse bit; unlit blocks are black.
fn render_semigraphics_cell(frame: &mut Frame, cell_x: usize, cell_y: usize, ch: u8, inverse: bool) {
    let lit_colour = SEMIGRAPHICS[if inverse { 4 } else { 0 }];
    for char_line in 0..12 {
        let shift = 2 * (2 - char_line / 4);
        for bit in 0..8 {
            let block_bit = if bit < 4 { shift + 1 } else { shift };
            let lit = (ch >> block_bit) & 1 != 0;
            let colour = if lit { lit_colour } else { palette::BLACK };
            frame.set(cell_x * 8 + bit, cell_y * 12 + char_line, colour);
        }
    }
}

/// Graphics path: sequential bytes, MSB-first pixels, replicated into
/// (256/columns)×(192/lines) blocks of the output raster.
fn render_graphics(vram: &[u8], submode: usize, frame: &mut Frame) {
    let (columns, lines, colour_bits) = GRAPHICS_MODES[submode];
    let pixels_per_byte = 8 / colour_bits;
    let scale_x = WIDTH / columns;
    let scale_y = HEIGHT / lines;
    let bytes_per_line = columns / pixels_per_byte;

    for line in 0..lines {
        for byte_col in 0..bytes_per_line {
            let byte = fetch(vram, line * bytes_per_line + byte_col);
            for p in 0..pixels_per_byte {
                let colour = if colour_bits == 1 {
                    GRAPHICS_2[usize::from((byte >> (7 - p)) & 0x01)]
                } else {
                    GRAPHICS_4[usize::from((byte >> (6 - 2 * p)) & 0x03)]
                };
                let px = (byte_col * pixels_per_byte + p) * scale_x;
                let py = line * scale_y;
                for dy in 0..scale_y {
                    for dx in 0..scale_x {
                        frame.set(px + dx, py + dy, colour);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_sync_window() {
        assert!(field_sync(0), "frame start is inside blanking");
        assert!(field_sync(CYCLES_PER_FRAME_BLANKING - 1));
        assert!(!field_sync(CYCLES_PER_FRAME_BLANKING));
        assert!(!field_sync(CYCLES_PER_FRAME - 1));
        assert!(field_sync(CYCLES_PER_FRAME), "next frame wraps into blanking");
    }

    #[test]
    fn field_sync_is_pure_in_cycle_count() {
        for offset in [0, 100, CYCLES_PER_FRAME_BLANKING, 12_345] {
            assert_eq!(
                field_sync(offset),
                field_sync(offset + 50 * CYCLES_PER_FRAME)
            );
        }
    }

    #[test]
    fn frame_dimensions() {
        let frame = snapshot(&[0x20; 512], 0x00);
        assert_eq!(frame.width, 256);
        assert_eq!(frame.height, 192);
        assert_eq!(frame.pixels.len(), 256 * 192 * 4);
    }

    #[test]
    fn inverse_glyph_is_pixel_complement() {
        // 'A' (code 0x01) normal in cell 0, inverse in cell 1.
        let mut vram = vec![0x20u8; 512];
        vram[0] = 0x01;
        vram[1] = 0x81;
        let frame = snapshot(&vram, 0x00);

        for y in 0..12 {
            for x in 0..8 {
                let normal = frame.pixel(x, y);
                let inverted = frame.pixel(8 + x, y);
                assert_ne!(
                    normal, inverted,
                    "({x},{y}): inverse must complement every pixel"
                );
            }
        }
    }

    #[test]
    fn blank_cell_renders_background() {
        let frame = snapshot(&[0x20; 512], 0x00);
        assert_eq!(frame.pixel(0, 0), TEXT_DARK);
        assert_eq!(frame.pixel(255, 191), TEXT_DARK);
    }

    #[test]
    fn semigraphics_blocks_follow_bit_pairs() {
        // Bit 5 lights the top-left block, bit 0 the bottom-right.
        let mut vram = vec![0x20u8; 512];
        vram[0] = 0x40 | 0b10_00_01;
        let frame = snapshot(&vram, 0x00);

        let lit = SEMIGRAPHICS[0];
        assert_eq!(frame.pixel(0, 0), lit, "top-left block lit");
        assert_eq!(frame.pixel(4, 0), palette::BLACK, "top-right block dark");
        assert_eq!(frame.pixel(0, 11), palette::BLACK, "bottom-left block dark");
        assert_eq!(frame.pixel(7, 11), lit, "bottom-right block lit");
    }

    #[test]
    fn semigraphics_inverse_selects_other_colour() {
        let mut vram = vec![0x20u8; 512];
        vram[0] = 0x40 | 0x3F;
        vram[1] = 0xC0 | 0x3F;
        let frame = snapshot(&vram, 0x00);
        assert_eq!(frame.pixel(0, 0), SEMIGRAPHICS[0]);
        assert_eq!(frame.pixel(8, 0), SEMIGRAPHICS[4]);
    }

    #[test]
    fn graphics_mode_bitmask_not_equality() {
        // Any port A value with bit 4 set selects graphics, regardless of
        // the other low bits (keyboard column select shares the latch).
        let vram = vec![0xFFu8; 0x1800];
        let frame = snapshot(&vram, 0x10 | 0x05);
        // Submode 0 (64×64@2bpp): $FF decodes to colour index 3 throughout.
        assert_eq!(frame.pixel(0, 0), GRAPHICS_4[3]);
    }

    #[test]
    fn highest_resolution_mode_maps_one_to_one() {
        // Submode 7: 256×192 at 1bpp. First byte $A5 = pixels 10100101.
        let mut vram = vec![0u8; 0x1800];
        vram[0] = 0xA5;
        let frame = snapshot(&vram, 0x10 | 0xE0);
        let expect = [1, 0, 1, 0, 0, 1, 0, 1];
        for (x, &bit) in expect.iter().enumerate() {
            assert_eq!(frame.pixel(x, 0), GRAPHICS_2[bit], "pixel {x}");
        }
    }

    #[test]
    fn low_resolution_mode_replicates_pixels() {
        // Submode 0: 64×64 at 2bpp → every logical pixel is a 4×3 block.
        // First byte $1B = pixels 00 01 10 11.
        let mut vram = vec![0u8; 0x1800];
        vram[0] = 0x1B;
        let frame = snapshot(&vram, 0x10);
        for dx in 0..4 {
            for dy in 0..3 {
                assert_eq!(frame.pixel(dx, dy), GRAPHICS_4[0]);
                assert_eq!(frame.pixel(4 + dx, dy), GRAPHICS_4[1]);
                assert_eq!(frame.pixel(8 + dx, dy), GRAPHICS_4[2]);
                assert_eq!(frame.pixel(12 + dx, dy), GRAPHICS_4[3]);
            }
        }
    }

    #[test]
    fn short_vram_reads_as_zero() {
        let frame = snapshot(&[], 0x10 | 0xE0);
        assert_eq!(frame.pixel(128, 96), GRAPHICS_2[0]);
    }
}
