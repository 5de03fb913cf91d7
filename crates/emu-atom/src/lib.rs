//! Acorn Atom emulator.
//!
//! The machine is a 1 MHz 6502 surrounded by four chips: an INS8255 PIA
//! (keyboard columns, video mode bits, status lines), an MC6847 VDU, an
//! Intel 8271 floppy controller, and the keyboard matrix itself. This crate
//! wires those chips onto the memory bus and runs the instruction-at-a-time
//! scheduler that keeps emulated cycles aligned with wall-clock time.
//!
//! The CPU core is a collaborator supplied by the embedder through
//! [`emu_core::Cpu`]; everything else lives here.

mod atom;
mod bus;
pub mod capture;
mod config;
pub mod input;
mod keyboard;
mod pacing;
pub mod rom;

pub use atom::Atom;
pub use bus::{AtomBus, ROM_BASE, VRAM_BASE};
pub use config::AtomConfig;
pub use input::{KeyEvent, KeySender, RELEASE_OFFSET};
pub use keyboard::{AtomKey, KEY_COUNT, Keyboard};
pub use pacing::{PaceAction, Pacer};
pub use rom::{RomError, RomSet};
