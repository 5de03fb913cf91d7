//! Atom bus: memory map and I/O routing.
//!
//! The bus owns RAM, ROM, and the three peripheral chips, and routes every
//! CPU access. Decoding is a fixed property of the board; first match wins:
//!
//! | Window            | Decode                      | Target              |
//! |-------------------|-----------------------------|---------------------|
//! | `$0A00-$0AFF`     | `addr & $FF00 == $0A00`     | FDC (3 address bits)|
//! | `$0000-$9FFF`     | `addr < $A000`              | RAM                 |
//! | `$B000-$B7FF`     | `addr & $F800 == $B000`     | PIA (2 address bits)|
//! | `$B800-$BFFF`     | `addr & $F800 == $B800`     | 6522 VIA socket: not|
//! |                   |                             | fitted, reads 0     |
//! | everything else   |                             | ROM                 |
//!
//! Every address resolves; there is no such thing as a bus fault. The FDC
//! window shadows the RAM page underneath it, exactly as on the real board.
//!
//! The bus latches the CPU's cycle count once per scheduler iteration.
//! The FDC uses it to arm interrupt deadlines and the PIA's port C read
//! uses it to derive the VDU's field-sync line.

use emu_core::Bus;
use intel_8271::Fdc8271;
use ins_8255::Ins8255;

use crate::keyboard::Keyboard;

/// First ROM address; everything below is RAM (less the FDC window).
pub const ROM_BASE: u16 = 0xA000;
/// Video memory base: the VDU fetches from this fixed address.
pub const VRAM_BASE: u16 = 0x8000;

const FDC_PAGE: u16 = 0x0A00;
const PIA_WINDOW: u16 = 0xB000;
const VIA_WINDOW: u16 = 0xB800;

const RAM_SIZE: usize = ROM_BASE as usize;
const ROM_SIZE: usize = 0x10000 - ROM_BASE as usize;

/// The Atom bus, implementing `emu_core::Bus`.
pub struct AtomBus {
    ram: Vec<u8>,
    rom: Vec<u8>,
    pub fdc: Fdc8271,
    pub pia: Ins8255,
    pub keyboard: Keyboard,
    /// CPU cycle count, latched by the scheduler each iteration.
    cycles: u64,
    /// Log peripheral-window traffic to stderr.
    trace_io: bool,
}

impl AtomBus {
    /// Create a bus around an assembled ROM region (`$A000-$FFFF`,
    /// see [`crate::RomSet::assemble`]). RAM starts zeroed.
    #[must_use]
    pub fn new(rom: Vec<u8>) -> Self {
        debug_assert_eq!(rom.len(), ROM_SIZE);
        Self {
            ram: vec![0; RAM_SIZE],
            rom,
            fdc: Fdc8271::new(),
            pia: Ins8255::new(),
            keyboard: Keyboard::new(),
            cycles: 0,
            trace_io: false,
        }
    }

    /// Latch the CPU's cycle count for this scheduler iteration.
    pub fn set_cycles(&mut self, cycles: u64) {
        self.cycles = cycles;
    }

    /// The latched cycle count.
    #[must_use]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn set_trace_io(&mut self, enabled: bool) {
        self.trace_io = enabled;
    }

    /// The VDU's view of memory, starting at its fetch base.
    #[must_use]
    pub fn vram(&self) -> &[u8] {
        &self.ram[VRAM_BASE as usize..]
    }

    /// Non-destructive memory read for debuggers and tests: RAM/ROM only,
    /// peripheral windows read as 0 with no side effects.
    #[must_use]
    pub fn peek(&self, address: u16) -> u8 {
        if address & 0xFF00 == FDC_PAGE || address & 0xF000 == 0xB000 {
            0
        } else if address < ROM_BASE {
            self.ram[usize::from(address)]
        } else {
            self.rom[usize::from(address - ROM_BASE)]
        }
    }

    fn read_pia(&mut self, port: u8) -> u8 {
        match port {
            0 => self.pia.read_port_a(),
            1 => {
                let scan = self.keyboard.scan_column(self.pia.read_port_a());
                self.pia.read_port_b(scan)
            }
            2 => self.pia.read_port_c(
                motorola_6847::field_sync(self.cycles),
                self.keyboard.repeat_held(),
            ),
            _ => self.pia.read_control(),
        }
    }
}

impl Bus for AtomBus {
    fn read(&mut self, address: u16) -> u8 {
        if address & 0xFF00 == FDC_PAGE {
            let port = (address & 0x07) as u8;
            self.fdc.read(port, self.cycles)
        } else if address < ROM_BASE {
            self.ram[usize::from(address)]
        } else if address & 0xF800 == PIA_WINDOW {
            self.read_pia((address & 0x03) as u8)
        } else if address & 0xF800 == VIA_WINDOW {
            if self.trace_io {
                eprintln!("[VIA] read {address:04X} (not fitted)");
            }
            0x00
        } else {
            self.rom[usize::from(address - ROM_BASE)]
        }
    }

    fn write(&mut self, address: u16, value: u8) {
        if address & 0xFF00 == FDC_PAGE {
            let port = (address & 0x07) as u8;
            self.fdc.write(port, value, self.cycles);
        } else if address < ROM_BASE {
            self.ram[usize::from(address)] = value;
        } else if address & 0xF800 == PIA_WINDOW {
            self.pia.write((address & 0x03) as u8, value);
        } else if address & 0xF800 == VIA_WINDOW {
            if self.trace_io {
                eprintln!("[VIA] write {address:04X} = {value:02X} (not fitted)");
            }
        } else {
            // ROM: writes discarded.
        }
    }
}
