//! INS8255 programmable peripheral interface (PIA).
//!
//! Standalone IC emulation with no dependencies, following the project's
//! chip-level library pattern. Three 8-bit ports plus a control register;
//! on Acorn's machine port A drives the keyboard column select and video
//! mode bits, port B reads the keyboard matrix, and port C mixes local
//! output bits with two externally driven status lines.
//!
//! # Registers (low address bits)
//!
//! | Port | Name    | Direction on this machine              |
//! |------|---------|----------------------------------------|
//! | 0    | Port A  | Output: column select + VDU mode bits  |
//! | 1    | Port B  | Input: keyboard matrix scan            |
//! | 2    | Port C  | Mixed: outputs low, status bits high   |
//! | 3    | Control | Mode register                          |
//!
//! The chip has no view of its siblings. Reads of port B and port C take
//! the externally observed values as arguments; the bus supplies them live
//! from the keyboard matrix and the VDU, which keeps chip ownership
//! acyclic. There is no hidden state beyond the four bytes.

/// Port C bit 7: field sync from the VDU (active low, pull-up otherwise).
pub const PORT_C_FIELD_SYNC: u8 = 0x80;
/// Port C bit 6: repeat key from the keyboard (active low, pull-up otherwise).
pub const PORT_C_REPEAT: u8 = 0x40;

/// Control register value established by the firmware at reset:
/// port A output, port B input, port C split upper-input/lower-output.
const CONTROL_RESET: u8 = 0x8A;
/// Port C value established at reset (PC0-PC2 high: tape and speaker lines).
const PORT_C_RESET: u8 = 0x07;

/// INS8255 programmable peripheral interface.
pub struct Ins8255 {
    /// Output latches for ports A, B, C.
    ports: [u8; 3],
    /// Mode/control register.
    control: u8,
}

impl Ins8255 {
    #[must_use]
    pub fn new() -> Self {
        let mut pia = Self {
            ports: [0; 3],
            control: 0,
        };
        pia.reset();
        pia
    }

    /// Hardware reset: restore the power-on register state.
    pub fn reset(&mut self) {
        self.ports = [0, 0, PORT_C_RESET];
        self.control = CONTROL_RESET;
    }

    /// Write a register. All ports latch the byte verbatim; port 3 is the
    /// control register.
    pub fn write(&mut self, port: u8, value: u8) {
        match port & 0x03 {
            p @ 0..=2 => self.ports[usize::from(p)] = value,
            _ => self.control = value,
        }
    }

    /// Read the port A latch (column select + video mode bits).
    #[must_use]
    pub fn read_port_a(&self) -> u8 {
        self.ports[0]
    }

    /// Read port B: the live keyboard scan for the column selected by
    /// port A. The caller computes `scan` from the keyboard matrix; the
    /// value is latched into port B and returned.
    pub fn read_port_b(&mut self, scan: u8) -> u8 {
        self.ports[1] = scan;
        scan
    }

    /// Read port C: the stored latch with bits 6 and 7 overridden by the
    /// live external lines. Both lines have pull-up semantics: the bit
    /// reads low while the source is active, high otherwise.
    #[must_use]
    pub fn read_port_c(&self, field_sync: bool, repeat_held: bool) -> u8 {
        let mut value = self.ports[2];
        if field_sync {
            value &= !PORT_C_FIELD_SYNC;
        } else {
            value |= PORT_C_FIELD_SYNC;
        }
        if repeat_held {
            value &= !PORT_C_REPEAT;
        } else {
            value |= PORT_C_REPEAT;
        }
        value
    }

    /// Read the control register.
    #[must_use]
    pub fn read_control(&self) -> u8 {
        self.control
    }
}

impl Default for Ins8255 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_a_latch_round_trips() {
        let mut pia = Ins8255::new();
        pia.write(0, 0x3A);
        assert_eq!(pia.read_port_a(), 0x3A);
    }

    #[test]
    fn port_b_read_latches_scan_value() {
        let mut pia = Ins8255::new();
        assert_eq!(pia.read_port_b(0xDF), 0xDF);
        // The latch now holds the scan byte.
        assert_eq!(pia.read_port_b(0xFF), 0xFF);
    }

    #[test]
    fn port_c_field_sync_overlay() {
        let mut pia = Ins8255::new();
        pia.write(2, 0x00);

        // During blanking the line is driven low.
        assert_eq!(pia.read_port_c(true, false) & PORT_C_FIELD_SYNC, 0);
        // Outside blanking the pull-up wins.
        assert_eq!(
            pia.read_port_c(false, false) & PORT_C_FIELD_SYNC,
            PORT_C_FIELD_SYNC
        );
    }

    #[test]
    fn port_c_repeat_overlay() {
        let pia = Ins8255::new();
        assert_eq!(pia.read_port_c(false, true) & PORT_C_REPEAT, 0);
        assert_eq!(pia.read_port_c(false, false) & PORT_C_REPEAT, PORT_C_REPEAT);
    }

    #[test]
    fn port_c_local_bits_survive_overlay() {
        let mut pia = Ins8255::new();
        pia.write(2, 0x2F);
        assert_eq!(pia.read_port_c(false, false) & 0x3F, 0x2F);
    }

    #[test]
    fn reset_restores_power_on_state() {
        let mut pia = Ins8255::new();
        pia.write(0, 0xFF);
        pia.write(3, 0x00);
        pia.reset();
        assert_eq!(pia.read_port_a(), 0);
        assert_eq!(pia.read_control(), 0x8A);
        assert_eq!(pia.read_port_c(false, false) & 0x0F, 0x07);
    }
}
