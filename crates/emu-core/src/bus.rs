//! Memory and I/O bus interface.

/// Memory bus interface.
///
/// The CPU reaches memory and every memory-mapped peripheral through this
/// trait. The bus handles address decoding and routing; both operations are
/// total — every 16-bit address resolves to something, even if that
/// something is "reads 0, writes discarded".
pub trait Bus {
    /// Read a byte from the given address.
    ///
    /// Peripheral register reads may have side effects (the FDC data port
    /// arms an interrupt, the PIA port B read latches the keyboard scan).
    fn read(&mut self, address: u16) -> u8;

    /// Write a byte to the given address.
    ///
    /// Writes to ROM and unmapped peripheral windows are discarded.
    fn write(&mut self, address: u16, value: u8);

    /// Read a byte for an instruction fetch.
    ///
    /// Identical to [`Bus::read`] on this hardware; a separate entry point
    /// so a CPU core that distinguishes fetch from data cycles can call it.
    fn read_for_fetch(&mut self, address: u16) -> u8 {
        self.read(address)
    }
}
