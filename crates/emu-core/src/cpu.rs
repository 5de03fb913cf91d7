//! CPU core collaborator trait.

use crate::Bus;

/// Register file snapshot of a 6502-class CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    /// Processor status flags (NV-BDIZC).
    pub p: u8,
}

/// A 6502-class CPU core.
///
/// The instruction decoder/executor lives outside this workspace; the
/// machine only needs this narrow surface. The core owns its cumulative
/// cycle counter, which is the master timebase for every peripheral
/// (FDC interrupt deadlines, VDU field sync, wall-clock pacing).
pub trait Cpu {
    /// Reset the CPU to its power-on state (vector fetch through the bus).
    fn reset<B: Bus>(&mut self, bus: &mut B);

    /// Execute exactly one instruction, advancing the cycle counter.
    fn execute_instruction<B: Bus>(&mut self, bus: &mut B);

    /// Cumulative cycle count since power-on. Monotonically increasing.
    fn cycles(&self) -> u64;

    /// Current program counter and stack pointer.
    fn pc_and_sp(&self) -> (u16, u8);

    /// Snapshot of A, X, Y and the status flags.
    fn registers(&self) -> Registers;

    /// Signal a non-maskable interrupt. Level-triggered into the core;
    /// the caller raises it once per event.
    fn nmi(&mut self);

    /// Enable or disable per-instruction trace output.
    fn set_trace(&mut self, enabled: bool);
}
