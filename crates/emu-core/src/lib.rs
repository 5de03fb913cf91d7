//! Core traits for cycle-counted emulation.
//!
//! The CPU core is a collaborator, not part of this workspace: anything that
//! implements [`Cpu`] and counts its own cycles can drive the machine. All
//! peripheral timing derives from the CPU's cumulative cycle count.

mod bus;
mod cpu;

pub use bus::Bus;
pub use cpu::{Cpu, Registers};
