//! The Atom machine: scheduler tying CPU, bus, and peripherals together.

use emu_core::Cpu;
use motorola_6847::Frame;

use crate::bus::AtomBus;
use crate::config::AtomConfig;
use crate::input::KeySender;
use crate::pacing::{CHECK_INTERVAL, Pacer};

/// An Acorn Atom built around any CPU core implementing [`emu_core::Cpu`].
pub struct Atom<C: Cpu> {
    pub cpu: C,
    pub bus: AtomBus,
    /// Break key state at the previous step, for edge detection.
    break_was_down: bool,
}

impl<C: Cpu> Atom<C> {
    /// Build a machine from a configuration and reset the CPU through the
    /// kernel's reset vector.
    pub fn new(mut cpu: C, config: AtomConfig) -> Self {
        let mut bus = AtomBus::new(config.roms.assemble());
        if let Some(disk) = config.disk {
            bus.fdc.insert_disk(disk.into_bytes());
        }
        bus.set_trace_io(config.trace_io);
        cpu.reset(&mut bus);
        Self {
            cpu,
            bus,
            break_was_down: false,
        }
    }

    /// Toggle peripheral-window I/O tracing.
    pub fn set_trace_io(&mut self, enabled: bool) {
        self.bus.set_trace_io(enabled);
    }

    /// Toggle per-instruction CPU tracing.
    pub fn set_trace_cpu(&mut self, enabled: bool) {
        self.cpu.set_trace(enabled);
    }

    /// A handle the UI thread uses to inject key events.
    #[must_use]
    pub fn key_sender(&self) -> KeySender {
        self.bus.keyboard.sender()
    }

    /// Run one scheduler iteration: drain input, advance the FDC and
    /// deliver any pending interrupt, check the Break key, then execute
    /// one instruction.
    pub fn step(&mut self) {
        self.bus.set_cycles(self.cpu.cycles());
        self.bus.keyboard.drain_events();

        self.bus.fdc.tick(self.cpu.cycles());
        if self.bus.fdc.take_interrupt() {
            self.cpu.nmi();
        }

        let break_down = self.bus.keyboard.reset_requested();
        if break_down && !self.break_was_down {
            self.reset();
        }
        self.break_was_down = break_down;

        self.cpu.execute_instruction(&mut self.bus);
    }

    /// Run until the CPU's cycle count reaches `target`.
    pub fn run_until(&mut self, target: u64) {
        while self.cpu.cycles() < target {
            self.step();
        }
    }

    /// Run forever, paced to the 1 MHz machine clock.
    pub fn run(&mut self) -> ! {
        let mut pacer = Pacer::new(self.cpu.cycles());
        let mut next_check = self.cpu.cycles() + CHECK_INTERVAL;
        loop {
            self.step();
            if self.cpu.cycles() >= next_check {
                pacer.pace(self.cpu.cycles());
                next_check = self.cpu.cycles() + CHECK_INTERVAL;
            }
        }
    }

    /// Warm-start the machine: CPU through the reset vector, peripherals
    /// to power-on register state. RAM is preserved.
    pub fn reset(&mut self) {
        self.bus.pia.reset();
        self.bus.fdc.reset();
        self.cpu.reset(&mut self.bus);
    }

    /// Render the current display from video memory and the mode bits on
    /// PIA port A.
    #[must_use]
    pub fn snapshot(&self) -> Frame {
        motorola_6847::snapshot(self.bus.vram(), self.bus.pia.read_port_a())
    }
}
