//! Intel 8271 floppy disk controller.
//!
//! Standalone IC emulation with no dependencies, following the project's
//! chip-level library pattern. The 8271 is the controller used by Acorn's
//! disk pack: single-sided, single-density disks with 256-byte sectors,
//! 10 sectors per track, 40 tracks.
//!
//! # Register interface
//!
//! Five documented ports, selected by the low address bits:
//!
//! | Port | Write            | Read   |
//! |------|------------------|--------|
//! | 0    | Command          | Status |
//! | 1    | Parameter        | Result |
//! | 2    | Reset            | —      |
//! | 3    | (do not use)     | —      |
//! | 4    | Data             | Data   |
//!
//! # State machine
//!
//! Idle (awaiting a command byte) → Collecting Parameters (fixed count per
//! command) → Transferring (data port reads gated by an interrupt deadline).
//!
//! The controller is non-DMA here: it raises the CPU's NMI line once per
//! byte, a fixed number of cycles after each data-port access. Software
//! services the NMI, reads the data port, and the cycle repeats until the
//! transfer cursor reaches its end.
//!
//! # Timing
//!
//! The chip never reads a clock itself. Register accesses and `tick` take
//! the CPU's cumulative cycle count; a pending interrupt is a target cycle
//! number (0 = none pending). `tick` fires the deadline and latches the
//! next data byte; the owner collects the interrupt with
//! [`Fdc8271::take_interrupt`] and forwards it to the CPU exactly once.

/// Status register: command in progress.
pub const STATUS_BUSY: u8 = 0x80;
/// Status register: result register full.
pub const STATUS_RESULT_FULL: u8 = 0x10;
/// Status register: interrupt request active.
pub const STATUS_INT_REQUEST: u8 = 0x08;
/// Status register: non-DMA transfer mode.
pub const STATUS_NON_DMA: u8 = 0x04;

/// Cycles between a data-port access and the NMI announcing the next byte.
const BYTE_INTERRUPT_DELAY: u64 = 400;

/// Ticks of drive spin-up before drive 0 reports ready.
const DRIVE_READY_DELAY: u64 = 200;

/// Bytes per sector (single density).
pub const SECTOR_SIZE: usize = 256;
/// Sectors per track.
pub const SECTORS_PER_TRACK: usize = 10;

/// Special register: drive control output. Bit 6 selects drive 0.
const SPECIAL_DRIVE_CONTROL: u8 = 0x23;

/// Intel 8271 floppy disk controller.
pub struct Fdc8271 {
    /// Current command opcode (low 6 bits of the command byte).
    command: u8,
    /// Live status byte (`STATUS_*` bits).
    status: u8,
    /// Last synthesized result byte.
    result: u8,
    /// Index of the next parameter byte for the current command.
    param_index: u8,

    /// Seek target / current track.
    track: u8,
    /// Start sector of the current transfer.
    sector: u8,
    /// Number of sectors in the current transfer.
    sector_count: u8,

    /// Transfer cursor into the disk image.
    index: usize,
    /// One past the last byte of the transfer, clamped to the image length.
    end: usize,
    /// Byte latched by the last `tick`, returned by the next data-port read.
    next_byte: u8,

    /// Ticks remaining until drive 0 reports ready (0 = countdown inactive).
    ready_countdown: u64,
    /// Drive 0 has spun up.
    drive0_ready: bool,

    /// Register id captured by WRITE SPECIAL REGISTER's first parameter.
    special_register: u8,

    /// Target cycle for the pending interrupt (0 = none pending).
    nmi_deadline: u64,
    /// Interrupt fired by `tick`, awaiting collection.
    nmi_pending: bool,

    /// Raw sector-dump disk image. Immutable once inserted.
    data: Vec<u8>,
}

impl Fdc8271 {
    /// Create a controller with no disk inserted.
    #[must_use]
    pub fn new() -> Self {
        Self {
            command: 0,
            status: 0,
            result: 0,
            param_index: 0,
            track: 0,
            sector: 0,
            sector_count: 0,
            index: 0,
            end: 0,
            next_byte: 0,
            ready_countdown: 0,
            drive0_ready: false,
            special_register: 0,
            nmi_deadline: 0,
            nmi_pending: false,
            data: Vec::new(),
        }
    }

    /// Insert a raw sector-dump disk image (track×2560 + sector×256 layout).
    pub fn insert_disk(&mut self, data: Vec<u8>) {
        self.data = data;
    }

    /// Hardware reset: abort any command and clear the register file.
    pub fn reset(&mut self) {
        self.command = 0;
        self.status = 0;
        self.result = 0;
        self.param_index = 0;
        self.index = 0;
        self.end = 0;
        self.nmi_deadline = 0;
        self.nmi_pending = false;
    }

    /// Write a register. `port` is the low address bits (0-7); `cycles` is
    /// the CPU's cumulative cycle count at the time of the access.
    pub fn write(&mut self, port: u8, value: u8, cycles: u64) {
        match port {
            0 => self.write_command(value),
            1 => self.write_parameter(value, cycles),
            2 => {
                // Reset port: software pulses it high then low.
                self.status = 0;
            }
            3..=7 => {
                // Undocumented ports: discarded.
            }
            _ => unreachable!("port is masked to 3 bits"),
        }
    }

    /// Read a register. The data port (4) has side effects; see
    /// the module docs for the byte-per-interrupt protocol.
    pub fn read(&mut self, port: u8, cycles: u64) -> u8 {
        match port {
            0 => self.status,
            1 => self.result,
            4 => self.read_data(cycles),
            _ => 0,
        }
    }

    /// Advance the controller. Called once per scheduler iteration with the
    /// CPU's cumulative cycle count.
    pub fn tick(&mut self, cycles: u64) {
        if self.ready_countdown > 0 {
            self.ready_countdown -= 1;
            if self.ready_countdown == 0 {
                self.drive0_ready = true;
            }
        }

        if self.nmi_deadline != 0 && cycles >= self.nmi_deadline {
            if self.index >= self.end {
                // Transfer complete: hand the result register to software.
                self.status = STATUS_RESULT_FULL | STATUS_INT_REQUEST;
                self.result = 0;
            } else {
                self.next_byte = self.data[self.index];
                self.index += 1;
                self.status = STATUS_BUSY | STATUS_INT_REQUEST | STATUS_NON_DMA;
            }
            self.nmi_deadline = 0;
            self.nmi_pending = true;
        }
    }

    /// Take (clear) the pending interrupt, returning whether one was set.
    ///
    /// The owner forwards a `true` to the CPU's NMI line; each deadline
    /// produces exactly one interrupt.
    pub fn take_interrupt(&mut self) -> bool {
        let was = self.nmi_pending;
        self.nmi_pending = false;
        was
    }

    /// Current track register (for testing/debugging).
    #[must_use]
    pub fn track(&self) -> u8 {
        self.track
    }

    /// Current transfer window (for testing/debugging).
    #[must_use]
    pub fn transfer_window(&self) -> (usize, usize) {
        (self.index, self.end)
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn write_command(&mut self, value: u8) {
        // Top two bits select the drive, low six the opcode.
        self.command = value & 0x3F;
        self.param_index = 0;

        match self.command {
            0x13 => {
                // READ DATA: waits for track, sector, count parameters.
            }
            0x29 => {
                // SEEK: waits for the track parameter.
            }
            0x2C => {
                // READ DRIVE STATUS: immediate result.
                self.result = 0x80 | 0x10; // index pulse
                if self.drive0_ready {
                    self.result |= 0x04;
                }
                if self.track == 0 {
                    self.result |= 0x02;
                }
            }
            0x35 => {
                // SPECIFY: parameters accepted and ignored.
            }
            0x3A => {
                // WRITE SPECIAL REGISTER: waits for register id and value.
            }
            _ => {
                // Unknown opcodes are accepted without effect; real hardware
                // is permissive and DOS probes a few of these.
            }
        }
    }

    fn write_parameter(&mut self, value: u8, cycles: u64) {
        match self.command {
            0x13 => match self.param_index {
                0 => self.track = value,
                1 => self.sector = value,
                2 => {
                    // Low 5 bits are the sector count, the top 3 the record
                    // size code (only 256-byte records on this hardware).
                    self.sector_count = value & 0x1F;
                    self.start_read(cycles);
                }
                _ => {}
            },
            0x29 => {
                if self.param_index == 0 {
                    self.track = value;
                }
            }
            0x3A => match self.param_index {
                0 => self.special_register = value,
                1 => {
                    if self.special_register == SPECIAL_DRIVE_CONTROL && value & 0x40 != 0 {
                        // Select drive 0: model the spin-up delay before the
                        // drive reports ready.
                        self.ready_countdown = DRIVE_READY_DELAY;
                    }
                    // Other special registers (mode, bad tracks) are
                    // accepted and ignored.
                }
                _ => {}
            },
            _ => {
                // SPECIFY and unknown commands swallow parameters.
            }
        }
        self.param_index = self.param_index.wrapping_add(1);
    }

    fn start_read(&mut self, cycles: u64) {
        self.index =
            SECTOR_SIZE * SECTORS_PER_TRACK * usize::from(self.track) + SECTOR_SIZE * usize::from(self.sector);
        self.end = self.index + SECTOR_SIZE * usize::from(self.sector_count);

        // Silent capacity clamp: transfers never run past the image.
        self.index = self.index.min(self.data.len());
        self.end = self.end.min(self.data.len());

        self.status = STATUS_BUSY;
        self.nmi_deadline = cycles + BYTE_INTERRUPT_DELAY;
    }

    fn read_data(&mut self, cycles: u64) -> u8 {
        if self.status & STATUS_RESULT_FULL != 0 {
            // Final interrupt acknowledged: transfer is over.
            self.status = 0;
        } else {
            // One interrupt-latency period per byte.
            self.status = STATUS_BUSY;
            self.nmi_deadline = cycles + BYTE_INTERRUPT_DELAY;
        }
        self.next_byte
    }
}

impl Default for Fdc8271 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Image with a recognisable pattern: byte n of the image is n & 0xFF,
    /// XORed with the track number so sectors differ across tracks.
    fn make_fdc_with_disk(tracks: usize) -> Fdc8271 {
        let mut data = vec![0u8; tracks * SECTORS_PER_TRACK * SECTOR_SIZE];
        for (i, byte) in data.iter_mut().enumerate() {
            let track = i / (SECTORS_PER_TRACK * SECTOR_SIZE);
            *byte = (i as u8) ^ (track as u8);
        }
        let mut fdc = Fdc8271::new();
        fdc.insert_disk(data);
        fdc
    }

    fn issue_read(fdc: &mut Fdc8271, track: u8, sector: u8, count: u8, cycles: u64) {
        fdc.write(0, 0x13, cycles);
        fdc.write(1, track, cycles);
        fdc.write(1, sector, cycles);
        fdc.write(1, count, cycles);
    }

    #[test]
    fn read_data_computes_transfer_window() {
        let mut fdc = make_fdc_with_disk(40);
        issue_read(&mut fdc, 2, 0, 1, 1000);
        assert_eq!(fdc.transfer_window(), (2 * 2560, 2 * 2560 + 256));
        assert_eq!(fdc.read(0, 1000), STATUS_BUSY);
    }

    #[test]
    fn interrupt_fires_once_after_delay() {
        let mut fdc = make_fdc_with_disk(40);
        issue_read(&mut fdc, 0, 0, 1, 1000);

        // Before the deadline: nothing.
        fdc.tick(1000);
        fdc.tick(1399);
        assert!(!fdc.take_interrupt());

        // At the deadline: one interrupt, byte latched, status busy/int/non-DMA.
        fdc.tick(1400);
        assert!(fdc.take_interrupt());
        assert_eq!(
            fdc.read(0, 1400),
            STATUS_BUSY | STATUS_INT_REQUEST | STATUS_NON_DMA
        );

        // Deadline cleared: no repeat without a new data-port access.
        fdc.tick(2000);
        assert!(!fdc.take_interrupt());
    }

    #[test]
    fn transfer_end_clamped_to_image_length() {
        // 1-track image; ask for 4 sectors starting at track 2.
        let mut fdc = make_fdc_with_disk(1);
        issue_read(&mut fdc, 2, 0, 4, 0);
        let (index, end) = fdc.transfer_window();
        assert_eq!(index, SECTORS_PER_TRACK * SECTOR_SIZE);
        assert_eq!(end, SECTORS_PER_TRACK * SECTOR_SIZE);
    }

    #[test]
    fn full_sector_read_via_nmi_protocol() {
        let mut fdc = make_fdc_with_disk(40);
        let mut cycles = 0u64;
        issue_read(&mut fdc, 0, 0, 1, cycles);

        let mut bytes = Vec::new();
        loop {
            cycles += BYTE_INTERRUPT_DELAY;
            fdc.tick(cycles);
            assert!(fdc.take_interrupt(), "every deadline raises one NMI");
            if fdc.read(0, cycles) & STATUS_RESULT_FULL != 0 {
                // Completion interrupt: result is 0, data read clears status.
                assert_eq!(fdc.read(1, cycles), 0);
                fdc.read(4, cycles);
                assert_eq!(fdc.read(0, cycles), 0);
                break;
            }
            bytes.push(fdc.read(4, cycles));
        }

        assert_eq!(bytes.len(), SECTOR_SIZE);
        for (i, &b) in bytes.iter().enumerate() {
            assert_eq!(b, i as u8, "byte {i} of sector 0");
        }
    }

    #[test]
    fn seek_sets_track_register() {
        let mut fdc = make_fdc_with_disk(40);
        fdc.write(0, 0x29, 0);
        fdc.write(1, 17, 0);
        assert_eq!(fdc.track(), 17);
    }

    #[test]
    fn drive_status_before_and_after_spinup() {
        let mut fdc = make_fdc_with_disk(40);

        // Not spun up: index + track 0, but no ready bit.
        fdc.write(0, 0x2C, 0);
        assert_eq!(fdc.read(1, 0), 0x80 | 0x10 | 0x02);

        // Select drive 0 through special register $23, bit 6.
        fdc.write(0, 0x3A, 0);
        fdc.write(1, SPECIAL_DRIVE_CONTROL, 0);
        fdc.write(1, 0x40, 0);
        for c in 0..200 {
            fdc.tick(c);
        }

        fdc.write(0, 0x2C, 200);
        assert_eq!(fdc.read(1, 200), 0x80 | 0x10 | 0x04 | 0x02);
    }

    #[test]
    fn drive_status_track0_bit_follows_track() {
        let mut fdc = make_fdc_with_disk(40);
        fdc.write(0, 0x29, 0);
        fdc.write(1, 5, 0);
        fdc.write(0, 0x2C, 0);
        assert_eq!(fdc.read(1, 0) & 0x02, 0, "track-0 bit clear off track 0");
    }

    #[test]
    fn unknown_opcode_is_tolerated() {
        let mut fdc = make_fdc_with_disk(40);
        fdc.write(0, 0x3F, 0);
        fdc.write(1, 0xAA, 0);
        fdc.tick(1000);
        assert!(!fdc.take_interrupt());
        assert_eq!(fdc.read(0, 1000), 0);
    }

    #[test]
    fn specify_swallows_parameters() {
        let mut fdc = make_fdc_with_disk(40);
        fdc.write(0, 0x35, 0);
        for p in [0x0D, 0x14, 0x05, 0xCA] {
            fdc.write(1, p, 0);
        }
        assert_eq!(fdc.read(0, 0), 0);
        assert_eq!(fdc.track(), 0, "specify must not disturb the track register");
    }

    #[test]
    fn reset_port_clears_status() {
        let mut fdc = make_fdc_with_disk(40);
        issue_read(&mut fdc, 0, 0, 1, 0);
        assert_eq!(fdc.read(0, 0), STATUS_BUSY);
        fdc.write(2, 1, 0);
        fdc.write(2, 0, 0);
        assert_eq!(fdc.read(0, 0), 0);
    }

    #[test]
    fn hardware_reset_aborts_pending_interrupt() {
        let mut fdc = make_fdc_with_disk(40);
        issue_read(&mut fdc, 0, 0, 1, 0);
        fdc.reset();
        fdc.tick(10_000);
        assert!(!fdc.take_interrupt());
        assert_eq!(fdc.read(0, 10_000), 0);
    }
}
