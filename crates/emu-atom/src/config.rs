//! Atom machine configuration.

use format_atm::AtmImage;

use crate::rom::RomSet;

/// Configuration for creating an Atom instance.
pub struct AtomConfig {
    /// The firmware images. Empty sockets read as zero.
    pub roms: RomSet,
    /// Disk image in drive 0, if any.
    pub disk: Option<AtmImage>,
    /// Log peripheral-window traffic to stderr.
    pub trace_io: bool,
}

impl AtomConfig {
    #[must_use]
    pub fn new(roms: RomSet) -> Self {
        Self {
            roms,
            disk: None,
            trace_io: false,
        }
    }
}
