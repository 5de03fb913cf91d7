//! Raw Atom disk image parser.
//!
//! The on-disk format is a plain sector dump: 40 tracks × 10 sectors ×
//! 256 bytes = 102,400 bytes for a full single-sided, single-density disk.
//! Byte layout is `track×2560 + sector×256`. Images shorter than a full
//! disk are common (a dump stops after the last used track); the controller
//! clamps transfers at the image end.

use std::fmt;

pub const SECTOR_SIZE: usize = 256;
pub const SECTORS_PER_TRACK: usize = 10;
pub const TRACKS: usize = 40;
pub const DISK_SIZE: usize = TRACKS * SECTORS_PER_TRACK * SECTOR_SIZE;

#[derive(Debug)]
pub enum AtmError {
    /// Zero-length or over-capacity image.
    InvalidSize(usize),
}

impl fmt::Display for AtmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize(size) => write!(
                f,
                "invalid disk image size: {size} bytes (expected 1..={DISK_SIZE})"
            ),
        }
    }
}

impl std::error::Error for AtmError {}

/// A loaded disk image. Immutable once constructed.
pub struct AtmImage {
    data: Vec<u8>,
}

impl AtmImage {
    /// Wrap a raw sector dump. Short images are accepted; empty or
    /// over-capacity ones are not.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self, AtmError> {
        if data.is_empty() || data.len() > DISK_SIZE {
            return Err(AtmError::InvalidSize(data.len()));
        }
        Ok(Self { data })
    }

    /// Image length in bytes (may be less than a full disk).
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw image data.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the image, yielding the raw bytes for a controller's
    /// backing store.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// One sector's bytes, or `None` past the end of the image.
    #[must_use]
    pub fn sector(&self, track: usize, sector: usize) -> Option<&[u8]> {
        let start = track * SECTORS_PER_TRACK * SECTOR_SIZE + sector * SECTOR_SIZE;
        self.data.get(start..start + SECTOR_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reject_empty() {
        assert!(AtmImage::from_bytes(Vec::new()).is_err());
    }

    #[test]
    fn reject_over_capacity() {
        assert!(AtmImage::from_bytes(vec![0; DISK_SIZE + 1]).is_err());
    }

    #[test]
    fn accept_full_disk() {
        let img = AtmImage::from_bytes(vec![0; DISK_SIZE]).expect("valid");
        assert_eq!(img.len(), DISK_SIZE);
    }

    #[test]
    fn accept_partial_dump() {
        // A 5-track dump.
        let img = AtmImage::from_bytes(vec![0; 5 * 2560]).expect("valid");
        assert!(img.sector(4, 9).is_some());
        assert!(img.sector(5, 0).is_none());
    }

    #[test]
    fn sector_layout() {
        let mut data = vec![0u8; DISK_SIZE];
        data[2 * 2560 + 3 * 256] = 0xAB;
        let img = AtmImage::from_bytes(data).expect("valid");
        assert_eq!(img.sector(2, 3).expect("in range")[0], 0xAB);
        assert_eq!(img.sector(2, 2).expect("in range")[0], 0x00);
    }
}
