//! ROM set loading and assembly.
//!
//! The Atom maps five 4 KiB ROMs into the top 24 KiB of the address space:
//!
//! | ROM       | Address | Contents                      |
//! |-----------|---------|-------------------------------|
//! | utility   | `$A000` | optional utility ROM          |
//! | BASIC     | `$C000` | Atom BASIC interpreter        |
//! | float     | `$D000` | floating-point extension      |
//! | DOS       | `$E000` | disk operating system         |
//! | kernel    | `$F000` | kernel, including the vectors |
//!
//! Only the utility socket may be unpopulated; an empty socket reads as
//! zero. Any other missing or mis-sized image is a boot failure.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::bus::ROM_BASE;

/// Size of a single ROM image.
pub const ROM_IMAGE_SIZE: usize = 0x1000;

const REGION_SIZE: usize = 0x10000 - ROM_BASE as usize;

#[derive(Debug, Error)]
pub enum RomError {
    #[error("failed to read ROM {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("ROM {path} is {actual} bytes, expected {ROM_IMAGE_SIZE}")]
    WrongSize { path: PathBuf, actual: usize },
}

/// The ROM images for one machine, each in its fixed socket.
#[derive(Default)]
pub struct RomSet {
    pub kernel: Option<Vec<u8>>,
    pub dos: Option<Vec<u8>>,
    pub float: Option<Vec<u8>>,
    pub basic: Option<Vec<u8>>,
    pub utility: Option<Vec<u8>>,
}

impl RomSet {
    /// Load a ROM set from a directory of image files. A missing utility
    /// ROM leaves that socket empty; everything else is required.
    pub fn load(dir: &Path) -> Result<Self, RomError> {
        Ok(Self {
            kernel: Some(load_image(&dir.join("akernel.rom"))?),
            dos: Some(load_image(&dir.join("dosrom.rom"))?),
            float: Some(load_image(&dir.join("afloat.rom"))?),
            basic: Some(load_image(&dir.join("abasic.rom"))?),
            utility: load_optional(&dir.join("autility.rom"))?,
        })
    }

    /// Assemble the `$A000-$FFFF` ROM region. Empty sockets read as zero.
    #[must_use]
    pub fn assemble(&self) -> Vec<u8> {
        let mut region = vec![0; REGION_SIZE];
        for (image, base) in [
            (&self.utility, 0xA000u16),
            (&self.basic, 0xC000),
            (&self.float, 0xD000),
            (&self.dos, 0xE000),
            (&self.kernel, 0xF000),
        ] {
            if let Some(data) = image {
                let offset = usize::from(base - ROM_BASE);
                region[offset..offset + data.len()].copy_from_slice(data);
            }
        }
        region
    }
}

fn load_image(path: &Path) -> Result<Vec<u8>, RomError> {
    let data = fs::read(path).map_err(|source| RomError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if data.len() != ROM_IMAGE_SIZE {
        return Err(RomError::WrongSize {
            path: path.to_path_buf(),
            actual: data.len(),
        });
    }
    Ok(data)
}

fn load_optional(path: &Path) -> Result<Option<Vec<u8>>, RomError> {
    if path.exists() {
        load_image(path).map(Some)
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assemble_places_images_at_fixed_offsets() {
        let set = RomSet {
            kernel: Some(vec![0xF0; ROM_IMAGE_SIZE]),
            basic: Some(vec![0xC0; ROM_IMAGE_SIZE]),
            ..RomSet::default()
        };
        let region = set.assemble();
        assert_eq!(region.len(), REGION_SIZE);
        assert_eq!(region[0x5000], 0xF0); // $F000
        assert_eq!(region[0x2000], 0xC0); // $C000
        assert_eq!(region[0x0000], 0x00); // utility socket empty
        assert_eq!(region[0x3000], 0x00); // float socket empty
    }

    #[test]
    fn empty_set_assembles_to_zeroes() {
        let region = RomSet::default().assemble();
        assert!(region.iter().all(|&b| b == 0));
    }

    #[test]
    fn wrong_size_image_rejected() {
        let dir = std::env::temp_dir().join("atom-rom-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("akernel.rom");
        std::fs::write(&path, [0u8; 100]).unwrap();
        let err = RomSet::load(&dir).map(|_| ()).unwrap_err();
        match err {
            RomError::WrongSize { actual, .. } => assert_eq!(actual, 100),
            other => panic!("expected WrongSize, got {other}"),
        }
        std::fs::remove_file(&path).unwrap();
    }
}
