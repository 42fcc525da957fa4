//! Floppy media geometry and CHS addressing
//!
//! The nominal image size comes from the media geometry, and the CHS
//! address of each stage is what the bootloader passes to BIOS `int 13h`.

use core::fmt;

use gpt_disk_types::{BlockSize, Lba};

/// Physical layout of a floppy disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Tracks per side
    pub cylinders: u32,
    /// Sides
    pub heads: u32,
    /// Sectors on each track
    pub sectors_per_track: u32,
    /// Display name
    pub name: &'static str,
}

/// Cylinder/head/sector address (sector is 1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chs {
    /// Cylinder (track)
    pub cylinder: u32,
    /// Head (side)
    pub head: u32,
    /// Sector, starting at 1
    pub sector: u32,
}

impl fmt::Display for Chs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}/H{}/S{}", self.cylinder, self.head, self.sector)
    }
}

impl Geometry {
    /// 720K 3.5" double density
    pub const FLOPPY_720K: Geometry = Geometry {
        cylinders: 80,
        heads: 2,
        sectors_per_track: 9,
        name: "720K 3.5\" DD",
    };

    /// 1.44M 3.5" high density
    pub const FLOPPY_1440K: Geometry = Geometry {
        cylinders: 80,
        heads: 2,
        sectors_per_track: 18,
        name: "1.44M 3.5\" HD",
    };

    /// 2.88M 3.5" extra density
    pub const FLOPPY_2880K: Geometry = Geometry {
        cylinders: 80,
        heads: 2,
        sectors_per_track: 36,
        name: "2.88M 3.5\" ED",
    };

    const KNOWN: [&'static Geometry; 3] =
        [&Self::FLOPPY_720K, &Self::FLOPPY_1440K, &Self::FLOPPY_2880K];

    /// Total sectors on the medium
    pub const fn total_sectors(&self) -> u64 {
        self.cylinders as u64 * self.heads as u64 * self.sectors_per_track as u64
    }

    /// Medium capacity in bytes
    pub fn capacity_bytes(&self, block_size: BlockSize) -> u64 {
        self.total_sectors() * block_size.to_u64()
    }

    /// Look up a predefined geometry by capacity
    pub fn from_capacity(bytes: u64, block_size: BlockSize) -> Option<&'static Geometry> {
        Self::KNOWN
            .into_iter()
            .find(|g| g.capacity_bytes(block_size) == bytes)
    }

    /// Translate an LBA to CHS, `None` past the end of the medium
    pub fn chs(&self, lba: Lba) -> Option<Chs> {
        if lba.0 >= self.total_sectors() {
            return None;
        }
        let spt = self.sectors_per_track as u64;
        let sectors_per_cylinder = self.heads as u64 * spt;
        let cylinder = lba.0 / sectors_per_cylinder;
        let offset = lba.0 % sectors_per_cylinder;

        Some(Chs {
            cylinder: cylinder as u32,
            head: (offset / spt) as u32,
            sector: (offset % spt) as u32 + 1,
        })
    }
}
