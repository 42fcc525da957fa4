//! Common types and constants for the boot image

use core::fmt;

/// Default sector size in bytes
pub const SECTOR_SIZE: usize = 512;

/// Stage of the boot chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// First-stage boot sector loaded by the BIOS
    Bootloader,
    /// Second-stage loader (OSLoad)
    Loader,
    /// Third-stage payload (Rekanto kernel)
    Payload,
}

impl Stage {
    /// LBA at which the stage begins
    pub const fn first_lba(self) -> u64 {
        match self {
            Self::Bootloader => 0,
            Self::Loader => 1,
            Self::Payload => 2,
        }
    }

    /// Fixed footprint in sectors, `None` when sized by content
    pub const fn fixed_sectors(self) -> Option<u64> {
        match self {
            Self::Bootloader | Self::Loader => Some(1),
            Self::Payload => None,
        }
    }

    /// Human-readable name
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bootloader => "bootloader",
            Self::Loader => "second-stage loader",
            Self::Payload => "payload",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a stage binary was fitted to its sectors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Already a whole number of sectors
    Exact,
    /// Zero bytes appended
    Padded {
        /// Number of zero bytes added
        zeros: usize,
    },
    /// Trailing bytes cut off
    Truncated {
        /// Number of bytes dropped
        dropped: usize,
    },
}

impl Fit {
    /// Classify a resize from `from` bytes to `to` bytes
    pub fn between(from: usize, to: usize) -> Self {
        if from > to {
            Self::Truncated { dropped: from - to }
        } else if from < to {
            Self::Padded { zeros: to - from }
        } else {
            Self::Exact
        }
    }
}
