//! Stage binaries fitted to whole sectors
//!
//! The bootloader and loader occupy exactly one sector each: longer input is
//! cut off, shorter input is zero-padded. The payload is never cut; it is
//! padded up to the next sector boundary.

use std::fs;
use std::path::{Path, PathBuf};

use gpt_disk_types::BlockSize;
use log::{debug, info, warn};

use crate::error::{ImageError, IoOp, Result};
use crate::sector::{align_to_sector, block_len, sectors_for_bytes};
use crate::types::{Fit, Stage};

/// A stage binary normalized to its on-disk footprint
#[derive(Debug, Clone)]
pub struct Component {
    stage: Stage,
    source: PathBuf,
    data: Vec<u8>,
    original_len: usize,
    fit: Fit,
}

impl Component {
    /// Read a stage binary from disk and normalize it
    pub fn read(stage: Stage, path: impl AsRef<Path>, block_size: BlockSize) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| ImageError::io(IoOp::Read, path, e))?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok(Self::from_bytes(stage, path, bytes, block_size))
    }

    /// Normalize an in-memory stage binary
    pub fn from_bytes(
        stage: Stage,
        source: impl Into<PathBuf>,
        mut bytes: Vec<u8>,
        block_size: BlockSize,
    ) -> Self {
        let source = source.into();
        let original_len = bytes.len();

        let target = match stage.fixed_sectors() {
            Some(sectors) => sectors as usize * block_len(block_size),
            None => align_to_sector(original_len as u64, block_size) as usize,
        };
        let fit = Fit::between(original_len, target);
        bytes.resize(target, 0);

        match (stage.fixed_sectors(), fit) {
            (Some(_), Fit::Truncated { .. }) => warn!(
                "{} is larger than {} bytes. Truncating.",
                source.display(),
                target
            ),
            (Some(_), Fit::Padded { .. }) => warn!(
                "{} is smaller than {} bytes. Padding with zeros.",
                source.display(),
                target
            ),
            (None, _) => info!(
                "{} size: {} bytes, occupying {} sectors.",
                source.display(),
                original_len,
                sectors_for_bytes(original_len as u64, block_size)
            ),
            _ => {}
        }

        Self {
            stage,
            source,
            data: bytes,
            original_len,
            fit,
        }
    }

    /// Stage this binary fills
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// File the binary was read from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Normalized bytes, a whole number of sectors
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Size of the binary before normalization
    pub fn original_len(&self) -> usize {
        self.original_len
    }

    /// How the binary was fitted
    pub fn fit(&self) -> Fit {
        self.fit
    }

    /// Footprint in sectors
    pub fn sectors(&self, block_size: BlockSize) -> u64 {
        sectors_for_bytes(self.data.len() as u64, block_size)
    }
}
