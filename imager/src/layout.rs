//! Sector layout of the boot image

use gpt_disk_types::{BlockSize, Lba};
use log::warn;

use crate::component::Component;
use crate::error::{ImageError, Result};
use crate::sector::{align_to_sector, is_sector_aligned, sectors_for_bytes};
use crate::types::Stage;

/// Where one stage lands in the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Stage occupying the region
    pub stage: Stage,
    /// First sector of the region
    pub lba: Lba,
    /// Region length in sectors
    pub sectors: u64,
    /// Region length in bytes
    pub bytes: u64,
}

/// Planned image: stage placements and the allocated size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    block_size: BlockSize,
    placements: Vec<Placement>,
    required_bytes: u64,
    nominal_bytes: u64,
    image_bytes: u64,
}

impl Layout {
    /// Place components back to back from LBA 0 and size the image
    ///
    /// The image is `nominal_bytes` long unless the components need more, in
    /// which case it grows to the sector-rounded required size.
    pub fn plan(components: &[Component], block_size: BlockSize, nominal_bytes: u64) -> Result<Self> {
        if !is_sector_aligned(nominal_bytes, block_size) {
            return Err(ImageError::UnalignedMedia {
                bytes: nominal_bytes,
                block_size: block_size.to_u64(),
            });
        }

        let mut placements = Vec::with_capacity(components.len());
        let mut next_lba = 0u64;
        for component in components {
            let stage = component.stage();
            if stage.first_lba() != next_lba {
                return Err(ImageError::Misplaced {
                    stage,
                    expected: stage.first_lba(),
                    actual: next_lba,
                });
            }

            let bytes = component.data().len() as u64;
            let sectors = sectors_for_bytes(bytes, block_size);
            placements.push(Placement {
                stage,
                lba: Lba(next_lba),
                sectors,
                bytes,
            });
            next_lba += sectors;
        }

        let required_bytes: u64 = placements.iter().map(|p| p.bytes).sum();
        let image_bytes = if required_bytes > nominal_bytes {
            warn!(
                "Calculated required image size ({} bytes) exceeds initial nominal floppy size ({} bytes). Expanding image.",
                required_bytes, nominal_bytes
            );
            align_to_sector(required_bytes, block_size)
        } else {
            nominal_bytes
        };

        Ok(Self {
            block_size,
            placements,
            required_bytes,
            nominal_bytes,
            image_bytes,
        })
    }

    /// Sector size the layout was planned with
    pub fn block_size(&self) -> BlockSize {
        self.block_size
    }

    /// Stage placements in LBA order
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Placement of a given stage, if present
    pub fn placement(&self, stage: Stage) -> Option<&Placement> {
        self.placements.iter().find(|p| p.stage == stage)
    }

    /// Bytes occupied by all stages
    pub fn required_bytes(&self) -> u64 {
        self.required_bytes
    }

    /// Configured media size
    pub fn nominal_bytes(&self) -> u64 {
        self.nominal_bytes
    }

    /// Allocated image size
    pub fn image_bytes(&self) -> u64 {
        self.image_bytes
    }

    /// Allocated image size in sectors
    pub fn image_sectors(&self) -> u64 {
        sectors_for_bytes(self.image_bytes, self.block_size)
    }

    /// Whether the image outgrew the nominal media size
    pub fn expanded(&self) -> bool {
        self.image_bytes > self.nominal_bytes
    }
}
