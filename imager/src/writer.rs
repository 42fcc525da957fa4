//! Block writer: zero-fills the device, then writes each stage

use gpt_disk_io::BlockIo;
use gpt_disk_types::Lba;
use log::debug;

use crate::component::Component;
use crate::error::{ImageError, IoOp, Result};
use crate::layout::Layout;
use crate::sector::block_len;

/// Sectors zeroed per write (one 1.44M cylinder)
const ZERO_CHUNK_SECTORS: u64 = 36;

/// Write a planned image to a block device
///
/// Every sector of the layout is zeroed first, so regions no stage covers
/// read back as zero. `components` must be the slice the layout was
/// planned from.
pub fn write_image<B: BlockIo>(
    block_io: &mut B,
    layout: &Layout,
    components: &[Component],
) -> Result<()> {
    check_components(layout, components)?;

    zero_fill(block_io, layout)?;

    for (placement, component) in layout.placements().iter().zip(components) {
        if component.data().is_empty() {
            continue;
        }
        debug!(
            "Writing {} ({} bytes) at LBA {}",
            placement.stage, placement.bytes, placement.lba.0
        );
        block_io
            .write_blocks(placement.lba, component.data())
            .map_err(|e| ImageError::device(IoOp::Write, placement.lba.0, e))?;
    }

    block_io
        .flush()
        .map_err(|e| ImageError::device(IoOp::Flush, 0, e))
}

fn zero_fill<B: BlockIo>(block_io: &mut B, layout: &Layout) -> Result<()> {
    let sector = block_len(layout.block_size());
    let total = layout.image_sectors();
    let zeros = vec![0u8; ZERO_CHUNK_SECTORS as usize * sector];

    let mut lba = 0u64;
    while lba < total {
        let count = ZERO_CHUNK_SECTORS.min(total - lba);
        block_io
            .write_blocks(Lba(lba), &zeros[..count as usize * sector])
            .map_err(|e| ImageError::device(IoOp::Write, lba, e))?;
        lba += count;
    }

    debug!("Zero-filled {} sectors", total);
    Ok(())
}

pub(crate) fn check_components(layout: &Layout, components: &[Component]) -> Result<()> {
    let placements = layout.placements();
    let matches = placements.len() == components.len()
        && placements.iter().zip(components).all(|(p, c)| {
            p.stage == c.stage() && p.bytes == c.data().len() as u64
        });

    if matches {
        Ok(())
    } else {
        Err(ImageError::LayoutMismatch {
            planned: placements.len(),
            given: components.len(),
        })
    }
}
