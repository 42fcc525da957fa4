//! Read-back verification of a written image

use gpt_disk_io::BlockIo;
use log::debug;

use crate::component::Component;
use crate::error::{ImageError, IoOp, Result};
use crate::layout::Layout;
use crate::writer::check_components;

/// Check that a device holds the planned image
///
/// The device must be at least as large as the layout and every stage region
/// must read back byte-for-byte equal to its normalized component.
pub fn verify_image<B: BlockIo>(
    block_io: &mut B,
    layout: &Layout,
    components: &[Component],
) -> Result<()> {
    check_components(layout, components)?;

    let blocks = block_io
        .num_blocks()
        .map_err(|e| ImageError::device(IoOp::ReadBack, 0, e))?;
    if blocks < layout.image_sectors() {
        return Err(ImageError::SizeMismatch {
            expected: layout.image_sectors(),
            actual: blocks,
        });
    }

    let mut buf = Vec::new();
    for (placement, component) in layout.placements().iter().zip(components) {
        if component.data().is_empty() {
            continue;
        }
        buf.clear();
        buf.resize(component.data().len(), 0);
        block_io
            .read_blocks(placement.lba, &mut buf)
            .map_err(|e| ImageError::device(IoOp::ReadBack, placement.lba.0, e))?;

        if buf != component.data() {
            return Err(ImageError::VerifyMismatch {
                stage: placement.stage,
                lba: placement.lba.0,
            });
        }
    }

    debug!("Verified {} stages", components.len());
    Ok(())
}
