//! Image assembly: read, normalize, plan, write, verify

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use gpt_disk_io::StdBlockIo;
use gpt_disk_types::BlockSize;
use log::{debug, info};

use crate::component::Component;
use crate::error::{ImageError, IoOp, Result};
use crate::layout::Layout;
use crate::types::Stage;
use crate::verify::verify_image;
use crate::writer::write_image;

/// Stage binaries that make up an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSources {
    /// First-stage boot sector
    pub bootloader: PathBuf,
    /// Second-stage loader
    pub loader: PathBuf,
    /// Third-stage payload, absent in two-stage images
    pub payload: Option<PathBuf>,
}

impl ImageSources {
    /// Bootloader and loader only
    pub fn two_stage(bootloader: impl Into<PathBuf>, loader: impl Into<PathBuf>) -> Self {
        Self {
            bootloader: bootloader.into(),
            loader: loader.into(),
            payload: None,
        }
    }

    /// Bootloader, loader and payload
    pub fn three_stage(
        bootloader: impl Into<PathBuf>,
        loader: impl Into<PathBuf>,
        payload: impl Into<PathBuf>,
    ) -> Self {
        Self {
            payload: Some(payload.into()),
            ..Self::two_stage(bootloader, loader)
        }
    }

    /// Sources paired with their stage, in LBA order
    pub fn stages(&self) -> impl Iterator<Item = (Stage, &Path)> {
        [
            Some((Stage::Bootloader, self.bootloader.as_path())),
            Some((Stage::Loader, self.loader.as_path())),
            self.payload.as_deref().map(|p| (Stage::Payload, p)),
        ]
        .into_iter()
        .flatten()
    }
}

/// Everything needed to build one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    /// Input binaries
    pub sources: ImageSources,
    /// Image file to create
    pub output: PathBuf,
    /// Sector size
    pub block_size: BlockSize,
    /// Media capacity the image is sized to
    pub nominal_bytes: u64,
}

/// Outcome of a successful build
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// Image file written
    pub output: PathBuf,
    /// Planned layout
    pub layout: Layout,
    /// Normalized stages in LBA order
    pub components: Vec<Component>,
    /// Size of the image file on disk
    pub file_size: u64,
}

impl BuildReport {
    /// Normalized component for a stage, if present
    pub fn component(&self, stage: Stage) -> Option<&Component> {
        self.components.iter().find(|c| c.stage() == stage)
    }
}

/// Build a boot image
///
/// All inputs are read before the output is opened, so a missing input
/// leaves any previous image untouched. The output is then recreated,
/// zero-filled, written and read back.
pub fn assemble(request: &ImageRequest) -> Result<BuildReport> {
    let components = request
        .sources
        .stages()
        .map(|(stage, path)| Component::read(stage, path, request.block_size))
        .collect::<Result<Vec<_>>>()?;

    let layout = Layout::plan(&components, request.block_size, request.nominal_bytes)?;
    debug!(
        "Layout: {} stages, {} bytes required, {} bytes allocated",
        layout.placements().len(),
        layout.required_bytes(),
        layout.image_bytes()
    );

    write_file(&request.output, &layout, &components)?;

    let file_size = fs::metadata(&request.output)
        .map_err(|e| ImageError::io(IoOp::Metadata, &request.output, e))?
        .len();
    info!("Wrote {} ({} bytes)", request.output.display(), file_size);

    Ok(BuildReport {
        output: request.output.clone(),
        layout,
        components,
        file_size,
    })
}

fn write_file(path: &Path, layout: &Layout, components: &[Component]) -> Result<()> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| ImageError::io(IoOp::Create, path, e))?;

    let mut block_io = StdBlockIo::new(&mut file, layout.block_size());
    write_image(&mut block_io, layout, components)?;
    verify_image(&mut block_io, layout, components)
}
