//! Arctic32 Boot Image Assembly
//!
//! Builds a raw, sector-exact floppy image from the stages of the Arctic32
//! boot chain.
//!
//! # Overview
//!
//! The image is a flat run of 512-byte sectors:
//! - LBA 0: first-stage bootloader (exactly one sector)
//! - LBA 1: second-stage loader (exactly one sector)
//! - LBA 2+: optional third-stage payload (the Rekanto kernel), padded to a
//!   whole number of sectors
//!
//! Everything else in the image is zero.
//!
//! # Architecture
//!
//! 1. **Component layer** - Reads stage binaries and pads or truncates them
//! 2. **Layout layer** - Assigns LBAs and sizes the image against the media
//! 3. **Writer layer** - Zero-fills a block device and writes each stage
//! 4. **Verify layer** - Reads the stages back from the device
//!
//! # Usage
//!
//! ```ignore
//! use arctic_imager::{assemble, ImageRequest, ImageSources, Geometry};
//! use gpt_disk_types::BlockSize;
//!
//! let request = ImageRequest {
//!     sources: ImageSources::three_stage("boot.bin", "osload.bin", "rekanto.bin"),
//!     output: "arctic32.img".into(),
//!     block_size: BlockSize::BS_512,
//!     nominal_bytes: Geometry::FLOPPY_1440K.capacity_bytes(BlockSize::BS_512),
//! };
//! let report = assemble(&request)?;
//! ```

#![warn(missing_docs)]

pub mod assemble;
pub mod component;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod sector;
pub mod types;
pub mod verify;
pub mod writer;

pub use error::{ImageError, IoOp, Result};
pub use types::{Fit, Stage, SECTOR_SIZE};

pub use assemble::{assemble, BuildReport, ImageRequest, ImageSources};
pub use component::Component;
pub use geometry::{Chs, Geometry};
pub use layout::{Layout, Placement};
pub use verify::verify_image;
pub use writer::write_image;
