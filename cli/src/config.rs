//! Build configuration.
//!
//! Everything here is fixed at compile time: the tool takes no flags and
//! reads no environment.

use std::path::Path;

use arctic_imager::{Geometry, ImageRequest, ImageSources};
use gpt_disk_types::BlockSize;

/// Sector size of the target media.
pub const SECTOR_SIZE: BlockSize = BlockSize::BS_512;

/// Target media.
pub const MEDIA: Geometry = Geometry::FLOPPY_1440K;

/// Image file name: locale, version, build lab, vendor, product, build number.
pub const OUTPUT_IMAGE: &str = "en-us_0.1.4_lab02_horibyte_arctic32_5628.img";

/// Which stage binaries make up the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    /// Short name used in log output.
    pub name: &'static str,
    /// First-stage boot sector.
    pub bootloader: &'static str,
    /// Second-stage loader.
    pub loader: &'static str,
    /// Third-stage payload, if any.
    pub payload: Option<&'static str>,
    /// Image file to produce.
    pub output: &'static str,
}

/// Boot sector, OSLoad and the Rekanto kernel.
pub const THREE_STAGE: Profile = Profile {
    name: "three-stage",
    bootloader: "boot.bin",
    loader: "osload.bin",
    payload: Some("rekanto.bin"),
    output: OUTPUT_IMAGE,
};

/// Boot sector and OSLoad only.
pub const TWO_STAGE: Profile = Profile {
    name: "two-stage",
    bootloader: "bootloader.bin",
    loader: "osload.bin",
    payload: None,
    output: OUTPUT_IMAGE,
};

impl Profile {
    /// Build request with every path resolved against `dir`.
    pub fn request(&self, dir: &Path) -> ImageRequest {
        let sources = match self.payload {
            Some(payload) => ImageSources::three_stage(
                dir.join(self.bootloader),
                dir.join(self.loader),
                dir.join(payload),
            ),
            None => ImageSources::two_stage(dir.join(self.bootloader), dir.join(self.loader)),
        };

        ImageRequest {
            sources,
            output: dir.join(self.output),
            block_size: SECTOR_SIZE,
            nominal_bytes: MEDIA.capacity_bytes(SECTOR_SIZE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_stage_request() {
        let req = THREE_STAGE.request(Path::new("/build"));
        assert_eq!(req.sources.bootloader, Path::new("/build/boot.bin"));
        assert_eq!(req.sources.loader, Path::new("/build/osload.bin"));
        assert_eq!(req.sources.payload.as_deref(), Some(Path::new("/build/rekanto.bin")));
        assert_eq!(req.output, Path::new("/build").join(OUTPUT_IMAGE));
        assert_eq!(req.nominal_bytes, 1_474_560);
    }

    #[test]
    fn test_two_stage_request_has_no_payload() {
        let req = TWO_STAGE.request(Path::new("."));
        assert_eq!(req.sources.bootloader, Path::new("./bootloader.bin"));
        assert!(req.sources.payload.is_none());
    }
}
