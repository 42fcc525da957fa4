//! Build summary printed after a successful run

use std::fmt::Write;

use arctic_imager::{BuildReport, Geometry, Stage};

/// Render the summary of a finished build
///
/// One line per stage with its LBA, the CHS address the previous stage must
/// load it from, and its size. CHS is omitted for stages beyond the media.
pub fn summary(report: &BuildReport, media: &Geometry) -> String {
    let block_size = report.layout.block_size();
    let mut out = String::new();

    let _ = writeln!(out, "Successfully created {}.", report.output.display());
    for (placement, component) in report.layout.placements().iter().zip(&report.components) {
        let name = component
            .source()
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| component.source().to_string_lossy());
        let chs = media
            .chs(placement.lba)
            .map(|chs| format!(", {}", chs))
            .unwrap_or_default();

        let _ = match placement.stage {
            Stage::Payload => writeln!(
                out,
                "  - {} (LBA {}{}, {} bytes, padded to {} sectors)",
                name,
                placement.lba.0,
                chs,
                placement.bytes,
                component.sectors(block_size)
            ),
            _ => writeln!(
                out,
                "  - {} (LBA {}{}, {} bytes)",
                name, placement.lba.0, chs, placement.bytes
            ),
        };
    }

    if report.layout.expanded() {
        let _ = writeln!(
            out,
            "Image expanded beyond {} ({} bytes nominal).",
            media.name,
            report.layout.nominal_bytes()
        );
    }
    let _ = write!(out, "Total image size: {} bytes.", report.file_size);
    out
}
