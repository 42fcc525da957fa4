//! Arctic32 floppy image builder
//!
//! Shared entry point for the `mkfloppy` binaries. Each binary picks a
//! [`config::Profile`] and hands it to [`run`].

pub mod config;
pub mod logger;
pub mod report;

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use arctic_imager::{assemble, BuildReport, ImageError};
use log::info;

use crate::config::{Profile, MEDIA};

/// Build the image for `profile` in `dir`
pub fn build(profile: &Profile, dir: &Path) -> Result<BuildReport> {
    info!("Building {} image {}", profile.name, profile.output);
    let request = profile.request(dir);
    assemble(&request).with_context(|| format!("building {}", profile.output))
}

/// Describe a build failure for the console
pub fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ImageError>() {
        Some(missing @ ImageError::NotFound { .. }) => format!(
            "{}. Make sure all binary files are in the same directory.",
            missing
        ),
        _ => format!("An unexpected error occurred: {:#}", err),
    }
}

/// Run a profile against the current directory
pub fn run(profile: &Profile) -> ExitCode {
    logger::init();

    match build(profile, Path::new(".")) {
        Ok(report) => {
            println!("{}", report::summary(&report, &MEDIA));
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}
