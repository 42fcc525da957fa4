//! Error types for image assembly

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::types::Stage;

/// Result type for image assembly operations
pub type Result<T> = core::result::Result<T, ImageError>;

/// Operation that was in progress when an I/O error occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoOp {
    /// Reading a stage binary
    Read,
    /// Creating the output image
    Create,
    /// Writing blocks to the image
    Write,
    /// Reading blocks back from the image
    ReadBack,
    /// Flushing the image
    Flush,
    /// Querying the image size
    Metadata,
}

impl IoOp {
    /// Verb used in error messages
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Create => "create",
            Self::Write => "write",
            Self::ReadBack => "read back",
            Self::Flush => "flush",
            Self::Metadata => "stat",
        }
    }
}

/// Errors that can occur while assembling an image
#[derive(Debug)]
pub enum ImageError {
    /// A required stage binary does not exist
    NotFound {
        /// Missing file
        path: PathBuf,
    },

    /// Any other filesystem failure
    Io {
        /// What was being done
        op: IoOp,
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: io::Error,
    },

    /// Block device rejected a read, write or flush
    Device {
        /// What was being done
        op: IoOp,
        /// First block of the failed transfer
        lba: u64,
        /// Device error message
        detail: String,
    },

    /// Nominal media size is not a whole number of sectors
    UnalignedMedia {
        /// Configured media size
        bytes: u64,
        /// Sector size in bytes
        block_size: u64,
    },

    /// A stage would not land on its fixed LBA
    Misplaced {
        /// Offending stage
        stage: Stage,
        /// LBA the stage must occupy
        expected: u64,
        /// LBA the stage would have been written to
        actual: u64,
    },

    /// Components differ from the ones the layout was planned from
    LayoutMismatch {
        /// Placements in the layout
        planned: usize,
        /// Components supplied
        given: usize,
    },

    /// Device is smaller than the planned image
    SizeMismatch {
        /// Sectors the layout needs
        expected: u64,
        /// Sectors the device holds
        actual: u64,
    },

    /// Read-back contents differ from what was written
    VerifyMismatch {
        /// Stage whose region differs
        stage: Stage,
        /// First LBA of the stage
        lba: u64,
    },
}

impl ImageError {
    /// Whether this is a missing-input error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub(crate) fn io(op: IoOp, path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if op == IoOp::Read && source.kind() == io::ErrorKind::NotFound {
            return Self::NotFound { path };
        }
        Self::Io { op, path, source }
    }

    pub(crate) fn device(op: IoOp, lba: u64, err: impl fmt::Display) -> Self {
        Self::Device {
            op,
            lba,
            detail: err.to_string(),
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "{} not found", path.display()),
            Self::Io { op, path, source } => {
                write!(f, "failed to {} {}: {}", op.as_str(), path.display(), source)
            }
            Self::Device { op, lba, detail } => {
                write!(f, "block device {} failed at LBA {}: {}", op.as_str(), lba, detail)
            }
            Self::UnalignedMedia { bytes, block_size } => write!(
                f,
                "media size {} bytes is not a multiple of the {}-byte sector",
                bytes, block_size
            ),
            Self::Misplaced {
                stage,
                expected,
                actual,
            } => write!(
                f,
                "{} must start at LBA {} but would start at LBA {}",
                stage, expected, actual
            ),
            Self::LayoutMismatch { planned, given } => write!(
                f,
                "layout plans {} stages but {} components were supplied",
                planned, given
            ),
            Self::SizeMismatch { expected, actual } => write!(
                f,
                "image holds {} sectors, layout needs {}",
                actual, expected
            ),
            Self::VerifyMismatch { stage, lba } => {
                write!(f, "{} at LBA {} does not match its source", stage, lba)
            }
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
