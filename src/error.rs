use std::path::PathBuf;

use pencel_core::UnknownKernel;
use thiserror::Error;

/// Failures while reading the inputs of a render: the image and the palette.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    ImageDecode(String),

    #[error("Image has no pixels ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("{}:{line}: {reason}", .path.display())]
    Palette {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("Palette has no entries")]
    EmptyPalette,
}

impl From<png::DecodingError> for LoadError {
    fn from(e: png::DecodingError) -> Self {
        LoadError::ImageDecode(e.to_string())
    }
}

/// Failures while reading or applying `config.yaml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Unknown kernel '{0}' (run `pencel kernels` for the list)")]
    InvalidKernel(String),

    #[error("Unknown distance metric '{0}' (expected redmean or oklab)")]
    InvalidMetric(String),
}

impl From<UnknownKernel> for ConfigError {
    fn from(e: UnknownKernel) -> Self {
        ConfigError::InvalidKernel(e.0)
    }
}
