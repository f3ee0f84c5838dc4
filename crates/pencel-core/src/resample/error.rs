//! Error type for resampling

use std::fmt;

use super::kernel::KernelKind;

/// Error type for [`resample_rgb24`](super::resample_rgb24) and
/// [`PixelBuffer`](super::PixelBuffer) construction.
///
/// On either error no destination buffer is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResampleError {
    /// A zero dimension, a buffer whose length disagrees with its
    /// dimensions, or a size that does not fit in memory
    InvalidParameter(&'static str),
    /// The kernel is a known identifier without a sampling strategy
    UnsupportedKernel(KernelKind),
}

impl fmt::Display for ResampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResampleError::InvalidParameter(what) => {
                write!(f, "invalid resample parameter: {}", what)
            }
            ResampleError::UnsupportedKernel(kind) => {
                write!(f, "kernel '{}' is not implemented", kind)
            }
        }
    }
}

impl std::error::Error for ResampleError {}
