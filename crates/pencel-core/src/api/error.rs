//! Unified error type for the pencel-core public API.

use crate::palette::{PaletteError, ParseColorError};
use crate::resample::ResampleError;
use std::fmt;

/// Unified error type for the pencel-core public API.
///
/// Wraps every error of the crate for convenient `?` propagation.
///
/// # Example
///
/// ```
/// use pencel_core::{PencelError, PencilPalette};
///
/// fn palette() -> Result<PencilPalette, PencelError> {
///     Ok(PencilPalette::from_hex(&[("ink", "#000000", "#444444")])?)
/// }
/// # assert!(palette().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PencelError {
    /// Resampling failed (invalid parameter or unsupported kernel)
    Resample(ResampleError),
    /// Palette validation or matching failed
    Palette(PaletteError),
}

impl fmt::Display for PencelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PencelError::Resample(err) => write!(f, "resample error: {}", err),
            PencelError::Palette(err) => write!(f, "palette error: {}", err),
        }
    }
}

impl std::error::Error for PencelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PencelError::Resample(err) => Some(err),
            PencelError::Palette(err) => Some(err),
        }
    }
}

impl From<ResampleError> for PencelError {
    fn from(err: ResampleError) -> Self {
        PencelError::Resample(err)
    }
}

impl From<PaletteError> for PencelError {
    fn from(err: PaletteError) -> Self {
        PencelError::Palette(err)
    }
}

impl From<ParseColorError> for PencelError {
    fn from(err: ParseColorError) -> Self {
        PencelError::Palette(PaletteError::ParseColor(err))
    }
}
