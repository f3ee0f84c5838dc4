//! Pencelizer builder, the main entry point of the crate.
//!
//! [`Pencelizer`] chains the resampler and the palette matcher behind a
//! fluent configuration.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::error::PencelError;
use crate::color::Argb32;
use crate::output::SwatchGrid;
use crate::palette::{DistanceMetric, MatchResult, PencilPalette};
use crate::resample::{KernelKind, PixelBuffer};

/// Grid size used when none is configured.
pub const DEFAULT_GRID_SIZE: u32 = 32;

/// Turns an image into a grid of pencil swatches.
///
/// # Design
///
/// - Constructor requires a [`PencilPalette`], which is never empty
/// - Configuration methods consume and return `self`
/// - [`pencelize()`](Self::pencelize) takes `&self`, so one builder serves
///   many images
///
/// # Example
///
/// ```
/// use pencel_core::{Argb32, Pencelizer, PencilPalette, PixelBuffer, Tone};
///
/// let palette = PencilPalette::from_hex(&[
///     ("graphite", "#202020", "#A0A0A0"),
///     ("scarlet", "#D01818", "#F0A0A0"),
/// ])
/// .unwrap();
///
/// let image = PixelBuffer::filled(10, 6, Argb32::from_rgb(210, 30, 30)).unwrap();
/// let grid = Pencelizer::new(palette).size(4, 3).pencelize(&image).unwrap();
///
/// assert_eq!((grid.width(), grid.height()), (4, 3));
/// assert!(grid.matches().iter().all(|m| m.index == 1 && m.tone == Tone::Heavy));
/// ```
#[derive(Debug, Clone)]
pub struct Pencelizer {
    palette: PencilPalette,
    width: u32,
    height: u32,
    kernel: KernelKind,
}

impl Pencelizer {
    /// Create a pencelizer for `palette`.
    ///
    /// Defaults: a 32x32 grid, [`KernelKind::Bilinear`], and the palette's
    /// own distance metric ([`DistanceMetric::Redmean`] unless changed).
    pub fn new(palette: PencilPalette) -> Self {
        Self {
            palette,
            width: DEFAULT_GRID_SIZE,
            height: DEFAULT_GRID_SIZE,
            kernel: KernelKind::default(),
        }
    }

    /// Set the grid dimensions. Zero is rejected by [`pencelize()`](Self::pencelize).
    #[inline]
    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the resampling kernel.
    #[inline]
    pub fn kernel(mut self, kernel: KernelKind) -> Self {
        self.kernel = kernel;
        self
    }

    /// Set the distance metric used for matching.
    #[inline]
    pub fn distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.palette = self.palette.with_distance_metric(metric);
        self
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn kernel_kind(&self) -> KernelKind {
        self.kernel
    }

    #[inline]
    pub fn palette(&self) -> &PencilPalette {
        &self.palette
    }

    /// Resample `image` to the grid size, then match every cell.
    ///
    /// Matches come out in row-major scan order.
    ///
    /// # Errors
    ///
    /// [`PencelError::Resample`] for zero grid dimensions or a kernel other
    /// than [`KernelKind::Bilinear`].
    pub fn pencelize(&self, image: &PixelBuffer) -> Result<SwatchGrid, PencelError> {
        let resized = self.resize(image)?;
        Ok(self.match_buffer(&resized))
    }

    /// Only the resampling step, with the configured size and kernel.
    pub fn resize(&self, image: &PixelBuffer) -> Result<PixelBuffer, PencelError> {
        Ok(image.resample(self.width, self.height, self.kernel)?)
    }

    /// Only the matching step: one match per pixel of `resized`.
    pub fn match_buffer(&self, resized: &PixelBuffer) -> SwatchGrid {
        let pixels: Vec<Argb32> = resized.pixels().collect();
        let matches = self.match_pixels(&pixels);
        SwatchGrid::new(
            matches,
            resized.width() as usize,
            resized.height() as usize,
            self.palette.clone(),
        )
    }

    #[cfg(feature = "parallel")]
    fn match_pixels(&self, pixels: &[Argb32]) -> Vec<MatchResult> {
        pixels
            .par_iter()
            .map(|&px| self.palette.find_nearest(px))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn match_pixels(&self, pixels: &[Argb32]) -> Vec<MatchResult> {
        pixels
            .iter()
            .map(|&px| self.palette.find_nearest(px))
            .collect()
    }
}
