#![allow(clippy::module_inception)]

//! pencel-core: turn images into grids of colored-pencil swatches
//!
//! The crate resamples an RGB image down (or up) to a small fixed grid and
//! matches every grid cell against a palette of two-tone pencils. Each
//! pencil has a heavy trace (firm pressure) and a light trace (soft
//! pressure), so a palette of `n` pencils offers `2n` candidate colors.
//!
//! # Quick Start
//!
//! The [`Pencelizer`] builder is the primary entry point:
//!
//! ```
//! use pencel_core::{Argb32, Pencelizer, PencilPalette, PixelBuffer};
//!
//! let palette = PencilPalette::from_hex(&[
//!     ("graphite", "#2A2A2A", "#9A9A9A"),
//!     ("sky", "#1F5FBF", "#A8C8F0"),
//! ])
//! .unwrap();
//!
//! let image = PixelBuffer::filled(64, 48, Argb32::from_rgb(160, 200, 240)).unwrap();
//! let grid = Pencelizer::new(palette).size(8, 6).pencelize(&image).unwrap();
//!
//! assert_eq!(grid.matches().len(), 8 * 6);
//! assert_eq!(grid.palette().entry(grid.matches()[0].index).name, "sky");
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGB24 bytes (w x h)
//!     |
//!     v
//! horizontal pass          (bilinear, w -> grid width, per row)
//!     |
//!     v
//! vertical pass            (bilinear, h -> grid height, per column)
//!     |
//!     v
//! find_nearest per cell    (heavy then light, entries in list order)
//!     |
//!     v
//! SwatchGrid               (row-major MatchResult records + palette)
//! ```
//!
//! # Resampling
//!
//! [`resample_rgb24`] is a separable two-pass resampler. Destination pixel
//! `i` samples source coordinate `i * (src - 1) / (dst - 1)`, so the first
//! and last destination pixels land exactly on the source edges and the
//! corners survive unchanged. A one-pixel destination samples index 0.
//! Results are truncated toward zero per channel.
//!
//! [`KernelKind`] names fourteen kernels but only
//! [`Bilinear`](KernelKind::Bilinear) carries a sampler. Asking for any other
//! kernel fails with [`ResampleError::UnsupportedKernel`], which is distinct
//! from [`ResampleError::InvalidParameter`].
//!
//! # Matching
//!
//! Candidates are scanned as `(0, heavy), (0, light), (1, heavy), ...` and
//! the best match only changes on a strictly smaller distance. The first
//! candidate reaching the minimum wins every tie, so list order is the
//! priority order of a palette.
//!
//! Two metrics are available via [`DistanceMetric`]:
//!
//! - `Redmean` (default): weighted Euclidean distance over 8-bit sRGB
//! - `Oklab`: Euclidean distance in Oklab
//!
//! # Features
//!
//! - `parallel`: split resampling rows and per-cell matching across a rayon
//!   pool. Output is identical to the sequential build.

pub mod api;
pub mod color;
pub mod output;
pub mod palette;
pub mod resample;


pub use api::{PencelError, Pencelizer, DEFAULT_GRID_SIZE};
pub use color::{Argb32, Oklab};
pub use output::SwatchGrid;
pub use palette::{
    best_match, DistanceMetric, MatchResult, PaletteError, ParseColorError, PencilEntry,
    PencilPalette, Tone,
};
pub use resample::{
    resample_rgb24, KernelKind, PixelBuffer, ResampleError, UnknownKernel, CHANNELS,
};
