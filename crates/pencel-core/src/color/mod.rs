//! Color types used by the matcher
//!
//! - [`Argb32`]: packed 8-bit sRGB, the representation palettes and pixels
//!   share. Alpha is always opaque.
//! - [`Oklab`]: perceptual space backing [`DistanceMetric::Oklab`].
//!
//! # Example
//!
//! ```
//! use pencel_core::{Argb32, Oklab};
//!
//! let orange: Argb32 = "#FF8000".parse().unwrap();
//! assert_eq!(orange.rgb(), [255, 128, 0]);
//!
//! let lab = Oklab::from(orange);
//! assert!(lab.l > 0.5);
//! ```
//!
//! [`DistanceMetric::Oklab`]: crate::palette::DistanceMetric::Oklab

mod argb;
mod oklab;

pub use argb::Argb32;
pub use oklab::Oklab;
