//! Pencil palettes and nearest-color matching
//!
//! A palette is an ordered list of [`PencilEntry`] values, each carrying a
//! heavy and a light trace color. [`best_match`] and
//! [`PencilPalette::find_nearest`] pick the closest trace for a pixel.

mod entry;
mod error;
mod palette;

pub use entry::{PencilEntry, Tone};
pub use error::{PaletteError, ParseColorError};
pub use palette::{best_match, DistanceMetric, MatchResult, PencilPalette};
