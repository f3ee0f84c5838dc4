//! SwatchGrid: per-cell match records with their palette.

use crate::color::Argb32;
use crate::palette::{MatchResult, PencilPalette};

/// The output of the pencelize pipeline.
///
/// Stores one [`MatchResult`] per grid cell in row-major order (row 0 left
/// to right, then row 1, ...), the grid dimensions, and the palette the
/// matches index into.
///
/// # Example
///
/// ```
/// use pencel_core::{Argb32, MatchResult, PencilPalette, SwatchGrid, Tone};
///
/// let palette = PencilPalette::from_hex(&[("ink", "#000000", "#808080")]).unwrap();
/// let light = MatchResult { index: 0, tone: Tone::Light, distance: 0.0 };
/// let grid = SwatchGrid::new(vec![light; 2], 2, 1, palette);
///
/// assert_eq!(grid.to_rgb(), vec![128, 128, 128, 128, 128, 128]);
/// ```
#[derive(Debug, Clone)]
pub struct SwatchGrid {
    matches: Vec<MatchResult>,
    width: usize,
    height: usize,
    palette: PencilPalette,
}

impl SwatchGrid {
    /// Wrap row-major match records.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `matches.len() == width * height`.
    pub fn new(matches: Vec<MatchResult>, width: usize, height: usize, palette: PencilPalette) -> Self {
        debug_assert_eq!(
            matches.len(),
            width * height,
            "matches length ({}) must match width * height ({}x{})",
            matches.len(),
            width,
            height,
        );
        Self {
            matches,
            width,
            height,
            palette,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn palette(&self) -> &PencilPalette {
        &self.palette
    }

    /// All match records in row-major scan order.
    #[inline]
    pub fn matches(&self) -> &[MatchResult] {
        &self.matches
    }

    /// The match at column `x`, row `y`, if inside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<&MatchResult> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.matches.get(y * self.width + x)
    }

    /// One slice of matches per grid row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[MatchResult]> + '_ {
        self.matches.chunks(self.width.max(1))
    }

    /// Display color of every cell, row-major.
    pub fn colors(&self) -> Vec<Argb32> {
        self.matches.iter().map(|m| self.palette.color(m)).collect()
    }

    /// Display colors as flat `[R, G, B, ...]` bytes, `width * height * 3` long.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.matches.len() * 3);
        for m in &self.matches {
            rgb.extend_from_slice(&self.palette.color(m).rgb());
        }
        rgb
    }
}
