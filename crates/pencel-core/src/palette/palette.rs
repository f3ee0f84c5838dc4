//! Pencil palette with nearest-color matching.
//!
//! Every entry contributes two candidates, its heavy trace and its light
//! trace. Matching scans the flattened candidate list
//! `(0, heavy), (0, light), (1, heavy), ...` against one running minimum and
//! only replaces the best candidate on a strictly smaller distance, so the
//! first candidate reaching the minimum wins every tie.

use super::entry::{PencilEntry, Tone};
use super::error::PaletteError;
use crate::color::{Argb32, Oklab};

/// Distance metric for palette color matching.
///
/// Both metrics are symmetric, non-negative, and zero exactly when the two
/// colors have the same RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// Weighted Euclidean distance over 8-bit sRGB ("redmean").
    ///
    /// With `r̄ = (r1 + r2) / 2`:
    ///
    /// `sqrt((2 + r̄/256)·ΔR² + 4·ΔG² + (2 + (255 - r̄)/256)·ΔB²)`
    ///
    /// Green weighs most, and red and blue trade weight depending on how red
    /// the pair is. Cheap, and far closer to perception than plain RGB.
    #[default]
    Redmean,

    /// Euclidean distance in Oklab space.
    Oklab,
}

impl DistanceMetric {
    /// Distance between two colors under this metric.
    ///
    /// ```
    /// use pencel_core::{Argb32, DistanceMetric};
    ///
    /// let a = Argb32::from_rgb(200, 30, 30);
    /// let b = Argb32::from_rgb(180, 60, 20);
    /// let d = DistanceMetric::Redmean.distance(a, b);
    /// assert!(d > 0.0);
    /// assert_eq!(d, DistanceMetric::Redmean.distance(b, a));
    /// assert_eq!(DistanceMetric::Oklab.distance(a, a), 0.0);
    /// ```
    pub fn distance(self, a: Argb32, b: Argb32) -> f32 {
        match self {
            DistanceMetric::Redmean => redmean(a, b),
            DistanceMetric::Oklab => Oklab::from(a).distance(Oklab::from(b)),
        }
    }

    /// Kebab-case identifier, as accepted by [`FromStr`](std::str::FromStr).
    pub fn name(self) -> &'static str {
        match self {
            DistanceMetric::Redmean => "redmean",
            DistanceMetric::Oklab => "oklab",
        }
    }
}

impl std::fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for DistanceMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redmean" => Ok(DistanceMetric::Redmean),
            "oklab" => Ok(DistanceMetric::Oklab),
            other => Err(format!("unknown distance metric '{}'", other)),
        }
    }
}

#[inline]
fn redmean(a: Argb32, b: Argb32) -> f32 {
    let (r1, g1, b1) = (a.r() as f32, a.g() as f32, a.b() as f32);
    let (r2, g2, b2) = (b.r() as f32, b.g() as f32, b.b() as f32);
    let rmean = (r1 + r2) / 2.0;
    let dr = r1 - r2;
    let dg = g1 - g2;
    let db = b1 - b2;
    ((2.0 + rmean / 256.0) * dr * dr + 4.0 * dg * dg + (2.0 + (255.0 - rmean) / 256.0) * db * db)
        .sqrt()
}

/// The palette entry and trace closest to one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    /// Index into the palette's entry list
    pub index: usize,
    /// Which trace of that entry
    pub tone: Tone,
    /// Distance between the pixel and the selected trace
    pub distance: f32,
}

impl MatchResult {
    #[inline]
    pub fn is_heavy(&self) -> bool {
        self.tone.is_heavy()
    }
}

/// Keep the first candidate with the smallest distance.
fn scan_candidates(candidates: impl Iterator<Item = (usize, Tone, f32)>) -> Option<MatchResult> {
    let mut best: Option<MatchResult> = None;
    for (index, tone, distance) in candidates {
        match best {
            Some(ref b) if distance >= b.distance => {}
            _ => {
                best = Some(MatchResult {
                    index,
                    tone,
                    distance,
                })
            }
        }
    }
    best
}

/// Flattened `(entry index, tone, color)` candidates in scan order.
fn candidates(entries: &[PencilEntry]) -> impl Iterator<Item = (usize, Tone, Argb32)> + '_ {
    entries.iter().enumerate().flat_map(|(index, entry)| {
        Tone::ORDER
            .into_iter()
            .map(move |tone| (index, tone, entry.tone(tone)))
    })
}

/// Find the entry and trace closest to `pixel`.
///
/// Linear scan in list order, heavy before light. The first candidate that
/// reaches the minimum distance wins ties.
///
/// # Errors
///
/// [`PaletteError::EmptyPalette`] if `entries` is empty.
///
/// # Example
///
/// ```
/// use pencel_core::{best_match, Argb32, DistanceMetric, PencilEntry, Tone};
///
/// let entries = [
///     PencilEntry::new("A", Argb32::from_packed(0xFF0000), Argb32::from_packed(0xFF0000)),
///     PencilEntry::new("B", Argb32::from_packed(0xFF0000), Argb32::from_packed(0x000000)),
/// ];
/// let m = best_match(Argb32::from_packed(0xFF0000), &entries, DistanceMetric::Redmean).unwrap();
/// assert_eq!((m.index, m.tone), (0, Tone::Heavy));
/// assert_eq!(m.distance, 0.0);
/// ```
pub fn best_match(
    pixel: Argb32,
    entries: &[PencilEntry],
    metric: DistanceMetric,
) -> Result<MatchResult, PaletteError> {
    scan_candidates(
        candidates(entries).map(|(index, tone, color)| (index, tone, metric.distance(pixel, color))),
    )
    .ok_or(PaletteError::EmptyPalette)
}

/// An ordered, non-empty list of pencils ready for matching.
///
/// Oklab values of both traces are computed once at construction, so
/// per-pixel matching under [`DistanceMetric::Oklab`] converts only the
/// pixel.
///
/// Duplicate colors are allowed. Order decides ties.
///
/// # Example
///
/// ```
/// use pencel_core::{Argb32, PencilEntry, PencilPalette, Tone};
///
/// let palette = PencilPalette::new(vec![
///     PencilEntry::new("graphite", Argb32::from_rgb(40, 40, 40), Argb32::from_rgb(150, 150, 150)),
///     PencilEntry::new("scarlet", Argb32::from_rgb(220, 20, 30), Argb32::from_rgb(240, 150, 150)),
/// ])
/// .unwrap();
///
/// let m = palette.find_nearest(Argb32::from_rgb(235, 140, 145));
/// assert_eq!(palette.entry(m.index).name, "scarlet");
/// assert_eq!(m.tone, Tone::Light);
/// ```
#[derive(Debug, Clone)]
pub struct PencilPalette {
    entries: Vec<PencilEntry>,
    // [heavy, light] per entry
    oklab: Vec<[Oklab; 2]>,
    distance_metric: DistanceMetric,
}

impl PencilPalette {
    /// Build a palette from entries in match order.
    ///
    /// # Errors
    ///
    /// [`PaletteError::EmptyPalette`] if `entries` is empty.
    pub fn new(entries: Vec<PencilEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let oklab = entries
            .iter()
            .map(|e| [Oklab::from(e.heavy), Oklab::from(e.light)])
            .collect();

        Ok(Self {
            entries,
            oklab,
            distance_metric: DistanceMetric::default(),
        })
    }

    /// Build a palette from `(name, heavy hex, light hex)` triples.
    ///
    /// # Errors
    ///
    /// [`PaletteError::ParseColor`] for malformed hex, or
    /// [`PaletteError::EmptyPalette`].
    ///
    /// ```
    /// use pencel_core::PencilPalette;
    ///
    /// let palette = PencilPalette::from_hex(&[
    ///     ("ink", "#101018", "#5A5A70"),
    ///     ("leaf", "#1E7A2E", "#9CD3A4"),
    /// ])
    /// .unwrap();
    /// assert_eq!(palette.len(), 2);
    /// ```
    pub fn from_hex(entries: &[(&str, &str, &str)]) -> Result<Self, PaletteError> {
        let entries = entries
            .iter()
            .map(|&(name, heavy, light)| -> Result<PencilEntry, PaletteError> {
                Ok(PencilEntry::new(name, heavy.parse()?, light.parse()?))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }

    /// Override the default [`DistanceMetric::Redmean`].
    pub fn with_distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.distance_metric = metric;
        self
    }

    #[inline]
    pub fn distance_metric(&self) -> DistanceMetric {
        self.distance_metric
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entries(&self) -> &[PencilEntry] {
        &self.entries
    }

    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    #[inline]
    pub fn entry(&self, index: usize) -> &PencilEntry {
        &self.entries[index]
    }

    /// The display color a match refers to.
    #[inline]
    pub fn color(&self, m: &MatchResult) -> Argb32 {
        self.entries[m.index].tone(m.tone)
    }

    /// Find the entry and trace closest to `pixel`.
    ///
    /// Same scan and tie-break as [`best_match`], using the precomputed
    /// palette values.
    pub fn find_nearest(&self, pixel: Argb32) -> MatchResult {
        let best = match self.distance_metric {
            DistanceMetric::Redmean => scan_candidates(
                candidates(&self.entries)
                    .map(|(index, tone, color)| (index, tone, redmean(pixel, color))),
            ),
            DistanceMetric::Oklab => {
                let lab = Oklab::from(pixel);
                scan_candidates(self.oklab.iter().enumerate().flat_map(|(index, pair)| {
                    Tone::ORDER
                        .into_iter()
                        .zip(pair.iter())
                        .map(move |(tone, other)| (index, tone, lab.distance(*other)))
                }))
            }
        };
        // Construction guarantees at least one entry, hence one candidate.
        best.unwrap_or(MatchResult {
            index: 0,
            tone: Tone::Heavy,
            distance: f32::INFINITY,
        })
    }
}
