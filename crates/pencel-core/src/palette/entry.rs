//! Pencil entries and their two tones.

use std::fmt;

use crate::color::Argb32;

/// Which trace of a pencil was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Firm pressure, the saturated trace
    Heavy,
    /// Soft pressure, the pale trace
    Light,
}

impl Tone {
    /// Candidate order within one entry. Heavy is always scored first.
    pub const ORDER: [Tone; 2] = [Tone::Heavy, Tone::Light];

    #[inline]
    pub fn is_heavy(self) -> bool {
        matches!(self, Tone::Heavy)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Heavy => f.write_str("heavy"),
            Tone::Light => f.write_str("light"),
        }
    }
}

/// One pencil: a name plus the colors of its heavy and light traces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PencilEntry {
    pub name: String,
    pub heavy: Argb32,
    pub light: Argb32,
}

impl PencilEntry {
    pub fn new(name: impl Into<String>, heavy: Argb32, light: Argb32) -> Self {
        Self {
            name: name.into(),
            heavy,
            light,
        }
    }

    /// Color of the given trace.
    #[inline]
    pub fn tone(&self, tone: Tone) -> Argb32 {
        match tone {
            Tone::Heavy => self.heavy,
            Tone::Light => self.light,
        }
    }
}
