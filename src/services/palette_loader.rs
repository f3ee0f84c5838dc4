//! Palette text files.
//!
//! One pencil per line, three whitespace-separated fields:
//!
//! ```text
//! graphite  2B2B2B  8E8E8E
//! scarlet   #C8102E #F2A0A8
//! ```
//!
//! Colors are hex `RRGGBB` (or `RGB`, `AARRGGBB`), optionally prefixed by
//! `#` or `0x`. Blank lines are skipped. Line order is match priority.

use std::path::Path;

use pencel_core::{Argb32, PencilEntry, PencilPalette};

use crate::error::LoadError;

/// Read and parse a palette file.
pub fn load_palette(path: &Path) -> Result<PencilPalette, LoadError> {
    let content = std::fs::read_to_string(path)?;
    let palette = parse_palette(&content, path)?;
    tracing::info!(
        path = %path.display(),
        entries = palette.len(),
        "Loaded palette"
    );
    Ok(palette)
}

/// Parse palette text. `path` only labels errors.
pub fn parse_palette(content: &str, path: &Path) -> Result<PencilPalette, LoadError> {
    let mut entries = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        let fail = |reason: String| LoadError::Palette {
            path: path.to_path_buf(),
            line: line_no,
            reason,
        };

        let &[name, heavy, light] = fields.as_slice() else {
            return Err(fail(format!(
                "expected 3 fields (name heavy light), found {}",
                fields.len()
            )));
        };

        let heavy: Argb32 = heavy
            .parse()
            .map_err(|e| fail(format!("invalid heavy color '{heavy}': {e}")))?;
        let light: Argb32 = light
            .parse()
            .map_err(|e| fail(format!("invalid light color '{light}': {e}")))?;

        tracing::debug!(line = line_no, name, %heavy, %light, "Palette entry");
        entries.push(PencilEntry::new(name, heavy, light));
    }

    PencilPalette::new(entries).map_err(|_| LoadError::EmptyPalette)
}
