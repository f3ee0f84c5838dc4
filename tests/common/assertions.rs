//! Assertion helpers for tests.

use pretty_assertions::assert_eq;

/// Parse the swatch colors out of one true-color line.
///
/// Expects `ESC[38;2;R;G;Bm` followed by the cell glyph, repeated, then the
/// reset escape.
pub fn swatch_colors(line: &str) -> Vec<[u8; 3]> {
    line.split("\x1b[38;2;")
        .skip(1)
        .map(|chunk| {
            let end = chunk.find('m').expect("unterminated escape");
            let parts: Vec<u8> = chunk[..end]
                .split(';')
                .map(|v| v.parse().expect("channel value"))
                .collect();
            assert_eq!(parts.len(), 3, "escape {chunk:?}");
            [parts[0], parts[1], parts[2]]
        })
        .collect()
}

/// Assert `text` is a true-color grid of `width` x `height` cells.
pub fn assert_grid_shape(text: &str, width: usize, height: usize) {
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), height, "row count in:\n{text}");
    for (row, line) in lines.iter().enumerate() {
        assert!(line.ends_with("\x1b[0m"), "row {row} not reset: {line:?}");
        assert_eq!(swatch_colors(line).len(), width, "cells in row {row}");
    }
}
