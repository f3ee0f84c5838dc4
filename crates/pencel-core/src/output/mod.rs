//! Pipeline output
//!
//! [`SwatchGrid`] holds one match record per grid cell and resolves each
//! record back to its display color.

mod swatch_grid;

pub use swatch_grid::SwatchGrid;
