//! Public API for the pencel-core crate.
//!
//! This module provides the high-level API: the [`Pencelizer`] builder and
//! the [`PencelError`] unified error type.

mod builder;
mod error;

pub use builder::{Pencelizer, DEFAULT_GRID_SIZE};
pub use error::PencelError;
