//! Pencel - colored-pencil swatch renderer
//!
//! Loads a PNG and a pencil palette, runs them through `pencel-core`, and
//! draws the result in the terminal.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
