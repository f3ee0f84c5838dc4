pub mod console;

pub use console::{render_grid, render_kernels, render_palette, render_pixels, ConsoleStyle};
