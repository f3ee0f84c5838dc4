pub mod image_loader;
pub mod palette_loader;
pub mod pipeline;

pub use image_loader::{decode_png, decode_png_file};
pub use palette_loader::{load_palette, parse_palette};
pub use pipeline::{PencelPipeline, PipelineError, PipelineResult};
