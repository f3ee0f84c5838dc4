use std::path::{Path, PathBuf};

use pencel_core::{PencelError, Pencelizer, PixelBuffer, SwatchGrid};

use crate::error::LoadError;
use crate::models::RenderSettings;
use crate::rendering::{render_grid, render_pixels, ConsoleStyle};
use crate::services::{decode_png_file, load_palette};

/// Result from running the pipeline on one image
pub struct PipelineResult {
    /// Source image resampled to the grid size
    pub resized: PixelBuffer,
    /// Matched swatches
    pub grid: SwatchGrid,
}

impl PipelineResult {
    /// Terminal text: the optional source preview, then the swatch grid.
    pub fn render(&self, style: ConsoleStyle, show_source: bool) -> String {
        let mut out = String::new();
        if show_source {
            out.push_str(&render_pixels(&self.resized, style));
            out.push('\n');
        }
        out.push_str(&render_grid(&self.grid, style));
        out
    }
}

/// Error from the pipeline
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("No {0} given (set it in the config or pass --{0})")]
    MissingInput(&'static str),

    #[error("Failed to load {}: {source}", .path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadError,
    },

    #[error("Pencelize error: {0}")]
    Pencelize(#[from] PencelError),
}

/// Pipeline that orchestrates decode → resample → match
pub struct PencelPipeline {
    pencelizer: Pencelizer,
}

impl PencelPipeline {
    /// Load the palette named in `settings` and configure the pencelizer.
    pub fn new(settings: &RenderSettings) -> Result<Self, PipelineError> {
        let palette_path = settings
            .palette
            .as_deref()
            .ok_or(PipelineError::MissingInput("palette"))?;
        let palette = load_palette(palette_path).map_err(|source| PipelineError::Load {
            path: palette_path.to_path_buf(),
            source,
        })?;

        let pencelizer = Pencelizer::new(palette)
            .size(settings.width, settings.height)
            .kernel(settings.kernel)
            .distance_metric(settings.metric);

        Ok(Self { pencelizer })
    }

    pub fn pencelizer(&self) -> &Pencelizer {
        &self.pencelizer
    }

    /// Decode the PNG at `path` and run it through the pencelizer.
    pub fn run_file(&self, path: &Path) -> Result<PipelineResult, PipelineError> {
        let image = decode_png_file(path).map_err(|source| PipelineError::Load {
            path: path.to_path_buf(),
            source,
        })?;
        self.run(&image)
    }

    /// Run an already decoded image.
    pub fn run(&self, image: &PixelBuffer) -> Result<PipelineResult, PipelineError> {
        let resized = self.pencelizer.resize(image)?;
        let grid = self.pencelizer.match_buffer(&resized);

        tracing::info!(
            width = grid.width(),
            height = grid.height(),
            kernel = %self.pencelizer.kernel_kind(),
            metric = %self.pencelizer.palette().distance_metric(),
            "Pencelized image"
        );

        Ok(PipelineResult { resized, grid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pencel_core::{Argb32, DistanceMetric, KernelKind, ResampleError};

    fn settings(palette: Option<PathBuf>) -> RenderSettings {
        RenderSettings {
            image: None,
            palette,
            width: 4,
            height: 2,
            kernel: KernelKind::Bilinear,
            metric: DistanceMetric::Redmean,
            show_source: false,
        }
    }

    fn write_palette(dir: &Path) -> PathBuf {
        let path = dir.join("pencils.txt");
        std::fs::write(&path, "ink 101010 606060\npaper F8F8F8 C8C8C8\n").unwrap();
        path
    }

    #[test]
    fn test_missing_palette_setting() {
        let err = PencelPipeline::new(&settings(None)).err().unwrap();
        assert!(matches!(err, PipelineError::MissingInput("palette")));
        assert_eq!(
            err.to_string(),
            "No palette given (set it in the config or pass --palette)"
        );
    }

    #[test]
    fn test_palette_load_failure_names_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.txt");
        let err = PencelPipeline::new(&settings(Some(path.clone()))).err().unwrap();
        assert!(err.to_string().contains("absent.txt"), "{err}");
    }

    #[test]
    fn test_run_in_memory_image() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = PencelPipeline::new(&settings(Some(write_palette(dir.path())))).unwrap();

        let image = PixelBuffer::filled(9, 9, Argb32::from_rgb(200, 200, 200)).unwrap();
        let result = pipeline.run(&image).unwrap();
        assert_eq!((result.resized.width(), result.resized.height()), (4, 2));
        assert!(result
            .grid
            .matches()
            .iter()
            .all(|m| m.index == 1 && !m.is_heavy()));

        let text = result.render(ConsoleStyle::Plain, true);
        assert_eq!(
            text,
            "#C8C8C8 #C8C8C8 #C8C8C8 #C8C8C8\n#C8C8C8 #C8C8C8 #C8C8C8 #C8C8C8\n\n\
             #C8C8C8 #C8C8C8 #C8C8C8 #C8C8C8\n#C8C8C8 #C8C8C8 #C8C8C8 #C8C8C8\n"
        );
    }

    #[test]
    fn test_unsupported_kernel_fails_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = settings(Some(write_palette(dir.path())));
        s.kernel = KernelKind::Gaussian;
        let pipeline = PencelPipeline::new(&s).unwrap();

        let image = PixelBuffer::filled(3, 3, Argb32::BLACK).unwrap();
        let err = pipeline.run(&image).err().unwrap();
        assert!(matches!(
            err,
            PipelineError::Pencelize(PencelError::Resample(ResampleError::UnsupportedKernel(
                KernelKind::Gaussian
            )))
        ));
    }
}
