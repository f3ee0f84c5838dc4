use std::path::{Path, PathBuf};

use pencel_core::{DistanceMetric, KernelKind, DEFAULT_GRID_SIZE};
use serde::Deserialize;

use crate::error::ConfigError;

/// Config file read from the working directory when none is requested.
pub const DEFAULT_CONFIG_FILE: &str = "pencel.yaml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "PENCEL_CONFIG";

/// Application configuration loaded from pencel.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// PNG image to render
    #[serde(default)]
    pub image: Option<PathBuf>,

    /// Palette file (`<name> <heavy> <light>` per line)
    #[serde(default)]
    pub palette: Option<PathBuf>,

    /// Grid width in swatches
    #[serde(default = "default_grid_size")]
    pub width: u32,

    /// Grid height in swatches
    #[serde(default = "default_grid_size")]
    pub height: u32,

    /// Resampling kernel name
    #[serde(default = "default_kernel")]
    pub kernel: String,

    /// Distance metric name
    #[serde(default = "default_metric")]
    pub metric: String,

    /// Also print the resized source pixels
    #[serde(default)]
    pub show_source: bool,
}

fn default_grid_size() -> u32 {
    DEFAULT_GRID_SIZE
}

fn default_kernel() -> String {
    KernelKind::default().name().to_string()
}

fn default_metric() -> String {
    DistanceMetric::default().name().to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            image: None,
            palette: None,
            width: default_grid_size(),
            height: default_grid_size(),
            kernel: default_kernel(),
            metric: default_metric(),
            show_source: false,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default, Clone)]
pub struct RenderOverrides {
    pub image: Option<PathBuf>,
    pub palette: Option<PathBuf>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub kernel: Option<String>,
    pub metric: Option<String>,
    pub show_source: bool,
}

/// Fully resolved settings for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub image: Option<PathBuf>,
    pub palette: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub kernel: KernelKind,
    pub metric: DistanceMetric,
    pub show_source: bool,
}

impl AppConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load configuration from an explicit file. Failures are errors.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load configuration.
    ///
    /// An `explicit` path (from `--config` or `PENCEL_CONFIG`) must load.
    /// Otherwise `pencel.yaml` in the working directory is used if present,
    /// and a broken one only produces a warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }

        let path = Path::new(DEFAULT_CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
            return Ok(Self::default());
        }

        match Self::load_file(path) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(%e, "Failed to load config, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Resolve the kernel name.
    pub fn kernel_kind(&self) -> Result<KernelKind, ConfigError> {
        Ok(self.kernel.parse::<KernelKind>()?)
    }

    /// Resolve the metric name.
    pub fn distance_metric(&self) -> Result<DistanceMetric, ConfigError> {
        self.metric
            .parse()
            .map_err(|_| ConfigError::InvalidMetric(self.metric.clone()))
    }

    /// Merge command-line overrides over this config.
    pub fn resolve(&self, overrides: &RenderOverrides) -> Result<RenderSettings, ConfigError> {
        let merged = AppConfig {
            image: overrides.image.clone().or_else(|| self.image.clone()),
            palette: overrides.palette.clone().or_else(|| self.palette.clone()),
            width: overrides.width.unwrap_or(self.width),
            height: overrides.height.unwrap_or(self.height),
            kernel: overrides.kernel.clone().unwrap_or_else(|| self.kernel.clone()),
            metric: overrides.metric.clone().unwrap_or_else(|| self.metric.clone()),
            show_source: overrides.show_source || self.show_source,
        };

        Ok(RenderSettings {
            kernel: merged.kernel_kind()?,
            metric: merged.distance_metric()?,
            image: merged.image,
            palette: merged.palette,
            width: merged.width,
            height: merged.height,
            show_source: merged.show_source,
        })
    }
}
