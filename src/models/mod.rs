pub mod config;

pub use config::{AppConfig, RenderOverrides, RenderSettings, CONFIG_ENV, DEFAULT_CONFIG_FILE};
