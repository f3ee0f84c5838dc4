use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pencel::models::{AppConfig, RenderOverrides, CONFIG_ENV};
use pencel::rendering::{render_kernels, render_palette, ConsoleStyle};
use pencel::services::{load_palette, PencelPipeline, PipelineError};

#[derive(Parser)]
#[command(name = "pencel")]
#[command(about = "Render images as grids of colored-pencil swatches")]
struct Cli {
    /// Config file (default: pencel.yaml, or $PENCEL_CONFIG)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resample an image and print it as pencil swatches
    Render {
        /// PNG image to render
        #[arg(short, long)]
        image: Option<PathBuf>,

        /// Palette file (`<name> <heavy-hex> <light-hex>` per line)
        #[arg(short, long)]
        palette: Option<PathBuf>,

        /// Grid width in swatches
        #[arg(long)]
        width: Option<u32>,

        /// Grid height in swatches
        #[arg(long)]
        height: Option<u32>,

        /// Resampling kernel (see `pencel kernels`)
        #[arg(short, long)]
        kernel: Option<String>,

        /// Color distance metric: redmean or oklab
        #[arg(short, long)]
        metric: Option<String>,

        /// Also print the resized source image
        #[arg(long)]
        source: bool,

        /// Print #RRGGBB codes instead of ANSI colors
        #[arg(long)]
        plain: bool,
    },
    /// Load a palette file and print its swatches
    Palette {
        /// Palette file (falls back to the config)
        path: Option<PathBuf>,

        /// Print #RRGGBB codes instead of ANSI colors
        #[arg(long)]
        plain: bool,
    },
    /// List resampling kernels
    Kernels,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the rendering
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pencel=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let config_path = cli
        .config
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
    let config = AppConfig::load(config_path.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Render {
            image,
            palette,
            width,
            height,
            kernel,
            metric,
            source,
            plain,
        } => run_render_command(
            &config,
            RenderOverrides {
                image,
                palette,
                width,
                height,
                kernel,
                metric,
                show_source: source,
            },
            style(plain),
        ),
        Commands::Palette { path, plain } => run_palette_command(&config, path, style(plain)),
        Commands::Kernels => {
            print!("{}", render_kernels());
            Ok(())
        }
    }
}

fn style(plain: bool) -> ConsoleStyle {
    if plain {
        ConsoleStyle::Plain
    } else {
        ConsoleStyle::TrueColor
    }
}

/// Load, pencelize and print one image
fn run_render_command(
    config: &AppConfig,
    overrides: RenderOverrides,
    style: ConsoleStyle,
) -> anyhow::Result<()> {
    let settings = config.resolve(&overrides)?;
    tracing::debug!(?settings, "Resolved render settings");

    let pipeline = PencelPipeline::new(&settings)?;
    let image = settings
        .image
        .as_deref()
        .ok_or(PipelineError::MissingInput("image"))?;
    let result = pipeline
        .run_file(image)
        .with_context(|| format!("Failed to render {}", image.display()))?;

    print!("{}", result.render(style, settings.show_source));
    Ok(())
}

/// Print the swatches of a palette file
fn run_palette_command(
    config: &AppConfig,
    path: Option<PathBuf>,
    style: ConsoleStyle,
) -> anyhow::Result<()> {
    let path = path
        .or_else(|| config.palette.clone())
        .ok_or(PipelineError::MissingInput("palette"))?;
    let palette =
        load_palette(&path).with_context(|| format!("Failed to load {}", path.display()))?;

    print!("{}", render_palette(&palette, style));
    Ok(())
}
