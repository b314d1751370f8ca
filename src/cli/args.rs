use clap::Parser;
use std::path::PathBuf;

use squircle_iconset::{DEFAULT_SMOOTHNESS, MaskStrategy, ResampleFilter};

#[derive(Parser)]
#[command(
    name = "squircle-iconset",
    version,
    about = "Generate macOS app icons masked to the squircle (superellipse) shape"
)]
pub struct CliArgs {
    /// Source image. Defaults to ./icon.png, then icon_512x512@2x.png and
    /// icon_512x512.png inside the output directory
    pub source: Option<PathBuf>,

    /// Output directory for the generated icons
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Superellipse exponent (5 reproduces the macOS squircle)
    #[arg(long, default_value_t = DEFAULT_SMOOTHNESS)]
    pub smoothness: f64,

    /// Mask evaluation strategy (scalar or vectorized); both produce the same mask
    #[arg(long, value_enum, default_value_t = MaskStrategy::Vectorized)]
    pub mask_strategy: MaskStrategy,

    /// Resampling filter for the downscaled icons
    #[arg(long, value_enum, default_value_t = ResampleFilter::Lanczos3)]
    pub filter: ResampleFilter,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
