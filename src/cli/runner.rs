use std::env;
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use squircle_iconset::{IconsetParams, Progress, generate_icon_set_with_progress};

use super::args::CliArgs;
use super::errors::AppError;
use super::source::{DEFAULT_ASSET_DIR, default_candidates, resolve_source};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("squircle_iconset=debug,info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging();
    }

    if !args.smoothness.is_finite() || args.smoothness <= 0.0 {
        return Err(AppError::InvalidSmoothness {
            value: args.smoothness,
        });
    }

    let base_dir = env::current_dir()?;
    let output_dir: PathBuf = args
        .output_dir
        .unwrap_or_else(|| base_dir.join(DEFAULT_ASSET_DIR));

    let candidates = default_candidates(&base_dir, &output_dir);
    let source = resolve_source(args.source.as_deref(), &candidates)?;
    info!("Resolved source image: {:?}", source);

    let params = IconsetParams {
        smoothness: args.smoothness,
        mask_strategy: args.mask_strategy,
        filter: args.filter,
    };
    info!(
        "Parameters: smoothness={}, mask={}, filter={}",
        params.smoothness, params.mask_strategy, params.filter
    );

    let report = generate_icon_set_with_progress(&source, &output_dir, &params, |stage| {
        match stage {
            Progress::Loading(path) => println!("Loading source image: {}", path.display()),
            Progress::Masking => println!("Applying squircle mask..."),
            Progress::Written(icon) => println!(
                "  Generated: {} ({}x{})",
                icon.file_name, icon.pixel_size, icon.pixel_size
            ),
        }
    })?;

    println!("\nAll icons generated in: {}", report.output_dir.display());
    println!(
        "\nNote: The squircle shape uses Apple's superellipse formula (n={})",
        params.smoothness
    );
    println!("This ensures correct corner radius on all macOS versions.");

    Ok(())
}
