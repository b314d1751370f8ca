//! High-level, ergonomic library API: mask an image in memory, or run the whole
//! source-to-iconset pipeline. Prefer these entrypoints over the low-level
//! processing modules when integrating the crate.
use std::path::{Path, PathBuf};

use image::{DynamicImage, RgbaImage};
use tracing::info;

use crate::core::params::IconsetParams;
use crate::core::processing::apply::apply_squircle_mask;
use crate::core::processing::emit::{GeneratedIcon, emit_icon_set};
use crate::error::Result;
use crate::io::load_source_image;

/// Outcome of a full icon-set run
#[derive(Debug, Clone)]
pub struct IconSetReport {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    /// Side of the masked working image the icons were resampled from
    pub masked_size: u32,
    pub icons: Vec<GeneratedIcon>,
}

/// Stage notifications emitted by [`generate_icon_set_with_progress`].
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    Loading(&'a Path),
    Masking,
    Written(&'a GeneratedIcon),
}

/// Crop `image` to a centered square and apply the squircle mask (no disk I/O)
pub fn mask_image(image: &DynamicImage, params: &IconsetParams) -> Result<RgbaImage> {
    apply_squircle_mask(image, params.smoothness, params.mask_strategy)
}

/// Load `source`, mask it, and write every catalog icon into `output_dir`
pub fn generate_icon_set(
    source: &Path,
    output_dir: &Path,
    params: &IconsetParams,
) -> Result<IconSetReport> {
    generate_icon_set_with_progress(source, output_dir, params, |_| {})
}

/// Same as [`generate_icon_set`], reporting each stage to `progress`.
///
/// The source is fully decoded and masked before the output directory is touched,
/// so an unreadable source produces no output at all.
pub fn generate_icon_set_with_progress<F>(
    source: &Path,
    output_dir: &Path,
    params: &IconsetParams,
    mut progress: F,
) -> Result<IconSetReport>
where
    F: FnMut(Progress<'_>),
{
    progress(Progress::Loading(source));
    let image = load_source_image(source)?;

    progress(Progress::Masking);
    let masked = mask_image(&image, params)?;
    drop(image);

    let icons = emit_icon_set(&masked, output_dir, params.filter, |icon| {
        progress(Progress::Written(icon))
    })?;

    info!(
        "Generated {} icons from {:?} into {:?}",
        icons.len(),
        source,
        output_dir
    );

    Ok(IconSetReport {
        source: source.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        masked_size: masked.width(),
        icons,
    })
}
