use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::{info, warn};

use crate::core::processing::catalog::{ICON_CATALOG, largest_icon_size};
use crate::core::processing::resize::resize_rgba_square;
use crate::error::Result;
use crate::io::writers::png::write_rgba_png;
use crate::types::{IconSpec, ResampleFilter};

/// One bitmap written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub file_name: String,
    pub pixel_size: u32,
    pub path: PathBuf,
}

/// Resamples `masked` for every catalog entry and writes the PNGs into `output_dir`,
/// creating it if needed. `on_written` is called after each file lands on disk.
pub fn emit_icon_set<F>(
    masked: &RgbaImage,
    output_dir: &Path,
    filter: ResampleFilter,
    mut on_written: F,
) -> Result<Vec<GeneratedIcon>>
where
    F: FnMut(&GeneratedIcon),
{
    fs::create_dir_all(output_dir)?;
    info!("Output directory: {:?}", output_dir);

    let source_size = masked.width();
    if source_size < largest_icon_size() {
        warn!(
            "Masked source is {}x{}; larger icons will be upsampled",
            source_size, source_size
        );
    }

    let mut written = Vec::with_capacity(ICON_CATALOG.len());
    for spec in ICON_CATALOG {
        let icon = emit_icon(masked, output_dir, spec, filter)?;
        on_written(&icon);
        written.push(icon);
    }
    Ok(written)
}

fn emit_icon(
    masked: &RgbaImage,
    output_dir: &Path,
    spec: IconSpec,
    filter: ResampleFilter,
) -> Result<GeneratedIcon> {
    let size = spec.pixel_size();
    let file_name = spec.file_name();
    let path = output_dir.join(&file_name);

    let resized = resize_rgba_square(masked, size, filter)?;
    write_rgba_png(&path, &resized)?;
    info!("Wrote {}", spec);

    Ok(GeneratedIcon {
        file_name,
        pixel_size: size,
        path,
    })
}
