use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

pub fn write_rgba_png(output: &Path, image: &RgbaImage) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = PngEncoder::new(&mut writer);
    encoder
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .map_err(|source| Error::Encode {
            path: output.to_path_buf(),
            source,
        })?;
    writer.flush()?;
    Ok(())
}
