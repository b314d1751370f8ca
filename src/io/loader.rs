use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};
use tracing::info;

use crate::error::{Error, Result};

/// Opens and decodes an image, guessing the format from its content.
///
/// A recognized format this build cannot decode is reported as
/// [`Error::MissingCapability`]. Any other decoding problem, including a file cut
/// short, is a [`Error::Decode`] failure naming the path.
pub fn load_source_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();

    let image = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(detail) if format.is_some() => Error::MissingCapability {
            path: path.to_path_buf(),
            detail: detail.to_string(),
        },
        other => Error::Decode {
            path: path.to_path_buf(),
            source: other,
        },
    })?;

    info!(
        "Loaded {:?} ({:?}, {}x{}, {:?})",
        path,
        format,
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder};
    use std::io::Write;

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_source_image(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn garbage_is_not_an_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"definitely not a png").unwrap();
        drop(file);

        let err = load_source_image(&path).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn bare_png_signature_is_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        let mut file = std::fs::File::create(&path).unwrap();
        // PNG signature followed by nothing useful
        file.write_all(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0])
            .unwrap();
        drop(file);

        let err = load_source_image(&path).unwrap_err();
        assert!(matches!(err, Error::Decode { path: ref p, .. } if *p == path));
    }

    #[test]
    fn half_written_png_is_decode_failure() {
        let image = image::RgbaImage::from_fn(64, 64, |x, y| {
            image::Rgba([x as u8 * 4, y as u8 * 4, 128, 255])
        });
        let mut encoded = Vec::new();
        PngEncoder::new(&mut encoded)
            .write_image(image.as_raw(), 64, 64, ExtendedColorType::Rgba8)
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        std::fs::write(&path, &encoded[..encoded.len() / 2]).unwrap();

        let err = load_source_image(&path).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "{err}");
        assert!(err.to_string().contains("icon.png"));
    }

    #[test]
    fn recognized_format_without_decoder_is_missing_capability() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.qoi");
        let mut header = b"qoif".to_vec();
        header.extend_from_slice(&64u32.to_be_bytes());
        header.extend_from_slice(&64u32.to_be_bytes());
        header.extend_from_slice(&[4, 0]);
        std::fs::write(&path, header).unwrap();

        let err = load_source_image(&path).unwrap_err();
        assert!(matches!(err, Error::MissingCapability { .. }), "{err}");
        assert!(err.to_string().contains("Rebuild"));
    }
}
