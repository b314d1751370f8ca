use fast_image_resize::{PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::ResampleFilter;

/// Resamples an RGBA image to `target x target` with a convolution filter.
///
/// Color channels are premultiplied by alpha while filtering, so fully transparent
/// pixels do not bleed their color into the visible edge. An image that already has
/// the requested size is returned unchanged.
pub fn resize_rgba_square(
    image: &RgbaImage,
    target: u32,
    filter: ResampleFilter,
) -> Result<RgbaImage> {
    let (cols, rows) = image.dimensions();
    if cols == target && rows == target {
        debug!("Source already {}x{}, skipping resample", target, target);
        return Ok(image.clone());
    }
    if target == 0 {
        return Err(Error::ZeroSize { size: target });
    }

    debug!(
        "Resampling {}x{} -> {}x{} ({})",
        cols, rows, target, target, filter
    );

    let resize_options = ResizeOptions::new()
        .resize_alg(ResizeAlg::Convolution(filter.to_fast_filter()))
        .use_alpha(true);
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(cols, rows, image.as_raw().clone(), PixelType::U8x4)?;
    let mut dst_image = Image::new(target, target, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    rgba_from_raw(target, target, dst_image.into_vec())
}

fn rgba_from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<RgbaImage> {
    let len = data.len();
    RgbaImage::from_raw(width, height, data).ok_or(Error::BufferMismatch { width, height, len })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn same_size_is_passthrough() {
        let src = RgbaImage::from_fn(8, 8, |x, y| Rgba([x as u8, y as u8, 7, 200]));
        let out = resize_rgba_square(&src, 8, ResampleFilter::Lanczos3).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn downscale_keeps_constant_image_constant() {
        let src = RgbaImage::from_pixel(256, 256, Rgba([255, 0, 0, 255]));
        for filter in [
            ResampleFilter::Lanczos3,
            ResampleFilter::CatmullRom,
            ResampleFilter::Mitchell,
            ResampleFilter::Bilinear,
            ResampleFilter::Box,
        ] {
            let out = resize_rgba_square(&src, 16, filter).unwrap();
            assert_eq!(out.dimensions(), (16, 16));
            assert!(out.pixels().all(|p| *p == Rgba([255, 0, 0, 255])), "{filter}");
        }
    }

    #[test]
    fn transparent_color_does_not_bleed() {
        // left half opaque red, right half fully transparent green
        let src = RgbaImage::from_fn(64, 64, |x, _| {
            if x < 32 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 255, 0, 0])
            }
        });
        let out = resize_rgba_square(&src, 16, ResampleFilter::Lanczos3).unwrap();
        for p in out.pixels().filter(|p| p[3] > 0) {
            assert_eq!(p[1], 0);
        }
    }

    #[test]
    fn short_buffer_is_a_mismatch() {
        let err = rgba_from_raw(4, 4, vec![0; 15]).unwrap_err();
        assert!(matches!(
            err,
            Error::BufferMismatch {
                width: 4,
                height: 4,
                len: 15
            }
        ));
        assert_eq!(rgba_from_raw(2, 2, vec![0; 16]).unwrap().dimensions(), (2, 2));
    }

    #[test]
    fn zero_target_is_rejected() {
        let src = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        assert!(matches!(
            resize_rgba_square(&src, 0, ResampleFilter::Lanczos3),
            Err(Error::ZeroSize { size: 0 })
        ));
    }
}
