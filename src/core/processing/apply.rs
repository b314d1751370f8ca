use image::{DynamicImage, GenericImageView, GrayImage, RgbaImage};
use tracing::info;

use crate::core::processing::mask::squircle_mask;
use crate::error::{Error, Result};
use crate::types::MaskStrategy;

/// Offsets and side of the centered square inside a `width x height` image.
pub fn center_square(width: u32, height: u32) -> (u32, u32, u32) {
    let side = width.min(height);
    ((width - side) / 2, (height - side) / 2, side)
}

/// Exact `round(value / 255)` for `value <= 255 * 255`.
fn div255(value: u32) -> u8 {
    let t = value + 128;
    (((t >> 8) + t) >> 8) as u8
}

/// Blend of `alpha` over a zero background weighted by `mask`.
pub fn composite_alpha(alpha: u8, mask: u8) -> u8 {
    div255(alpha as u32 * mask as u32)
}

/// Multiplies the alpha channel of `image` by `mask`. Dimensions must match.
pub fn apply_mask_to_alpha(image: &mut RgbaImage, mask: &GrayImage) {
    debug_assert_eq!(image.dimensions(), mask.dimensions());
    for (pixel, m) in image.pixels_mut().zip(mask.pixels()) {
        pixel[3] = composite_alpha(pixel[3], m[0]);
    }
}

/// Crops `image` to its centered square and masks its alpha with a squircle.
pub fn apply_squircle_mask(
    image: &DynamicImage,
    smoothness: f64,
    strategy: MaskStrategy,
) -> Result<RgbaImage> {
    let (width, height) = image.dimensions();
    let (left, top, side) = center_square(width, height);
    if side == 0 {
        return Err(Error::ZeroSize { size: side });
    }

    let mut rgba = if width != height {
        info!(
            "Cropping {}x{} source to centered {}x{} square (offset {}, {})",
            width, height, side, side, left, top
        );
        image.crop_imm(left, top, side, side).to_rgba8()
    } else {
        image.to_rgba8()
    };

    let mask = squircle_mask(side, smoothness, strategy);
    apply_mask_to_alpha(&mut rgba, &mask);
    Ok(rgba)
}
