use image::{GrayImage, Luma};
use ndarray::{Array1, Axis};
use tracing::debug;

use crate::types::MaskStrategy;

/// Superellipse exponent that reproduces the macOS/iOS icon corner curvature.
pub const DEFAULT_SMOOTHNESS: f64 = 5.0;

/// Width of the anti-aliased band, in units of the superellipse function value.
pub const EDGE_WIDTH: f64 = 0.02;

/// `|n|^smoothness` for the pixel index `i`, with `n` normalized to [-1, 1].
fn axis_term(i: u32, size: u32, smoothness: f64) -> f64 {
    let half = size as f64 / 2.0;
    let n = (i as f64 - half) / half;
    n.abs().powf(smoothness)
}

/// Maps a superellipse function value to an 8-bit opacity.
pub fn squircle_opacity(value: f64) -> u8 {
    if value > 1.0 {
        return 0;
    }
    let edge_distance = 1.0 - value;
    if edge_distance > EDGE_WIDTH {
        255
    } else {
        (255.0 * (edge_distance / EDGE_WIDTH)) as u8
    }
}

pub fn squircle_mask_scalar(size: u32, smoothness: f64) -> GrayImage {
    GrayImage::from_fn(size, size, |x, y| {
        let value = axis_term(x, size, smoothness) + axis_term(y, size, smoothness);
        Luma([squircle_opacity(value)])
    })
}

/// Same output as [`squircle_mask_scalar`], but the per-axis power terms are computed
/// once and broadcast into the full `size x size` grid.
pub fn squircle_mask_vectorized(size: u32, smoothness: f64) -> GrayImage {
    let terms: Array1<f64> = (0..size).map(|i| axis_term(i, size, smoothness)).collect();

    // rows index y, columns index x
    let x_terms = terms.view().insert_axis(Axis(0));
    let y_terms = terms.view().insert_axis(Axis(1));
    let values = &x_terms + &y_terms;

    let mut mask = GrayImage::new(size, size);
    for (dst, &value) in mask.iter_mut().zip(values.iter()) {
        *dst = squircle_opacity(value);
    }
    mask
}

/// Builds a `size x size` opacity mask shaped like a superellipse of the given exponent.
pub fn squircle_mask(size: u32, smoothness: f64, strategy: MaskStrategy) -> GrayImage {
    debug!(
        "Generating {}x{} squircle mask (smoothness={}, strategy={})",
        size, size, smoothness, strategy
    );
    match strategy {
        MaskStrategy::Scalar => squircle_mask_scalar(size, smoothness),
        MaskStrategy::Vectorized => squircle_mask_vectorized(size, smoothness),
    }
}
