//! Shared types and enums used across the crate.
//! Includes the mask evaluation strategy (`MaskStrategy`), the resampling filter
//! (`ResampleFilter`) and the icon catalog entry (`IconSpec`).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the squircle mask is evaluated. Both strategies produce identical masks.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum MaskStrategy {
    /// Plain per-pixel double loop
    Scalar,
    /// Per-axis terms computed once and broadcast over the grid
    #[default]
    Vectorized,
}

/// Prints the same spelling the command line accepts.
fn write_value_name<T: ValueEnum>(value: &T, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match value.to_possible_value() {
        Some(v) => f.write_str(v.get_name()),
        None => Ok(()),
    }
}

impl std::fmt::Display for MaskStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_value_name(self, f)
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    Box,
    Bilinear,
    CatmullRom,
    Mitchell,
    #[default]
    Lanczos3,
}

impl ResampleFilter {
    pub(crate) fn to_fast_filter(self) -> fast_image_resize::FilterType {
        match self {
            ResampleFilter::Box => fast_image_resize::FilterType::Box,
            ResampleFilter::Bilinear => fast_image_resize::FilterType::Bilinear,
            ResampleFilter::CatmullRom => fast_image_resize::FilterType::CatmullRom,
            ResampleFilter::Mitchell => fast_image_resize::FilterType::Mitchell,
            ResampleFilter::Lanczos3 => fast_image_resize::FilterType::Lanczos3,
        }
    }
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_value_name(self, f)
    }
}

/// One entry of the macOS icon set: a point size and its pixel density.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct IconSpec {
    pub base: u32,
    pub scale: u32,
}

impl IconSpec {
    pub const fn new(base: u32, scale: u32) -> Self {
        Self { base, scale }
    }

    /// Side length of the emitted bitmap.
    pub fn pixel_size(&self) -> u32 {
        self.base * self.scale
    }

    /// `icon_<base>x<base>.png`, or `icon_<base>x<base>@<scale>x.png` for retina entries.
    pub fn file_name(&self) -> String {
        if self.scale == 1 {
            format!("icon_{0}x{0}.png", self.base)
        } else {
            format!("icon_{0}x{0}@{1}x.png", self.base, self.scale)
        }
    }
}

impl std::fmt::Display for IconSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.pixel_size();
        write!(f, "{} ({}x{})", self.file_name(), size, size)
    }
}
