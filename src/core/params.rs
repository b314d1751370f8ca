use serde::{Deserialize, Serialize};

use crate::core::processing::mask::DEFAULT_SMOOTHNESS;
use crate::types::{MaskStrategy, ResampleFilter};

/// Pipeline parameters suitable for presets and embedding applications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconsetParams {
    /// Superellipse exponent; 5 matches the macOS squircle
    pub smoothness: f64,
    pub mask_strategy: MaskStrategy,
    pub filter: ResampleFilter,
}

impl Default for IconsetParams {
    fn default() -> Self {
        Self {
            smoothness: DEFAULT_SMOOTHNESS,
            mask_strategy: MaskStrategy::Vectorized,
            filter: ResampleFilter::Lanczos3,
        }
    }
}
