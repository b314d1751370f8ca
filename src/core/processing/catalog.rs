//! The fixed set of bitmaps an `AppIcon.appiconset` expects.
use crate::types::IconSpec;

pub const ICON_CATALOG: [IconSpec; 10] = [
    IconSpec::new(16, 1),
    IconSpec::new(16, 2),
    IconSpec::new(32, 1),
    IconSpec::new(32, 2),
    IconSpec::new(128, 1),
    IconSpec::new(128, 2),
    IconSpec::new(256, 1),
    IconSpec::new(256, 2),
    IconSpec::new(512, 1),
    IconSpec::new(512, 2),
];

/// Largest pixel size in the catalog; sources at least this big are never upsampled.
pub fn largest_icon_size() -> u32 {
    ICON_CATALOG
        .iter()
        .map(IconSpec::pixel_size)
        .max()
        .unwrap_or(0)
}
