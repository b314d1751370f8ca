#![doc = r#"
squircle-iconset — macOS app icon sets with Apple's squircle corners.

This crate turns one source image into the ten PNG bitmaps an `AppIcon.appiconset`
expects (`icon_16x16.png` through `icon_512x512@2x.png`). The source is center-cropped
to a square and its alpha channel is multiplied by a superellipse ("squircle") mask, so
the corners have the continuous-curvature shape macOS uses even where the system does
not mask icons itself. It powers the `squircle-iconset` CLI and can be embedded in your
own Rust applications.

Generate an icon set
--------------------
```rust,no_run
use std::path::Path;
use squircle_iconset::{generate_icon_set, IconsetParams};

fn main() -> squircle_iconset::Result<()> {
    let report = generate_icon_set(
        Path::new("icon.png"),
        Path::new("Assets.xcassets/AppIcon.appiconset"),
        &IconsetParams::default(),
    )?;
    for icon in &report.icons {
        println!("{} ({}x{})", icon.file_name, icon.pixel_size, icon.pixel_size);
    }
    Ok(())
}
```

Mask in memory
--------------
```rust
use image::{DynamicImage, Rgba, RgbaImage};
use squircle_iconset::{mask_image, IconsetParams};

let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(128, 96, Rgba([255, 0, 0, 255])));
let masked = mask_image(&source, &IconsetParams::default()).unwrap();
assert_eq!(masked.dimensions(), (96, 96));
assert_eq!(masked.get_pixel(0, 0)[3], 0);
assert_eq!(masked.get_pixel(48, 48)[3], 255);
```

Error handling
--------------
All public functions return `squircle_iconset::Result<T>`; match on
`squircle_iconset::Error` to tell decoding problems from I/O failures.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`](crate::core) — mask generation, mask application, resampling, emission.
- [`io`] — source decoding and PNG writing.
- [`types`] — `MaskStrategy`, `ResampleFilter`, `IconSpec`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::IconsetParams;
pub use crate::core::processing::catalog::ICON_CATALOG;
pub use crate::core::processing::emit::GeneratedIcon;
pub use crate::core::processing::mask::{DEFAULT_SMOOTHNESS, squircle_mask};
pub use error::{Error, Result};
pub use types::{IconSpec, MaskStrategy, ResampleFilter};

pub use api::{
    IconSetReport, Progress, generate_icon_set, generate_icon_set_with_progress, mask_image,
};
