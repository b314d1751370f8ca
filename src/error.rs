//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, decoding, encoding and resampling errors, and provides
//! semantic variants for the failures a run can hit.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "Cannot decode {}: {detail}. Rebuild with the matching `image` crate format feature enabled (e.g. `png`, `jpeg`, `webp`).",
        .path.display()
    )]
    MissingCapability { path: PathBuf, detail: String },

    #[error("Failed to decode image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write PNG {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Resize error: {0}")]
    Resize(#[from] fast_image_resize::ResizeError),

    #[error("Resize buffer error: {0}")]
    Buffer(#[from] fast_image_resize::ImageBufferError),

    #[error("Pixel buffer of {len} bytes does not fit a {width}x{height} RGBA image")]
    BufferMismatch { width: u32, height: u32, len: usize },

    #[error("Image size must be greater than 0, got: {size}")]
    ZeroSize { size: u32 },
}
