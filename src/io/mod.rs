//! I/O layer: decoding the source image (`loader`) and writing the PNG
//! bitmaps of the icon set (`writers`).
pub mod loader;
pub use loader::load_source_image;

pub mod writers;
