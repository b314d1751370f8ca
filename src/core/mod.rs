//! Core processing building blocks: squircle mask generation, mask application,
//! resampling and icon-set emission. These are internal primitives consumed by the
//! high-level `api` module.
pub mod params;
pub mod processing;
