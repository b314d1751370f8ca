//! Command Line Interface (CLI) layer.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! source-image resolution (`source`) and the orchestration logic (`runner`).
//! It wires user-provided options to the library functionality exposed via
//! `squircle_iconset::api`.
//!
//! If you are embedding the icon generator into another application, prefer
//! the high-level `squircle_iconset::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;
pub mod source;

pub use args::CliArgs;
pub use runner::run;
