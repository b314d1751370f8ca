//! squircle-iconset CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, resolve the source
//! image, generate the icon set, and exit with appropriate status.
//! For programmatic use, prefer the library API (`squircle_iconset::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if let Some(hint) = e.hint() {
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}
